use std::fs;
use std::path::PathBuf;

use scatter_rs::chart::{ChartConfig, ScatterChart};
use scatter_rs::core::Field;
use scatter_rs::data::{LoadOptions, NumericPolicy, load_dataset_with};
use scatter_rs::render::Renderer;

const USAGE: &str = "usage: scatter_snapshot <csv> [healthcare|smokes ...] [--config <json>] [--coerce] [--png <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    clicks: Vec<Field>,
    config: Option<PathBuf>,
    numeric_policy: NumericPolicy,
    png: Option<PathBuf>,
}

fn main() {
    let _ = scatter_rs::telemetry::init_tracing_with_filter("warn");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };
    let dataset = load_dataset_with(
        &args.input,
        LoadOptions::default().with_numeric_policy(args.numeric_policy),
    )
    .map_err(|err| err.to_string())?;

    match args.png {
        Some(path) => write_png(dataset, config, &args.clicks, path),
        None => {
            let chart = ScatterChart::new(
                scatter_rs::render::NullRenderer::default(),
                dataset,
                config,
            )
            .map_err(|err| err.to_string())?;
            print_snapshot(chart, &args.clicks)
        }
    }
}

fn replay_clicks<R: Renderer>(chart: &mut ScatterChart<R>, clicks: &[Field]) -> Result<(), String> {
    for field in clicks {
        chart.select(*field).map_err(|err| err.to_string())?;
        chart.settle();
    }
    Ok(())
}

fn print_snapshot<R: Renderer>(mut chart: ScatterChart<R>, clicks: &[Field]) -> Result<(), String> {
    replay_clicks(&mut chart, clicks)?;
    chart.render().map_err(|err| err.to_string())?;
    let json = chart
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    dataset: scatter_rs::core::Dataset,
    config: ChartConfig,
    clicks: &[Field],
    path: PathBuf,
) -> Result<(), String> {
    let viewport = config.layout.viewport;
    let width = i32::try_from(viewport.width).map_err(|err| err.to_string())?;
    let height = i32::try_from(viewport.height).map_err(|err| err.to_string())?;
    let renderer =
        scatter_rs::render::CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let mut chart = ScatterChart::new(renderer, dataset, config).map_err(|err| err.to_string())?;
    replay_clicks(&mut chart, clicks)?;
    chart.render().map_err(|err| err.to_string())?;
    chart
        .renderer()
        .write_png(&path)
        .map_err(|err| err.to_string())?;
    let json = chart
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _dataset: scatter_rs::core::Dataset,
    _config: ChartConfig,
    _clicks: &[Field],
    _path: PathBuf,
) -> Result<(), String> {
    Err("--png requires the `cairo-backend` feature".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut clicks = Vec::new();
    let mut config = None::<PathBuf>;
    let mut numeric_policy = NumericPolicy::Strict;
    let mut png = None::<PathBuf>;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--png" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --png".to_owned())?;
                png = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--coerce" => numeric_policy = NumericPolicy::Coerce,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            flag if flag.starts_with("--") => return Err(format!("unknown argument `{flag}`")),
            value if input.is_none() => input = Some(PathBuf::from(value)),
            value => clicks.push(value.parse::<Field>().map_err(|err| err.to_string())?),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        input,
        clicks,
        config,
        numeric_policy,
        png,
    })
}

use std::path::PathBuf;

use gtk4 as gtk;
use gtk4::prelude::*;
use scatter_rs::chart::{ChartConfig, ScatterChart};
use scatter_rs::data::load_dataset;
use scatter_rs::platform_gtk::GtkChartAdapter;
use scatter_rs::render::CairoRenderer;

const DEFAULT_DATA_PATH: &str = "data/data.csv";

fn main() {
    let _ = scatter_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.scatter.demos.gtk_scatter_explorer")
        .build();
    app.connect_activate(build_ui);
    app.run_with_args::<&str>(&[]);
}

fn build_ui(app: &gtk::Application) {
    let chart = match build_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize scatter explorer: {err}");
            return;
        }
    };

    let adapter = GtkChartAdapter::new(chart);
    let engine = adapter.engine();
    let drawing_area = adapter.drawing_area().clone();

    let status_label = gtk::Label::new(None);
    status_label.set_xalign(0.0);
    gtk::glib::timeout_add_local(std::time::Duration::from_millis(200), {
        let status_label = status_label.clone();
        move || {
            if let Ok(chart) = engine.try_borrow() {
                let (x_min, x_max) = chart.x_scale().domain();
                let tooltip = chart.tooltip_text().unwrap_or_default().replace("<br>", " | ");
                status_label.set_text(&format!(
                    "x={} domain=[{x_min:.2},{x_max:.2}] labels={}/{} {tooltip}",
                    chart.selected_field(),
                    chart.markers().active_label_count(),
                    chart.markers().inactive_label_count(),
                ));
            }
            gtk::glib::ControlFlow::Continue
        }
    });

    let root = gtk::Box::new(gtk::Orientation::Vertical, 4);
    root.append(&drawing_area);
    root.append(&status_label);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("scatter-rs Explorer")
        .default_width(1200)
        .default_height(540)
        .build();
    window.set_child(Some(&root));
    window.present();
}

fn build_chart() -> scatter_rs::ChartResult<ScatterChart<CairoRenderer>> {
    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);
    let dataset = load_dataset(&path)?;
    let config = ChartConfig::default();
    let viewport = config.layout.viewport;
    let renderer = CairoRenderer::new(viewport.width as i32, viewport.height as i32)?;
    ScatterChart::new(renderer, dataset, config)
}

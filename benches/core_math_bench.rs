use criterion::{Criterion, criterion_group, criterion_main};
use scatter_rs::chart::{ChartConfig, ScatterChart};
use scatter_rs::core::{ChartLayout, Dataset, Field, LinearScale, Record, build_x_scale};
use scatter_rs::render::NullRenderer;
use std::hint::black_box;

fn generated_dataset(count: usize) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let t = i as f64;
            Record::new(
                format!("Region {i}"),
                format!("R{i}"),
                8.0 + (t / 7.0).sin().abs() * 12.0,
                10.0 + (t / 11.0).cos().abs() * 15.0,
                20.0 + (t / 5.0).sin().abs() * 16.0,
            )
        })
        .collect();
    Dataset::new(records).expect("non-empty generated dataset")
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1_060.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_x_scale_build_10k(c: &mut Criterion) {
    let dataset = generated_dataset(10_000);
    let layout = ChartLayout::default();

    c.bench_function("x_scale_build_10k", |b| {
        b.iter(|| {
            let _ = build_x_scale(black_box(&dataset), Field::Smokes, layout)
                .expect("scale should build");
        })
    });
}

fn bench_field_switch_frame_2k(c: &mut Criterion) {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        generated_dataset(2_000),
        ChartConfig::default(),
    )
    .expect("chart init");

    c.bench_function("field_switch_frame_2k", |b| {
        b.iter(|| {
            let next = match chart.selected_field() {
                Field::Healthcare => Field::Smokes,
                _ => Field::Healthcare,
            };
            chart.select(next).expect("switch should succeed");
            chart.advance_by(500.0);
            let _ = chart
                .build_render_frame()
                .expect("frame should build");
        })
    });
}

fn bench_snapshot_json_2k(c: &mut Criterion) {
    let chart = ScatterChart::new(
        NullRenderer::default(),
        generated_dataset(2_000),
        ChartConfig::default(),
    )
    .expect("chart init");

    c.bench_function("snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = chart
                .snapshot_json_contract_v1_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_x_scale_build_10k,
    bench_field_switch_frame_2k,
    bench_snapshot_json_2k
);
criterion_main!(benches);

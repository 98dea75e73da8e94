use scatter_rs::chart::{AxisLabels, ChartConfig, ScatterChart};
use scatter_rs::core::{Dataset, Field, Record, Viewport};
use scatter_rs::render::{
    CanvasLayerKind, Color, NullRenderer, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("AL", "AL", 5.0, 20.0, 35.0),
        Record::new("AK", "AK", 15.0, 10.0, 30.0),
        Record::new("AZ", "AZ", 10.0, 15.0, 25.0),
    ])
    .expect("non-empty dataset")
}

fn build_chart() -> ScatterChart<NullRenderer> {
    ScatterChart::new(NullRenderer::default(), sample_dataset(), ChartConfig::default())
        .expect("chart init")
}

#[test]
fn frame_has_one_circle_and_label_per_record() {
    let chart = build_chart();
    let frame = chart.build_render_frame().expect("frame");

    let markers = frame.layer(CanvasLayerKind::Markers).expect("markers");
    assert_eq!(markers.circles.len(), 3);
    let labels = frame.layer(CanvasLayerKind::MarkerLabels).expect("labels");
    let texts: Vec<&str> = labels.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, ["AL", "AK", "AZ"]);

    let tooltip = frame.layer(CanvasLayerKind::Tooltip).expect("tooltip");
    assert!(tooltip.is_empty());
}

#[test]
fn marker_style_follows_chart_style() {
    let chart = build_chart();
    let style = chart.config().style;
    let frame = chart.build_render_frame().expect("frame");

    for circle in frame.circles() {
        assert_eq!(circle.radius, 15.0);
        assert_eq!(circle.fill_color, Color::BLUE.with_opacity(0.6));
    }
    let first = frame.circles().next().expect("circle");
    let (x, y) = chart.marker_positions()[0];
    assert_eq!((first.cx, first.cy), chart.config().layout.to_canvas(x, y));

    let label = &frame
        .layer(CanvasLayerKind::MarkerLabels)
        .expect("labels")
        .texts[0];
    assert_eq!(label.font_size_px, style.marker_label_font_px);
    assert_eq!(label.color, Color::WHITE);
    assert_eq!(label.h_align, TextHAlign::Center);
    assert_eq!((label.x, label.y), (first.cx, first.cy));
}

#[test]
fn counts_hold_after_every_render() {
    let mut chart = build_chart();
    for field in [Field::Smokes, Field::Healthcare, Field::Smokes] {
        chart.select(field).expect("switch");
        for _ in 0..4 {
            chart.advance_by(300.0);
            chart.render().expect("render");
            let frame = chart.build_render_frame().expect("frame");
            assert_eq!(frame.circles().count(), 3);
            assert_eq!(
                frame
                    .layer(CanvasLayerKind::MarkerLabels)
                    .expect("labels")
                    .texts
                    .len(),
                3
            );
        }
    }
    assert_eq!(chart.renderer().last_circle_count, 3);
    assert_eq!(chart.renderer().frames_rendered, 12);
}

#[test]
fn axis_titles_carry_label_classes() {
    let mut chart = build_chart();
    chart.select(Field::Smokes).expect("switch");
    let style = chart.config().style;
    let frame = chart.build_render_frame().expect("frame");

    let titles = &frame.layer(CanvasLayerKind::AxisTitles).expect("titles").texts;
    assert_eq!(titles.len(), 3);

    let health = &titles[0];
    assert_eq!(health.text, "Health Risks");
    assert_eq!(health.color, style.axis_label_inactive_color);
    assert!(!health.bold);

    let smokes = &titles[1];
    assert_eq!(smokes.text, "Smokes");
    assert_eq!(smokes.color, style.axis_label_active_color);
    assert!(smokes.bold);

    let y_title = &titles[2];
    assert_eq!(y_title.text, AxisLabels::Y_TITLE);
    assert_eq!(y_title.rotation_deg, -90.0);
    assert!(y_title.bold);
}

#[test]
fn layers_paint_in_canonical_order() {
    let frame = build_chart().build_render_frame().expect("frame");
    let kinds: Vec<CanvasLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, CanvasLayerKind::CANONICAL);
}

#[test]
fn null_renderer_rejects_invalid_geometry() {
    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.push_text(
        CanvasLayerKind::Axis,
        TextPrimitive::new("x", f64::NAN, 0.0, 10.0, Color::BLACK, TextHAlign::Left),
    );
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn coerced_nan_records_are_skipped_when_drawing() {
    let dataset = Dataset::new(vec![
        Record::new("AL", "AL", 5.0, 20.0, 35.0),
        Record::new("AK", "AK", 15.0, f64::NAN, 30.0),
    ])
    .expect("dataset");
    let mut chart =
        ScatterChart::new(NullRenderer::default(), dataset, ChartConfig::default()).expect("chart");
    chart.select(Field::Smokes).expect("switch");
    chart.settle();
    chart.render().expect("render skips non-finite markers");
    assert_eq!(chart.renderer().last_circle_count, 1);
}

use scatter_rs::ChartError;
use scatter_rs::chart::{ChartConfig, LabelPolicy, ScatterChart, TooltipFormat};
use scatter_rs::core::{ChartLayout, Dataset, Record, Viewport};
use scatter_rs::render::NullRenderer;

#[test]
fn defaults_match_reference_chart() {
    let config = ChartConfig::default();
    assert_eq!(config.layout, ChartLayout::default());
    assert_eq!(config.transition_ms, 1000.0);
    assert_eq!(config.tick_count, 10);
    assert_eq!(config.label_policy, LabelPolicy::Replace);
    assert_eq!(config.tooltip_format, TooltipFormat::Reference);
    assert_eq!(config.style.marker_radius_px, 15.0);
    assert_eq!(config.style.marker_opacity, 0.6);
    assert_eq!(config.style.tooltip_offset_px, [80.0, -60.0]);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = ChartConfig::from_json_str(
        r#"{
            "layout": { "viewport": { "width": 800, "height": 400 } },
            "label_policy": "Reuse",
            "style": { "marker_radius_px": 9.0 }
        }"#,
    )
    .expect("parse config");

    assert_eq!(config.layout.viewport, Viewport::new(800, 400));
    assert_eq!(config.layout.margins, ChartLayout::default().margins);
    assert_eq!(config.label_policy, LabelPolicy::Reuse);
    assert_eq!(config.style.marker_radius_px, 9.0);
    assert_eq!(config.style.marker_label_font_px, 10.0);
    assert_eq!(config.transition_ms, 1000.0);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartConfig::default()
        .with_tooltip_format(TooltipFormat::Normalized)
        .with_transition_ms(250.0);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(ChartConfig::from_json_str(r#"{ "transition_ms": -1.0 }"#).is_err());
    assert!(ChartConfig::from_json_str(r#"{ "tick_count": 0 }"#).is_err());
    assert!(ChartConfig::from_json_str(r#"{ "style": { "marker_opacity": 1.5 } }"#).is_err());
    assert!(ChartConfig::from_json_str("not json").is_err());
}

#[test]
fn oversized_tick_count_is_rejected_before_building_axes() {
    let err = ChartConfig::from_json_str(r#"{ "tick_count": 1000000000000000 }"#)
        .expect_err("tick count out of range");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let config = ChartConfig::from_json_str(r#"{ "tick_count": 100 }"#).expect("upper bound");
    let dataset = Dataset::new(vec![Record::new("AL", "AL", 5.0, 20.0, 35.0)]).expect("dataset");
    let chart = ScatterChart::new(NullRenderer::default(), dataset, config).expect("chart");
    assert!(!chart.x_axis().tick_values().is_empty());
}

#[test]
fn chart_rejects_degenerate_viewport() {
    let dataset = Dataset::new(vec![Record::new("AL", "AL", 5.0, 20.0, 35.0)]).expect("dataset");
    let mut config = ChartConfig::default();
    config.layout.viewport = Viewport::new(0, 500);
    assert!(ScatterChart::new(NullRenderer::default(), dataset, config).is_err());
}

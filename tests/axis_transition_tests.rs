use scatter_rs::chart::{AxisOrient, AxisView, ChartConfig, ChartStyle, ScatterChart};
use scatter_rs::core::{ChartLayout, Dataset, Field, LinearScale, Record};
use scatter_rs::render::{CanvasLayerKind, NullRenderer, RenderFrame};

fn scale(domain_end: f64) -> LinearScale {
    LinearScale::new((0.0, domain_end), (0.0, 1000.0)).expect("scale")
}

#[test]
fn new_axis_has_settled_ticks() {
    let axis = AxisView::new(AxisOrient::Bottom, scale(10.0), 10);
    assert_eq!(axis.tick_values().len(), 11);
    assert!(!axis.is_animating(0.0));
    assert!(axis.ticks().iter().all(|tick| tick.opacity_at(0.0) == 1.0));
    assert_eq!(axis.ticks()[3].label(), "3");
    assert_eq!(axis.ticks()[3].position_at(0.0), 300.0);
}

#[test]
fn rerender_keys_ticks_by_value() {
    let mut axis = AxisView::new(AxisOrient::Bottom, scale(10.0), 10);
    axis.render_axis(scale(100.0), 0.0, 1000.0);

    let expected: Vec<f64> = (0..=10).map(|step| f64::from(step) * 10.0).collect();
    assert_eq!(axis.tick_values(), expected);
    assert_eq!(axis.ticks().len(), 11 + 9);

    let find = |value: f64| {
        axis.ticks()
            .iter()
            .find(|tick| tick.value() == value)
            .expect("tick present")
    };

    let survivor = find(10.0);
    assert!(!survivor.is_exiting());
    assert_eq!(survivor.position_at(0.0), 1000.0);
    assert_eq!(survivor.position_at(1000.0), 100.0);
    assert_eq!(survivor.opacity_at(500.0), 1.0);

    let entering = find(20.0);
    assert_eq!(entering.position_at(0.0), 2000.0);
    assert_eq!(entering.opacity_at(0.0), 0.0);
    assert_eq!(entering.position_at(1000.0), 200.0);
    assert_eq!(entering.opacity_at(1000.0), 1.0);

    let exiting = find(5.0);
    assert!(exiting.is_exiting());
    assert_eq!(exiting.position_at(0.0), 500.0);
    assert_eq!(exiting.position_at(1000.0), 50.0);
    assert_eq!(exiting.opacity_at(1000.0), 0.0);
}

#[test]
fn exiting_ticks_are_pruned_once_settled() {
    let mut axis = AxisView::new(AxisOrient::Bottom, scale(10.0), 10);
    axis.render_axis(scale(100.0), 0.0, 1000.0);

    assert_eq!(axis.prune_exited(500.0), 0);
    assert!(axis.is_animating(500.0));
    assert_eq!(axis.prune_exited(1000.0), 9);
    assert_eq!(axis.ticks().len(), 11);
    assert!(!axis.is_animating(1000.0));
}

#[test]
fn reentering_tick_is_revived_instead_of_duplicated() {
    let mut axis = AxisView::new(AxisOrient::Bottom, scale(10.0), 10);
    axis.render_axis(scale(100.0), 0.0, 1000.0);
    axis.render_axis(scale(10.0), 300.0, 1000.0);

    let fives = axis
        .ticks()
        .iter()
        .filter(|tick| tick.value() == 5.0)
        .count();
    assert_eq!(fives, 1);
    assert_eq!(axis.tick_values().len(), 11);
    assert_eq!(axis.prune_exited(1300.0), 9);
    assert_eq!(axis.ticks().len(), 11);
}

#[test]
fn fractional_steps_use_step_precision() {
    let axis = AxisView::new(AxisOrient::Left, scale(1.0), 10);
    let labels: Vec<&str> = axis.ticks().iter().map(|tick| tick.label()).collect();
    assert_eq!(labels.first().copied(), Some("0.0"));
    assert_eq!(labels.get(1).copied(), Some("0.1"));
    assert_eq!(labels.last().copied(), Some("1.0"));
}

#[test]
fn bottom_axis_draws_domain_ticks_and_labels() {
    let layout = ChartLayout::default();
    let style = ChartStyle::default();
    let axis = AxisView::new(
        AxisOrient::Bottom,
        LinearScale::new((0.0, 10.0), (0.0, layout.plot_width())).expect("scale"),
        10,
    );

    let mut frame = RenderFrame::new(layout.viewport);
    axis.push_primitives(&mut frame, layout, &style, 0.0);
    let layer = frame.layer(CanvasLayerKind::Axis).expect("axis layer");

    assert_eq!(layer.lines.len(), 3 + 11);
    assert_eq!(layer.texts.len(), 11);

    let domain = layer.lines[1];
    assert_eq!((domain.x1, domain.y1), (100.0, 420.0));
    assert_eq!((domain.x2, domain.y2), (1160.0, 420.0));
    let outer = layer.lines[0];
    assert_eq!(outer.y1 - outer.y2, style.tick_size_px);
}

#[test]
fn chart_switch_leaves_only_new_ticks_after_transition() {
    let dataset = Dataset::new(vec![
        Record::new("AL", "AL", 5.0, 20.0, 35.0),
        Record::new("AK", "AK", 15.0, 10.0, 30.0),
    ])
    .expect("dataset");
    let mut chart =
        ScatterChart::new(NullRenderer::default(), dataset, ChartConfig::default()).expect("chart");
    chart.select(Field::Smokes).expect("switch");
    assert!(chart.x_axis().ticks().iter().any(|tick| tick.is_exiting()));

    chart.advance_by(1000.0);
    let expected = chart.x_scale().ticks(chart.config().tick_count);
    assert_eq!(chart.x_axis().tick_values(), expected);
    assert!(chart.x_axis().ticks().iter().all(|tick| !tick.is_exiting()));
    assert_eq!(chart.y_axis().scale(), chart.y_scale());
}

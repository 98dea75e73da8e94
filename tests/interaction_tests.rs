use approx::assert_abs_diff_eq;
use scatter_rs::ChartError;
use scatter_rs::chart::{
    AxisLabelId, AxisLabels, ChartConfig, LabelClass, LabelPolicy, ScatterChart,
};
use scatter_rs::core::{Dataset, Field, Record};
use scatter_rs::render::NullRenderer;

fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("AL", "AL", 5.0, 20.0, 35.0),
        Record::new("AK", "AK", 15.0, 10.0, 30.0),
        Record::new("AZ", "AZ", 10.0, 15.0, 25.0),
    ])
    .expect("non-empty dataset")
}

fn build_chart(config: ChartConfig) -> ScatterChart<NullRenderer> {
    ScatterChart::new(NullRenderer::default(), sample_dataset(), config).expect("chart init")
}

fn assert_exclusive_classes(chart: &ScatterChart<NullRenderer>) {
    let active = AxisLabelId::ALL
        .into_iter()
        .filter(|id| chart.labels().class(*id) == LabelClass::Active)
        .collect::<Vec<_>>();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].field(), chart.selected_field());
}

#[test]
fn chart_starts_on_healthcare() {
    let chart = build_chart(ChartConfig::default());
    assert_eq!(chart.selected_field(), Field::Healthcare);
    assert_eq!(chart.labels().class(AxisLabelId::HealthRisks), LabelClass::Active);
    assert_eq!(chart.labels().class(AxisLabelId::Smokes), LabelClass::Inactive);
    assert_eq!(chart.labels().y_title_class(), LabelClass::Active);
    assert!(!chart.is_animating());
}

#[test]
fn reclicking_active_label_is_a_no_op() {
    let mut chart = build_chart(ChartConfig::default());
    let before = chart.snapshot();

    let changed = chart
        .click_label(AxisLabelId::HealthRisks)
        .expect("click succeeds");
    assert!(!changed);
    assert_eq!(chart.snapshot(), before);
    assert!(!chart.is_animating());
    assert_eq!(chart.markers().labels().len(), 3);
}

#[test]
fn label_classes_stay_mutually_exclusive() {
    let mut chart = build_chart(ChartConfig::default());
    assert_exclusive_classes(&chart);

    for id in [
        AxisLabelId::Smokes,
        AxisLabelId::Smokes,
        AxisLabelId::HealthRisks,
        AxisLabelId::Smokes,
    ] {
        chart.click_label(id).expect("click succeeds");
        assert_exclusive_classes(&chart);
        chart.advance_by(250.0);
        assert_exclusive_classes(&chart);
    }
}

#[test]
fn field_round_trip_restores_marker_positions() {
    let mut chart = build_chart(ChartConfig::default());
    let initial = chart.marker_positions();

    assert!(chart.select(Field::Smokes).expect("switch to smokes"));
    chart.settle();
    let on_smokes = chart.marker_positions();
    assert_ne!(on_smokes, initial);

    assert!(chart.select(Field::Healthcare).expect("switch back"));
    chart.settle();
    let restored = chart.marker_positions();

    for ((x0, y0), (x1, y1)) in initial.iter().zip(&restored) {
        assert_abs_diff_eq!(*x0, *x1, epsilon = 1e-9);
        assert_eq!(y0, y1);
    }
}

#[test]
fn vertical_positions_never_change() {
    let mut chart = build_chart(ChartConfig::default());
    let initial: Vec<f64> = chart.marker_positions().iter().map(|(_, y)| *y).collect();

    chart.select(Field::Smokes).expect("switch");
    for _ in 0..5 {
        chart.advance_by(200.0);
        let current: Vec<f64> = chart.marker_positions().iter().map(|(_, y)| *y).collect();
        assert_eq!(current, initial);
    }
}

#[test]
fn markers_animate_over_configured_duration() {
    let mut chart = build_chart(ChartConfig::default());
    let start = chart.marker_positions()[0].0;
    chart.select(Field::Smokes).expect("switch");
    let target = chart.markers().markers()[0].target_center().0;

    assert_eq!(chart.marker_positions()[0].0, start);
    chart.advance_by(500.0);
    assert_abs_diff_eq!(chart.marker_positions()[0].0, (start + target) / 2.0, epsilon = 1e-9);
    assert!(chart.is_animating());
    chart.advance_by(500.0);
    assert_eq!(chart.marker_positions()[0].0, target);
    assert!(!chart.is_animating());
}

#[test]
fn mid_transition_switch_starts_from_current_position() {
    let mut chart = build_chart(ChartConfig::default());
    let initial = chart.marker_positions();

    chart.select(Field::Smokes).expect("switch");
    chart.advance_by(400.0);
    let midway = chart.marker_positions();

    chart.select(Field::Healthcare).expect("switch back");
    assert_eq!(chart.marker_positions(), midway);

    chart.advance_by(1000.0);
    for ((x0, _), (x1, _)) in initial.iter().zip(chart.marker_positions()) {
        assert_abs_diff_eq!(*x0, x1, epsilon = 1e-9);
    }
}

#[test]
fn replace_policy_keeps_one_active_generation() {
    let mut chart = build_chart(ChartConfig::default());
    let records = chart.dataset().len();

    for (index, field) in [Field::Smokes, Field::Healthcare, Field::Smokes]
        .into_iter()
        .enumerate()
    {
        chart.select(field).expect("switch");
        let markers = chart.markers();
        assert_eq!(markers.markers().len(), records);
        assert_eq!(markers.active_label_count(), records);
        assert_eq!(markers.inactive_label_count(), records * (index + 1));
        assert_eq!(markers.label_generation() as usize, index + 1);
        assert!(
            markers
                .active_labels()
                .all(|label| label.generation() == markers.label_generation())
        );
    }
}

#[test]
fn reuse_policy_moves_labels_in_place() {
    let mut chart = build_chart(ChartConfig::default().with_label_policy(LabelPolicy::Reuse));
    chart.select(Field::Smokes).expect("switch");
    chart.settle();

    let markers = chart.markers();
    assert_eq!(markers.labels().len(), 3);
    assert_eq!(markers.inactive_label_count(), 0);
    for (label, marker) in markers.labels().iter().zip(markers.markers()) {
        assert_eq!(label.position(), marker.target_center());
    }
}

#[test]
fn new_label_generation_sits_at_final_positions() {
    let mut chart = build_chart(ChartConfig::default());
    chart.select(Field::Smokes).expect("switch");

    let markers = chart.markers();
    for label in markers.active_labels() {
        let marker = markers.markers()[label.record_index()];
        assert_eq!(label.position(), marker.target_center());
    }
}

#[test]
fn click_at_routes_to_label_under_pointer() {
    let mut chart = build_chart(ChartConfig::default());
    let layout = chart.config().layout;

    let (x, y) = AxisLabels::anchor(layout, AxisLabelId::Smokes);
    assert!(chart.click_at(x, y - 4.0).expect("click"));
    assert_eq!(chart.selected_field(), Field::Smokes);

    let (x, y) = AxisLabels::anchor(layout, AxisLabelId::HealthRisks);
    assert!(chart.click_at(x, y - 4.0).expect("click"));
    assert_eq!(chart.selected_field(), Field::Healthcare);
}

#[test]
fn clicks_outside_labels_are_ignored() {
    let mut chart = build_chart(ChartConfig::default());
    let before = chart.snapshot();
    assert!(!chart.click_at(5.0, 5.0).expect("click"));
    assert!(!chart.click_at(600.0, 200.0).expect("click"));
    assert_eq!(chart.snapshot(), before);
}

#[test]
fn obesity_is_not_selectable() {
    let mut chart = build_chart(ChartConfig::default());
    let err = chart.select(Field::Obesity).expect_err("no obesity label");
    assert!(matches!(err, ChartError::UnknownField(_)));
    assert_eq!(chart.selected_field(), Field::Healthcare);
}

#[test]
fn clock_never_runs_backwards() {
    let mut chart = build_chart(ChartConfig::default());
    chart.advance_to(500.0);
    chart.advance_to(100.0);
    chart.advance_by(-20.0);
    chart.advance_by(f64::NAN);
    assert_eq!(chart.now_ms(), 500.0);
}

#[test]
fn zero_duration_switch_is_immediate() {
    let mut chart = build_chart(ChartConfig::default().with_transition_ms(0.0));
    chart.select(Field::Smokes).expect("switch");
    assert!(!chart.is_animating());
    for marker in chart.markers().markers() {
        assert_eq!(marker.center_at(chart.now_ms()), marker.target_center());
    }
    assert!(chart.x_axis().ticks().iter().all(|tick| !tick.is_exiting()));
}

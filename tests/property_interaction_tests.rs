use proptest::prelude::*;
use scatter_rs::chart::{AxisLabelId, ChartConfig, LabelClass, LabelPolicy, ScatterChart};
use scatter_rs::core::{Dataset, Field, Record, build_x_scale};
use scatter_rs::render::NullRenderer;

fn dataset_from(values: &[(f64, f64, f64)]) -> Dataset {
    let records = values
        .iter()
        .enumerate()
        .map(|(index, (healthcare, smokes, obesity))| {
            Record::new(
                format!("Region {index}"),
                format!("R{index}"),
                *healthcare,
                *smokes,
                *obesity,
            )
        })
        .collect();
    Dataset::new(records).expect("non-empty dataset")
}

fn click_strategy() -> impl Strategy<Value = Vec<(bool, f64)>> {
    prop::collection::vec((any::<bool>(), 0.0f64..1500.0), 0..12)
}

fn record_strategy() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((1.0f64..40.0, 1.0f64..40.0, 1.0f64..50.0), 1..20)
}

proptest! {
    #[test]
    fn click_sequences_keep_view_invariants(
        values in record_strategy(),
        clicks in click_strategy(),
        reuse in any::<bool>()
    ) {
        let policy = if reuse { LabelPolicy::Reuse } else { LabelPolicy::Replace };
        let dataset = dataset_from(&values);
        let records = dataset.len();
        let mut chart = ScatterChart::new(
            NullRenderer::default(),
            dataset,
            ChartConfig::default().with_label_policy(policy),
        )
        .expect("chart init");

        let mut expected = Field::Healthcare;
        for (smokes, delay_ms) in clicks {
            let id = if smokes { AxisLabelId::Smokes } else { AxisLabelId::HealthRisks };
            let changed = chart.click_label(id).expect("click");
            prop_assert_eq!(changed, id.field() != expected);
            expected = id.field();

            chart.advance_by(delay_ms);
            chart.render().expect("render");

            prop_assert_eq!(chart.selected_field(), expected);
            let active = AxisLabelId::ALL
                .into_iter()
                .filter(|label| chart.labels().class(*label) == LabelClass::Active)
                .count();
            prop_assert_eq!(active, 1);
            prop_assert_eq!(chart.labels().class(id), LabelClass::Active);
            prop_assert_eq!(chart.markers().markers().len(), records);
            prop_assert_eq!(chart.markers().active_label_count(), records);
            prop_assert_eq!(chart.renderer().last_circle_count, records);
        }

        chart.settle();
        let x_scale = build_x_scale(chart.dataset(), expected, chart.config().layout)
            .expect("x scale");
        prop_assert_eq!(chart.x_scale(), x_scale);
        for (marker, record) in chart.markers().markers().iter().zip(chart.dataset().iter()) {
            let (x, _) = marker.center_at(chart.now_ms());
            prop_assert!((x - x_scale.map(record.value(expected))).abs() <= 1e-9);
        }
        prop_assert!(!chart.is_animating());
        prop_assert_eq!(
            chart.x_axis().tick_values(),
            x_scale.ticks(chart.config().tick_count)
        );
    }
}

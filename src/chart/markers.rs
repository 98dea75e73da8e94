use ordered_float::OrderedFloat;

use crate::core::{AnimatedValue, ChartLayout, Dataset, Field, LinearScale};
use crate::render::{CanvasLayerKind, CirclePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartStyle, LabelClass, LabelPolicy};

/// Circle view-model for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerView {
    record_index: usize,
    cx: AnimatedValue,
    cy: f64,
}

impl MarkerView {
    #[must_use]
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    /// Center in plot-area pixels at `now_ms`.
    #[must_use]
    pub fn center_at(&self, now_ms: f64) -> (f64, f64) {
        (self.cx.value_at(now_ms), self.cy)
    }

    /// Center once the running transition (if any) settles.
    #[must_use]
    pub fn target_center(&self) -> (f64, f64) {
        (self.cx.target(), self.cy)
    }
}

/// Abbreviation text drawn over a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelView {
    record_index: usize,
    text: String,
    x: f64,
    y: f64,
    generation: u32,
    class: LabelClass,
}

impl LabelView {
    #[must_use]
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn class(&self) -> LabelClass {
        self.class
    }
}

/// Markers and their text labels, indexed by record position.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    markers: Vec<MarkerView>,
    labels: Vec<LabelView>,
    generation: u32,
    radius_px: f64,
}

impl MarkerSet {
    /// Creates one circle and one label per record at `(x(record[field]), y(record.obesity))`.
    #[must_use]
    pub fn render_markers(
        dataset: &Dataset,
        x_scale: LinearScale,
        y_scale: LinearScale,
        field: Field,
        style: &ChartStyle,
    ) -> Self {
        let markers = dataset
            .iter()
            .enumerate()
            .map(|(record_index, record)| MarkerView {
                record_index,
                cx: AnimatedValue::fixed(x_scale.map(record.value(field))),
                cy: y_scale.map(record.obesity),
            })
            .collect();

        let mut set = Self {
            markers,
            labels: Vec::with_capacity(dataset.len()),
            generation: 0,
            radius_px: style.marker_radius_px,
        };
        set.push_label_generation(dataset, x_scale, y_scale, field);
        set
    }

    /// Animates every marker's horizontal center toward its position under `x_scale`.
    ///
    /// Vertical centers never change.
    pub fn update_marker_positions(
        &mut self,
        dataset: &Dataset,
        x_scale: LinearScale,
        field: Field,
        now_ms: f64,
        duration_ms: f64,
    ) {
        for marker in &mut self.markers {
            if let Some(record) = dataset.get(marker.record_index) {
                marker
                    .cx
                    .animate_to(x_scale.map(record.value(field)), now_ms, duration_ms);
            }
        }
    }

    /// Brings the text labels in line with the markers' final positions.
    pub fn refresh_labels(
        &mut self,
        dataset: &Dataset,
        x_scale: LinearScale,
        y_scale: LinearScale,
        field: Field,
        policy: LabelPolicy,
    ) {
        match policy {
            LabelPolicy::Replace => {
                for label in &mut self.labels {
                    label.class = LabelClass::Inactive;
                }
                self.generation += 1;
                self.push_label_generation(dataset, x_scale, y_scale, field);
            }
            LabelPolicy::Reuse => {
                for label in &mut self.labels {
                    if let Some(record) = dataset.get(label.record_index) {
                        label.x = x_scale.map(record.value(field));
                        label.y = y_scale.map(record.obesity);
                    }
                }
            }
        }
    }

    fn push_label_generation(
        &mut self,
        dataset: &Dataset,
        x_scale: LinearScale,
        y_scale: LinearScale,
        field: Field,
    ) {
        let generation = self.generation;
        self.labels
            .extend(dataset.iter().enumerate().map(|(record_index, record)| LabelView {
                record_index,
                text: record.abbreviation.clone(),
                x: x_scale.map(record.value(field)),
                y: y_scale.map(record.obesity),
                generation,
                class: LabelClass::Active,
            }));
    }

    #[must_use]
    pub fn markers(&self) -> &[MarkerView] {
        &self.markers
    }

    /// Every label ever created, including inactive generations.
    #[must_use]
    pub fn labels(&self) -> &[LabelView] {
        &self.labels
    }

    pub fn active_labels(&self) -> impl Iterator<Item = &LabelView> {
        self.labels
            .iter()
            .filter(|label| label.class == LabelClass::Active)
    }

    #[must_use]
    pub fn active_label_count(&self) -> usize {
        self.active_labels().count()
    }

    #[must_use]
    pub fn inactive_label_count(&self) -> usize {
        self.labels.len() - self.active_label_count()
    }

    #[must_use]
    pub fn label_generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn radius_px(&self) -> f64 {
        self.radius_px
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.markers.iter().any(|marker| !marker.cx.is_settled(now_ms))
    }

    /// Record index of the marker whose circle contains the plot-area point.
    ///
    /// Overlapping circles resolve to the nearest center.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64, now_ms: f64) -> Option<usize> {
        let radius_sq = self.radius_px * self.radius_px;
        self.markers
            .iter()
            .filter_map(|marker| {
                let (cx, cy) = marker.center_at(now_ms);
                let distance_sq = (cx - x).powi(2) + (cy - y).powi(2);
                (distance_sq.is_finite() && distance_sq <= radius_sq)
                    .then_some((marker.record_index, distance_sq))
            })
            .min_by_key(|(_, distance_sq)| OrderedFloat(*distance_sq))
            .map(|(record_index, _)| record_index)
    }

    /// Appends circles and active labels. Records with non-finite coordinates are skipped.
    pub fn push_primitives(
        &self,
        frame: &mut RenderFrame,
        layout: ChartLayout,
        style: &ChartStyle,
        now_ms: f64,
    ) {
        let fill = style.marker_fill_color.with_opacity(style.marker_opacity);
        for marker in &self.markers {
            let (x, y) = marker.center_at(now_ms);
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let (cx, cy) = layout.to_canvas(x, y);
            frame.push_circle(
                CanvasLayerKind::Markers,
                CirclePrimitive::new(cx, cy, self.radius_px, fill),
            );
        }

        for label in self.active_labels() {
            if label.text.is_empty() || !label.x.is_finite() || !label.y.is_finite() {
                continue;
            }
            let (x, y) = layout.to_canvas(label.x, label.y);
            frame.push_text(
                CanvasLayerKind::MarkerLabels,
                TextPrimitive::new(
                    label.text.clone(),
                    x,
                    y,
                    style.marker_label_font_px,
                    style.marker_label_color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}

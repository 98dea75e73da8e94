use tracing::{debug, trace};

use crate::core::{Field, build_x_scale};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{AxisLabelId, ScatterChart};

impl<R: Renderer> ScatterChart<R> {
    /// Switches the x axis to `field`.
    ///
    /// Returns `Ok(false)` without touching any state when `field` is already
    /// selected. Otherwise rebuilds the x scale, animates the x axis and the
    /// markers toward it, refreshes the marker labels, rebinds the tooltip and
    /// flips the axis-label classes.
    pub fn select(&mut self, field: Field) -> ChartResult<bool> {
        AxisLabelId::for_field(field)?;
        if field == self.selected {
            trace!(field = %field, "field already selected");
            return Ok(false);
        }

        let x_scale = build_x_scale(&self.dataset, field, self.config.layout)?;
        let now = self.now_ms;
        let duration = self.config.transition_ms;

        self.selected = field;
        self.x_scale = x_scale;
        self.x_axis.render_axis(x_scale, now, duration);
        self.markers
            .update_marker_positions(&self.dataset, x_scale, field, now, duration);
        self.markers.refresh_labels(
            &self.dataset,
            x_scale,
            self.y_scale,
            field,
            self.config.label_policy,
        );
        self.tooltip.attach_tooltip(field);
        self.labels.mark_selected(field);

        debug!(
            field = %field,
            x_domain = ?x_scale.domain(),
            now_ms = now,
            label_generation = self.markers.label_generation(),
            "x field switched"
        );
        Ok(true)
    }

    pub fn click_label(&mut self, id: AxisLabelId) -> ChartResult<bool> {
        self.select(id.field())
    }

    /// Routes a canvas click to the axis label under the pointer.
    ///
    /// Clicks outside every label are ignored and return `Ok(false)`.
    pub fn click_at(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        match self
            .labels
            .hit_test(self.config.layout, &self.config.style, x, y)
        {
            Some(id) => self.click_label(id),
            None => {
                trace!(x, y, "click outside axis labels ignored");
                Ok(false)
            }
        }
    }

    /// Updates hover state for a pointer at canvas coordinates.
    ///
    /// Returns the record index whose tooltip is now shown.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        self.pointer = Some((x, y));
        self.refresh_hover()
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = None;
        self.tooltip.hide();
    }

    /// Re-runs the marker hit test at the last pointer position.
    ///
    /// Markers move under a resting pointer while a field switch animates, so
    /// the clock calls this on every tick.
    pub(super) fn refresh_hover(&mut self) -> Option<usize> {
        let (x, y) = self.pointer?;
        let margins = self.config.layout.margins;
        let hit = self
            .markers
            .hit_test(x - margins.left, y - margins.top, self.now_ms);
        match hit {
            Some(index) => {
                if self.tooltip.hovered() != Some(index) {
                    trace!(record = index, "tooltip shown");
                }
                self.tooltip.show(index);
            }
            None => {
                if self.tooltip.is_visible() {
                    trace!(x, y, "tooltip hidden");
                }
                self.tooltip.hide();
            }
        }
        hit
    }
}

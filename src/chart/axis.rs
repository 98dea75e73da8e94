use serde::{Deserialize, Serialize};

use crate::core::scale::{format_tick, tick_precision};
use crate::core::{AnimatedValue, ChartLayout, LinearScale, format_number};
use crate::render::{CanvasLayerKind, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ChartStyle;

/// Side of the plot area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrient {
    /// Horizontal axis placed at the bottom edge of the plot area.
    Bottom,
    /// Vertical axis placed at the left edge of the plot area.
    Left,
}

/// One keyed tick of an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    value: f64,
    label: String,
    position: AnimatedValue,
    opacity: AnimatedValue,
    exiting: bool,
}

impl AxisTick {
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position along the axis in plot-area pixels.
    #[must_use]
    pub fn position_at(&self, now_ms: f64) -> f64 {
        self.position.value_at(now_ms)
    }

    #[must_use]
    pub fn opacity_at(&self, now_ms: f64) -> f64 {
        self.opacity.value_at(now_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    fn is_settled(&self, now_ms: f64) -> bool {
        self.position.is_settled(now_ms) && self.opacity.is_settled(now_ms)
    }
}

/// Retained axis state: the current scale plus the ticks currently on screen.
///
/// Ticks are keyed by value. Re-rendering against a new scale moves the
/// surviving ticks, fades new ticks in from where the previous scale would
/// have placed them, and fades the vanished ones out toward their position
/// under the new scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisView {
    orient: AxisOrient,
    scale: LinearScale,
    tick_count: usize,
    ticks: Vec<AxisTick>,
}

impl AxisView {
    /// Creates the axis without animation.
    #[must_use]
    pub fn new(orient: AxisOrient, scale: LinearScale, tick_count: usize) -> Self {
        let labels = TickLabels::for_scale(scale, tick_count);
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                label: labels.format(value),
                position: AnimatedValue::fixed(scale.map(value)),
                opacity: AnimatedValue::fixed(1.0),
                exiting: false,
            })
            .collect();

        Self {
            orient,
            scale,
            tick_count,
            ticks,
        }
    }

    #[must_use]
    pub fn orient(&self) -> AxisOrient {
        self.orient
    }

    #[must_use]
    pub fn scale(&self) -> LinearScale {
        self.scale
    }

    /// All retained ticks, including the ones still fading out.
    #[must_use]
    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }

    /// Values of the ticks that belong to the current scale.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        self.ticks
            .iter()
            .filter(|tick| !tick.exiting)
            .map(AxisTick::value)
            .collect()
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.ticks.iter().any(|tick| !tick.is_settled(now_ms))
    }

    /// Re-renders the axis for `scale` with an animated transition starting at `now_ms`.
    pub fn render_axis(&mut self, scale: LinearScale, now_ms: f64, duration_ms: f64) {
        self.prune_exited(now_ms);

        let previous = self.scale;
        let values = scale.ticks(self.tick_count);
        let labels = TickLabels::for_scale(scale, self.tick_count);

        for tick in &mut self.ticks {
            let target = scale.map(tick.value);
            tick.position.animate_to(target, now_ms, duration_ms);
            if values.contains(&tick.value) {
                tick.label = labels.format(tick.value);
                tick.opacity.animate_to(1.0, now_ms, duration_ms);
                tick.exiting = false;
            } else if !tick.exiting {
                tick.opacity.animate_to(0.0, now_ms, duration_ms);
                tick.exiting = true;
            }
        }

        for value in values {
            if self.ticks.iter().any(|tick| tick.value == value) {
                continue;
            }
            let start = previous.map(value);
            let start = if start.is_finite() {
                start
            } else {
                scale.map(value)
            };
            self.ticks.push(AxisTick {
                value,
                label: labels.format(value),
                position: AnimatedValue::between(start, scale.map(value), now_ms, duration_ms),
                opacity: AnimatedValue::between(0.0, 1.0, now_ms, duration_ms),
                exiting: false,
            });
        }

        self.ticks.sort_by(|left, right| left.value.total_cmp(&right.value));
        self.scale = scale;
        self.prune_exited(now_ms);
    }

    /// Drops exiting ticks whose fade-out has completed. Returns how many were removed.
    pub fn prune_exited(&mut self, now_ms: f64) -> usize {
        let before = self.ticks.len();
        self.ticks
            .retain(|tick| !(tick.exiting && tick.is_settled(now_ms)));
        before - self.ticks.len()
    }

    /// Appends the domain path, tick marks and tick labels to `frame`.
    pub fn push_primitives(
        &self,
        frame: &mut RenderFrame,
        layout: ChartLayout,
        style: &ChartStyle,
        now_ms: f64,
    ) {
        let (origin_x, origin_y) = match self.orient {
            AxisOrient::Bottom => layout.to_canvas(0.0, layout.plot_height()),
            AxisOrient::Left => layout.to_canvas(0.0, 0.0),
        };
        let outer = style.tick_size_px;
        let (range_start, range_end) = self.scale.range();
        let stroke = style.axis_stroke_width;
        let color = style.axis_color;

        let domain_points = match self.orient {
            AxisOrient::Bottom => [
                (range_start, outer),
                (range_start, 0.0),
                (range_end, 0.0),
                (range_end, outer),
            ],
            AxisOrient::Left => [
                (-outer, range_start),
                (0.0, range_start),
                (0.0, range_end),
                (-outer, range_end),
            ],
        };
        for pair in domain_points.windows(2) {
            let (x1, y1) = pair[0];
            let (x2, y2) = pair[1];
            if x1 == x2 && y1 == y2 {
                continue;
            }
            frame.push_line(
                CanvasLayerKind::Axis,
                LinePrimitive::new(
                    origin_x + x1,
                    origin_y + y1,
                    origin_x + x2,
                    origin_y + y2,
                    stroke,
                    color,
                ),
            );
        }

        let label_offset = style.tick_size_px + style.tick_padding_px;
        for tick in &self.ticks {
            let opacity = tick.opacity_at(now_ms);
            if opacity <= 0.0 {
                continue;
            }
            let position = tick.position_at(now_ms);
            let tick_color = color.with_opacity(opacity);

            let (line, text) = match self.orient {
                AxisOrient::Bottom => {
                    let x = origin_x + position;
                    (
                        LinePrimitive::new(x, origin_y, x, origin_y + outer, stroke, tick_color),
                        TextPrimitive::new(
                            tick.label.clone(),
                            x,
                            origin_y + label_offset + style.tick_font_px * 0.71,
                            style.tick_font_px,
                            tick_color,
                            TextHAlign::Center,
                        ),
                    )
                }
                AxisOrient::Left => {
                    let y = origin_y + position;
                    (
                        LinePrimitive::new(origin_x - outer, y, origin_x, y, stroke, tick_color),
                        TextPrimitive::new(
                            tick.label.clone(),
                            origin_x - label_offset,
                            y + style.tick_font_px * 0.32,
                            style.tick_font_px,
                            tick_color,
                            TextHAlign::Right,
                        ),
                    )
                }
            };
            frame.push_line(CanvasLayerKind::Axis, line);
            frame.push_text(CanvasLayerKind::Axis, text);
        }
    }
}

/// Fixed-precision formatter derived from the tick step of a scale.
#[derive(Debug, Clone, Copy)]
struct TickLabels {
    precision: Option<usize>,
}

impl TickLabels {
    fn for_scale(scale: LinearScale, tick_count: usize) -> Self {
        Self {
            precision: scale.tick_step(tick_count).map(tick_precision),
        }
    }

    fn format(self, value: f64) -> String {
        match self.precision {
            Some(precision) => format_tick(value, precision),
            None => format_number(value),
        }
    }
}

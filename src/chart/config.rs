use serde::{Deserialize, Serialize};

use crate::core::scale::{DEFAULT_TICK_COUNT, MAX_TICK_COUNT};
use crate::core::{ChartLayout, DEFAULT_TRANSITION_MS};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// What happens to per-record text labels when the x field changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelPolicy {
    /// Tag the current labels inactive and create a fresh generation at the
    /// new positions. Inactive labels are kept but not drawn.
    #[default]
    Replace,
    /// Move the existing labels to their new positions.
    Reuse,
}

/// Tooltip text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipFormat {
    /// `Healthcare: v` / `Obesity: o` for healthcare, `Smokes: v` / ` o` otherwise.
    #[default]
    Reference,
    /// `{Field}: v` / `Obesity: o` for every field.
    Normalized,
}

/// Visual constants of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub marker_radius_px: f64,
    pub marker_fill_color: Color,
    pub marker_opacity: f64,
    pub marker_label_font_px: f64,
    pub marker_label_color: Color,
    pub axis_color: Color,
    pub axis_stroke_width: f64,
    pub tick_size_px: f64,
    pub tick_padding_px: f64,
    pub tick_font_px: f64,
    pub axis_label_font_px: f64,
    pub axis_label_active_color: Color,
    pub axis_label_inactive_color: Color,
    /// Average glyph width used to estimate axis-label hit boxes.
    pub label_char_width_px: f64,
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_px: f64,
    pub tooltip_line_height_px: f64,
    pub tooltip_padding_px: f64,
    /// `[top, left]` shift of the tooltip box from the top of the hovered marker.
    pub tooltip_offset_px: [f64; 2],
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            marker_radius_px: 15.0,
            marker_fill_color: Color::BLUE,
            marker_opacity: 0.6,
            marker_label_font_px: 10.0,
            marker_label_color: Color::WHITE,
            axis_color: Color::BLACK,
            axis_stroke_width: 1.0,
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
            tick_font_px: 10.0,
            axis_label_font_px: 14.0,
            axis_label_active_color: Color::BLACK,
            axis_label_inactive_color: Color::DARK_GRAY,
            label_char_width_px: 8.0,
            tooltip_background_color: Color::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text_color: Color::WHITE,
            tooltip_font_px: 12.0,
            tooltip_line_height_px: 16.0,
            tooltip_padding_px: 6.0,
            tooltip_offset_px: [80.0, -60.0],
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.marker_radius_px, "marker_radius_px"),
            (self.marker_label_font_px, "marker_label_font_px"),
            (self.axis_stroke_width, "axis_stroke_width"),
            (self.tick_font_px, "tick_font_px"),
            (self.axis_label_font_px, "axis_label_font_px"),
            (self.label_char_width_px, "label_char_width_px"),
            (self.tooltip_font_px, "tooltip_font_px"),
            (self.tooltip_line_height_px, "tooltip_line_height_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.tick_size_px, "tick_size_px"),
            (self.tick_padding_px, "tick_padding_px"),
            (self.tooltip_padding_px, "tooltip_padding_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.marker_opacity.is_finite() || !(0.0..=1.0).contains(&self.marker_opacity) {
            return Err(ChartError::InvalidData(
                "style `marker_opacity` must be in [0, 1]".to_owned(),
            ));
        }
        if !self.tooltip_offset_px.iter().all(|value| value.is_finite()) {
            return Err(ChartError::InvalidData(
                "style `tooltip_offset_px` must be finite".to_owned(),
            ));
        }
        for color in [
            self.marker_fill_color,
            self.marker_label_color,
            self.axis_color,
            self.axis_label_active_color,
            self.axis_label_inactive_color,
            self.tooltip_background_color,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }
        Ok(self)
    }
}

/// Chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to the data file instead
/// of hard-coding layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub label_policy: LabelPolicy,
    #[serde(default)]
    pub tooltip_format: TooltipFormat,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::default(),
            style: ChartStyle::default(),
            transition_ms: default_transition_ms(),
            tick_count: default_tick_count(),
            label_policy: LabelPolicy::default(),
            tooltip_format: TooltipFormat::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_transition_ms(mut self, transition_ms: f64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    #[must_use]
    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    #[must_use]
    pub fn with_tooltip_format(mut self, format: TooltipFormat) -> Self {
        self.tooltip_format = format;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.layout.validate()?;
        self.style.validate()?;
        if !self.transition_ms.is_finite() || self.transition_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if !(1..=MAX_TICK_COUNT).contains(&self.tick_count) {
            return Err(ChartError::InvalidData(format!(
                "tick count must be in 1..={MAX_TICK_COUNT}, got {}",
                self.tick_count
            )));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_transition_ms() -> f64 {
    DEFAULT_TRANSITION_MS
}

fn default_tick_count() -> usize {
    DEFAULT_TICK_COUNT
}

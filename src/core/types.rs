use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 40.0,
            bottom: 80.0,
            left: 100.0,
        }
    }
}

/// Fixed canvas geometry. The plot area is the canvas minus its margins and is
/// never recomputed after the chart is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1200, 500),
            margins: Margins::default(),
        }
    }
}

impl ChartLayout {
    #[must_use]
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self { viewport, margins }
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.left - self.margins.right
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.top - self.margins.bottom
    }

    /// Converts a plot-area coordinate into canvas pixels.
    #[must_use]
    pub fn to_canvas(self, x: f64, y: f64) -> (f64, f64) {
        (x + self.margins.left, y + self.margins.top)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for (value, name) in [
            (self.margins.top, "top"),
            (self.margins.right, "right"),
            (self.margins.bottom, "bottom"),
            (self.margins.left, "left"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidData(
                "margins leave no drawable plot area".to_owned(),
            ));
        }
        Ok(self)
    }
}

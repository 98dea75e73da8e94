use serde::{Deserialize, Serialize};

use crate::core::dataset::{Dataset, Field};
use crate::core::types::ChartLayout;
use crate::error::{ChartError, ChartResult};

/// Padding applied to the low end of the x domain (`min * 0.8`).
pub const X_DOMAIN_LOW_FACTOR: f64 = 0.8;
/// Padding applied to the high end of the x domain (`max * 1.2`).
pub const X_DOMAIN_HIGH_FACTOR: f64 = 1.2;
/// Tick count hint used by both axes.
pub const DEFAULT_TICK_COUNT: usize = 10;
/// Largest tick count hint honored by tick generation.
pub const MAX_TICK_COUNT: usize = 100;

/// Continuous linear mapping from a data domain to a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// y axis plots larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the range.
    ///
    /// A zero-span domain maps every value to the middle of the range.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a range value back into the domain.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Human-friendly tick values (1, 2 or 5 times a power of ten) inside the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Step between consecutive values returned by [`Self::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> Option<f64> {
        let (lo, hi) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        nice_step(lo, hi, count)
    }
}

/// Builds the horizontal scale for `field`: `[min * 0.8, max * 1.2] -> [0, plot_width]`.
pub fn build_x_scale(
    dataset: &Dataset,
    field: Field,
    layout: ChartLayout,
) -> ChartResult<LinearScale> {
    let min = dataset.min(field);
    let max = dataset.max(field);
    if !min.is_finite() || !max.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "extent of field `{field}` is not finite: [{min}, {max}]"
        )));
    }

    LinearScale::new(
        (min * X_DOMAIN_LOW_FACTOR, max * X_DOMAIN_HIGH_FACTOR),
        (0.0, layout.plot_width()),
    )
}

/// Builds the vertical scale: `[0, max(obesity)] -> [plot_height, 0]`.
pub fn build_y_scale(dataset: &Dataset, layout: ChartLayout) -> ChartResult<LinearScale> {
    let max = dataset.max(Field::Obesity);
    if !max.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "extent of field `obesity` is not finite: max {max}"
        )));
    }

    LinearScale::new((0.0, max), (layout.plot_height(), 0.0))
}

/// Decimal places needed to print ticks spaced by `step` without noise.
#[must_use]
pub fn tick_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exponent = (step.log10() + 1e-9).floor();
    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}

/// Formats a tick value with fixed precision, normalizing negative zero.
#[must_use]
pub fn format_tick(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

/// Integer tick indices `(i1, i2)` plus the signed increment.
///
/// A negative increment means the step is `1 / -increment`, which keeps
/// fractional ticks exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        i1 = (start * scaled).round();
        i2 = (stop * scaled).round();
        if i1 / scaled < start {
            i1 += 1.0;
        }
        if i2 / scaled > stop {
            i2 -= 1.0;
        }
        inc = -scaled;
    } else {
        let scaled = 10f64.powf(power) * factor;
        i1 = (start / scaled).round();
        i2 = (stop / scaled).round();
        if i1 * scaled < start {
            i1 += 1.0;
        }
        if i2 * scaled > stop {
            i2 -= 1.0;
        }
        inc = scaled;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn nice_step(lo: f64, hi: f64, count: usize) -> Option<f64> {
    let count = count.min(MAX_TICK_COUNT);
    if count == 0 || !lo.is_finite() || !hi.is_finite() || lo == hi {
        return None;
    }
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some(if inc < 0.0 { 1.0 / -inc } else { inc })
}

fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let count = count.min(MAX_TICK_COUNT);
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) || !inc.is_finite() || inc == 0.0 {
        return Vec::new();
    }

    // A nice step never yields more than a few ticks per requested one.
    let n = ((i2 - i1 + 1.0) as usize).min(MAX_TICK_COUNT * 4);
    (0..n)
        .map(|i| {
            let i = i as f64;
            let index = if reverse { i2 - i } else { i1 + i };
            if inc < 0.0 { index / -inc } else { index * inc }
        })
        .collect()
}

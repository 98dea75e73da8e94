use serde::{Deserialize, Serialize};

/// Duration used by every animated attribute change, in milliseconds.
pub const DEFAULT_TRANSITION_MS: f64 = 1000.0;

/// Cubic in-out easing over `t` in `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// A scalar attribute that may be interpolating between two values.
///
/// Values are evaluated lazily against a clock supplied by the caller, so a
/// transition needs no scheduling of its own. Starting a new transition while
/// one is in flight begins from the current interpolated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatedValue {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl AnimatedValue {
    #[must_use]
    pub const fn fixed(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    /// Starts an animation from `from` to `to` beginning at `start_ms`.
    #[must_use]
    pub fn between(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(0.0),
        }
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn end_ms(self) -> f64 {
        self.start_ms + self.duration_ms
    }

    #[must_use]
    pub fn value_at(self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || now_ms >= self.end_ms() {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }

    #[must_use]
    pub fn is_settled(self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.end_ms()
    }

    pub fn animate_to(&mut self, to: f64, now_ms: f64, duration_ms: f64) {
        *self = Self::between(self.value_at(now_ms), to, now_ms, duration_ms);
    }

    pub fn set(&mut self, value: f64) {
        *self = Self::fixed(value);
    }
}

use tracing::{trace, warn};

use crate::render::Renderer;

use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn advance_by(&mut self, delta_ms: f64) {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            warn!(delta_ms, "ignoring invalid clock delta");
            return;
        }
        self.advance_to(self.now_ms + delta_ms);
    }

    /// Moves the clock forward to `now_ms`. The clock never runs backwards.
    pub fn advance_to(&mut self, now_ms: f64) {
        if !now_ms.is_finite() || now_ms < self.now_ms {
            warn!(now_ms, current_ms = self.now_ms, "ignoring non-monotonic clock update");
            return;
        }
        self.now_ms = now_ms;
        let pruned = self.x_axis.prune_exited(now_ms);
        if pruned > 0 {
            trace!(pruned, now_ms, "exited axis ticks removed");
        }
        self.refresh_hover();
    }

    /// Advances the clock past the end of every running transition.
    pub fn settle(&mut self) {
        let end = self.now_ms + self.config.transition_ms;
        self.advance_to(end);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.markers.is_animating(self.now_ms) || self.x_axis.is_animating(self.now_ms)
    }
}

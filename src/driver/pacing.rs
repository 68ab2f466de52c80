//! Frame pacing policy
//!
//! Approximates a fixed frame rate with a two-branch sleep: frames that
//! finish under the budget sleep off the remainder; frames that overrun
//! sleep a fixed minimum so the loop still yields the processor instead of
//! spinning. Elapsed time is truncated to whole milliseconds; the drift
//! this introduces against true 60 Hz is accepted behavior, not corrected
//! with a finer timer.

use std::time::Duration;

/// Computes the end-of-iteration pause from the iteration's elapsed time
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    /// Target frame budget in whole milliseconds
    frame_budget_ms: u64,

    /// Fixed pause when a frame overruns the budget
    overrun_pause_ms: u64,
}

impl FramePacer {
    pub fn new(frame_budget_ms: u64, overrun_pause_ms: u64) -> Self {
        Self {
            frame_budget_ms,
            overrun_pause_ms,
        }
    }

    /// The pause to take after an iteration that ran for `elapsed`
    ///
    /// Under budget: the truncated-millisecond remainder. At or over
    /// budget: the fixed overrun pause.
    pub fn pause_after(&self, elapsed: Duration) -> Duration {
        let elapsed_ms = elapsed.as_millis() as u64;
        if elapsed_ms < self.frame_budget_ms {
            Duration::from_millis(self.frame_budget_ms - elapsed_ms)
        } else {
            Duration::from_millis(self.overrun_pause_ms)
        }
    }

    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(self.frame_budget_ms)
    }
}

impl Default for FramePacer {
    /// 16 ms budget (~60 Hz) with a 2 ms overrun yield
    fn default() -> Self {
        Self::new(16, 2)
    }
}

impl From<&crate::utils::config::PacingConfig> for FramePacer {
    fn from(config: &crate::utils::config::PacingConfig) -> Self {
        Self::new(config.frame_budget_ms, config.overrun_pause_ms)
    }
}

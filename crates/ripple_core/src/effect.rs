//! Deferred work emitted by [`crate::RippleController`] for the host to schedule.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identity of one press-grow animation. A newer press always carries a larger generation.
pub struct AnimationGeneration(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identity of one scheduled touch hold delay.
pub struct TouchDelayToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Timer requests returned by controller handlers.
///
/// The host waits `delay_ms` and then calls back with the carried token. Stale callbacks are
/// harmless: the controller compares the token against its current session and ignores
/// mismatches.
pub enum RippleEffect {
    /// Call [`crate::RippleController::touch_delay_elapsed`] after the delay.
    ScheduleTouchDelay {
        /// Token to hand back.
        token: TouchDelayToken,
        /// Delay in milliseconds.
        delay_ms: f64,
    },
    /// Call [`crate::RippleController::release_elapsed`] after the delay.
    ScheduleRelease {
        /// Animation the release belongs to.
        generation: AnimationGeneration,
        /// Remaining minimum-press time in milliseconds.
        delay_ms: f64,
    },
}

impl RippleEffect {
    /// Delay the host should wait before calling back.
    pub fn delay_ms(&self) -> f64 {
        match self {
            Self::ScheduleTouchDelay { delay_ms, .. } | Self::ScheduleRelease { delay_ms, .. } => {
                *delay_ms
            }
        }
    }
}

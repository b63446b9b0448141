//! Frame clock
//!
//! Turns the absolute timestamps handed to an animation-frame callback into
//! per-step deltas.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameClock {
    /// Timestamp of the previous frame (seconds), `None` before the first
    last: Option<f64>,
    /// Largest delta returned by `tick`
    pub max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Seconds since the previous frame
    ///
    /// The first frame after construction or `reset` yields 0. Clock jumps
    /// backwards yield 0 and long stalls (tab in background) are capped at
    /// `max_dt`.
    pub fn tick(&mut self, now_secs: f64) -> f32 {
        let Some(last) = self.last.replace(now_secs) else {
            return 0.0;
        };

        let dt = (now_secs - last) as f32;
        if dt < 0.0 {
            log::debug!("Frame clock went backwards by {:.4}s", -dt);
            return 0.0;
        }
        if dt > self.max_dt {
            log::debug!("Frame delta {:.3}s capped to {:.3}s", dt, self.max_dt);
            return self.max_dt;
        }
        dt
    }

    /// Same as `tick` for a millisecond timestamp (`requestAnimationFrame`)
    pub fn tick_ms(&mut self, now_ms: f64) -> f32 {
        self.tick(now_ms / 1000.0)
    }

    /// Forget the previous frame; the next tick yields 0
    pub fn reset(&mut self) {
        self.last = None;
    }
}

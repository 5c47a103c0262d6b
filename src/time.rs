//! Fixed-timestep frame clock using an accumulator pattern.
//!
//! `draw_web()` fires at the display's refresh rate with variable deltas.
//! FrameClock turns wall-clock milliseconds into discrete logic ticks, so
//! passive accrual stays deterministic and fully testable.

/// Logic tick rate: matches the 60 fps frame cadence.
pub const TICKS_PER_SEC: u32 = 60;

/// Longest frame delta honored before clamping, in milliseconds. Avoids a
/// spiral of catch-up ticks after the tab was backgrounded.
const MAX_FRAME_MS: f64 = 500.0;

pub struct FrameClock {
    /// Milliseconds per tick (16.67ms at 60 ticks/sec).
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks.
    accumulator: f64,
    /// Timestamp of the last update (ms), None if first frame.
    last_timestamp: Option<f64>,
    /// Total elapsed ticks since creation.
    pub total_ticks: u64,
}

impl FrameClock {
    /// Create a new clock at the given tick rate.
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            last_timestamp: None,
            total_ticks: 0,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of discrete ticks to process this frame; the
    /// first call returns 0 since there is no delta yet.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

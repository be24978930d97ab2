//! Frame clock: turns per-frame wall-clock timestamps into millisecond deltas.
//!
//! `draw_web()` calls at ~60fps with a fractional `performance.now()` value.
//! The economy wants whole milliseconds, so the sub-millisecond part of each
//! frame is carried over instead of dropped; 60 frames of 16.67ms add up to
//! a full second.

pub struct FrameClock {
    /// Fractional milliseconds not yet handed out.
    carry: f64,
    /// Timestamp of the last update (ms), None if first frame.
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            carry: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed the current timestamp and get the whole milliseconds elapsed
    /// since the previous call.
    ///
    /// The first frame returns 0. Long gaps (backgrounded tab) are returned
    /// as-is. A timestamp older than the previous one yields a negative
    /// value, which `EconomyEngine::advance_time` refuses.
    pub fn update(&mut self, now_ms: f64) -> i64 {
        let delta = match self.last_timestamp {
            Some(prev) => now_ms - prev,
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        if delta < 0.0 {
            // Don't fold a regression into the carry; report it whole.
            return delta.floor() as i64;
        }

        self.carry += delta;
        let whole = self.carry.floor();
        self.carry -= whole;
        whole as i64
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

// File: crates/strata-core/src/animate.rs
// Summary: Entrance-animation driver: injected clock, single engine-level tick.

use std::time::Instant;

/// Seconds for a full series entrance.
pub const ENTRANCE_DURATION: f32 = 0.6;

/// Monotonic time source, injected so tests can drive animation without
/// real timers.
pub trait Clock {
    /// Seconds since an arbitrary fixed origin.
    fn now(&self) -> f64;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Tracks elapsed time between engine ticks. One driver per chart; series
/// carry only their own progress value.
pub struct Animator {
    clock: Box<dyn Clock>,
    last: Option<f64>,
}

impl Animator {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock, last: None }
    }

    /// Seconds since the previous tick (zero on the first).
    pub fn advance(&mut self) -> f64 {
        let now = self.clock.now();
        let dt = match self.last {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous tick so the next delta starts from zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

pub fn ease_out_cubic(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

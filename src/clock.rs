//! Monotonic time sources for deriving per-tick deltas.

use core::cell::Cell;

use crate::float::Float;

/// A monotonic time source, in milliseconds.
///
/// Only differences between readings matter; the origin is arbitrary.
pub trait Clock<F: Float> {
    fn now_ms(&self) -> F;
}

/// A clock the host advances by hand.
///
/// Fits hosts that already receive a timestamp per frame (a browser animation
/// frame callback, an engine's frame time) and deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock<F: Float> {
    now: Cell<F>,
}

impl<F: Float> ManualClock<F> {
    pub fn new(start_ms: F) -> Self {
        ManualClock { now: Cell::new(start_ms) }
    }

    /// Jump to an absolute reading.
    pub fn set(&self, now_ms: F) {
        self.now.set(now_ms);
    }

    /// Move forward by `dt_ms`.
    pub fn advance(&self, dt_ms: F) {
        self.now.set(self.now.get() + dt_ms);
    }
}

impl<F: Float> Clock<F> for ManualClock<F> {
    fn now_ms(&self) -> F {
        self.now.get()
    }
}

/// Wall clock backed by `web_time::Instant`, so it also works on wasm32.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug)]
pub struct MonotonicClock {
    origin: web_time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock { origin: web_time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock<f64> for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(feature = "std")]
impl Clock<f32> for MonotonicClock {
    fn now_ms(&self) -> f32 {
        (self.origin.elapsed().as_secs_f64() * 1000.0) as f32
    }
}

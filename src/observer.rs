//! Update observer trait for hosts that re-render after each spring step.

/// Notified once at the end of every completed spring step.
///
/// The notification carries no payload; the host re-reads the spring's
/// current value itself. Any `FnMut()` closure is an observer.
pub trait UpdateObserver {
    /// Called after a step has mutated the spring state.
    fn on_update(&mut self);
}

impl<T: FnMut()> UpdateObserver for T {
    fn on_update(&mut self) {
        self()
    }
}

/// A no-op observer. Default for springs nobody watches.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOpUpdateObserver;

impl UpdateObserver for NoOpUpdateObserver {
    fn on_update(&mut self) {}
}

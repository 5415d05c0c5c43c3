//! Scalar damped spring with rest detection, retargeting and start/stop control.
//!
//! The spring integrates `a = (-k * (x - x0) - c * v) / m` with semi-implicit
//! Euler. Deltas are given in milliseconds; velocity is in units per second.
//!
//! # State machine
//!
//! ```text
//!          start()               natural rest
//!   Idle ----------> Running ------------------> Idle
//!    ^                 |  ^
//!    |         stop()  v  | start()
//!    +---- (stays) -- Stopped
//! ```
//!
//! Only `Running` springs step. `stop()` freezes the spring where it is; it is
//! then neither at rest nor animating until the next `start()`.

use core::fmt;

use crate::config::{SpringConfig, SpringConfigUpdate};
use crate::error::SpringError;
use crate::float::Float;
use crate::logging::{debug, trace};
use crate::observer::{NoOpUpdateObserver, UpdateObserver};
use crate::clock::Clock;

/// Largest integration sub-step, in milliseconds. Longer deltas are split
/// into equal sub-steps no longer than this, or shorter when the spring's
/// stiffness or damping needs it (see [`Spring1D::step`]).
pub const MAX_SUB_STEP_MS: f32 = 4.0;

/// Most sub-steps a single step will run. A very stiff or heavily damped
/// spring that would need more simulates only this many stable sub-steps
/// and drops the rest of the delta, like a stalled frame.
pub const MAX_SUB_STEPS: usize = 10_000;

/// Deltas longer than this (a stalled or backgrounded frame) are truncated
/// before sub-stepping, bounding the work done by a single step.
pub const MAX_FRAME_MS: f32 = 1000.0;

/// Lifecycle state of a spring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpringStatus {
    /// Never started, or settled naturally.
    Idle,
    /// Stepping on every tick.
    Running,
    /// Interrupted by `stop()`; frozen until `start()`.
    Stopped,
}

/// A single damped spring driving one value toward a target.
///
/// `O` is notified once at the end of every step.
///
/// ```
/// use recoil::{Spring1D, SpringConfig};
///
/// let config = SpringConfig::stiff().with_from_value(100.0).with_to_value(0.0);
/// let mut spring: Spring1D<f64> = Spring1D::new(config).unwrap();
/// spring.attach();
/// while !spring.is_at_rest() {
///     spring.step(16.0);
/// }
/// assert_eq!(spring.current_value(), 0.0);
/// ```
#[derive(Clone)]
pub struct Spring1D<F: Float, O: UpdateObserver = NoOpUpdateObserver> {
    config: SpringConfig<F>,
    position: F,
    velocity: F,
    status: SpringStatus,
    last_tick_ms: Option<F>,
    attached: bool,
    observer: O,
}

impl<F: Float> Spring1D<F> {
    /// Build an idle, detached spring at `config.from_value` moving with
    /// `config.initial_velocity` toward `config.to_value`.
    pub fn new(config: SpringConfig<F>) -> Result<Self, SpringError> {
        config.validate()?;
        Ok(Spring1D {
            config,
            position: config.from_value,
            velocity: config.initial_velocity,
            status: SpringStatus::Idle,
            last_tick_ms: None,
            attached: false,
            observer: NoOpUpdateObserver,
        })
    }
}

impl<F: Float, O: UpdateObserver> Spring1D<F, O> {
    /// Replace the update observer.
    pub fn with_observer<P: UpdateObserver>(self, observer: P) -> Spring1D<F, P> {
        Spring1D {
            config: self.config,
            position: self.position,
            velocity: self.velocity,
            status: self.status,
            last_tick_ms: self.last_tick_ms,
            attached: self.attached,
            observer,
        }
    }

    pub fn observer(&self) -> &O { &self.observer }
    pub fn observer_mut(&mut self) -> &mut O { &mut self.observer }

    pub fn current_value(&self) -> F { self.position }
    pub fn current_velocity(&self) -> F { self.velocity }
    pub fn to_value(&self) -> F { self.config.to_value }
    pub fn status(&self) -> SpringStatus { self.status }
    pub fn config(&self) -> &SpringConfig<F> { &self.config }
    pub fn is_attached(&self) -> bool { self.attached }

    /// True while the spring is being stepped.
    pub fn is_animating(&self) -> bool {
        self.status == SpringStatus::Running
    }

    /// True when the spring is idle and sits exactly on its target with no
    /// velocity. A stopped spring is never at rest.
    pub fn is_at_rest(&self) -> bool {
        self.status == SpringStatus::Idle
            && self.position == self.config.to_value
            && self.velocity == F::zero()
    }

    /// Begin (or resume) stepping. No-op while already running.
    ///
    /// The next delta is measured from the first tick after this call, not
    /// from whenever the spring last ran.
    pub fn start(&mut self) {
        if self.status == SpringStatus::Running {
            return;
        }
        debug!(from = ?self.status, position = ?self.position, "spring started");
        self.status = SpringStatus::Running;
        self.last_tick_ms = None;
    }

    /// Like [`start`](Self::start), anchoring the delta clock at `now_ms`.
    pub fn start_at(&mut self, now_ms: F) {
        if self.status == SpringStatus::Running {
            return;
        }
        self.start();
        self.last_tick_ms = Some(now_ms);
    }

    /// Freeze the spring. No state changes or notifications happen until the
    /// next `start()`. No-op unless running.
    pub fn stop(&mut self) {
        if self.status != SpringStatus::Running {
            return;
        }
        debug!(position = ?self.position, velocity = ?self.velocity, "spring stopped");
        self.status = SpringStatus::Stopped;
        self.last_tick_ms = None;
    }

    /// The host's consuming element went live: start stepping, and resume on
    /// every retarget from now on.
    ///
    /// Like [`start`](Self::start), this leaves the delta clock unanchored:
    /// the first [`tick`](Self::tick) afterwards is a zero-length step that
    /// notifies without moving, so motion begins one frame later. Hosts that
    /// know the time can call [`start_at`](Self::start_at) right after.
    pub fn attach(&mut self) {
        debug!("spring attached");
        self.attached = true;
        self.start();
    }

    /// The host's consuming element went away: stop stepping.
    pub fn detach(&mut self) {
        debug!("spring detached");
        self.attached = false;
        self.stop();
    }

    /// Move the target without touching position or velocity, so the spring
    /// flies from its current motion to the new destination. Resumes an
    /// attached spring; if it was not already running, the first tick after
    /// the retarget is a zero-length step, as after [`attach`](Self::attach).
    pub fn set_to_value(&mut self, to_value: F) {
        trace!(from = ?self.config.to_value, to = ?to_value, "spring retargeted");
        self.config.to_value = to_value;
        if self.attached {
            self.start();
        }
    }

    /// Reconfigure physical parameters. The merged config is validated before
    /// anything is committed; position and velocity are kept.
    pub fn apply(&mut self, update: SpringConfigUpdate<F>) -> Result<(), SpringError> {
        self.config = self.config.merged(&update)?;
        debug!(config = ?self.config, "spring reconfigured");
        Ok(())
    }

    /// Advance by a clock reading. The delta is the time since the previous
    /// tick, or zero on the first tick after `start()`.
    ///
    /// Returns whether a step happened (false unless running).
    pub fn tick(&mut self, now_ms: F) -> bool {
        if self.status != SpringStatus::Running {
            return false;
        }
        let dt_ms = match self.last_tick_ms {
            Some(last) => now_ms - last,
            None => F::zero(),
        };
        self.last_tick_ms = Some(now_ms);
        self.step(dt_ms)
    }

    /// [`tick`](Self::tick) with a reading from `clock`.
    pub fn tick_with<C: Clock<F>>(&mut self, clock: &C) -> bool {
        self.tick(clock.now_ms())
    }

    /// Advance by `dt_ms` milliseconds, then evaluate rest and notify the
    /// observer exactly once.
    ///
    /// Rest (and overshoot clamping) is evaluated before the notification, so
    /// on the settling step the observer already sees the exact target,
    /// `is_animating() == false` and `is_at_rest() == true`.
    ///
    /// The delta is truncated to [`MAX_FRAME_MS`] and split into equal
    /// sub-steps no longer than
    /// `min(MAX_SUB_STEP_MS, 0.5 * mass / damping, 0.5 * sqrt(mass / stiffness))`
    /// (in seconds for the last two), which keeps semi-implicit Euler stable
    /// for any valid config. At most [`MAX_SUB_STEPS`] run per step.
    ///
    /// Returns whether a step happened (false unless running).
    pub fn step(&mut self, dt_ms: F) -> bool {
        if self.status != SpringStatus::Running {
            return false;
        }

        let before = self.position - self.config.to_value;
        self.integrate(dt_ms);
        let after = self.position - self.config.to_value;

        trace!(dt_ms = ?dt_ms, position = ?self.position, velocity = ?self.velocity, "spring step");

        if self.config.overshoot_clamping && crossed(before, after) {
            debug!(to_value = ?self.config.to_value, "spring overshoot clamped");
            self.settle();
        } else if after.abs() <= self.config.rest_displacement_threshold
            && self.velocity.abs() <= self.config.rest_velocity_threshold
        {
            debug!(to_value = ?self.config.to_value, "spring at rest");
            self.settle();
        }

        self.observer.on_update();
        true
    }

    fn settle(&mut self) {
        self.position = self.config.to_value;
        self.velocity = F::zero();
        self.status = SpringStatus::Idle;
        self.last_tick_ms = None;
    }

    fn integrate(&mut self, dt_ms: F) {
        let ms_per_sec = F::from_f32(1000.0);

        // NaN and infinities are not masked.
        if !dt_ms.is_finite() {
            self.advance(dt_ms / ms_per_sec);
            return;
        }
        if dt_ms <= F::zero() {
            return;
        }

        let max_frame = F::from_f32(MAX_FRAME_MS);
        if dt_ms > max_frame {
            debug!(dt_ms = ?dt_ms, "stalled frame truncated");
        }
        let mut dt_ms = dt_ms.min(max_frame);

        let max_h = self.max_sub_step_ms();
        let mut sub_steps = (dt_ms / max_h).ceil().to_usize().max(1);
        if sub_steps > MAX_SUB_STEPS {
            debug!(dt_ms = ?dt_ms, max_sub_step_ms = ?max_h, "sub-step budget exhausted");
            sub_steps = MAX_SUB_STEPS;
            dt_ms = max_h * F::from_f32(MAX_SUB_STEPS as f32);
        }
        let h = dt_ms / F::from_f32(sub_steps as f32) / ms_per_sec;
        for _ in 0..sub_steps {
            self.advance(h);
        }
    }

    /// Longest stable sub-step for the current config, in milliseconds.
    ///
    /// Semi-implicit Euler needs `c*h/m < 2` and `(k/m)*h^2 < 4 - 2*c*h/m`;
    /// these bounds keep `c*h/m <= 0.5` and `(k/m)*h^2 <= 0.25`.
    fn max_sub_step_ms(&self) -> F {
        let c = &self.config;
        let half_ms = F::from_f32(500.0);
        let mut h = F::from_f32(MAX_SUB_STEP_MS);
        if c.damping > F::zero() {
            h = h.min(half_ms * c.mass / c.damping);
        }
        h.min(half_ms * (c.mass / c.stiffness).sqrt())
    }

    /// One semi-implicit Euler sub-step of `h` seconds.
    fn advance(&mut self, h: F) {
        let c = &self.config;
        let displacement = self.position - c.to_value;
        let acceleration = (-c.stiffness * displacement - c.damping * self.velocity) / c.mass;
        self.velocity = self.velocity + acceleration * h;
        self.position = self.position + self.velocity * h;
    }
}

/// Whether a step carried the displacement from one side of zero to the other.
fn crossed<F: Float>(before: F, after: F) -> bool {
    let zero = F::zero();
    (before < zero && after > zero) || (before > zero && after < zero)
}

impl<F: Float, O: UpdateObserver> fmt::Debug for Spring1D<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spring1D")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("to_value", &self.config.to_value)
            .field("status", &self.status)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

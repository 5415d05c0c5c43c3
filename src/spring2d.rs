//! Two independent axis springs driven toward one planar target.
//!
//! There is no coupled 2D physics: each axis integrates and settles on its
//! own. Only the target is set jointly, and the aggregate predicates are
//! asymmetric: at rest needs both axes settled, animating needs either axis
//! running.

use core::fmt;

use crate::clock::Clock;
use crate::config::{SpringConfig, SpringConfigUpdate};
use crate::error::SpringError;
use crate::float::Float;
use crate::observer::{NoOpUpdateObserver, UpdateObserver};
use crate::spring::Spring1D;
use crate::vec::{Position2D, Vec2};

/// A planar spring made of an x-axis and a y-axis [`Spring1D`].
///
/// `O` is notified once per step of the pair, never once per axis.
#[derive(Clone)]
pub struct Spring2D<F: Float, O: UpdateObserver = NoOpUpdateObserver> {
    x_axis: Spring1D<F>,
    y_axis: Spring1D<F>,
    to_position: Position2D<F>,
    observer: O,
}

impl<F: Float> Spring2D<F> {
    /// Build an idle, detached pair starting at `from` and targeting `to`.
    ///
    /// Both axes share `config`; its `from_value` and `to_value` are replaced
    /// by the per-axis components and its `initial_velocity` applies to each
    /// axis.
    pub fn new(
        config: SpringConfig<F>,
        from: Position2D<F>,
        to: Position2D<F>,
    ) -> Result<Self, SpringError> {
        config.validate()?;
        let x_axis = Spring1D::new(config.with_from_value(from.x).with_to_value(to.x))?;
        let y_axis = Spring1D::new(config.with_from_value(from.y).with_to_value(to.y))?;
        Ok(Spring2D {
            x_axis,
            y_axis,
            to_position: to,
            observer: NoOpUpdateObserver,
        })
    }

    /// A pair resting at `position` until retargeted.
    pub fn at(config: SpringConfig<F>, position: Position2D<F>) -> Result<Self, SpringError> {
        Self::new(config.with_initial_velocity(F::zero()), position, position)
    }
}

impl<F: Float, O: UpdateObserver> Spring2D<F, O> {
    /// Replace the update observer.
    pub fn with_observer<P: UpdateObserver>(self, observer: P) -> Spring2D<F, P> {
        Spring2D {
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            to_position: self.to_position,
            observer,
        }
    }

    pub fn observer(&self) -> &O { &self.observer }
    pub fn observer_mut(&mut self) -> &mut O { &mut self.observer }

    pub fn x_axis(&self) -> &Spring1D<F> { &self.x_axis }
    pub fn y_axis(&self) -> &Spring1D<F> { &self.y_axis }

    pub fn current_position(&self) -> Position2D<F> {
        Vec2::new(self.x_axis.current_value(), self.y_axis.current_value())
    }

    /// Per-axis velocity.
    pub fn velocity(&self) -> Vec2<F> {
        Vec2::new(self.x_axis.current_velocity(), self.y_axis.current_velocity())
    }

    /// Speed: the Euclidean norm of the per-axis velocities.
    pub fn current_velocity(&self) -> F {
        self.velocity().length()
    }

    /// Both axes settled.
    pub fn is_at_rest(&self) -> bool {
        self.x_axis.is_at_rest() && self.y_axis.is_at_rest()
    }

    /// At least one axis still running.
    pub fn is_animating(&self) -> bool {
        self.x_axis.is_animating() || self.y_axis.is_animating()
    }

    pub fn is_attached(&self) -> bool {
        self.x_axis.is_attached()
    }

    /// The last target set, as given (not re-derived from the axes).
    pub fn to_position(&self) -> Position2D<F> {
        self.to_position
    }

    /// Retarget both axes. Each keeps its position and velocity and resumes
    /// on its own if attached.
    pub fn set_to_position(&mut self, to: Position2D<F>) {
        self.to_position = to;
        self.x_axis.set_to_value(to.x);
        self.y_axis.set_to_value(to.y);
    }

    pub fn start(&mut self) {
        self.x_axis.start();
        self.y_axis.start();
    }

    pub fn start_at(&mut self, now_ms: F) {
        self.x_axis.start_at(now_ms);
        self.y_axis.start_at(now_ms);
    }

    pub fn stop(&mut self) {
        self.x_axis.stop();
        self.y_axis.stop();
    }

    pub fn attach(&mut self) {
        self.x_axis.attach();
        self.y_axis.attach();
    }

    pub fn detach(&mut self) {
        self.x_axis.detach();
        self.y_axis.detach();
    }

    /// Reconfigure both axes. Validated once up front, so either both axes
    /// change or neither does.
    pub fn apply(&mut self, update: SpringConfigUpdate<F>) -> Result<(), SpringError> {
        self.x_axis.config().merged(&update)?;
        self.x_axis.apply(update)?;
        self.y_axis.apply(update)
    }

    /// Advance both axes by a clock reading, then notify once if either
    /// stepped.
    pub fn tick(&mut self, now_ms: F) -> bool {
        let x = self.x_axis.tick(now_ms);
        let y = self.y_axis.tick(now_ms);
        self.finish_step(x || y)
    }

    /// [`tick`](Self::tick) with a reading from `clock`.
    pub fn tick_with<C: Clock<F>>(&mut self, clock: &C) -> bool {
        self.tick(clock.now_ms())
    }

    /// Advance both axes by `dt_ms`, then notify once if either stepped.
    pub fn step(&mut self, dt_ms: F) -> bool {
        let x = self.x_axis.step(dt_ms);
        let y = self.y_axis.step(dt_ms);
        self.finish_step(x || y)
    }

    fn finish_step(&mut self, stepped: bool) -> bool {
        if stepped {
            self.observer.on_update();
        }
        stepped
    }
}

impl<F: Float, O: UpdateObserver> fmt::Debug for Spring2D<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spring2D")
            .field("x_axis", &self.x_axis)
            .field("y_axis", &self.y_axis)
            .field("to_position", &self.to_position)
            .finish_non_exhaustive()
    }
}

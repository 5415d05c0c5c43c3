//! Spring configuration: physical parameters, rest thresholds and targets.

use crate::error::SpringError;
use crate::float::Float;

/// Configuration for a spring.
///
/// `from_value` and `initial_velocity` only matter when a spring is built;
/// everything else may change later through [`SpringConfigUpdate`] or the
/// retarget setter.
///
/// # Builder Pattern
/// ```
/// use recoil::SpringConfig;
///
/// let config: SpringConfig<f32> = SpringConfig::new()
///     .with_stiffness(210.0)
///     .with_damping(20.0)
///     .with_from_value(100.0)
///     .with_to_value(0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SpringConfig<F: Float> {
    /// Mass of the simulated body. Must be positive. Default: 1.
    pub mass: F,
    /// Restoring force per unit of displacement. Must be positive. Default: 100.
    pub stiffness: F,
    /// Drag per unit of velocity. Must be non-negative. Default: 10.
    pub damping: F,
    /// Velocity at construction, in units per second. Default: 0.
    pub initial_velocity: F,
    /// Settle immediately instead of crossing the target. Default: false.
    ///
    /// The snap happens on the first step whose displacement changes sign,
    /// whatever the damping; an underdamped spring loses its overshoot
    /// entirely rather than only when the overshoot would be negligible.
    pub overshoot_clamping: bool,
    /// `|position - to_value|` at or below this counts toward rest. Default: 0.001.
    pub rest_displacement_threshold: F,
    /// `|velocity|` at or below this counts toward rest. Default: 0.001.
    pub rest_velocity_threshold: F,
    /// Position at construction. Default: 0.
    pub from_value: F,
    /// Target position. Default: 0.
    pub to_value: F,
}

impl<F: Float> SpringConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SpringConfig {
            mass: F::one(),
            stiffness: F::from_f32(100.0),
            damping: F::from_f32(10.0),
            initial_velocity: F::zero(),
            overshoot_clamping: false,
            rest_displacement_threshold: F::from_f32(0.001),
            rest_velocity_threshold: F::from_f32(0.001),
            from_value: F::zero(),
            to_value: F::zero(),
        }
    }

    fn preset(stiffness: f32, damping: f32) -> Self {
        Self::new()
            .with_stiffness(F::from_f32(stiffness))
            .with_damping(F::from_f32(damping))
    }

    /// Balanced motion with a hint of bounce (stiffness 170, damping 26).
    pub fn default_motion() -> Self { Self::preset(170.0, 26.0) }

    /// Soft and smooth (stiffness 120, damping 14).
    pub fn gentle() -> Self { Self::preset(120.0, 14.0) }

    /// Visible oscillation around the target (stiffness 180, damping 12).
    pub fn wobbly() -> Self { Self::preset(180.0, 12.0) }

    /// Snappy, barely overshoots (stiffness 210, damping 20).
    pub fn stiff() -> Self { Self::preset(210.0, 20.0) }

    /// Heavily damped (stiffness 280, damping 60).
    pub fn slow() -> Self { Self::preset(280.0, 60.0) }

    /// Overdamped crawl (stiffness 280, damping 120).
    pub fn molasses() -> Self { Self::preset(280.0, 120.0) }

    /// Set the mass.
    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    /// Set the stiffness.
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the velocity applied at construction.
    pub fn with_initial_velocity(mut self, velocity: F) -> Self {
        self.initial_velocity = velocity;
        self
    }

    /// Enable or disable overshoot clamping.
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Set the rest displacement threshold.
    pub fn with_rest_displacement_threshold(mut self, threshold: F) -> Self {
        self.rest_displacement_threshold = threshold;
        self
    }

    /// Set the rest velocity threshold.
    pub fn with_rest_velocity_threshold(mut self, threshold: F) -> Self {
        self.rest_velocity_threshold = threshold;
        self
    }

    /// Set the starting position.
    pub fn with_from_value(mut self, value: F) -> Self {
        self.from_value = value;
        self
    }

    /// Set the target.
    pub fn with_to_value(mut self, value: F) -> Self {
        self.to_value = value;
        self
    }

    /// Check the physical invariants. Nothing is clamped or corrected.
    pub fn validate(&self) -> Result<(), SpringError> {
        let zero = F::zero();
        if !(self.mass > zero && self.mass.is_finite()) {
            return Err(SpringError::InvalidMass(self.mass.to_f64()));
        }
        if !(self.stiffness > zero && self.stiffness.is_finite()) {
            return Err(SpringError::InvalidStiffness(self.stiffness.to_f64()));
        }
        if !(self.damping >= zero && self.damping.is_finite()) {
            return Err(SpringError::InvalidDamping(self.damping.to_f64()));
        }
        if !(self.rest_displacement_threshold >= zero) {
            return Err(SpringError::InvalidRestDisplacementThreshold(
                self.rest_displacement_threshold.to_f64(),
            ));
        }
        if !(self.rest_velocity_threshold >= zero) {
            return Err(SpringError::InvalidRestVelocityThreshold(
                self.rest_velocity_threshold.to_f64(),
            ));
        }
        Ok(())
    }

    /// Merge `update` onto a copy of this config and validate the result.
    ///
    /// `self` is left untouched; callers commit the returned value.
    pub fn merged(&self, update: &SpringConfigUpdate<F>) -> Result<Self, SpringError> {
        let mut merged = *self;
        if let Some(mass) = update.mass {
            merged.mass = mass;
        }
        if let Some(stiffness) = update.stiffness {
            merged.stiffness = stiffness;
        }
        if let Some(damping) = update.damping {
            merged.damping = damping;
        }
        if let Some(clamp) = update.overshoot_clamping {
            merged.overshoot_clamping = clamp;
        }
        if let Some(threshold) = update.rest_displacement_threshold {
            merged.rest_displacement_threshold = threshold;
        }
        if let Some(threshold) = update.rest_velocity_threshold {
            merged.rest_velocity_threshold = threshold;
        }
        merged.validate()?;
        Ok(merged)
    }
}

impl<F: Float> Default for SpringConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial reconfiguration of a live spring.
///
/// Fields left as `None` keep their current value. Position, velocity and
/// target are never touched; retarget through `set_to_value` instead.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SpringConfigUpdate<F: Float> {
    pub mass: Option<F>,
    pub stiffness: Option<F>,
    pub damping: Option<F>,
    pub overshoot_clamping: Option<bool>,
    pub rest_displacement_threshold: Option<F>,
    pub rest_velocity_threshold: Option<F>,
}

impl<F: Float> SpringConfigUpdate<F> {
    /// An update that changes nothing.
    pub fn new() -> Self {
        SpringConfigUpdate {
            mass: None,
            stiffness: None,
            damping: None,
            overshoot_clamping: None,
            rest_displacement_threshold: None,
            rest_velocity_threshold: None,
        }
    }

    pub fn mass(mut self, mass: F) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    pub fn damping(mut self, damping: F) -> Self {
        self.damping = Some(damping);
        self
    }

    pub fn overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = Some(clamp);
        self
    }

    pub fn rest_displacement_threshold(mut self, threshold: F) -> Self {
        self.rest_displacement_threshold = Some(threshold);
        self
    }

    pub fn rest_velocity_threshold(mut self, threshold: F) -> Self {
        self.rest_velocity_threshold = Some(threshold);
        self
    }
}

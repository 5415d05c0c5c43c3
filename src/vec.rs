//! Planar vector type shared by the two-axis spring.

use crate::float::Float;

/// 2D vector: a position, target or per-axis velocity of a [`Spring2D`](crate::Spring2D).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

/// A point in the plane. Plain value, no identity.
pub type Position2D<F> = Vec2<F>;

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Euclidean length.
    pub fn length(self) -> F {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn zero_has_zero_length() {
        assert_eq!(Vec2::<f64>::zero().length(), 0.0);
    }

    #[test]
    fn length_ignores_sign() {
        let v: Position2D<f64> = Vec2::new(-6.0, 8.0);
        assert_eq!(v.length(), 10.0);
    }
}

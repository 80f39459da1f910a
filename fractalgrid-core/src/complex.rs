//! Double-precision complex numbers for escape-time iteration.
//!
//! Only the handful of operations the quadratic recurrence needs are provided.
//! Components are plain `f64` fields so evaluators can split them into
//! separate real/imaginary arrays without conversion.

use serde::{Deserialize, Serialize};

/// Escape radius squared. `|z| > 2` is tested as `|z|² > 4`.
pub const BAILOUT_RADIUS_SQ: f64 = 4.0;

/// A point in the complex plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplexPoint {
    pub re: f64,
    pub im: f64,
}

impl ComplexPoint {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// True when both components are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Magnitude squared.
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Complex square: `(a+bi)² = (a²-b²) + 2abi`.
    #[inline]
    pub fn square(&self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    /// One step of the recurrence: `z² + c`.
    #[inline]
    pub fn square_add(&self, c: &Self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im + c.re,
            im: 2.0 * self.re * self.im + c.im,
        }
    }

    /// True when the magnitude exceeds the bailout radius of 2.
    #[inline]
    pub fn escaped(&self) -> bool {
        self.norm_sq() > BAILOUT_RADIUS_SQ
    }
}

impl From<(f64, f64)> for ComplexPoint {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

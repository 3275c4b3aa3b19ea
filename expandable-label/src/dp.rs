//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type, the length unit used by every
//! geometric quantity of the label: the configured width, font sizes, line
//! heights, the toggle's side length and its insets.
//!
//! ## Relationship with physical pixels
//!
//! The label itself never deals with physical pixels. Only the text engine
//! converts to pixels, using the scale factor it was created with:
//!
//! ```
//! use expandable_label::Dp;
//!
//! let width = Dp(300.0);
//! assert_eq!(width.to_pixels_f32(2.0), 600.0);
//! assert_eq!(Dp::from_pixels_f32(600.0, 2.0), width);
//! ```

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Density-independent pixels (dp) for UI geometry.
///
/// `Dp` wraps a single `f64`. Fractional values are meaningful: the toggle
/// insets are an eighth of a line height, so a 20dp line yields 2.5dp insets.
///
/// ```
/// use expandable_label::Dp;
///
/// let line_height = Dp(20.0);
/// assert_eq!(line_height / 8.0, Dp(2.5));
/// assert_eq!(line_height * 3.0, Dp(60.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// A constant representing zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to physical pixels as an `f32`, applying
    /// `scale_factor` (physical pixels per dp).
    pub fn to_pixels_f32(self, scale_factor: f64) -> f32 {
        (self.0 * scale_factor) as f32
    }

    /// Creates a `Dp` value from physical pixels, the inverse of
    /// [`to_pixels_f32`](Self::to_pixels_f32).
    pub fn from_pixels_f32(value: f32, scale_factor: f64) -> Self {
        Dp(f64::from(value) / scale_factor)
    }

    /// Returns the raw `f64` value.
    pub const fn to_f64(self) -> f64 {
        self.0
    }

    /// Returns `true` if the value is exactly zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns `true` if the value is finite and strictly positive.
    pub fn is_positive_finite(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        Dp(self.0.max(other.0))
    }

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Dp(self.0.min(other.0))
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl Add for Dp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl AddAssign for Dp {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Dp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl SubAssign for Dp {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Dp {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Dp(-self.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Dp(self.0 / rhs)
    }
}

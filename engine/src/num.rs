//! Angle newtypes and float comparison helpers.

use std::f32::consts::PI;

pub trait ApproxEq {
    type Type;

    fn is_approx_eq(&self, rhs: Self::Type, epsilon: Self::Type) -> bool;
}

impl ApproxEq for f32 {
    type Type = f32;

    fn is_approx_eq(&self, rhs: f32, epsilon: f32) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

impl ApproxEq for f64 {
    type Type = f64;

    fn is_approx_eq(&self, rhs: f64, epsilon: f64) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

/// An angle in radians.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Mul,
    derive_more::MulAssign,
    derive_more::Div,
    derive_more::DivAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
#[must_use]
#[repr(transparent)]
pub struct Radians(f32);

impl Radians {
    /// Creates `Radians` without normalizing the value.
    #[inline]
    pub const fn new_unchecked(value: f32) -> Self {
        Self(value)
    }

    /// Returns the value as a primitive type.
    #[inline]
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<Degrees> for Radians {
    /// Converts `Degrees` into `Radians` as `degrees / 180 * π`.
    fn from(degrees: Degrees) -> Self {
        Radians(degrees.0 / 180.0 * PI)
    }
}

impl From<&Degrees> for Radians {
    /// Converts `&Degrees` into `Radians`.
    fn from(degrees: &Degrees) -> Self {
        Radians::from(*degrees)
    }
}

/// An angle in degrees.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Mul,
    derive_more::MulAssign,
    derive_more::Div,
    derive_more::DivAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
#[must_use]
#[repr(transparent)]
pub struct Degrees(f32);

impl Degrees {
    /// Creates `Degrees` without normalizing the value.
    #[inline]
    pub const fn new_unchecked(value: f32) -> Self {
        Self(value)
    }

    /// Returns the value as a primitive type.
    #[inline]
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<Radians> for Degrees {
    /// Converts `Radians` into `Degrees`.
    fn from(radians: Radians) -> Self {
        Degrees(radians.0.to_degrees())
    }
}

impl From<&Radians> for Degrees {
    /// Converts `&Radians` into `Degrees`.
    fn from(radians: &Radians) -> Self {
        Degrees::from(*radians)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn degrees_to_radians() {
        assert_eq!(Radians::from(Degrees::from(90.0)).get(), FRAC_PI_2);
        assert_eq!(Radians::from(Degrees::from(180.0)).get(), PI);
        // Conversion is raw arithmetic: out-of-range angles pass through.
        assert_eq!(Radians::from(Degrees::from(360.0)).get(), 2.0 * PI);
    }

    #[test]
    fn radians_to_degrees() {
        let degrees = Degrees::from(Radians::from(PI));
        assert!(degrees.get().is_approx_eq(180.0, f32::EPSILON));
    }
}

//! Angular units. Formulas in this crate work only with [`Radians`]; [`Degrees`] exist to make
//! conversion at the API boundary explicit.

use std::f64::consts::{PI, TAU};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

/// Angle in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Radians(pub f64);

/// Angle in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Degrees(pub f64);

impl Radians {
    /// Zero angle.
    pub const ZERO: Self = Self(0.0);
    /// Half turn.
    pub const PI: Self = Self(PI);

    /// Raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts to degrees.
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// Brings the angle into `[0, 2π)`.
    pub fn normalized(self) -> Self {
        let wrapped = self.0.rem_euclid(TAU);
        // rem_euclid can return exactly TAU for tiny negative inputs
        if wrapped >= TAU {
            Self(0.0)
        } else {
            Self(wrapped)
        }
    }

    /// Brings the angle into `[-π, π]`. Used for longitudes.
    pub fn wrapped_signed(self) -> Self {
        if (-PI..=PI).contains(&self.0) {
            return self;
        }

        let wrapped = (self.0 + PI).rem_euclid(TAU) - PI;
        Self(wrapped)
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Sine.
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Cosine.
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Whether the value is neither NaN nor infinite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Degrees {
    /// Raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts to radians.
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    /// Builds an angle from degree, minute and second components. The sign of the result is
    /// the sign of `degrees`; `minutes` and `seconds` are added to its magnitude.
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Self {
        let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
        if degrees.is_sign_negative() {
            Self(-magnitude)
        } else {
            Self(magnitude)
        }
    }
}

impl From<Degrees> for Radians {
    fn from(value: Degrees) -> Self {
        value.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(value: Radians) -> Self {
        value.to_degrees()
    }
}

impl Display for Radians {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

impl Display for Degrees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

macro_rules! impl_unit_ops {
    ($t:ident) => {
        impl Add for $t {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $t {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $t {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl RelativeEq for $t {
            fn default_max_relative() -> f64 {
                f64::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

impl_unit_ops!(Radians);
impl_unit_ops!(Degrees);

use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::FloatCompare;

/// An angle stored in radians. Arithmetic does not wrap, call `normalized`
/// to bring the value back into (-PI, PI].
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub fn zero() -> Self {
        Self { radians: 0.0 }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Orientation of the vector, measured counter clockwise from +x
    pub fn from_vector(vector: &Vector2<f64>) -> Self {
        Self::from_radians(vector.y.atan2(vector.x))
    }

    pub fn to_radians(self) -> f64 {
        self.radians
    }

    pub fn to_degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn to_unit_vector(self) -> Vector2<f64> {
        let (sin, cos) = self.radians.sin_cos();
        Vector2::new(cos, sin)
    }

    pub fn abs(self) -> Self {
        Self::from_radians(self.radians.abs())
    }

    /// Wraps the angle into (-PI, PI]
    pub fn normalized(self) -> Self {
        if self.radians > -PI && self.radians <= PI {
            return self;
        }
        let mut radians = self.radians.rem_euclid(2.0 * PI);
        if radians > PI {
            radians -= 2.0 * PI;
        }
        Self { radians }
    }

    /// Signed smallest rotation from `other` to `self`
    pub fn diff(self, other: Self) -> Self {
        (self - other).normalized()
    }

    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    pub fn approx_eq(self, other: Self) -> bool {
        self.radians.approx_eq(other.radians)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_radians(self.radians / rhs)
    }
}

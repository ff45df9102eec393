use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use bytemuck_derive::{Pod, Zeroable};
use fix64::{Fix64, FixResult};

use crate::vec2::Vec2;

/// A 3-component fixed-point vector.
///
/// Serialized layout is `(x, y, z)` as three raw `i64` values, in that
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Vec3 {
    pub x: Fix64,
    pub y: Fix64,
    pub z: Fix64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(Fix64::ZERO, Fix64::ZERO, Fix64::ZERO);
    pub const ONE: Vec3 = Vec3::new(Fix64::ONE, Fix64::ONE, Fix64::ONE);
    pub const UP: Vec3 = Vec3::new(Fix64::ZERO, Fix64::ONE, Fix64::ZERO);
    pub const DOWN: Vec3 = Vec3::new(Fix64::ZERO, Fix64::from_i32(-1), Fix64::ZERO);
    pub const LEFT: Vec3 = Vec3::new(Fix64::from_i32(-1), Fix64::ZERO, Fix64::ZERO);
    pub const RIGHT: Vec3 = Vec3::new(Fix64::ONE, Fix64::ZERO, Fix64::ZERO);
    pub const FORWARD: Vec3 = Vec3::new(Fix64::ZERO, Fix64::ZERO, Fix64::ONE);
    pub const BACK: Vec3 = Vec3::new(Fix64::ZERO, Fix64::ZERO, Fix64::from_i32(-1));

    pub const fn new(x: Fix64, y: Fix64, z: Fix64) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// The `(x, y)` swizzle.
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`.
    pub fn magnitude(self) -> FixResult<Fix64> {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit-length vector with the same direction. The zero vector
    /// normalizes to itself.
    pub fn normalize(self) -> FixResult<Vec3> {
        let m = self.magnitude()?;
        if m == Fix64::ZERO {
            return Ok(Vec3::ZERO);
        }
        Ok(Vec3::new(
            self.x.checked_div(m)?,
            self.y.checked_div(m)?,
            self.z.checked_div(m)?,
        ))
    }

    /// Componentwise division that reports a zero component instead of
    /// panicking.
    pub fn checked_div(self, rhs: Vec3) -> FixResult<Vec3> {
        Ok(Vec3::new(
            self.x.checked_div(rhs.x)?,
            self.y.checked_div(rhs.y)?,
            self.z.checked_div(rhs.z)?,
        ))
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Vec3 {
    type Output = Vec3;

    /// # Panics
    ///
    /// Panics when a component of `rhs` is zero, like the scalar operator.
    fn div(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Add<Fix64> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Fix64) -> Vec3 {
        Vec3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub<Fix64> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Fix64) -> Vec3 {
        Vec3::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul<Fix64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Fix64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<Fix64> for Vec3 {
    type Output = Vec3;

    /// # Panics
    ///
    /// Panics when `rhs` is zero, like the scalar operator.
    fn div(self, rhs: Fix64) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

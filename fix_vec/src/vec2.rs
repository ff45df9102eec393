use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use bytemuck_derive::{Pod, Zeroable};
use fix64::{Fix64, FixResult};

/// A 2-component fixed-point vector.
///
/// Serialized layout is `(x, y)` as two raw `i64` values, in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Vec2 {
    pub x: Fix64,
    pub y: Fix64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(Fix64::ZERO, Fix64::ZERO);
    pub const ONE: Vec2 = Vec2::new(Fix64::ONE, Fix64::ONE);
    pub const UP: Vec2 = Vec2::new(Fix64::ZERO, Fix64::ONE);
    pub const DOWN: Vec2 = Vec2::new(Fix64::ZERO, Fix64::from_i32(-1));
    pub const LEFT: Vec2 = Vec2::new(Fix64::from_i32(-1), Fix64::ZERO);
    pub const RIGHT: Vec2 = Vec2::new(Fix64::ONE, Fix64::ZERO);

    pub const fn new(x: Fix64, y: Fix64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Euclidean length, `sqrt(x² + y²)`.
    ///
    /// The squares are saturating, so the result is defined for every
    /// vector; the `Result` surface follows the scalar square root.
    pub fn magnitude(self) -> FixResult<Fix64> {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit-length vector with the same direction. The zero vector
    /// normalizes to itself.
    pub fn normalize(self) -> FixResult<Vec2> {
        let m = self.magnitude()?;
        if m == Fix64::ZERO {
            return Ok(Vec2::ZERO);
        }
        Ok(Vec2::new(self.x.checked_div(m)?, self.y.checked_div(m)?))
    }

    /// Componentwise division that reports a zero component instead of
    /// panicking.
    pub fn checked_div(self, rhs: Vec2) -> FixResult<Vec2> {
        Ok(Vec2::new(
            self.x.checked_div(rhs.x)?,
            self.y.checked_div(rhs.y)?,
        ))
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Vec2 {
    type Output = Vec2;

    /// # Panics
    ///
    /// Panics when a component of `rhs` is zero, like the scalar operator.
    fn div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Add<Fix64> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Fix64) -> Vec2 {
        Vec2::new(self.x + rhs, self.y + rhs)
    }
}

impl Sub<Fix64> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Fix64) -> Vec2 {
        Vec2::new(self.x - rhs, self.y - rhs)
    }
}

impl Mul<Fix64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Fix64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<Fix64> for Vec2 {
    type Output = Vec2;

    /// # Panics
    ///
    /// Panics when `rhs` is zero, like the scalar operator.
    fn div(self, rhs: Fix64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

//! # ticks
//!
//! A simulation tick counter: a thin wrapper over a signed 32-bit integer
//! with conventional integer arithmetic.
//!
//! Unlike the fixed-point scalar this type does **not** saturate: its
//! arithmetic mirrors native `i32` semantics exactly, including the panics
//! on overflow in debug builds and on division by zero. Ordering is the
//! conventional total order on the wrapped integer.
//!
//! ## Examples
//!
//! ```
//! use ticks::Ticks;
//!
//! let now = Ticks::from(120);
//! let step = Ticks::from(2);
//! assert_eq!(now + step, Ticks::from(122));
//! assert!(now >= step);
//! assert_eq!((now / step).value(), 60);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use bytemuck_derive::{Pod, Zeroable};

/// A simulation tick count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Ticks(i32);

impl Ticks {
    pub const ZERO: Ticks = Ticks(0);

    pub const fn new(value: i32) -> Ticks {
        Ticks(value)
    }

    /// The wrapped tick count.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Ticks {
    fn from(value: i32) -> Ticks {
        Ticks(value)
    }
}

impl From<Ticks> for i32 {
    fn from(ticks: Ticks) -> i32 {
        ticks.0
    }
}

impl Add for Ticks {
    type Output = Ticks;

    fn add(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 + rhs.0)
    }
}

impl Sub for Ticks {
    type Output = Ticks;

    fn sub(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 - rhs.0)
    }
}

impl Mul for Ticks {
    type Output = Ticks;

    fn mul(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 * rhs.0)
    }
}

impl Div for Ticks {
    type Output = Ticks;

    fn div(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 / rhs.0)
    }
}

impl Rem for Ticks {
    type Output = Ticks;

    fn rem(self, rhs: Ticks) -> Ticks {
        Ticks(self.0 % rhs.0)
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ticks({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_mirrors_i32() {
        let a = Ticks::from(7);
        let b = Ticks::from(3);
        assert_eq!((a + b).value(), 10);
        assert_eq!((a - b).value(), 4);
        assert_eq!((a * b).value(), 21);
        assert_eq!((a / b).value(), 2);
        assert_eq!((a % b).value(), 1);
    }

    #[test]
    fn ordering_is_conventional() {
        let small = Ticks::from(-5);
        let big = Ticks::from(5);
        assert!(small < big);
        assert!(big > small);
        assert!(big >= big);
        assert!(big >= small);
        assert!(small <= big);
        assert!(small <= small);
        assert_ne!(small, big);
    }

    #[test]
    fn conversion_roundtrip() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(i32::from(Ticks::from(v)), v);
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(Ticks::from(42).to_string(), "ticks(42)");
    }

    #[test]
    fn sorts_like_i32() {
        let mut ticks: Vec<Ticks> = [3, -1, 0, i32::MAX, i32::MIN, 7]
            .into_iter()
            .map(Ticks::from)
            .collect();
        ticks.sort();
        let values: Vec<i32> = ticks.into_iter().map(i32::from).collect();
        assert_eq!(values, vec![i32::MIN, -1, 0, 3, 7, i32::MAX]);
    }
}

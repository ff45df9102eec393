use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use bytemuck::{Pod, Zeroable};

use crate::error::{Fix64Error, FixResult};

pub(crate) const FRACTIONAL_BITS: u32 = 32;
pub(crate) const ONE_RAW: i64 = 1 << FRACTIONAL_BITS;
pub(crate) const FRAC_MASK: i64 = 0xFFFF_FFFF;

// Baked-in raw constants, identical on every platform and never computed
// at runtime.
pub(crate) const PI_RAW: i64 = 0x3243F6A88;
pub(crate) const PI_OVER_2_RAW: i64 = 0x1921FB544;
pub(crate) const PI_TIMES_2_RAW: i64 = 0x6487ED511;
pub(crate) const LN2_RAW: i64 = 0xB17217F7;
pub(crate) const LOG2_MAX_RAW: i64 = 0x1F_0000_0000;

/// A deterministic Q32.32 fixed-point number.
///
/// `Fix64` wraps a single `i64` holding the value scaled by `2^32`:
/// 32 integer bits, 32 fractional bits, two's-complement sign. All
/// arithmetic is integer arithmetic, so results are bit-identical on every
/// platform, compiler, and architecture. That is the property floating
/// point cannot give lockstep simulations and replay systems.
///
/// Values are immutable: every operation returns a new value. Overflow
/// saturates to [`Fix64::MAX_VALUE`] / [`Fix64::MIN_VALUE`] (there is no
/// NaN or infinity), and contract violations such as division by zero
/// surface as [`Fix64Error`].
///
/// # Examples
///
/// ```
/// use fix64::Fix64;
///
/// let a = Fix64::from_i32(3);
/// let b = Fix64::from_f64(0.5);
/// assert_eq!((a * b).to_f64(), 1.5);
///
/// // The raw encoding round-trips exactly.
/// let raw = (a * b).raw_value();
/// assert_eq!(Fix64::from_raw(raw), a * b);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fix64 {
    raw: i64,
}

// Safety: Fix64 is just a wrapper around i64
unsafe impl Zeroable for Fix64 {}
unsafe impl Pod for Fix64 {}

impl Fix64 {
    /// The additive identity, `0.0`.
    pub const ZERO: Fix64 = Fix64 { raw: 0 };

    /// The multiplicative identity, `1.0`.
    pub const ONE: Fix64 = Fix64 { raw: ONE_RAW };

    /// The largest representable value, `2^31 - 2^-32`.
    pub const MAX_VALUE: Fix64 = Fix64 { raw: i64::MAX };

    /// The smallest representable value, `-2^31`.
    pub const MIN_VALUE: Fix64 = Fix64 { raw: i64::MIN };

    /// The smallest representable magnitude, `2^-32`.
    pub const PRECISION: Fix64 = Fix64 { raw: 1 };

    /// π.
    pub const PI: Fix64 = Fix64 { raw: PI_RAW };

    /// π/2.
    pub const PI_OVER_2: Fix64 = Fix64 { raw: PI_OVER_2_RAW };

    /// 2π.
    pub const PI_TIMES_2: Fix64 = Fix64 { raw: PI_TIMES_2_RAW };

    /// Constructs a value directly from its raw Q32.32 encoding, with no
    /// scaling. This is the canonical bit-exact constructor; use it for
    /// serialization and cross-implementation verification.
    ///
    /// # Examples
    ///
    /// ```
    /// use fix64::Fix64;
    ///
    /// // Raw 2^32 represents 1.0.
    /// assert_eq!(Fix64::from_raw(1 << 32), Fix64::ONE);
    /// ```
    pub const fn from_raw(raw: i64) -> Fix64 {
        Fix64 { raw }
    }

    /// Returns the raw Q32.32 encoding.
    pub const fn raw_value(self) -> i64 {
        self.raw
    }

    /// Converts an `i64` by scaling with `2^32`.
    ///
    /// Integers whose value does not fit the 32 integer bits **wrap**
    /// (two's-complement truncation of the high bits) rather than saturate.
    /// This is the one place where the type wraps instead of clamping; the
    /// float conversions below clamp.
    ///
    /// # Examples
    ///
    /// ```
    /// use fix64::Fix64;
    ///
    /// assert_eq!(Fix64::from_i64(5).to_i64(), 5);
    /// // Out of range: only the low 32 integer bits survive.
    /// assert_eq!(Fix64::from_i64(i32::MAX as i64 + 1).to_i64(), i32::MIN as i64);
    /// ```
    pub const fn from_i64(value: i64) -> Fix64 {
        Fix64 {
            raw: value.wrapping_mul(ONE_RAW),
        }
    }

    /// Converts an `i32` by scaling with `2^32`. Always exact.
    pub const fn from_i32(value: i32) -> Fix64 {
        Fix64::from_i64(value as i64)
    }

    /// Returns the integer part, dropping the fractional bits.
    ///
    /// For a value produced by a wrapped [`Fix64::from_i64`] conversion this
    /// reproduces the wrapped integer exactly.
    pub const fn to_i64(self) -> i64 {
        self.raw >> FRACTIONAL_BITS
    }

    /// Returns the integer part truncated to `i32`.
    pub const fn to_i32(self) -> i32 {
        (self.raw >> FRACTIONAL_BITS) as i32
    }

    /// Converts an `f64` by scaling with `2^32` and rounding to the nearest
    /// raw value, **clamping** to `[MIN_VALUE, MAX_VALUE]`.
    ///
    /// Unlike the integer conversions this path saturates instead of
    /// wrapping. NaN converts to zero; the encoding has no NaN, so the
    /// input contract is on the caller. Round-trips are exact only to
    /// within [`Fix64::PRECISION`].
    pub fn from_f64(value: f64) -> Fix64 {
        if value.is_nan() {
            return Fix64::ZERO;
        }
        let scaled = value * ONE_RAW as f64;
        if scaled >= i64::MAX as f64 {
            Fix64::MAX_VALUE
        } else if scaled <= i64::MIN as f64 {
            Fix64::MIN_VALUE
        } else {
            Fix64::from_raw(scaled.round() as i64)
        }
    }

    /// Converts an `f32`, with the same clamp-and-round policy as
    /// [`Fix64::from_f64`].
    pub fn from_f32(value: f32) -> Fix64 {
        Fix64::from_f64(value as f64)
    }

    /// Converts to `f64` as `raw / 2^32`.
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / ONE_RAW as f64
    }

    /// Converts to `f32` via the `f64` path.
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Returns −1, 0 or 1 according to the sign of the value.
    pub const fn signum(self) -> i32 {
        if self.raw > 0 {
            1
        } else if self.raw < 0 {
            -1
        } else {
            0
        }
    }

    /// Saturating absolute value; `abs(MIN_VALUE)` is `MAX_VALUE`.
    pub const fn abs(self) -> Fix64 {
        if self.raw == i64::MIN {
            return Fix64::MAX_VALUE;
        }
        let mask = self.raw >> 63;
        Fix64 {
            raw: (self.raw + mask) ^ mask,
        }
    }

    /// Branch-free absolute value for speed-critical paths.
    ///
    /// Skips the saturation check: `fast_abs(MIN_VALUE)` returns
    /// `MIN_VALUE` unchanged (two's-complement negation overflows onto
    /// itself). Callers who may hold `MIN_VALUE` must use [`Fix64::abs`].
    pub const fn fast_abs(self) -> Fix64 {
        let mask = self.raw >> 63;
        Fix64 {
            raw: self.raw.wrapping_add(mask) ^ mask,
        }
    }

    /// Largest integer value less than or equal to `self`.
    ///
    /// Clears the fractional bits, which for negative values moves toward
    /// negative infinity.
    pub const fn floor(self) -> Fix64 {
        Fix64 {
            raw: self.raw & !FRAC_MASK,
        }
    }

    /// Smallest integer value greater than or equal to `self`.
    ///
    /// `MAX_VALUE` maps to itself.
    pub fn ceil(self) -> Fix64 {
        if self.raw & FRAC_MASK != 0 {
            self.floor() + Fix64::ONE
        } else {
            self
        }
    }

    /// Rounds to the nearest integer value, ties to the nearest even
    /// integer. `MAX_VALUE` rounds to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fix64::Fix64;
    ///
    /// assert_eq!(Fix64::from_f64(4.5).round().to_i64(), 4);
    /// assert_eq!(Fix64::from_f64(5.5).round().to_i64(), 6);
    /// assert_eq!(Fix64::from_f64(-4.5).round().to_i64(), -4);
    /// ```
    pub fn round(self) -> Fix64 {
        let fractional = self.raw & FRAC_MASK;
        let floored = self.floor();
        if fractional < 0x8000_0000 {
            floored
        } else if fractional > 0x8000_0000 {
            floored + Fix64::ONE
        } else if floored.raw & ONE_RAW == 0 {
            floored
        } else {
            floored + Fix64::ONE
        }
    }

    /// Division that reports a zero divisor instead of panicking.
    ///
    /// The quotient is computed at 96-bit intermediate precision with
    /// round-half-to-even, then saturated to the representable range.
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::DivisionByZero`] when `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fix64::{Fix64, Fix64Error};
    ///
    /// let x = Fix64::from_i32(3);
    /// assert_eq!(x.checked_div(Fix64::from_i32(2))?.to_f64(), 1.5);
    /// assert_eq!(x.checked_div(Fix64::ZERO), Err(Fix64Error::DivisionByZero));
    /// # Ok::<(), fix64::Fix64Error>(())
    /// ```
    pub fn checked_div(self, rhs: Fix64) -> FixResult<Fix64> {
        if rhs.raw == 0 {
            return Err(Fix64Error::DivisionByZero);
        }
        Ok(Fix64::from_raw(div_raw(self.raw, rhs.raw)))
    }

    /// Remainder that reports a zero divisor instead of panicking.
    ///
    /// The result has the sign of the dividend (truncating remainder, not
    /// floored): `a % b == a - trunc(a / b) * b`.
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::DivisionByZero`] when `rhs` is zero.
    pub fn checked_rem(self, rhs: Fix64) -> FixResult<Fix64> {
        if rhs.raw == 0 {
            return Err(Fix64Error::DivisionByZero);
        }
        // MIN % -1 would overflow the negation inside rem; the true
        // remainder there is zero, which wrapping_rem produces.
        Ok(Fix64::from_raw(self.raw.wrapping_rem(rhs.raw)))
    }
}

/// Saturates a 128-bit intermediate back into the raw `i64` domain.
pub(crate) const fn saturate_i128(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

/// Full-width product shifted back down, round-half-to-even on the
/// magnitude, saturating.
pub(crate) fn mul_raw(a: i64, b: i64) -> i64 {
    let product = i128::from(a) * i128::from(b);
    let magnitude = product.unsigned_abs();
    let mut q = magnitude >> FRACTIONAL_BITS;
    let r = magnitude & FRAC_MASK as u128;
    const HALF: u128 = 1 << (FRACTIONAL_BITS - 1);
    if r > HALF || (r == HALF && q & 1 == 1) {
        q += 1;
    }
    let signed = if product < 0 { -(q as i128) } else { q as i128 };
    saturate_i128(signed)
}

/// Widened quotient with round-half-to-even on the magnitude, saturating.
/// The divisor must be non-zero.
pub(crate) fn div_raw(a: i64, b: i64) -> i64 {
    let num = i128::from(a) << FRACTIONAL_BITS;
    let abs_num = num.unsigned_abs();
    let abs_den = i128::from(b).unsigned_abs();
    let mut q = abs_num / abs_den;
    let r = abs_num % abs_den;
    let twice_r = r << 1;
    if twice_r > abs_den || (twice_r == abs_den && q & 1 == 1) {
        q += 1;
    }
    let signed = if (a < 0) != (b < 0) {
        -(q as i128)
    } else {
        q as i128
    };
    saturate_i128(signed)
}

/// Truncating multiply without the saturation/rounding of [`mul_raw`].
/// Used internally where operands are already range-bounded and the
/// cheaper floor semantics are wanted.
pub(crate) fn fast_mul_raw(a: i64, b: i64) -> i64 {
    ((i128::from(a) * i128::from(b)) >> FRACTIONAL_BITS) as i64
}

impl Add for Fix64 {
    type Output = Fix64;

    /// Saturating addition.
    fn add(self, rhs: Fix64) -> Fix64 {
        Fix64 {
            raw: self.raw.saturating_add(rhs.raw),
        }
    }
}

impl Sub for Fix64 {
    type Output = Fix64;

    /// Saturating subtraction.
    fn sub(self, rhs: Fix64) -> Fix64 {
        Fix64 {
            raw: self.raw.saturating_sub(rhs.raw),
        }
    }
}

impl Mul for Fix64 {
    type Output = Fix64;

    /// Saturating multiplication (full 128-bit product, rounded).
    fn mul(self, rhs: Fix64) -> Fix64 {
        Fix64 {
            raw: mul_raw(self.raw, rhs.raw),
        }
    }
}

impl Div for Fix64 {
    type Output = Fix64;

    /// Saturating division.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero, like integer division. Use
    /// [`Fix64::checked_div`] to handle the zero divisor as a value.
    fn div(self, rhs: Fix64) -> Fix64 {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Rem for Fix64 {
    type Output = Fix64;

    /// Truncating remainder; sign follows the dividend.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero. Use [`Fix64::checked_rem`] to handle the
    /// zero divisor as a value.
    fn rem(self, rhs: Fix64) -> Fix64 {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Neg for Fix64 {
    type Output = Fix64;

    /// Saturating negation; `-MIN_VALUE` is `MAX_VALUE`.
    fn neg(self) -> Fix64 {
        Fix64 {
            raw: self.raw.saturating_neg(),
        }
    }
}

impl From<i32> for Fix64 {
    fn from(value: i32) -> Fix64 {
        Fix64::from_i32(value)
    }
}

impl fmt::Display for Fix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

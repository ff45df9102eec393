//! Square root, logarithms and powers.
//!
//! Everything here is computed with integer digit/bit algorithms on the raw
//! encoding. No hardware floating point is involved at any step, so results
//! are bit-identical across platforms.

use crate::error::{Fix64Error, FixResult};
use crate::scalar::{
    fast_mul_raw, Fix64, FRAC_MASK, FRACTIONAL_BITS, LN2_RAW, LOG2_MAX_RAW, ONE_RAW,
};

impl Fix64 {
    /// Square root, accurate to within one unit of [`Fix64::PRECISION`].
    ///
    /// Runs a digit-by-digit (non-restoring) integer square root over the
    /// raw bits in two passes: the first resolves the upper half of the
    /// result, the second extends the remainder to doubled precision for
    /// the low bits, with a final round-up on the last bit.
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::NegativeSqrt`] for negative input.
    ///
    /// # Examples
    ///
    /// ```
    /// use fix64::Fix64;
    ///
    /// assert_eq!(Fix64::from_i32(16).sqrt()?, Fix64::from_i32(4));
    /// assert_eq!(Fix64::ZERO.sqrt()?, Fix64::ZERO);
    /// assert!(Fix64::from_i32(-1).sqrt().is_err());
    /// # Ok::<(), fix64::Fix64Error>(())
    /// ```
    pub fn sqrt(self) -> FixResult<Fix64> {
        if self.raw_value() < 0 {
            return Err(Fix64Error::NegativeSqrt);
        }
        let mut num = self.raw_value() as u64;
        let mut result = 0u64;

        // Start at the second-to-top bit.
        let mut bit = 1u64 << 62;
        while bit > num {
            bit >>= 2;
        }

        // Two passes keep all intermediates inside 64 bits: the first
        // extracts the high half of the root, the second the low half.
        for pass in 0..2 {
            while bit != 0 {
                if num >= result + bit {
                    num -= result + bit;
                    result = (result >> 1) + bit;
                } else {
                    result >>= 1;
                }
                bit >>= 2;
            }
            if pass == 0 {
                if num > (1u64 << FRACTIONAL_BITS) - 1 {
                    // The remainder no longer fits when shifted up, so fold
                    // one result bit in manually before widening.
                    num -= result;
                    num = (num << FRACTIONAL_BITS) - 0x8000_0000;
                    result = (result << FRACTIONAL_BITS) + 0x8000_0000;
                } else {
                    num <<= FRACTIONAL_BITS;
                    result <<= FRACTIONAL_BITS;
                }
                bit = 1u64 << (FRACTIONAL_BITS - 2);
            }
        }
        if num > result {
            result += 1;
        }
        Ok(Fix64::from_raw(result as i64))
    }

    /// Base-2 logarithm, accurate to within four units of
    /// [`Fix64::PRECISION`].
    ///
    /// The integer part of the exponent comes from normalizing the raw
    /// value against the binary point; the fractional bits are produced one
    /// per iteration by repeated squaring of the remaining mantissa
    /// (Turner's binary-logarithm algorithm).
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::NonPositiveLog`] for input ≤ 0.
    pub fn log2(self) -> FixResult<Fix64> {
        if self.raw_value() <= 0 {
            return Err(Fix64Error::NonPositiveLog);
        }

        // Weight of the first fractional exponent bit, one half.
        let mut b = 1i64 << (FRACTIONAL_BITS - 1);
        let mut y = 0i64;

        let mut raw = self.raw_value();
        while raw < ONE_RAW {
            raw <<= 1;
            y -= ONE_RAW;
        }
        while raw >= ONE_RAW << 1 {
            raw >>= 1;
            y += ONE_RAW;
        }

        let mut z = raw;
        for _ in 0..FRACTIONAL_BITS {
            z = fast_mul_raw(z, z);
            if z >= ONE_RAW << 1 {
                z >>= 1;
                y += b;
            }
            b >>= 1;
        }
        Ok(Fix64::from_raw(y))
    }

    /// Natural logarithm, `log2(x) * ln 2` with a baked-in constant for
    /// `ln 2`. Absolute accuracy around 1e-8.
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::NonPositiveLog`] for input ≤ 0.
    pub fn ln(self) -> FixResult<Fix64> {
        Ok(Fix64::from_raw(fast_mul_raw(
            self.log2()?.raw_value(),
            LN2_RAW,
        )))
    }

    /// `2^self`, saturating to [`Fix64::MAX_VALUE`] when the exponent
    /// reaches the 31 representable integer bits; exponents at or below
    /// `-31` collapse to the reciprocal of `MAX_VALUE` (two raw units
    /// above zero). Absolute accuracy around 1e-7.
    ///
    /// The integer part of the exponent becomes a bit shift; the fractional
    /// part is evaluated as an exponential series in `x · ln 2`.
    pub fn pow2(self) -> Fix64 {
        let mut x = self;
        if x.raw_value() == 0 {
            return Fix64::ONE;
        }

        // exp(-x) = 1/exp(x) keeps the series argument positive.
        let neg = x.raw_value() < 0;
        if neg {
            x = -x;
        }

        let two = Fix64::from_i32(2);
        if x == Fix64::ONE {
            return if neg { Fix64::ONE / two } else { two };
        }
        if x >= Fix64::from_raw(LOG2_MAX_RAW) {
            return if neg {
                Fix64::ONE / Fix64::MAX_VALUE
            } else {
                Fix64::MAX_VALUE
            };
        }

        let integer_part = (x.raw_value() >> FRACTIONAL_BITS) as u32;
        let x = Fix64::from_raw(x.raw_value() & FRAC_MASK);

        let mut result = Fix64::ONE;
        let mut term = Fix64::ONE;
        let mut i = 1i64;
        while term.raw_value() != 0 {
            term = Fix64::from_raw(fast_mul_raw(
                fast_mul_raw(x.raw_value(), term.raw_value()),
                LN2_RAW,
            )) / Fix64::from_i64(i);
            result = result + term;
            i += 1;
        }

        let mut result = Fix64::from_raw(result.raw_value() << integer_part);
        if neg {
            result = Fix64::ONE / result;
        }
        result
    }

    /// `self` raised to the power `exp`, via `pow2(exp * log2(self))`.
    ///
    /// Special cases are resolved before the general path:
    /// an exponent of zero yields one for every base, including zero and
    /// negative bases. Absolute precision degrades gracefully as the
    /// exponent or the result grows; callers working with very large
    /// magnitudes should expect looser tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::DivisionByZero`] for a zero base with a
    /// negative exponent, and [`Fix64Error::NegativeBase`] for a negative
    /// base with any non-zero exponent.
    ///
    /// # Examples
    ///
    /// ```
    /// use fix64::Fix64;
    ///
    /// let two = Fix64::from_i32(2);
    /// assert_eq!(two.pow(Fix64::from_i32(10))?.to_i64(), 1024);
    /// assert_eq!(Fix64::from_i32(-3).pow(Fix64::ZERO)?, Fix64::ONE);
    /// # Ok::<(), fix64::Fix64Error>(())
    /// ```
    pub fn pow(self, exp: Fix64) -> FixResult<Fix64> {
        if exp.raw_value() == 0 {
            return Ok(Fix64::ONE);
        }
        if self.raw_value() == 0 {
            if exp.raw_value() < 0 {
                return Err(Fix64Error::DivisionByZero);
            }
            return Ok(Fix64::ZERO);
        }
        if self.raw_value() < 0 {
            return Err(Fix64Error::NegativeBase);
        }
        if self == Fix64::ONE {
            return Ok(Fix64::ONE);
        }
        let log2 = self.log2()?;
        Ok((exp * log2).pow2())
    }
}

//! Trigonometric functions over fixed-point radians.
//!
//! Sine and cosine are table-driven: a read-only lookup table spanning the
//! first quarter period `[0, π/2]` is built once, on first use, and every
//! angle is folded into that range through the usual symmetries
//! (`sin(π−x) = sin(x)`, `sin(−x) = −sin(x)`, `cos(x) = sin(x + π/2)`).
//! The table itself is produced by an integer-only Taylor evaluation, so
//! its contents (and therefore every trig result) are bit-identical on
//! every platform.

use std::sync::LazyLock;

use crate::error::{Fix64Error, FixResult};
use crate::scalar::{div_raw, fast_mul_raw, Fix64, PI_OVER_2_RAW, PI_RAW, PI_TIMES_2_RAW};

/// Number of table entries covering `[0, π/2]`.
const LUT_SIZE: usize = (PI_OVER_2_RAW >> 15) as usize;

/// π scaled by `2^61` (truncated). The angle reduction divides this down
/// bit by bit so that even full-range raw angles reduce modulo 2π without
/// a wide division.
const LARGE_PI_RAW: i64 = 7244019458077122842;

/// π/2 scaled by `2^61`, the table generator's working precision.
const PI_OVER_2_Q61: i64 = 3622009729038561421;

const GENERATOR_FRACTIONAL_BITS: u32 = 61;

/// The quarter-wave sine table plus the precomputed index scale
/// `(LUT_SIZE - 1) / (π/2)`.
struct SinTable {
    entries: Box<[i64]>,
    interval_raw: i64,
}

static SIN_TABLE: LazyLock<SinTable> = LazyLock::new(SinTable::build);

impl SinTable {
    fn build() -> SinTable {
        let mut entries = Vec::with_capacity(LUT_SIZE);
        for i in 0..LUT_SIZE {
            let angle =
                ((i as i128 * PI_OVER_2_Q61 as i128) / (LUT_SIZE as i128 - 1)) as i64;
            entries.push(quantize_generated(sin_q61(angle)));
        }
        SinTable {
            entries: entries.into_boxed_slice(),
            interval_raw: div_raw(Fix64::from_i64(LUT_SIZE as i64 - 1).raw_value(), PI_OVER_2_RAW),
        }
    }
}

fn mul_q61(a: i64, b: i64) -> i64 {
    ((a as i128 * b as i128) >> GENERATOR_FRACTIONAL_BITS) as i64
}

/// Taylor sine at Q2.61 working precision. Arguments stay within
/// `[0, π/2]`, where the alternating series converges in under twenty
/// terms with every intermediate inside `i64`.
fn sin_q61(x: i64) -> i64 {
    let x_squared = mul_q61(x, x);
    let mut sum = x;
    let mut term = x;
    let mut sign = -1i64;
    let mut n = 2i64;
    loop {
        term = mul_q61(term, x_squared) / (n * (n + 1));
        if term == 0 {
            break;
        }
        sum += sign * term;
        sign = -sign;
        n += 2;
    }
    sum
}

/// Rounds a Q2.61 sine value to the Q32.32 encoding. The result never
/// exceeds one: the series cannot overshoot by more than the guard bits
/// absorb, and the clamp pins the top entry at exactly `ONE`.
fn quantize_generated(value_q61: i64) -> i64 {
    let shift = GENERATOR_FRACTIONAL_BITS - 32;
    let rounded = (value_q61 + (1 << (shift - 1))) >> shift;
    rounded.min(Fix64::ONE.raw_value())
}

/// Folds an arbitrary raw angle into `[0, π/2)` and reports which
/// symmetries were applied: `flip_horizontal` mirrors the table index
/// (second/fourth octant pair), `flip_vertical` negates the result
/// (angles past π).
fn reduce_quarter(angle: i64) -> (i64, bool, bool) {
    let mut clamped_2pi = angle;
    for i in 0..29 {
        clamped_2pi %= LARGE_PI_RAW >> i;
    }
    if angle < 0 {
        clamped_2pi += PI_TIMES_2_RAW;
    }

    let flip_vertical = clamped_2pi >= PI_RAW;
    let mut clamped_pi = clamped_2pi;
    while clamped_pi >= PI_RAW {
        clamped_pi -= PI_RAW;
    }

    let flip_horizontal = clamped_pi >= PI_OVER_2_RAW;
    let mut clamped = clamped_pi;
    if clamped >= PI_OVER_2_RAW {
        clamped -= PI_OVER_2_RAW;
    }
    (clamped, flip_horizontal, flip_vertical)
}

fn lut_index(i: i64, mirrored: bool) -> usize {
    if mirrored {
        (LUT_SIZE as i64 - 1 - i) as usize
    } else {
        i as usize
    }
}

fn sin_raw(angle: i64) -> i64 {
    let (clamped, flip_horizontal, flip_vertical) = reduce_quarter(angle);
    let table = &*SIN_TABLE;

    // Locate the two nearest entries and interpolate between them.
    let raw_index = fast_mul_raw(clamped, table.interval_raw);
    let rounded_index = Fix64::from_raw(raw_index).round();
    let index_error = raw_index.wrapping_sub(rounded_index.raw_value());

    let base = rounded_index.to_i64();
    let step = index_error.signum();
    let nearest = table.entries[lut_index(base, flip_horizontal)];
    let second_nearest = table.entries[lut_index(base + step, flip_horizontal)];

    let delta = fast_mul_raw(index_error, (nearest - second_nearest).abs());
    let interpolated = if flip_horizontal {
        nearest - delta
    } else {
        nearest + delta
    };
    if flip_vertical {
        -interpolated
    } else {
        interpolated
    }
}

/// Shifts a cosine argument onto the sine curve without overflowing near
/// the ends of the raw range.
fn cos_phase_shift(raw_angle: i64) -> i64 {
    raw_angle.wrapping_add(if raw_angle > 0 {
        -PI_RAW - PI_OVER_2_RAW
    } else {
        PI_OVER_2_RAW
    })
}

impl Fix64 {
    /// Sine of an angle in radians.
    ///
    /// Accurate to within three units of [`Fix64::PRECISION`] across the
    /// whole raw range, and bit-exact at the canonical points: `sin(0)`,
    /// `sin(±π/2)`, `sin(±π)`, `sin(±3π/2)` and `sin(±2π)` produce exactly
    /// `0`, `±1`, `0`, `∓1` and `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fix64::Fix64;
    ///
    /// assert_eq!(Fix64::PI_OVER_2.sin(), Fix64::ONE);
    /// assert_eq!(Fix64::PI.sin(), Fix64::ZERO);
    /// ```
    pub fn sin(self) -> Fix64 {
        Fix64::from_raw(sin_raw(self.raw_value()))
    }

    /// Cosine of an angle in radians, via `sin(x + π/2)` with an
    /// overflow-safe phase shift. Same accuracy and exactness guarantees
    /// as [`Fix64::sin`].
    pub fn cos(self) -> Fix64 {
        Fix64::from_raw(sin_raw(cos_phase_shift(self.raw_value())))
    }

    /// Low-precision, high-throughput sine: same quadrant reduction as
    /// [`Fix64::sin`], but the table is indexed directly with no
    /// interpolation. Absolute error stays below about 1e-5.
    pub fn fast_sin(self) -> Fix64 {
        let (clamped, flip_horizontal, flip_vertical) = reduce_quarter(self.raw_value());
        let table = &*SIN_TABLE;
        let mut index = (clamped >> 15) as usize;
        if index >= LUT_SIZE {
            index = LUT_SIZE - 1;
        }
        let nearest = table.entries[if flip_horizontal {
            LUT_SIZE - 1 - index
        } else {
            index
        }];
        Fix64::from_raw(if flip_vertical { -nearest } else { nearest })
    }

    /// Low-precision cosine, the [`Fix64::fast_sin`] counterpart.
    pub fn fast_cos(self) -> Fix64 {
        Fix64::from_raw(cos_phase_shift(self.raw_value())).fast_sin()
    }

    /// Tangent, `sin(x) / cos(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::DivisionByZero`] exactly at the asymptotes
    /// (`±π/2` plus multiples of `π`), where the cosine is bit-exactly
    /// zero. The sign flips across each asymptote following the signs of
    /// the surrounding sine and cosine.
    pub fn tan(self) -> FixResult<Fix64> {
        self.sin().checked_div(self.cos())
    }

    /// Arccosine. Exact at the boundary values: `acos(1) = 0`,
    /// `acos(0) = π/2`, `acos(-1) = π`. Absolute accuracy around 1e-8
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`Fix64Error::AcosOutOfRange`] for input outside `[-1, 1]`.
    pub fn acos(self) -> FixResult<Fix64> {
        if self < -Fix64::ONE || self > Fix64::ONE {
            return Err(Fix64Error::AcosOutOfRange);
        }
        if self.raw_value() == 0 {
            return Ok(Fix64::PI_OVER_2);
        }
        let result = (Fix64::ONE - self * self)
            .sqrt()?
            .checked_div(self)?
            .atan();
        Ok(if self.raw_value() < 0 {
            result + Fix64::PI
        } else {
            result
        })
    }

    /// Arctangent, accurate to about 1e-8 across the full representable
    /// domain. `atan(0)` is exactly zero.
    ///
    /// Evaluates Euler's accelerated arctangent series; arguments beyond
    /// one are inverted first (`atan(z) = π/2 − atan(1/z)`) so the series
    /// always converges quickly.
    pub fn atan(self) -> Fix64 {
        if self.raw_value() == 0 {
            return Fix64::ZERO;
        }

        let neg = self.raw_value() < 0;
        let mut z = if neg { -self } else { self };

        let two = Fix64::from_i32(2);
        let three = Fix64::from_i32(3);

        let invert = z > Fix64::ONE;
        if invert {
            z = Fix64::ONE / z;
        }

        let mut result = Fix64::ONE;
        let mut term = Fix64::ONE;

        let z_squared = z * z;
        let z_squared_2 = z_squared * two;
        let z_squared_plus_one = z_squared + Fix64::ONE;
        let z_squared_12 = z_squared_plus_one * two;
        let mut dividend = z_squared_2;
        let mut divisor = z_squared_plus_one * three;

        for _ in 2..30 {
            term = term * (dividend / divisor);
            result = result + term;
            dividend = dividend + z_squared_2;
            divisor = divisor + z_squared_12;
            if term.raw_value() == 0 {
                break;
            }
        }

        let mut result = result * z / z_squared_plus_one;
        if invert {
            result = Fix64::PI_OVER_2 - result;
        }
        if neg {
            result = -result;
        }
        result
    }

    /// Four-quadrant arctangent of `y/x`.
    ///
    /// The axis cases are exact: `atan2(0, x<0) = π`, `atan2(0, 0) = 0`,
    /// `atan2(0, x>0) = 0`, `atan2(y>0, 0) = π/2`, `atan2(y<0, 0) = −π/2`.
    /// The general case uses the medium-precision `z / (1 + 0.28·z²)`
    /// approximation with quadrant correction; absolute accuracy is about
    /// 5e-3.
    pub fn atan2(y: Fix64, x: Fix64) -> Fix64 {
        let yl = y.raw_value();
        let xl = x.raw_value();
        if xl == 0 {
            return if yl > 0 {
                Fix64::PI_OVER_2
            } else if yl == 0 {
                Fix64::ZERO
            } else {
                -Fix64::PI_OVER_2
            };
        }

        let point_28 = Fix64::from_raw(0x47AE147B);
        let z = y / x;
        let denominator = Fix64::ONE + point_28 * z * z;

        // The ratio saturated; the angle is pinned to the vertical axis.
        if denominator == Fix64::MAX_VALUE {
            return if y < Fix64::ZERO {
                -Fix64::PI_OVER_2
            } else {
                Fix64::PI_OVER_2
            };
        }

        if z.abs() < Fix64::ONE {
            let atan = z / denominator;
            if xl < 0 {
                if yl < 0 {
                    return atan - Fix64::PI;
                }
                return atan + Fix64::PI;
            }
            atan
        } else {
            let atan = Fix64::PI_OVER_2 - z / (z * z + point_28);
            if yl < 0 {
                return atan - Fix64::PI;
            }
            atan
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoints_are_exact() {
        let table = &*SIN_TABLE;
        assert_eq!(table.entries.len(), LUT_SIZE);
        assert_eq!(table.entries[0], 0);
        assert_eq!(table.entries[LUT_SIZE - 1], Fix64::ONE.raw_value());
    }

    #[test]
    fn table_is_monotonic() {
        let table = &*SIN_TABLE;
        for pair in table.entries.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn sin_canonical_points_are_bit_exact() {
        assert_eq!(Fix64::ZERO.sin(), Fix64::ZERO);
        assert_eq!(Fix64::PI_OVER_2.sin(), Fix64::ONE);
        assert_eq!(Fix64::PI.sin(), Fix64::ZERO);
        assert_eq!((Fix64::PI + Fix64::PI_OVER_2).sin(), -Fix64::ONE);
        assert_eq!(Fix64::PI_TIMES_2.sin(), Fix64::ZERO);
        assert_eq!((-Fix64::PI_OVER_2).sin(), -Fix64::ONE);
        assert_eq!((-Fix64::PI).sin(), Fix64::ZERO);
        assert_eq!((-Fix64::PI - Fix64::PI_OVER_2).sin(), Fix64::ONE);
        assert_eq!((-Fix64::PI_TIMES_2).sin(), Fix64::ZERO);
    }

    #[test]
    fn cos_canonical_points_are_bit_exact() {
        assert_eq!(Fix64::ZERO.cos(), Fix64::ONE);
        assert_eq!(Fix64::PI_OVER_2.cos(), Fix64::ZERO);
        assert_eq!(Fix64::PI.cos(), -Fix64::ONE);
        assert_eq!((Fix64::PI + Fix64::PI_OVER_2).cos(), Fix64::ZERO);
        assert_eq!(Fix64::PI_TIMES_2.cos(), Fix64::ONE);
        assert_eq!((-Fix64::PI_OVER_2).cos(), Fix64::ZERO);
        assert_eq!((-Fix64::PI).cos(), -Fix64::ONE);
        assert_eq!((-Fix64::PI - Fix64::PI_OVER_2).cos(), Fix64::ZERO);
        assert_eq!((-Fix64::PI_TIMES_2).cos(), Fix64::ONE);
    }

    #[test]
    fn tan_zero_and_asymptotes() {
        assert_eq!(Fix64::ZERO.tan().unwrap(), Fix64::ZERO);
        assert_eq!(Fix64::PI.tan().unwrap(), Fix64::ZERO);
        assert_eq!((-Fix64::PI).tan().unwrap(), Fix64::ZERO);
        assert_eq!(
            Fix64::PI_OVER_2.tan().unwrap_err(),
            Fix64Error::DivisionByZero
        );

        // Sign flips across the asymptote.
        let nudge = Fix64::from_f64(0.001);
        assert!((Fix64::PI_OVER_2 - nudge).tan().unwrap() > Fix64::ZERO);
        assert!((Fix64::PI_OVER_2 + nudge).tan().unwrap() < Fix64::ZERO);
        assert!((-Fix64::PI_OVER_2 - nudge).tan().unwrap() > Fix64::ZERO);
        assert!((-Fix64::PI_OVER_2 + nudge).tan().unwrap() < Fix64::ZERO);
    }

    #[test]
    fn acos_boundary_values_are_exact() {
        assert_eq!(Fix64::ONE.acos().unwrap(), Fix64::ZERO);
        assert_eq!(Fix64::ZERO.acos().unwrap(), Fix64::PI_OVER_2);
        assert_eq!((-Fix64::ONE).acos().unwrap(), Fix64::PI);
    }

    #[test]
    fn acos_out_of_range_is_domain_error() {
        let above = Fix64::ONE + Fix64::PRECISION;
        assert_eq!(above.acos().unwrap_err(), Fix64Error::AcosOutOfRange);
        assert_eq!((-above).acos().unwrap_err(), Fix64Error::AcosOutOfRange);
    }

    #[test]
    fn atan_zero_is_exact() {
        assert_eq!(Fix64::ZERO.atan(), Fix64::ZERO);
    }

    #[test]
    fn atan_extreme_magnitudes() {
        for raw in [i64::MAX, i64::MIN, 0xFFFF_FFFF, -0xFFFF_FFFF] {
            let got = Fix64::from_raw(raw).atan().to_f64();
            let expected = Fix64::from_raw(raw).to_f64().atan();
            assert!((got - expected).abs() <= 1e-8, "atan raw {raw}: {got}");
        }
    }

    #[test]
    fn atan2_axis_identities_are_exact() {
        assert_eq!(Fix64::atan2(Fix64::ZERO, -Fix64::ONE), Fix64::PI);
        assert_eq!(Fix64::atan2(Fix64::ZERO, Fix64::ZERO), Fix64::ZERO);
        assert_eq!(Fix64::atan2(Fix64::ZERO, Fix64::ONE), Fix64::ZERO);
        assert_eq!(Fix64::atan2(Fix64::ONE, Fix64::ZERO), Fix64::PI_OVER_2);
        assert_eq!(Fix64::atan2(-Fix64::ONE, Fix64::ZERO), -Fix64::PI_OVER_2);
    }

    #[test]
    fn atan2_quadrants() {
        let one = Fix64::ONE;
        let cases: [(Fix64, Fix64); 4] = [(one, one), (one, -one), (-one, one), (-one, -one)];
        for (y, x) in cases {
            let got = Fix64::atan2(y, x).to_f64();
            let expected = y.to_f64().atan2(x.to_f64());
            assert!(
                (got - expected).abs() <= 5e-3,
                "atan2({}, {}): {got} vs {expected}",
                y,
                x
            );
        }
    }
}

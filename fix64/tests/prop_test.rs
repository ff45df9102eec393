use fix64::{Fix64, Fix64Error};
use proptest::prelude::*;

/// Strategy for raw values whose `f64` image is exact (|raw| < 2^52),
/// so float references in assertions carry no rounding error of their own.
fn exact_in_f64() -> impl Strategy<Value = i64> {
    -(1i64 << 52)..(1i64 << 52)
}

proptest! {

    // --- raw roundtrip ---
    #[test]
    fn from_raw_gives_raw_back(raw in any::<i64>()) {
        prop_assert_eq!(Fix64::from_raw(raw).raw_value(), raw);
    }

    // --- every i32 survives the integer conversion ---
    #[test]
    fn i32_roundtrip_is_lossless(n in any::<i32>()) {
        prop_assert_eq!(Fix64::from_i32(n).to_i32(), n);
        prop_assert_eq!(Fix64::from_i32(n).to_i64(), n as i64);
    }

    // --- out-of-range i64 wraps like a two's-complement truncation ---
    #[test]
    fn i64_conversion_wraps_to_low_bits(n in any::<i64>()) {
        let wrapped = n.wrapping_mul(1i64 << 32) >> 32;
        prop_assert_eq!(Fix64::from_i64(n).to_i64(), wrapped);
    }

    // --- addition and subtraction saturate exactly like the raw model ---
    #[test]
    fn add_saturates_correctly(a in any::<i64>(), b in any::<i64>()) {
        let sum = Fix64::from_raw(a) + Fix64::from_raw(b);
        prop_assert_eq!(sum.raw_value(), a.saturating_add(b));
    }

    #[test]
    fn sub_saturates_correctly(a in any::<i64>(), b in any::<i64>()) {
        let diff = Fix64::from_raw(a) - Fix64::from_raw(b);
        prop_assert_eq!(diff.raw_value(), a.saturating_sub(b));
    }

    // --- negation is an involution away from the saturating corner ---
    #[test]
    fn neg_is_involutive(raw in (i64::MIN + 1)..=i64::MAX) {
        let x = Fix64::from_raw(raw);
        prop_assert_eq!(-(-x), x);
    }

    // --- multiplication commutes bit-for-bit ---
    #[test]
    fn mul_commutes(a in any::<i64>(), b in any::<i64>()) {
        let x = Fix64::from_raw(a);
        let y = Fix64::from_raw(b);
        prop_assert_eq!(x * y, y * x);
    }

    // --- multiplication stays within one raw unit of the exact product ---
    #[test]
    fn mul_is_within_one_ulp_of_exact(a in any::<i64>(), b in any::<i64>()) {
        let exact = i128::from(a) * i128::from(b);
        let result = (Fix64::from_raw(a) * Fix64::from_raw(b)).raw_value();
        if result != i64::MAX && result != i64::MIN {
            let error = ((i128::from(result)) << 32) - exact;
            prop_assert!(error.abs() <= 1i128 << 32, "error {error}");
        }
    }

    // --- division by zero is always an error, for every dividend ---
    #[test]
    fn div_by_zero_is_error(a in any::<i64>()) {
        let x = Fix64::from_raw(a);
        prop_assert_eq!(x.checked_div(Fix64::ZERO), Err(Fix64Error::DivisionByZero));
        prop_assert_eq!(x.checked_rem(Fix64::ZERO), Err(Fix64Error::DivisionByZero));
    }

    // --- division stays within one raw unit of the exact quotient ---
    #[test]
    fn div_is_within_one_ulp_of_exact(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let result = Fix64::from_raw(a).checked_div(Fix64::from_raw(b)).unwrap().raw_value();
        if result != i64::MAX && result != i64::MIN {
            // result ~ (a << 32) / b, so result * b ~ a << 32 within |b|.
            let error = i128::from(result) * i128::from(b) - (i128::from(a) << 32);
            prop_assert!(error.abs() <= i128::from(b).abs(), "error {error}");
        }
    }

    // --- remainder keeps the dividend's sign and is smaller than b ---
    #[test]
    fn rem_sign_and_bound(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let r = Fix64::from_raw(a).checked_rem(Fix64::from_raw(b)).unwrap();
        prop_assert!(r.raw_value().unsigned_abs() <= b.unsigned_abs());
        if r != Fix64::ZERO {
            prop_assert_eq!(r.signum(), Fix64::from_raw(a).signum());
        }
    }

    // --- the ordering is the raw ordering, and it matches f64 ---
    #[test]
    fn ordering_matches_raw_and_f64(a in exact_in_f64(), b in exact_in_f64()) {
        let x = Fix64::from_raw(a);
        let y = Fix64::from_raw(b);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!(
            x.partial_cmp(&y),
            x.to_f64().partial_cmp(&y.to_f64())
        );
    }

    // --- floor and ceil bracket the value ---
    #[test]
    fn floor_and_ceil_bracket(raw in (i64::MIN + (1i64 << 32))..(i64::MAX - (1i64 << 32))) {
        let x = Fix64::from_raw(raw);
        prop_assert!(x.floor() <= x);
        prop_assert!(x.ceil() >= x);
        prop_assert!(x.ceil() - x.floor() <= Fix64::ONE);
    }

    // --- abs agrees with fast_abs away from MIN_VALUE ---
    #[test]
    fn abs_variants_agree(raw in (i64::MIN + 1)..=i64::MAX) {
        let x = Fix64::from_raw(raw);
        prop_assert_eq!(x.abs(), x.fast_abs());
        prop_assert!(x.abs() >= Fix64::ZERO);
    }

    // --- sqrt tracks the f64 reference within tolerance ---
    #[test]
    fn sqrt_matches_f64_reference(raw in 0i64..(1i64 << 52)) {
        let x = Fix64::from_raw(raw);
        let root = x.sqrt().unwrap();
        let expected = x.to_f64().sqrt();
        prop_assert!((root.to_f64() - expected).abs() <= 2.0 * Fix64::PRECISION.to_f64());
    }

    // --- sine is bounded over the whole raw range ---
    #[test]
    fn sin_is_bounded(raw in any::<i64>()) {
        let s = Fix64::from_raw(raw).sin();
        prop_assert!(s >= -Fix64::ONE && s <= Fix64::ONE);
        let c = Fix64::from_raw(raw).cos();
        prop_assert!(c >= -Fix64::ONE && c <= Fix64::ONE);
    }

    // --- sine tracks f64 where the f64 reference is trustworthy ---
    #[test]
    fn sin_matches_f64_reference(raw in -(0x6487ED511i64 * 4)..(0x6487ED511i64 * 4)) {
        let got = Fix64::from_raw(raw).sin().to_f64();
        let expected = Fix64::from_raw(raw).to_f64().sin();
        prop_assert!((got - expected).abs() <= 3.0 * Fix64::PRECISION.to_f64());
    }

    // --- atan is bounded by ±π/2 and odd ---
    #[test]
    fn atan_is_bounded(raw in any::<i64>()) {
        let a = Fix64::from_raw(raw).atan();
        prop_assert!(a.abs() <= Fix64::PI_OVER_2);
    }
}

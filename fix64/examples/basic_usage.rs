//! Basic usage of the deterministic fixed-point scalar.

use fix64::{Fix64, FixResult};

fn main() -> FixResult<()> {
    // Conversions in and out.
    let a = Fix64::from_i32(7);
    let b = Fix64::from_f64(2.5);
    println!("a = {a}, b = {b}");

    // Arithmetic saturates instead of wrapping.
    println!("a * b = {}", a * b);
    println!("MAX + 1 = {}", Fix64::MAX_VALUE + Fix64::ONE);

    // Fallible operations return errors, not sentinel values.
    println!("sqrt(a) = {}", a.sqrt()?);
    match Fix64::from_i32(-1).sqrt() {
        Ok(_) => unreachable!(),
        Err(e) => println!("sqrt(-1) -> {e}"),
    }

    // Trigonometry is table-driven and bit-exact at the canonical points.
    println!("sin(pi/2) = {}", Fix64::PI_OVER_2.sin());
    println!("cos(pi)   = {}", Fix64::PI.cos());
    println!("atan2(1, 1) = {}", Fix64::atan2(Fix64::ONE, Fix64::ONE));

    // The raw encoding is the serialization format.
    let raw = (a * b).raw_value();
    println!("raw bits of a*b: {raw:#x}");
    assert_eq!(Fix64::from_raw(raw), a * b);
    Ok(())
}

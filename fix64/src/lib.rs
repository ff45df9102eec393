//! # fix64
//!
//! A deterministic Q32.32 fixed-point arithmetic library.
//!
//! Unlike floating point, whose rounding can differ across CPUs and
//! compilers, every operation here is defined purely in terms of integer
//! arithmetic on a signed 64-bit raw value, so the same inputs produce the
//! same bits on every platform. That property is what lockstep network
//! simulations, replay systems and soft-float targets need from their
//! scalar type.
//!
//! ## Features
//!
//! - One value type, [`Fix64`]: 32 integer bits, 32 fractional bits,
//!   immutable, with structural equality and a total order
//! - Saturating arithmetic (`+`, `-`, `*`, unary `-`): overflow clamps to
//!   the representable extremes, never wraps into garbage and never
//!   produces a NaN-like sentinel
//! - Explicit errors for contract violations ([`Fix64Error`]): division by
//!   zero and the domain errors of `sqrt`, `log2`, `ln`, `acos` and `pow`
//! - A self-contained transcendental library: square root, logarithms,
//!   powers, and table-driven trigonometry with bit-exact canonical values
//! - Zero-copy byte access through `bytemuck` for serialization
//!
//! ## Examples
//!
//! ```
//! use fix64::Fix64;
//!
//! let radius = Fix64::from_f64(2.5);
//! let area = Fix64::PI * radius * radius;
//! assert!((area.to_f64() - 19.634954).abs() < 1e-6);
//!
//! // Overflow saturates instead of wrapping.
//! assert_eq!(Fix64::MAX_VALUE + Fix64::ONE, Fix64::MAX_VALUE);
//!
//! // Contract violations are values, not panics.
//! assert!(Fix64::from_i32(-4).sqrt().is_err());
//! ```

pub mod error;
pub mod scalar;
mod transcendental;
mod trig;

pub use error::{Fix64Error, FixResult};
pub use scalar::Fix64;

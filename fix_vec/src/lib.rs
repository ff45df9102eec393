//! # fix_vec
//!
//! 2- and 3-component vector wrappers over the [`fix64`] deterministic
//! scalar.
//!
//! The vectors are thin field-wise tuples: every operation delegates to
//! [`Fix64`](fix64::Fix64) componentwise, so the determinism guarantees of
//! the scalar carry over unchanged. Arithmetic exists in two shapes,
//! vector-vector (componentwise) and vector-scalar (broadcast), plus a
//! derived magnitude/normalize pair built from multiply, add and square
//! root.
//!
//! Both types are `#[repr(C)]` with `bytemuck` support, so a slice of
//! vectors serializes as the raw `i64` encodings of the fields in declared
//! order.
//!
//! ## Examples
//!
//! ```
//! use fix64::Fix64;
//! use fix_vec::Vec2;
//!
//! let v = Vec2::new(Fix64::from_i32(3), Fix64::from_i32(4));
//! assert_eq!(v.magnitude()?, Fix64::from_i32(5));
//!
//! let doubled = v * Fix64::from_i32(2);
//! assert_eq!(doubled, Vec2::new(Fix64::from_i32(6), Fix64::from_i32(8)));
//! # Ok::<(), fix64::Fix64Error>(())
//! ```

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;

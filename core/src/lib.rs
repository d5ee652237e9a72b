//! Arbitrary-precision signed integers for cryptographic code.
//!
//! Values are stored as little-endian arrays of 64-bit limbs that are wiped
//! before their memory is returned to the allocator. Conditional copy and
//! swap are branch-free in their selector when the `constant-time` feature
//! is enabled (the default).
//!
//! ```
//! use ctint_core::BigInt;
//!
//! let a = BigInt::from(5);
//! let b = BigInt::from(-3);
//! let mut c = BigInt::new();
//! c.sub(&a, &b).unwrap();
//! assert_eq!(c, BigInt::from(8));
//! ```

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]

pub mod config;
mod error;
mod num;
mod result;

pub use error::CtIntError;
pub use num::{Algorithm, BigInt, ByteOrder, Limb, SignedLimb, LIMB_BITS, LIMB_BYTES};
pub use result::CtResult;

pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Static configuration of the engine.
//!
//! The ceiling and threshold are compile-time constants; the allocation mode
//! and the constant-time switch are Cargo features, reflected here so callers
//! can report how the crate was built.

/// Upper bound on the number of limbs backing any single value (64 000 bits).
pub const MAX_LIMBS: usize = 1000;

/// Operand width, in bits, at or above which multiplication switches from
/// schoolbook to Karatsuba.
pub const KARATSUBA_THRESHOLD_BITS: usize = 2048;

/// `true` when built with the `fixed-alloc` feature: every value allocates
/// `MAX_LIMBS` limbs up front.
pub const FIXED_ALLOCATION: bool = cfg!(feature = "fixed-alloc");

/// `true` when built with the `constant-time` feature: conditional copy and
/// swap never branch on their selector.
pub const CONSTANT_TIME: bool = cfg!(feature = "constant-time");

mod bigint;
mod limb;

pub use bigint::{Algorithm, BigInt, ByteOrder};
pub use limb::{Limb, SignedLimb, LIMB_BITS, LIMB_BYTES};

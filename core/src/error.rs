use std::{error, fmt};

use crate::config::MAX_LIMBS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CtIntError {
    /// A selector outside `{0, 1}`, a bit position past the value, or a
    /// multi-limb value compared against a single-limb scalar.
    InvalidArgument,
    /// The allocator refused to provide a limb buffer.
    AllocationFailure,
    /// The operation would need more than `MAX_LIMBS` limbs.
    CapacityExceeded,
    /// The export destination is shorter than the value's byte length.
    BufferTooSmall,
}

impl fmt::Display for CtIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::AllocationFailure => write!(f, "unable to allocate limb buffer"),
            Self::CapacityExceeded => {
                write!(f, "value would exceed the maximum of {} limbs", MAX_LIMBS)
            }
            Self::BufferTooSmall => write!(f, "destination buffer is too small"),
        }
    }
}

impl error::Error for CtIntError {}

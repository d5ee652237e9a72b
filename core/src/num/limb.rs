use crate::error::CtIntError;
use crate::result::CtResult;
use zeroize::Zeroizing;

pub type Limb = u64;
pub type SignedLimb = i64;
pub(crate) type DoubleLimb = u128;

pub const LIMB_BITS: usize = 64;
pub const LIMB_BYTES: usize = 8;

#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
pub(crate) const fn truncate(n: DoubleLimb) -> Limb {
    n as Limb
}

#[allow(clippy::as_conversions)]
pub(crate) const fn leading_zeros(limb: Limb) -> usize {
    limb.leading_zeros() as usize
}

pub(crate) const fn bytes_to_limbs(bytes: usize) -> usize {
    bytes.div_ceil(LIMB_BYTES)
}

pub(crate) const fn bits_to_limbs(bits: usize) -> usize {
    bits.div_ceil(LIMB_BITS)
}

/// Number of significant limbs in `limbs`, ignoring zero limbs at the top.
pub(crate) fn significant(limbs: &[Limb]) -> usize {
    limbs.iter().rposition(|&l| l != 0).map_or(0, |top| top + 1)
}

/// Allocates `n` zeroed limbs, reporting allocator refusal instead of aborting.
pub(crate) fn zeroed_limbs(n: usize) -> CtResult<Vec<Limb>> {
    let mut limbs = Vec::new();
    limbs
        .try_reserve_exact(n)
        .map_err(|_| CtIntError::AllocationFailure)?;
    limbs.resize(n, 0);
    Ok(limbs)
}

/// Scratch space that is wiped when it goes out of scope.
pub(crate) fn scratch_limbs(n: usize) -> CtResult<Zeroizing<Vec<Limb>>> {
    Ok(Zeroizing::new(zeroed_limbs(n)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(bytes_to_limbs(0), 0);
        assert_eq!(bytes_to_limbs(1), 1);
        assert_eq!(bytes_to_limbs(8), 1);
        assert_eq!(bytes_to_limbs(9), 2);
        assert_eq!(bits_to_limbs(64), 1);
        assert_eq!(bits_to_limbs(65), 2);
        assert_eq!(truncate(u128::MAX), u64::MAX);
        assert_eq!(leading_zeros(1), 63);
    }

    #[test]
    fn test_significant() {
        assert_eq!(significant(&[]), 0);
        assert_eq!(significant(&[0, 0]), 0);
        assert_eq!(significant(&[1, 0, 0]), 1);
        assert_eq!(significant(&[0, 7, 0]), 2);
    }

    #[test]
    fn test_zeroed_limbs() {
        let limbs = zeroed_limbs(5).unwrap();
        assert_eq!(limbs, vec![0; 5]);
    }
}

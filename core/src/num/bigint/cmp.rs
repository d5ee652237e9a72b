use super::BigInt;
use crate::error::CtIntError;
use crate::num::limb::{leading_zeros, SignedLimb, LIMB_BITS};
use crate::result::CtResult;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl BigInt {
    /// Position of the highest set bit plus one; 0 for zero.
    pub fn bit_length(&self) -> usize {
        match self.limbs().last() {
            None => 0,
            Some(&top) => self.len * LIMB_BITS - leading_zeros(top),
        }
    }

    pub fn byte_length(&self) -> usize {
        self.bit_length().div_ceil(8)
    }

    /// Compares `|self|` with `|other|`.
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        self.len.cmp(&other.len).then_with(|| {
            self.limbs()
                .iter()
                .rev()
                .cmp(other.limbs().iter().rev())
        })
    }

    pub fn compare_signed(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_magnitude(other),
            (true, true) => other.compare_magnitude(self),
        }
    }

    /// Compares against a single-limb signed scalar.
    ///
    /// Values occupying more than one limb can never equal a scalar and are
    /// rejected with `InvalidArgument`.
    pub fn compare_scalar(&self, value: SignedLimb) -> CtResult<Ordering> {
        if self.len > 1 {
            return Err(CtIntError::InvalidArgument);
        }
        let magnitude = self.limbs().first().copied().unwrap_or(0);
        let other = value.unsigned_abs();
        Ok(match (self.is_negative(), value < 0) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude.cmp(&other),
            (true, true) => other.cmp(&magnitude),
        })
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_signed(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.limbs().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;
    use crate::error::CtIntError;
    use std::cmp::Ordering;

    fn big(limbs: &[u64], negative: bool) -> BigInt {
        let mut n = BigInt::new();
        n.set_magnitude(limbs).unwrap();
        if negative {
            n.negate();
        }
        n
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(BigInt::new().bit_length(), 0);
        assert_eq!(BigInt::from(1).bit_length(), 1);
        assert_eq!(BigInt::from(255).bit_length(), 8);
        assert_eq!(BigInt::from(256).bit_length(), 9);
        assert_eq!(big(&[0, 1], false).bit_length(), 65);
        assert_eq!(big(&[0, u64::MAX], true).bit_length(), 128);
    }

    #[test]
    fn test_byte_length() {
        assert_eq!(BigInt::new().byte_length(), 0);
        assert_eq!(BigInt::from(255).byte_length(), 1);
        assert_eq!(BigInt::from(256).byte_length(), 2);
        assert_eq!(big(&[0, 1], false).byte_length(), 9);
    }

    #[test]
    fn test_compare_magnitude() {
        let small = big(&[5], false);
        let large = big(&[1, 1], true);
        assert_eq!(small.compare_magnitude(&large), Ordering::Less);
        assert_eq!(large.compare_magnitude(&small), Ordering::Greater);
        assert_eq!(
            big(&[3, 9], false).compare_magnitude(&big(&[4, 8], true)),
            Ordering::Greater
        );
        assert_eq!(
            big(&[3, 9], false).compare_magnitude(&big(&[3, 9], true)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_signed() {
        let minus_big = big(&[0, 1], true);
        let minus_one = BigInt::from(-1);
        let zero = BigInt::new();
        let one = BigInt::from(1);
        let plus_big = big(&[0, 1], false);
        let ordered = [&minus_big, &minus_one, &zero, &one, &plus_big];
        for (i, a) in ordered.iter().enumerate() {
            for (j, b) in ordered.iter().enumerate() {
                assert_eq!(a.compare_signed(b), i.cmp(&j));
            }
        }
    }

    #[test]
    fn test_compare_scalar() {
        assert_eq!(BigInt::from(5).compare_scalar(5), Ok(Ordering::Equal));
        assert_eq!(BigInt::from(5).compare_scalar(-5), Ok(Ordering::Greater));
        assert_eq!(BigInt::from(-5).compare_scalar(-4), Ok(Ordering::Less));
        assert_eq!(BigInt::from(-5).compare_scalar(-6), Ok(Ordering::Greater));
        assert_eq!(BigInt::new().compare_scalar(0), Ok(Ordering::Equal));
        assert_eq!(BigInt::new().compare_scalar(-1), Ok(Ordering::Greater));
        assert_eq!(
            big(&[0, 1], false).compare_scalar(1),
            Err(CtIntError::InvalidArgument)
        );
    }

    #[test]
    fn test_eq_ignores_capacity() {
        let mut a = BigInt::from(12);
        a.reserve(10).unwrap();
        assert_eq!(a, BigInt::from(12));
        assert_ne!(a, BigInt::from(-12));
    }
}

use super::BigInt;
use crate::error::CtIntError;
use crate::num::limb::{bits_to_limbs, Limb, LIMB_BITS};
use crate::result::CtResult;
use zeroize::Zeroize;

impl BigInt {
    pub fn get_bit(&self, pos: usize) -> CtResult<bool> {
        let (limb, offset) = (pos / LIMB_BITS, pos % LIMB_BITS);
        match self.limbs().get(limb) {
            Some(&value) => Ok((value >> offset) & 1 == 1),
            None => Err(CtIntError::InvalidArgument),
        }
    }

    /// Sets or clears exactly one bit, growing the value when `pos` lies
    /// beyond it.
    pub fn set_bit(&mut self, pos: usize, bit: bool) -> CtResult<()> {
        let (limb, offset) = (pos / LIMB_BITS, pos % LIMB_BITS);
        self.reserve(limb + 1)?;
        if limb >= self.len {
            self.limbs[self.len..=limb].fill(0);
            self.len = limb + 1;
        }
        let mask: Limb = 1 << offset;
        if bit {
            self.limbs[limb] |= mask;
        } else {
            self.limbs[limb] &= !mask;
        }
        self.trim();
        Ok(())
    }

    /// Multiplies the magnitude by `2^bits`.
    pub fn shift_left(&mut self, bits: usize) -> CtResult<()> {
        if bits == 0 || self.is_zero() {
            return Ok(());
        }
        let required = self
            .bit_length()
            .checked_add(bits)
            .map(bits_to_limbs)
            .ok_or(CtIntError::CapacityExceeded)?;
        self.reserve(required)?;

        let (whole, offset) = (bits / LIMB_BITS, bits % LIMB_BITS);
        let len = self.len;
        self.limbs[len..required].fill(0);
        if whole > 0 {
            self.limbs.copy_within(0..len, whole);
            self.limbs[..whole].fill(0);
        }
        if offset > 0 {
            // most significant first, so every limb is read before it is
            // overwritten
            for i in (whole..required).rev() {
                let carried = if i > whole {
                    self.limbs[i - 1] >> (LIMB_BITS - offset)
                } else {
                    0
                };
                self.limbs[i] = (self.limbs[i] << offset) | carried;
            }
        }
        self.len = required;
        self.trim();
        Ok(())
    }

    /// Divides the magnitude by `2^bits`, discarding the bits shifted out.
    pub fn shift_right(&mut self, bits: usize) {
        if bits == 0 || self.is_zero() {
            return;
        }
        let (whole, offset) = (bits / LIMB_BITS, bits % LIMB_BITS);
        if whole >= self.len {
            self.set_zero();
            return;
        }
        let len = self.len;
        if whole > 0 {
            self.limbs.copy_within(whole..len, 0);
            self.limbs[len - whole..len].zeroize();
            self.len -= whole;
        }
        if offset > 0 {
            for i in 0..self.len {
                let carried = if i + 1 < self.len {
                    self.limbs[i + 1] << (LIMB_BITS - offset)
                } else {
                    0
                };
                self.limbs[i] = (self.limbs[i] >> offset) | carried;
            }
        }
        self.trim();
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;
    use crate::config::MAX_LIMBS;
    use crate::error::CtIntError;
    use crate::num::limb::LIMB_BITS;

    fn big(limbs: &[u64]) -> BigInt {
        let mut n = BigInt::new();
        n.set_magnitude(limbs).unwrap();
        n
    }

    #[test]
    fn test_get_bit() {
        let n = big(&[0b101, 1]);
        assert_eq!(n.get_bit(0), Ok(true));
        assert_eq!(n.get_bit(1), Ok(false));
        assert_eq!(n.get_bit(2), Ok(true));
        assert_eq!(n.get_bit(64), Ok(true));
        assert_eq!(n.get_bit(65), Ok(false));
        assert_eq!(n.get_bit(128), Err(CtIntError::InvalidArgument));
        assert_eq!(BigInt::new().get_bit(0), Err(CtIntError::InvalidArgument));
    }

    #[test]
    fn test_set_bit() {
        let mut n = BigInt::new();
        n.set_bit(130, true).unwrap();
        assert_eq!(n.limbs(), &[0, 0, 4]);
        n.set_bit(0, true).unwrap();
        assert_eq!(n.limbs(), &[1, 0, 4]);
        n.set_bit(0, true).unwrap();
        assert_eq!(n.limbs(), &[1, 0, 4]);
        n.set_bit(130, false).unwrap();
        assert_eq!(n.limbs(), &[1]);
        n.set_bit(500, false).unwrap();
        assert_eq!(n.limbs(), &[1]);
        assert_eq!(
            n.set_bit(MAX_LIMBS * LIMB_BITS, true),
            Err(CtIntError::CapacityExceeded)
        );
    }

    #[test]
    fn test_set_bit_keeps_sign() {
        let mut n = BigInt::from(-4);
        n.set_bit(0, true).unwrap();
        assert_eq!(n, BigInt::from(-5));
    }

    #[test]
    fn test_shift_left() {
        let mut n = BigInt::from(1);
        for i in 1..200 {
            n.shift_left(1).unwrap();
            assert_eq!(n.bit_length(), i + 1);
            assert_eq!(n.get_bit(i), Ok(true));
        }
        let mut m = big(&[u64::MAX, 3]);
        m.shift_left(68).unwrap();
        assert_eq!(m.limbs(), &[0, u64::MAX << 4, 0x3f]);
    }

    #[test]
    fn test_shift_left_whole_limbs() {
        let mut n = big(&[7, 9]);
        n.shift_left(128).unwrap();
        assert_eq!(n.limbs(), &[0, 0, 7, 9]);
    }

    #[test]
    fn test_shift_left_capacity() {
        let mut n = BigInt::from(1);
        assert_eq!(
            n.shift_left(MAX_LIMBS * LIMB_BITS),
            Err(CtIntError::CapacityExceeded)
        );
        assert_eq!(n, BigInt::from(1));
        assert_eq!(n.shift_left(usize::MAX), Err(CtIntError::CapacityExceeded));
        n.shift_left(MAX_LIMBS * LIMB_BITS - 1).unwrap();
        assert_eq!(n.len(), MAX_LIMBS);
    }

    #[test]
    fn test_shift_left_to_ceiling() {
        let half = MAX_LIMBS / 2;
        let ones = big(&vec![u64::MAX; half]);
        let mut n = ones.clone();
        n.shift_left(half * LIMB_BITS).unwrap();
        assert_eq!(n.len(), MAX_LIMBS);
        assert!(n.limbs()[..half].iter().all(|&l| l == 0));
        assert!(n.limbs()[half..].iter().all(|&l| l == u64::MAX));

        let mut m = ones.clone();
        assert_eq!(
            m.shift_left(half * LIMB_BITS + 1),
            Err(CtIntError::CapacityExceeded)
        );
        assert_eq!(m, ones);
    }

    #[test]
    fn test_shift_right() {
        let mut n = big(&[0, u64::MAX << 4, 0x3f]);
        n.shift_right(68);
        assert_eq!(n.limbs(), &[u64::MAX, 3]);
        n.shift_right(1);
        assert_eq!(n.limbs(), &[u64::MAX, 1]);
        n.shift_right(64);
        assert_eq!(n.limbs(), &[1]);
        n.shift_right(1);
        assert!(n.is_zero());
    }

    #[test]
    fn test_shift_right_to_zero_is_positive() {
        let mut n = BigInt::from(-3);
        n.shift_right(200);
        assert!(n.is_zero());
        assert_eq!(n.sign(), 1);
        let mut m = BigInt::from(-3);
        m.shift_right(2);
        assert!(m.is_zero());
        assert_eq!(m.sign(), 1);
    }

    #[test]
    fn test_shift_zero_bits() {
        let mut n = BigInt::from(-9);
        n.shift_left(0).unwrap();
        n.shift_right(0);
        assert_eq!(n, BigInt::from(-9));
    }
}

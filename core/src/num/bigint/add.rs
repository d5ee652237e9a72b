use super::BigInt;
use crate::num::limb::{scratch_limbs, truncate, DoubleLimb, Limb, LIMB_BITS};
use crate::result::CtResult;
use std::cmp::Ordering;
use zeroize::Zeroize;

impl BigInt {
    /// `self = a + b`
    pub fn add(&mut self, a: &Self, b: &Self) -> CtResult<()> {
        self.add_signed(a, b, b.sign)
    }

    /// `self = a - b`, i.e. `a + (-b)`
    pub fn sub(&mut self, a: &Self, b: &Self) -> CtResult<()> {
        self.add_signed(a, b, -b.sign)
    }

    // adds `a` to `b` as if `b` had sign `b_sign`
    fn add_signed(&mut self, a: &Self, b: &Self, b_sign: i8) -> CtResult<()> {
        if a.sign == b_sign {
            return self.add_magnitudes(a, b, a.sign);
        }
        match a.compare_magnitude(b) {
            Ordering::Greater => self.sub_magnitudes(a, b, a.sign),
            Ordering::Less => self.sub_magnitudes(b, a, b_sign),
            Ordering::Equal => {
                self.set_zero();
                Ok(())
            }
        }
    }

    /// `self = sign * (|a| + |b|)`
    ///
    /// The carry chain runs in scratch space one limb longer than the longer
    /// operand, so only a carry that actually lands past `MAX_LIMBS` fails.
    fn add_magnitudes(&mut self, a: &Self, b: &Self, sign: i8) -> CtResult<()> {
        let (long, short) = if a.len >= b.len { (a, b) } else { (b, a) };
        let mut acc = scratch_limbs(long.len + 1)?;
        let mut carry: Limb = 0;
        for (i, &x) in long.limbs().iter().enumerate() {
            let y = short.limbs().get(i).copied().unwrap_or(0);
            let sum = DoubleLimb::from(x) + DoubleLimb::from(y) + DoubleLimb::from(carry);
            acc[i] = truncate(sum);
            carry = truncate(sum >> LIMB_BITS);
        }
        acc[long.len] = carry;
        self.set_magnitude(&acc)?;
        if !self.is_zero() {
            self.sign = sign;
        }
        Ok(())
    }

    /// `self = sign * (|big| - |small|)`, where `|big| >= |small|`
    fn sub_magnitudes(&mut self, big: &Self, small: &Self, sign: i8) -> CtResult<()> {
        self.reserve(big.len)?;
        let stale = self.len;
        let mut borrow: Limb = 0;
        for (i, &x) in big.limbs().iter().enumerate() {
            let y = small.limbs().get(i).copied().unwrap_or(0);
            let diff = DoubleLimb::from(x) + (1 << LIMB_BITS)
                - DoubleLimb::from(y)
                - DoubleLimb::from(borrow);
            self.limbs[i] = truncate(diff);
            // the high half is 1 exactly when no borrow was needed
            borrow = 1 - truncate(diff >> LIMB_BITS);
        }
        debug_assert_eq!(borrow, 0);
        self.finish(big.len, stale, sign);
        Ok(())
    }

    fn finish(&mut self, written: usize, stale: usize, sign: i8) {
        if stale > written {
            self.limbs[written..stale].zeroize();
        }
        self.len = written;
        self.sign = sign;
        self.trim();
    }
}

#[cfg(test)]
mod tests {
    use super::BigInt;
    use crate::config::MAX_LIMBS;
    use crate::error::CtIntError;

    fn big(limbs: &[u64], negative: bool) -> BigInt {
        let mut n = BigInt::new();
        n.set_magnitude(limbs).unwrap();
        if negative {
            n.negate();
        }
        n
    }

    fn sum(a: i64, b: i64) -> BigInt {
        let mut c = BigInt::new();
        c.add(&a.into(), &b.into()).unwrap();
        c
    }

    fn difference(a: i64, b: i64) -> BigInt {
        let mut c = BigInt::new();
        c.sub(&a.into(), &b.into()).unwrap();
        c
    }

    #[test]
    fn test_addition() {
        assert_eq!(sum(2, 2), BigInt::from(4));
        assert_eq!(sum(5, 3), BigInt::from(8));
        assert_eq!(sum(-5, -3), BigInt::from(-8));
        assert_eq!(sum(-5, 3), BigInt::from(-2));
        assert_eq!(sum(5, -3), BigInt::from(2));
        assert_eq!(sum(3, -5), BigInt::from(-2));
        assert_eq!(sum(0, -5), BigInt::from(-5));
    }

    #[test]
    fn test_sub() {
        assert_eq!(difference(5, 3), BigInt::from(2));
        assert_eq!(difference(5, -3), BigInt::from(8));
        assert_eq!(difference(-5, 3), BigInt::from(-8));
        assert_eq!(difference(3, 5), BigInt::from(-2));
        assert_eq!(difference(0, 0), BigInt::new());
        assert_eq!(difference(0, 7), BigInt::from(-7));
    }

    #[test]
    fn test_cancellation_is_positive_zero() {
        let c = sum(-7, 7);
        assert!(c.is_zero());
        assert_eq!(c.sign(), 1);
        let d = difference(-7, -7);
        assert!(d.is_zero());
        assert_eq!(d.sign(), 1);
    }

    #[test]
    fn test_carry_into_new_limb() {
        let a = big(&[u64::MAX, u64::MAX], false);
        let mut c = BigInt::new();
        c.add(&a, &BigInt::from(1)).unwrap();
        assert_eq!(c.limbs(), &[0, 0, 1]);
    }

    #[test]
    fn test_borrow_across_limbs() {
        let a = big(&[0, 0, 1], false);
        let mut c = BigInt::new();
        c.sub(&a, &BigInt::from(1)).unwrap();
        assert_eq!(c.limbs(), &[u64::MAX, u64::MAX]);
    }

    #[test]
    fn test_result_is_trimmed() {
        let a = big(&[5, 7, 9], false);
        let b = big(&[4, 7, 9], true);
        let mut c = BigInt::new();
        c.add(&a, &b).unwrap();
        assert_eq!(c.limbs(), &[1]);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_destination_is_overwritten() {
        let mut c = big(&[1, 2, 3, 4], true);
        c.add(&BigInt::from(1), &BigInt::from(1)).unwrap();
        assert_eq!(c, BigInt::from(2));
    }

    #[test]
    fn test_capacity_error_leaves_destination() {
        let a = big(&vec![u64::MAX; MAX_LIMBS], false);
        let mut c = BigInt::from(-3);
        assert_eq!(c.add(&a, &a), Err(CtIntError::CapacityExceeded));
        assert_eq!(c, BigInt::from(-3));
    }

    #[test]
    fn test_sum_at_limb_ceiling() {
        let full = big(&vec![u64::MAX; MAX_LIMBS], false);
        let mut c = BigInt::new();
        c.add(&full, &BigInt::new()).unwrap();
        assert_eq!(c, full);
        c.add(&BigInt::new(), &full).unwrap();
        assert_eq!(c, full);
        let mut d = BigInt::new();
        d.sub(&full, &BigInt::new()).unwrap();
        assert_eq!(d, full);

        // one below the ceiling plus one carries up to exactly MAX_LIMBS limbs
        let below = big(&vec![u64::MAX; MAX_LIMBS - 1], false);
        c.add(&below, &BigInt::from(1)).unwrap();
        assert_eq!(c.len(), MAX_LIMBS);
        assert_eq!(c.limbs()[MAX_LIMBS - 1], 1);

        // -(full - 1) - 1 lands on -full
        let mut top = vec![u64::MAX; MAX_LIMBS];
        top[0] -= 1;
        let mut negative_full = full.clone();
        negative_full.negate();
        let mut e = BigInt::new();
        e.sub(&big(&top, true), &BigInt::from(1)).unwrap();
        assert_eq!(e, negative_full);
    }

    #[test]
    fn test_carry_past_ceiling_leaves_destination() {
        let full = big(&vec![u64::MAX; MAX_LIMBS], false);
        let mut c = BigInt::from(-3);
        assert_eq!(
            c.add(&full, &BigInt::from(1)),
            Err(CtIntError::CapacityExceeded)
        );
        assert_eq!(c, BigInt::from(-3));
        let mut negative = full.clone();
        negative.negate();
        assert_eq!(
            c.sub(&negative, &BigInt::from(1)),
            Err(CtIntError::CapacityExceeded)
        );
        assert_eq!(c, BigInt::from(-3));
    }
}

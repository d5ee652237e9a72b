use super::BigInt;
use crate::config::KARATSUBA_THRESHOLD_BITS;
use crate::num::limb::{scratch_limbs, truncate, DoubleLimb, Limb, LIMB_BITS};
use crate::result::CtResult;
use tracing::{debug, trace_span};

/// Magnitude multiplication strategy.
///
/// The choice depends only on operand lengths, which are public for the
/// cryptographic operands this crate targets.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Algorithm {
    Schoolbook,
    Karatsuba,
}

impl Algorithm {
    pub fn select(a: &BigInt, b: &BigInt) -> Self {
        if a.len.min(b.len) * LIMB_BITS >= KARATSUBA_THRESHOLD_BITS {
            Self::Karatsuba
        } else {
            Self::Schoolbook
        }
    }
}

impl BigInt {
    /// `self = a * b`
    pub fn mul(&mut self, a: &Self, b: &Self) -> CtResult<()> {
        let algorithm = Algorithm::select(a, b);
        debug!(?algorithm, a_limbs = a.len, b_limbs = b.len, "multiplying");
        self.mul_with(a, b, algorithm)
    }

    /// `self = a * b` using the given algorithm at the top level. Recursive
    /// Karatsuba steps still pick their own algorithm by size.
    pub fn mul_with(&mut self, a: &Self, b: &Self, algorithm: Algorithm) -> CtResult<()> {
        let mut product = Self::new();
        match algorithm {
            Algorithm::Schoolbook => product.schoolbook(a, b)?,
            Algorithm::Karatsuba => product.karatsuba(a, b)?,
        }
        product.sign = a.sign * b.sign;
        product.trim();
        self.copy_from(&product)
    }

    fn mul_magnitudes(&mut self, a: &Self, b: &Self) -> CtResult<()> {
        match Algorithm::select(a, b) {
            Algorithm::Schoolbook => self.schoolbook(a, b),
            Algorithm::Karatsuba => self.karatsuba(a, b),
        }
    }

    /// `self = |a| * |b|` by long multiplication.
    fn schoolbook(&mut self, a: &Self, b: &Self) -> CtResult<()> {
        if a.is_zero() || b.is_zero() {
            self.set_zero();
            return Ok(());
        }
        let mut acc = scratch_limbs(a.len + b.len)?;
        for (i, &x) in a.limbs().iter().enumerate() {
            let mut carry: Limb = 0;
            for (j, &y) in b.limbs().iter().enumerate() {
                let t = DoubleLimb::from(acc[i + j])
                    + DoubleLimb::from(x) * DoubleLimb::from(y)
                    + DoubleLimb::from(carry);
                acc[i + j] = truncate(t);
                carry = truncate(t >> LIMB_BITS);
            }
            acc[i + b.len] = carry;
        }
        self.set_magnitude(&acc)
    }

    /// `self = |a| * |b|` by Karatsuba splitting:
    /// with `a = x1*R + x0` and `b = y1*R + y0`, `R = 2^(64*half)`,
    /// `a*b = x1y1*R^2 + ((x0+x1)(y0+y1) - x0y0 - x1y1)*R + x0y0`.
    fn karatsuba(&mut self, a: &Self, b: &Self) -> CtResult<()> {
        let half = a.len.min(b.len) / 2;
        if half == 0 {
            return self.schoolbook(a, b);
        }
        let _span = trace_span!("karatsuba", a_limbs = a.len, b_limbs = b.len, half).entered();
        let (x0, x1) = a.split_at_limb(half)?;
        let (y0, y1) = b.split_at_limb(half)?;

        let mut low = Self::new();
        low.mul_magnitudes(&x0, &y0)?;
        let mut high = Self::new();
        high.mul_magnitudes(&x1, &y1)?;

        let mut x_sum = Self::new();
        x_sum.add(&x0, &x1)?;
        let mut y_sum = Self::new();
        y_sum.add(&y0, &y1)?;
        let mut cross = Self::new();
        cross.mul_magnitudes(&x_sum, &y_sum)?;

        let mut outer = Self::new();
        outer.add(&low, &high)?;
        let mut middle = Self::new();
        middle.sub(&cross, &outer)?;

        middle.shift_left(half * LIMB_BITS)?;
        high.shift_left(2 * half * LIMB_BITS)?;
        let mut partial = Self::new();
        partial.add(&low, &middle)?;
        self.add(&partial, &high)
    }

    /// Splits `|self|` into the low `at` limbs and the rest.
    fn split_at_limb(&self, at: usize) -> CtResult<(Self, Self)> {
        let (low_limbs, high_limbs) = self.limbs().split_at(at);
        let mut low = Self::new();
        low.set_magnitude(low_limbs)?;
        let mut high = Self::new();
        high.set_magnitude(high_limbs)?;
        Ok((low, high))
    }
}

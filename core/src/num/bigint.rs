use crate::config::{FIXED_ALLOCATION, MAX_LIMBS};
use crate::error::CtIntError;
use crate::num::limb::{significant, zeroed_limbs, Limb, SignedLimb};
use crate::result::CtResult;
use subtle::Choice;
#[cfg(feature = "constant-time")]
use subtle::ConditionallySelectable;
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

mod add;
mod bits;
mod cmp;
mod codec;
mod format;
mod mul;

pub use codec::ByteOrder;
pub use mul::Algorithm;

/// An arbitrary-precision signed integer.
///
/// The magnitude lives in `limbs`, least significant limb first. Only the
/// first `len` limbs carry value; anything above them is scratch that no
/// operation reads. Zero is always `len == 0` with a positive sign.
///
/// Operations write their result into `self` and take their operands by
/// shared reference, so a destination can never alias an operand.
#[allow(clippy::len_without_is_empty)]
pub struct BigInt {
    // +1 or -1
    sign: i8,
    len: usize,
    // len() is the capacity; grows only
    limbs: Vec<Limb>,
}

impl BigInt {
    /// The empty zero value. Does not allocate.
    pub const fn new() -> Self {
        Self {
            sign: 1,
            len: 0,
            limbs: Vec::new(),
        }
    }

    /// `1` for zero and positive values, `-1` for negative ones.
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// Number of significant limbs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.limbs.len()
    }

    /// The significant limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs[..self.len]
    }

    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    /// Flips the sign of a nonzero value.
    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }

    /// Wipes and frees the limb buffer, leaving the empty zero value.
    pub fn release(&mut self) {
        if !self.limbs.is_empty() {
            trace!(capacity = self.limbs.len(), "releasing limb buffer");
        }
        self.limbs.zeroize();
        self.limbs = Vec::new();
        self.len = 0;
        self.sign = 1;
    }

    /// Makes sure at least `limbs` limbs are backing the value.
    ///
    /// A larger buffer is allocated zeroed, the significant limbs are moved
    /// over and the old buffer is wiped before being freed. Never shrinks.
    pub fn reserve(&mut self, limbs: usize) -> CtResult<()> {
        if limbs > MAX_LIMBS {
            return Err(CtIntError::CapacityExceeded);
        }
        if limbs <= self.limbs.len() {
            return Ok(());
        }
        let target = if FIXED_ALLOCATION { MAX_LIMBS } else { limbs };
        let mut grown = zeroed_limbs(target)?;
        grown[..self.len].copy_from_slice(&self.limbs[..self.len]);
        trace!(from = self.limbs.len(), to = target, "growing limb buffer");
        self.limbs.zeroize();
        self.limbs = grown;
        Ok(())
    }

    pub fn set_scalar(&mut self, value: SignedLimb) -> CtResult<()> {
        self.reserve(1)?;
        self.limbs[..self.len].zeroize();
        self.limbs[0] = value.unsigned_abs();
        self.len = 1;
        self.sign = if value < 0 { -1 } else { 1 };
        self.trim();
        Ok(())
    }

    /// Makes `self` an independent duplicate of `src`.
    pub fn copy_from(&mut self, src: &Self) -> CtResult<()> {
        self.reserve(src.len)?;
        self.overwrite_with(src);
        Ok(())
    }

    /// Copies `src` into `self` when `selector` is 1 and leaves `self` as it
    /// is when `selector` is 0.
    ///
    /// With the `constant-time` feature the same instructions run for both
    /// selectors: sign, length and every limb are blended rather than
    /// chosen by a branch. The buffer still grows to fit `src` whenever it
    /// is too small, whichever selector is passed; that only reveals lengths.
    pub fn conditional_copy(&mut self, selector: u8, src: &Self) -> CtResult<()> {
        let choice = selector_choice(selector)?;
        self.reserve(src.len)?;
        self.assign_selected(src, choice);
        Ok(())
    }

    /// Exchanges the values of `a` and `b` through a temporary.
    pub fn swap(a: &mut Self, b: &mut Self) -> CtResult<()> {
        let mut temp = Self::new();
        temp.copy_from(a)?;
        a.reserve(b.len)?;
        b.reserve(temp.len)?;
        a.overwrite_with(b);
        b.overwrite_with(&temp);
        Ok(())
    }

    /// Exchanges `a` and `b` when `selector` is 1, with the same guarantees
    /// as [`BigInt::conditional_copy`].
    pub fn conditional_swap(selector: u8, a: &mut Self, b: &mut Self) -> CtResult<()> {
        let choice = selector_choice(selector)?;
        let mut temp = Self::new();
        temp.copy_from(a)?;
        a.reserve(b.len)?;
        b.reserve(temp.len)?;
        a.assign_selected(b, choice);
        b.assign_selected(&temp, choice);
        Ok(())
    }

    // Caller must have reserved `src.len` limbs.
    fn overwrite_with(&mut self, src: &Self) {
        let stale = self.len.max(src.len);
        self.limbs[..src.len].copy_from_slice(src.limbs());
        self.limbs[src.len..stale].zeroize();
        self.len = src.len;
        self.sign = src.sign;
    }

    // Caller must have reserved `src.len` limbs.
    #[cfg(feature = "constant-time")]
    fn assign_selected(&mut self, src: &Self, choice: Choice) {
        let span = self.len.max(src.len);
        for (i, limb) in self.limbs[..span].iter_mut().enumerate() {
            let theirs = src.limbs().get(i).copied().unwrap_or(0);
            limb.conditional_assign(&theirs, choice);
        }
        self.sign.conditional_assign(&src.sign, choice);
        self.len = select_len(self.len, src.len, choice);
    }

    #[cfg(not(feature = "constant-time"))]
    fn assign_selected(&mut self, src: &Self, choice: Choice) {
        if bool::from(choice) {
            self.overwrite_with(src);
        }
    }

    /// Drops zero limbs from the top and gives zero its positive sign.
    pub(crate) fn trim(&mut self) {
        while self.len > 0 && self.limbs[self.len - 1] == 0 {
            self.len -= 1;
        }
        if self.len == 0 {
            self.sign = 1;
        }
    }

    pub(crate) fn set_zero(&mut self) {
        self.limbs[..self.len].zeroize();
        self.len = 0;
        self.sign = 1;
    }

    /// Replaces the value with the non-negative magnitude in `limbs`.
    pub(crate) fn set_magnitude(&mut self, limbs: &[Limb]) -> CtResult<()> {
        let used = significant(limbs);
        self.reserve(used)?;
        let stale = self.len.max(used);
        self.limbs[..used].copy_from_slice(&limbs[..used]);
        self.limbs[used..stale].zeroize();
        self.len = used;
        self.sign = 1;
        Ok(())
    }
}

fn selector_choice(selector: u8) -> CtResult<Choice> {
    if selector > 1 {
        return Err(CtIntError::InvalidArgument);
    }
    Ok(Choice::from(selector))
}

#[cfg(feature = "constant-time")]
#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
fn select_len(current: usize, other: usize, choice: Choice) -> usize {
    u64::conditional_select(&(current as u64), &(other as u64), choice) as usize
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BigInt {
    fn clone(&self) -> Self {
        Self {
            sign: self.sign,
            len: self.len,
            limbs: self.limbs().to_vec(),
        }
    }
}

impl From<SignedLimb> for BigInt {
    fn from(value: SignedLimb) -> Self {
        let mut n = Self::new();
        if value != 0 {
            n.limbs = vec![value.unsigned_abs()];
            n.len = 1;
            n.sign = if value < 0 { -1 } else { 1 };
        }
        n
    }
}

impl Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.release();
    }
}

impl Drop for BigInt {
    fn drop(&mut self) {
        self.limbs.zeroize();
    }
}

impl ZeroizeOnDrop for BigInt {}

use super::BigInt;
use crate::error::CtIntError;
use crate::num::limb::{bytes_to_limbs, Limb, LIMB_BYTES};
use crate::result::CtResult;
use zeroize::Zeroize;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ByteOrder {
    /// `buf[0]` is the most significant byte
    BigEndian,
    /// `buf[0]` is the least significant byte
    LittleEndian,
}

impl BigInt {
    /// Replaces the value with the non-negative magnitude encoded in `buf`.
    pub fn import_bytes(&mut self, buf: &[u8], order: ByteOrder) -> CtResult<()> {
        let limbs = bytes_to_limbs(buf.len());
        self.reserve(limbs)?;
        self.limbs[..self.len.max(limbs)].zeroize();
        match order {
            ByteOrder::BigEndian => {
                for (limb, chunk) in self.limbs.iter_mut().zip(buf.rchunks(LIMB_BYTES)) {
                    let mut bytes = [0; LIMB_BYTES];
                    bytes[LIMB_BYTES - chunk.len()..].copy_from_slice(chunk);
                    *limb = Limb::from_be_bytes(bytes);
                }
            }
            ByteOrder::LittleEndian => {
                for (limb, chunk) in self.limbs.iter_mut().zip(buf.chunks(LIMB_BYTES)) {
                    let mut bytes = [0; LIMB_BYTES];
                    bytes[..chunk.len()].copy_from_slice(chunk);
                    *limb = Limb::from_le_bytes(bytes);
                }
            }
        }
        self.len = limbs;
        self.sign = 1;
        self.trim();
        Ok(())
    }

    /// Writes the magnitude into `buf`, zero-filling the unused high-order
    /// bytes. Fails without touching `buf` when it is too short.
    pub fn export_bytes(&self, buf: &mut [u8], order: ByteOrder) -> CtResult<()> {
        if self.byte_length() > buf.len() {
            return Err(CtIntError::BufferTooSmall);
        }
        self.write_bytes(buf, order);
        Ok(())
    }

    // Caller guarantees `buf.len() >= self.byte_length()`.
    fn write_bytes(&self, buf: &mut [u8], order: ByteOrder) {
        buf.fill(0);
        let last = buf.len().saturating_sub(1);
        for i in 0..self.byte_length() {
            let byte = self.limbs[i / LIMB_BYTES].to_le_bytes()[i % LIMB_BYTES];
            match order {
                ByteOrder::BigEndian => buf[last - i] = byte,
                ByteOrder::LittleEndian => buf[i] = byte,
            }
        }
    }

    pub fn from_bytes(buf: &[u8], order: ByteOrder) -> CtResult<Self> {
        let mut n = Self::new();
        n.import_bytes(buf, order)?;
        Ok(n)
    }

    /// The magnitude in exactly `byte_length()` bytes; empty for zero.
    pub fn to_bytes(&self, order: ByteOrder) -> Vec<u8> {
        let mut buf = vec![0; self.byte_length()];
        self.write_bytes(&mut buf, order);
        buf
    }
}

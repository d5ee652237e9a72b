use super::BigInt;
use std::fmt;

impl BigInt {
    fn write_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool, prefix: bool) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        if prefix {
            write!(f, "0x")?;
        }
        let mut limbs = self.limbs().iter().rev();
        match limbs.next() {
            None => write!(f, "0")?,
            Some(top) if upper => write!(f, "{:X}", top)?,
            Some(top) => write!(f, "{:x}", top)?,
        }
        for limb in limbs {
            if upper {
                write!(f, "{:016X}", limb)?;
            } else {
                write!(f, "{:016x}", limb)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, false, true)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, false, f.alternate())
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, true, f.alternate())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

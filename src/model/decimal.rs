//! Fixed-point decimal scalar.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{Error, Result};

/// Largest number of fractional digits a [`Decimal`] may carry.
pub const MAX_SCALE: u8 = 28;

/// Largest magnitude representable in the 96-bit mantissa.
pub const MAX_MANTISSA: u128 = (1u128 << 96) - 1;

/// A base-10 fixed-point number: `mantissa / 10^scale`.
///
/// Equality and hashing are numeric, so `1.0 == 1.00`; rendering keeps the
/// stored scale. The model never computes with scalars, it only stores and
/// renders them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

impl Decimal {
    /// Build a decimal from a signed mantissa and a scale.
    ///
    /// Fails with [`Error::DecimalRange`] if `scale > MAX_SCALE` or the
    /// mantissa does not fit in 96 bits.
    pub fn new(mantissa: i128, scale: u8) -> Result<Self> {
        if scale > MAX_SCALE || mantissa.unsigned_abs() > MAX_MANTISSA {
            return Err(Error::DecimalRange { mantissa, scale });
        }
        Ok(Self { mantissa, scale })
    }

    /// Assemble a decimal from three 32-bit mantissa words, low to high.
    pub fn from_parts(lo: u32, mid: u32, hi: u32, negative: bool, scale: u8) -> Result<Self> {
        let magnitude = (lo as u128) | ((mid as u128) << 32) | ((hi as u128) << 64);
        let mantissa = magnitude as i128;
        Self::new(if negative { -mantissa } else { mantissa }, scale)
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa < 0
    }

    /// Same value with trailing fractional zeros stripped.
    fn normalized(&self) -> (i128, u8) {
        let (mut mantissa, mut scale) = (self.mantissa, self.scale);
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        (mantissa, scale)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl From<i64> for Decimal {
    fn from(v: i64) -> Self {
        Self { mantissa: v as i128, scale: 0 }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = self.scale as usize;
        if self.is_negative() {
            write!(f, "-")?;
        }
        if scale == 0 {
            return write!(f, "{digits}");
        }
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{int}.{frac}")
        } else {
            write!(f, "0.{}{digits}", "0".repeat(scale - digits.len()))
        }
    }
}

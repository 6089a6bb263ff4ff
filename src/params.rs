use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Width of the Keccak-f[1600] state in bits.
pub const STATE_BITS: usize = 1600;

/// SecurityLevel selects one of the six supported Keccak instances.
///
/// The rate is `1600 - 2 * bits` and the digest is `bits / 8` bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecurityLevel {
    /// Keccak-128, rate 1344.
    L128,
    /// Keccak-224, rate 1152.
    L224,
    /// Keccak-256, rate 1088.
    L256,
    /// Keccak-288, rate 1024.
    L288,
    /// Keccak-384, rate 832.
    L384,
    /// Keccak-512, rate 576.
    L512,
}

impl SecurityLevel {
    /// Every supported level, in ascending order.
    pub const ALL: [SecurityLevel; 6] = [
        SecurityLevel::L128,
        SecurityLevel::L224,
        SecurityLevel::L256,
        SecurityLevel::L288,
        SecurityLevel::L384,
        SecurityLevel::L512,
    ];

    /// from_bits maps a bit length to its level.
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(SecurityLevel::L128),
            224 => Ok(SecurityLevel::L224),
            256 => Ok(SecurityLevel::L256),
            288 => Ok(SecurityLevel::L288),
            384 => Ok(SecurityLevel::L384),
            512 => Ok(SecurityLevel::L512),
            _ => Err(Error::InvalidParameter(bits)),
        }
    }

    /// bits returns the security level in bits.
    pub const fn bits(self) -> usize {
        match self {
            SecurityLevel::L128 => 128,
            SecurityLevel::L224 => 224,
            SecurityLevel::L256 => 256,
            SecurityLevel::L288 => 288,
            SecurityLevel::L384 => 384,
            SecurityLevel::L512 => 512,
        }
    }

    /// rate_bits returns the number of state bits exchanged per permutation.
    pub const fn rate_bits(self) -> usize {
        STATE_BITS - (self.bits() << 1)
    }

    /// rate_bytes returns the absorption block size in bytes.
    pub const fn rate_bytes(self) -> usize {
        self.rate_bits() >> 3
    }

    /// capacity_bits returns the hidden part of the state.
    pub const fn capacity_bits(self) -> usize {
        STATE_BITS - self.rate_bits()
    }

    /// output_bits returns the digest length in bits.
    pub const fn output_bits(self) -> usize {
        self.capacity_bits() / 2
    }

    /// output_bytes returns the digest length in bytes.
    pub const fn output_bytes(self) -> usize {
        self.output_bits() / 8
    }
}

/// validate_rate checks that a rate fits a 1600-bit state on whole lanes.
pub(crate) fn validate_rate(rate: usize) -> Result<()> {
    if rate == 0 || rate >= STATE_BITS || rate % 64 != 0 {
        return Err(Error::InvalidState("invalid rate value"));
    }
    Ok(())
}

impl TryFrom<usize> for SecurityLevel {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        SecurityLevel::from_bits(bits)
    }
}

impl FromStr for SecurityLevel {
    type Err = Error;

    // Accepts "256", "keccak256" and "keccak-256", case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("keccak")
            .map(|rest| rest.strip_prefix('-').unwrap_or(rest))
            .unwrap_or(lower.as_str());
        let bits = digits.parse::<usize>().map_err(|_| Error::InvalidParameter(0))?;
        SecurityLevel::from_bits(bits)
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "keccak-{}", self.bits())
    }
}

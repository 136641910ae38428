use serde::{Deserialize, Serialize};

/// Width of the significand in the reference table, in bits
pub const SIG_BITS: u32 = 64;

/// Smallest decimal exponent in the reference table. Together with `MAX_E` this gives
/// 611 entries
pub const MIN_E: i32 = -305;
pub const MAX_E: i32 = 305;

/// Inclusive range of valid normalized significands, `(MIN_SIG, MAX_SIG)`. E.g. for a
/// 64-bit significand this is `(2^63, 2^64 - 1)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SigRange(pub u64, pub u64);

impl SigRange {
    pub fn min(&self) -> u64 {
        self.0
    }

    pub fn max(&self) -> u64 {
        self.1
    }

    pub fn contains(&self, sig: u64) -> bool {
        sig >= self.0 && sig <= self.1
    }
}

/// Width of a significand field. Every table is computed at a single precision, but the
/// width is a parameter so narrower tables (e.g. 53 bits) can be generated with the same
/// approximation logic.
///
/// Since significands are stored in a `u64` the width is limited to `1..=64` bits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision {
    bits: u32,
}

impl Precision {
    /// The reference 64-bit significand
    pub const FULL: Self = Self { bits: SIG_BITS };

    /// Returns `None` if `bits` is not in `1..=64`
    pub const fn new(bits: u32) -> Option<Self> {
        if bits == 0 || bits > 64 {
            None
        } else {
            Some(Self { bits })
        }
    }

    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// `2^(N-1)`, the smallest significand with the top bit set
    pub const fn min_sig(&self) -> u64 {
        1 << (self.bits - 1)
    }

    /// `2^N - 1`, the largest significand that fits the field
    pub const fn max_sig(&self) -> u64 {
        u64::MAX >> (64 - self.bits)
    }

    pub const fn sig_range(&self) -> SigRange {
        SigRange(self.min_sig(), self.max_sig())
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u32> for Precision {
    type Error = String;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits).ok_or_else(|| format!("significand width must be in 1..=64, got {}", bits))
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        precision.bits
    }
}

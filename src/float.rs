use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::{
    consts::Precision,
    error::{TableError, TableResult},
};

/// Hand-rolled binary floating point magnitude. Formula to get true value is
/// `sig * 2^exp`
///
/// There is deliberately no arithmetic on this type, it only records the result of an
/// exact computation. The significand is always normalized for its precision (top bit
/// set), but the exponent is unrestricted in range.
///
/// # Examples
/// ```
/// use pow10_table::{NormalizedFloat, Precision};
///
/// // 10 = 0xA000_0000_0000_0000 * 2^-60
/// let ten = NormalizedFloat::new(0xA000_0000_0000_0000, -60, Precision::FULL);
///
/// assert_eq!(ten.sig(), 10 << 60);
/// assert_eq!(ten.exp(), -60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedFloat {
    sig: u64,
    exp: i64,
    precision: Precision,
}

impl NormalizedFloat {
    /// Create a `NormalizedFloat`, panicking if `sig` is not normalized for `precision`
    pub fn new(sig: u64, exp: i64, precision: Precision) -> Self {
        Self::checked_new(sig, exp, precision).unwrap_or_else(|| {
            panic!(
                "Invalid NormalizedFloat: sig {:#x} is outside {:?} for {} bits",
                sig,
                precision.sig_range(),
                precision.bits()
            )
        })
    }

    /// Create a `NormalizedFloat`, returning `None` if `sig` is not normalized for
    /// `precision`
    pub fn checked_new(sig: u64, exp: i64, precision: Precision) -> Option<Self> {
        precision.sig_range().contains(sig).then_some(Self {
            sig,
            exp,
            precision,
        })
    }

    pub fn sig(&self) -> u64 {
        self.sig
    }

    pub fn exp(&self) -> i64 {
        self.exp
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

// Both values are normalized to the same width, so a larger exponent always means a
// larger value. Floats of different precisions are not meaningfully ordered by this.
// Significand ranges of different widths are disjoint, so equal `sig` implies equal
// precision and `Equal` agrees with `==`.
impl Ord for NormalizedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.exp.cmp(&other.exp) {
            Ordering::Equal => (),
            ord => return ord,
        }
        self.sig.cmp(&other.sig)
    }
}

impl PartialOrd for NormalizedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for NormalizedFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x} * 2^{}", self.sig, self.exp)
    }
}

/// One row of a power table: the approximation of `10^e` for a single `e`, with the
/// exponent narrowed to the `i16` the consumer stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerTableEntry {
    pub significand: u64,
    pub exponent: i16,
}

impl PowerTableEntry {
    /// Narrow an approximation of `10^decimal` into a table entry
    pub fn from_float(decimal: i32, float: NormalizedFloat) -> TableResult<Self> {
        let exponent = i16::try_from(float.exp).map_err(|_| TableError::ExponentOutOfRange {
            decimal,
            binary: float.exp,
        })?;

        Ok(Self {
            significand: float.sig,
            exponent,
        })
    }
}

//! Exact measurement of rounding error in units of the last place.
//!
//! The error `|f * 10^e - sig * 2^exp| / 2^exp` is kept as a fraction of two big
//! integers and only ever compared by cross multiplication. `f64` only appears when an
//! error is formatted for a human.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
};

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::{
    error::{TableError, TableResult},
    float::NormalizedFloat,
    utils::{pow10, pow2},
};

/// Rounding error of an approximation, in ULPs of the approximation, as the exact
/// fraction `numer / denom`. Equality and ordering are by value, so `1/2 == 2/4`
#[derive(Debug, Clone)]
pub struct UlpError {
    numer: BigUint,
    denom: BigUint,
}

impl UlpError {
    /// Measure how far `float` is from `f * 10^e`
    pub fn measure(f: &BigUint, e: i32, float: &NormalizedFloat) -> Self {
        // decimal = dec_num / dec_den exactly
        let (dec_num, dec_den) = if e >= 0 {
            (f * pow10(e.unsigned_abs()), BigUint::one())
        } else {
            (f.clone(), pow10(e.unsigned_abs()))
        };

        // Dividing both values by the ULP 2^exp turns the binary side into just `sig`
        // and scales the decimal side by 2^-exp
        let shift = float.exp().unsigned_abs();
        let (scaled_num, denom) = if float.exp() < 0 {
            (dec_num << shift, dec_den)
        } else {
            (dec_num, dec_den << shift)
        };
        let binary = BigUint::from(float.sig()) * &denom;

        let numer = if scaled_num >= binary {
            scaled_num - binary
        } else {
            binary - scaled_num
        };

        Self { numer, denom }
    }

    pub fn numer(&self) -> &BigUint {
        &self.numer
    }

    pub fn denom(&self) -> &BigUint {
        &self.denom
    }

    /// Compares the error against exactly one half ULP
    pub fn cmp_half(&self) -> Ordering {
        (&self.numer << 1u32).cmp(&self.denom)
    }

    pub fn is_below_half(&self) -> bool {
        self.cmp_half() == Ordering::Less
    }

    /// Lossy value of the error, only meant for logs and error messages
    pub fn approx_f64(&self) -> f64 {
        // 53 bits of quotient is as much as an f64 can hold
        let scaled = (&self.numer << 53u32) / &self.denom;
        scaled.to_f64().unwrap_or(f64::INFINITY) / (1u64 << 53) as f64
    }
}

impl Ord for UlpError {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialEq for UlpError {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for UlpError {}

impl PartialOrd for UlpError {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for UlpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ULP", self.approx_f64())
    }
}

/// Exact value of `float` as `(numer, denom)`
pub fn exact_value(float: &NormalizedFloat) -> (BigUint, BigUint) {
    let sig = BigUint::from(float.sig());
    let shift = float.exp().unsigned_abs();

    if float.exp() < 0 {
        (sig, pow2(shift))
    } else {
        (sig << shift, BigUint::one())
    }
}

/// Required self-test for every produced approximation: the error must be strictly below
/// half a ULP. Returns the measured error on success
pub fn verify(f: &BigUint, e: i32, float: &NormalizedFloat) -> TableResult<UlpError> {
    let error = UlpError::measure(f, e, float);

    if error.is_below_half() {
        Ok(error)
    } else {
        tracing::error!(exponent = e, %float, %error, "approximation is not correctly rounded");
        Err(TableError::AccuracyViolation {
            exponent: e,
            float: *float,
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{consts::Precision, traits::Pred};

    const P: Precision = Precision::FULL;

    fn one() -> BigUint {
        BigUint::one()
    }

    #[test]
    fn exact_powers_have_no_error() {
        let one_f = NormalizedFloat::new(1 << 63, -63, P);
        let error = UlpError::measure(&one(), 0, &one_f);
        assert_eq!(error.numer(), &BigUint::from(0u8));
        assert_eq!(error.cmp_half(), Ordering::Less);

        // 10^19 < 2^64 so it is exact too
        let big = NormalizedFloat::new(10_000_000_000_000_000_000, 0, P);
        assert_eq!(
            UlpError::measure(&one(), 19, &big).numer(),
            &BigUint::from(0u8)
        );
    }

    #[test]
    fn off_by_one_ulp() {
        let one_f = NormalizedFloat::new((1 << 63) + 1, -63, P);
        let error = UlpError::measure(&one(), 0, &one_f);

        assert_eq!(error.cmp_half(), Ordering::Greater);
        assert_eq!(error.approx_f64(), 1.0);
        assert!(verify(&one(), 0, &one_f).is_err());
    }

    #[test]
    fn exactly_half_is_rejected() {
        let narrow = Precision::new(2).unwrap();
        let float = NormalizedFloat::new(0b10, -1, narrow);
        // 5 * 10^-1 = 0.5 and float = 1.0, off by 0.5 / 2^-1 = 1 ULP
        let error = UlpError::measure(&BigUint::from(5u8), -1, &float);
        assert_eq!(error.cmp_half(), Ordering::Greater);

        // 1.25 is halfway between 1.0 (0b10 * 2^-1) and 1.5 (0b11 * 2^-1)
        let error = UlpError::measure(&BigUint::from(125u8), -2, &float);
        assert_eq!(error.cmp_half(), Ordering::Equal);
        assert!(!error.is_below_half());
        assert!(matches!(
            verify(&BigUint::from(125u8), -2, &float),
            Err(TableError::AccuracyViolation { exponent: -2, .. })
        ));
    }

    #[test]
    fn error_ordering() {
        let float = NormalizedFloat::new(0xA000_0000_0000_0000, -60, P);
        let exact = UlpError::measure(&one(), 1, &float);
        let off = UlpError::measure(&one(), 1, &float.pred());

        assert!(exact < off);
    }

    #[test]
    fn equal_fractions() {
        let half = UlpError {
            numer: BigUint::from(1u32),
            denom: BigUint::from(2u32),
        };
        let two_quarters = UlpError {
            numer: BigUint::from(2u32),
            denom: BigUint::from(4u32),
        };

        assert_eq!(half, two_quarters);
        assert_eq!(half.cmp(&two_quarters), Ordering::Equal);
        assert_eq!(half.cmp_half(), two_quarters.cmp_half());
    }

    #[test]
    fn exact_values() {
        let z = NormalizedFloat::new(1 << 63, -63, P);
        assert_eq!(exact_value(&z), (BigUint::from(1u64 << 63), pow2(63)));

        let z = NormalizedFloat::new(1 << 63, 2, P);
        assert_eq!(exact_value(&z), (BigUint::from(1u64 << 63) << 2u32, one()));
    }
}

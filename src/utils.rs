use num_bigint::BigUint;
use num_traits::One;

/// Exact `10^exp`
pub fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u8).pow(exp)
}

/// Exact `2^exp`
pub fn pow2(exp: u64) -> BigUint {
    BigUint::one() << exp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), BigUint::from(1u8));
        assert_eq!(pow10(19), BigUint::from(10_000_000_000_000_000_000u64));
        assert_eq!(pow10(305).to_string().len(), 306);
    }

    #[test]
    fn test_pow2() {
        assert_eq!(pow2(0), BigUint::from(1u8));
        assert_eq!(pow2(63), BigUint::from(1u64 << 63));
        assert_eq!(pow2(1077).bits(), 1078);
    }
}

//! Clinger's Algorithm M: the correctly rounded binary approximation of `f * 10^e`,
//! computed with nothing but exact big integer arithmetic.
//!
//! The decimal value is held as an exact ratio `u / v`. Doubling `u` or `v` moves the
//! ratio one binary octave at a time until its integer part is a normalized significand,
//! and the remainder of that final division decides the rounding.

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{
    consts::{Precision, SigRange},
    error::{TableError, TableResult},
    float::NormalizedFloat,
    traits::Succ,
    ulp::{self, UlpError},
    utils::pow10,
};

/// A verified approximation together with its measured error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approximation {
    pub float: NormalizedFloat,
    pub error: UlpError,
}

/// Computes the `precision`-bit float nearest to `f * 10^e`, breaking ties to an even
/// significand.
///
/// # Examples
/// ```
/// use pow10_table::{approximate, NormalizedFloat, Precision};
///
/// let ten = approximate(1, 1, Precision::FULL).unwrap();
/// assert_eq!(ten, NormalizedFloat::new(0xA000_0000_0000_0000, -60, Precision::FULL));
/// ```
///
/// # Errors
/// `TableError::ArithmeticPrecondition` if `f <= 0`
pub fn approximate(
    f: impl Into<BigInt>,
    e: i32,
    precision: Precision,
) -> TableResult<NormalizedFloat> {
    let f = positive_mantissa(f.into())?;
    algorithm_m(&f, e, precision)
}

/// Same as `approximate` but also runs the accuracy self-test on the result
///
/// # Errors
/// `TableError::AccuracyViolation` if the result is not strictly within half a ULP of
/// `f * 10^e`, on top of the errors of `approximate`
pub fn approximate_checked(
    f: impl Into<BigInt>,
    e: i32,
    precision: Precision,
) -> TableResult<Approximation> {
    let f = positive_mantissa(f.into())?;
    let float = algorithm_m(&f, e, precision)?;
    let error = ulp::verify(&f, e, &float)?;

    Ok(Approximation { float, error })
}

fn positive_mantissa(f: BigInt) -> TableResult<BigUint> {
    f.to_biguint()
        .filter(|f| !f.is_zero())
        .ok_or_else(|| {
            TableError::ArithmeticPrecondition(format!(
                "decimal mantissa must be positive, got {}",
                f
            ))
        })
}

fn algorithm_m(
    f: &BigUint,
    e: i32,
    precision: Precision,
) -> TableResult<NormalizedFloat> {
    let SigRange(min_sig, max_sig) = precision.sig_range();
    let (min_sig, max_sig) = (BigUint::from(min_sig), BigUint::from(max_sig));

    let (mut u, mut v) = if e < 0 {
        (f.clone(), pow10(e.unsigned_abs()))
    } else {
        (f * pow10(e.unsigned_abs()), BigUint::one())
    };

    // Running binary exponent owed to the result, -1 per doubling of u and +1 per
    // doubling of v
    let mut k: i64 = 0;
    let mut x = &u / &v;

    // The window [min_sig, max_sig] spans a whole octave, so some power of two always
    // lands the quotient in it
    loop {
        if x < min_sig {
            u <<= 1u32;
            k -= 1;
        } else if x > max_sig {
            v <<= 1u32;
            k += 1;
        } else {
            break;
        }
        x = &u / &v;
    }

    tracing::trace!(e, k, "quotient normalized");

    ratio_to_float(&u, &v, k, precision)
}

/// Rounds the ratio `u / v` to an integer significand with binary exponent `k`. Ties go
/// to the even significand, and rounding up past `MAX_SIG` renormalizes to
/// `(MIN_SIG, k + 1)`.
///
/// # Errors
/// `TableError::ArithmeticPrecondition` if `v` is zero or `floor(u / v)` is not a
/// normalized significand for `precision`
pub fn ratio_to_float(
    u: &BigUint,
    v: &BigUint,
    k: i64,
    precision: Precision,
) -> TableResult<NormalizedFloat> {
    if v.is_zero() {
        return Err(TableError::ArithmeticPrecondition(
            "ratio denominator must be non-zero".to_string(),
        ));
    }

    let (q, r) = u.div_rem(v);
    let v_r = v - &r;

    let z = u64::try_from(&q)
        .ok()
        .and_then(|sig| NormalizedFloat::checked_new(sig, k, precision))
        .ok_or_else(|| {
            TableError::ArithmeticPrecondition(format!(
                "quotient {} is not a normalized {}-bit significand",
                q,
                precision.bits()
            ))
        })?;

    Ok(match r.cmp(&v_r) {
        Ordering::Less => z,
        Ordering::Greater => z.succ(),
        Ordering::Equal if q.is_even() => z,
        Ordering::Equal => z.succ(),
    })
}

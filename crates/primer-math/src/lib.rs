#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of checked arithmetic helpers."]
#![doc = ""]
#![doc = "Every fallible routine reports a [`MathError`] instead of wrapping or"]
#![doc = "panicking. Callers decide how to surface the failure."]

pub mod error;
pub use error::MathError;

/// Adds two integers, reporting overflow instead of wrapping.
///
/// # Arguments
///
/// * `a`: First addend.
/// * `b`: Second addend.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the sum does not fit in an `i64`.
pub fn add(a: i64, b: i64) -> Result<i64, MathError> {
    a.checked_add(b)
        .ok_or(MathError::Overflow("sum exceeds the i64 range"))
}

/// Multiplies two integers, reporting overflow instead of wrapping.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the product does not fit in an `i64`.
pub fn multiply(a: i64, b: i64) -> Result<i64, MathError> {
    a.checked_mul(b)
        .ok_or(MathError::Overflow("product exceeds the i64 range"))
}

/// Divides `dividend` by `divisor`.
///
/// Only a divisor of exactly zero (positive or negative) is rejected. A
/// NaN divisor passes through and yields a NaN quotient, as plain `f64`
/// division would.
///
/// # Arguments
///
/// * `dividend`: The value to divide.
/// * `divisor`: The value to divide by.
///
/// # Errors
///
/// Returns [`MathError::DivisionByZero`] if `divisor` is zero.
pub fn divide(dividend: f64, divisor: f64) -> Result<f64, MathError> {
    if divisor == 0.0 {
        return Err(MathError::DivisionByZero("divisor must be non-zero"));
    }
    Ok(dividend / divisor)
}

/// Sums a slice of integers. The empty slice sums to zero.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if a running total leaves the `i64` range.
pub fn sum(values: &[i64]) -> Result<i64, MathError> {
    let mut total: i64 = 0;
    for &value in values {
        total = total
            .checked_add(value)
            .ok_or(MathError::Overflow("running total exceeds the i64 range"))?;
    }
    Ok(total)
}

/// Returns the largest value in a slice, or `None` for the empty slice.
#[must_use]
pub fn max(values: &[i64]) -> Option<i64> {
    values.iter().copied().max()
}

/// Computes `n!` recursively.
///
/// `0!` and `1!` are both `1`.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] for `n >= 21`, where the result no longer
/// fits in a `u64`.
pub fn factorial(n: u64) -> Result<u64, MathError> {
    // 20! is the largest factorial that fits in a u64, so answer larger
    // inputs up front rather than recursing toward them.
    if n > 20 {
        return Err(MathError::Overflow("factorial exceeds the u64 range"));
    }
    if n <= 1 {
        return Ok(1);
    }
    let smaller = factorial(n - 1)?;
    smaller
        .checked_mul(n)
        .ok_or(MathError::Overflow("factorial exceeds the u64 range"))
}

/// Computes the greatest common divisor of `a` and `b` by Euclid's algorithm.
///
/// `gcd(n, 0)` and `gcd(0, n)` are both `n`, so `gcd(0, 0)` is `0`.
#[must_use]
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

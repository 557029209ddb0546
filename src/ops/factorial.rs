// ============================================================================
// Factorial
// n! over non-negative integers
// ============================================================================

use crate::numeric::{MathError, MathResult, Operation};

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

const INVALID_DOMAIN: MathError = MathError::InvalidDomain {
    operation: Operation::Factorial,
};

const OVERFLOW: MathError = MathError::Overflow {
    operation: Operation::Factorial,
};

/// Computes `n!`.
///
/// # Errors
/// - `InvalidDomain` when `n` is negative
/// - `Overflow` when `n > MAX_FACTORIAL_INPUT`
///
/// # Example
/// ```
/// use mathutils::factorial;
///
/// assert_eq!(factorial(5), Ok(120));
/// assert_eq!(factorial(0), Ok(1));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> MathResult<u128> {
    if n < 0 {
        return Err(INVALID_DOMAIN);
    }
    (2..=n as u128).try_fold(1u128, |acc, i| acc.checked_mul(i).ok_or(OVERFLOW))
}

/// Computes `x!` for a real argument that must hold an integer value.
///
/// # Errors
/// - `InvalidDomain` when `x` is negative, fractional, NaN, or infinite
/// - `Overflow` when `x > MAX_FACTORIAL_INPUT`
pub fn factorial_of(x: f64) -> MathResult<u128> {
    if !x.is_finite() || x.fract() != 0.0 || x < 0.0 {
        return Err(INVALID_DOMAIN);
    }
    if x > MAX_FACTORIAL_INPUT as f64 {
        return Err(OVERFLOW);
    }
    factorial(x as i64)
}

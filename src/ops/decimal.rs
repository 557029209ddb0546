// ============================================================================
// Decimal Operations
// Exact base-10 variants backed by rust_decimal
// ============================================================================
//
// Results are exact wherever the 96-bit mantissa can hold them. Anything that
// does not fit is reported as Overflow instead of being rounded to infinity.

use crate::numeric::{MathError, MathResult, Operation};
use rust_decimal::{Decimal, MathematicalOps};

/// Largest `n` whose factorial fits in a `Decimal`.
pub const MAX_DECIMAL_FACTORIAL_INPUT: i64 = 27;

#[inline]
fn overflow(operation: Operation) -> MathError {
    MathError::Overflow { operation }
}

/// Checked `a + b`.
#[inline]
pub fn add(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(Operation::Add))
}

/// Checked `a - b`.
#[inline]
pub fn subtract(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| overflow(Operation::Subtract))
}

/// Checked `a * b`.
#[inline]
pub fn multiply(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(Operation::Multiply))
}

/// Checked `a / b`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero, `Overflow` when the quotient
/// is out of range.
#[inline]
pub fn divide(a: Decimal, b: Decimal) -> MathResult<Decimal> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    a.checked_div(b).ok_or_else(|| overflow(Operation::Divide))
}

/// Raises `base` to an integer `exponent`.
///
/// # Errors
/// Returns `DivisionByZero` for a zero base with a negative exponent,
/// `Overflow` when the result is out of range.
pub fn power(base: Decimal, exponent: i64) -> MathResult<Decimal> {
    if base.is_zero() && exponent < 0 {
        return Err(MathError::DivisionByZero);
    }
    base.checked_powi(exponent).ok_or_else(|| overflow(Operation::Power))
}

/// Non-negative square root of `a`.
///
/// # Errors
/// Returns `InvalidDomain` when `a` is negative.
pub fn square_root(a: Decimal) -> MathResult<Decimal> {
    if a < Decimal::ZERO {
        return Err(MathError::InvalidDomain {
            operation: Operation::SquareRoot,
        });
    }
    a.sqrt().ok_or(MathError::InvalidDomain {
        operation: Operation::SquareRoot,
    })
}

/// Computes `n!` as a `Decimal`.
///
/// # Errors
/// - `InvalidDomain` when `n` is negative
/// - `Overflow` when `n > MAX_DECIMAL_FACTORIAL_INPUT`
pub fn factorial(n: i64) -> MathResult<Decimal> {
    if n < 0 {
        return Err(MathError::InvalidDomain {
            operation: Operation::Factorial,
        });
    }
    if n > MAX_DECIMAL_FACTORIAL_INPUT {
        return Err(overflow(Operation::Factorial));
    }
    (2..=n).try_fold(Decimal::ONE, |acc, i| {
        acc.checked_mul(Decimal::from(i))
            .ok_or_else(|| overflow(Operation::Factorial))
    })
}

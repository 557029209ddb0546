// ============================================================================
// Floating-Point Operations
// The seven elementary operations over f64
// ============================================================================

use crate::numeric::{MathError, MathResult, Operation};

/// Returns `a + b`.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero (either sign).
#[inline]
pub fn divide(a: f64, b: f64) -> MathResult<f64> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `base` to `exponent`.
///
/// # Errors
/// - `DivisionByZero` when `base` is zero and `exponent` is negative
/// - `InvalidDomain` when `base` is negative and `exponent` is a finite
///   non-integer (the result would be complex)
/// - `Overflow` when finite inputs produce a non-finite result
///
/// # Example
/// ```
/// use mathutils::power;
///
/// assert_eq!(power(2.0, 10.0), Ok(1024.0));
/// assert_eq!(power(9.0, 0.5), Ok(3.0));
/// ```
pub fn power(base: f64, exponent: f64) -> MathResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(MathError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(MathError::InvalidDomain {
            operation: Operation::Power,
        });
    }

    let result = base.powf(exponent);
    if base.is_finite() && exponent.is_finite() && !result.is_finite() {
        return Err(MathError::Overflow {
            operation: Operation::Power,
        });
    }
    Ok(result)
}

/// Returns the non-negative square root of `a`.
///
/// # Errors
/// Returns `InvalidDomain` when `a` is negative or NaN.
pub fn square_root(a: f64) -> MathResult<f64> {
    if a.is_nan() || a < 0.0 {
        return Err(MathError::InvalidDomain {
            operation: Operation::SquareRoot,
        });
    }
    // sqrt(-0.0) is -0.0
    if a == 0.0 {
        return Ok(0.0);
    }
    Ok(a.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Tolerance;
    use proptest::prelude::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(multiply(-4.0, 2.5), -10.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(-9.0, 4.0), Ok(-2.25));
        assert_eq!(divide(0.0, 3.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(1.0, 0.0), Err(MathError::DivisionByZero));
        assert_eq!(divide(1.0, -0.0), Err(MathError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), Ok(1024.0));
        assert_eq!(power(2.0, -2.0), Ok(0.25));
        assert_eq!(power(-2.0, 3.0), Ok(-8.0));
        assert_eq!(power(0.0, 0.0), Ok(1.0));
        assert_eq!(power(-5.0, 0.0), Ok(1.0));
        assert_eq!(power(0.0, 3.0), Ok(0.0));
    }

    #[test]
    fn test_power_invalid() {
        assert_eq!(power(0.0, -1.0), Err(MathError::DivisionByZero));
        assert_eq!(
            power(-8.0, 1.0 / 3.0),
            Err(MathError::InvalidDomain {
                operation: Operation::Power
            })
        );
        assert_eq!(
            power(10.0, 400.0),
            Err(MathError::Overflow {
                operation: Operation::Power
            })
        );
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(16.0), Ok(4.0));
        assert_eq!(square_root(2.25), Ok(1.5));
        assert_eq!(square_root(0.0), Ok(0.0));

        let neg_zero = square_root(-0.0).unwrap();
        assert!(neg_zero.is_sign_positive());
    }

    #[test]
    fn test_square_root_invalid() {
        let domain = Err(MathError::InvalidDomain {
            operation: Operation::SquareRoot,
        });
        assert_eq!(square_root(-1.0), domain);
        assert_eq!(square_root(f64::NEG_INFINITY), domain);
        assert_eq!(square_root(f64::NAN), domain);
    }

    proptest! {
        #[test]
        fn prop_add_commutes(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn prop_subtract_inverts_add(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let tol = Tolerance::default();
            prop_assert!(tol.approx_eq(subtract(add(a, b), b), a));
        }

        #[test]
        fn prop_divide_inverts_multiply(a in -1e6f64..1e6, b in 1e-3f64..1e6) {
            let tol = Tolerance::default();
            let q = divide(multiply(a, b), b).unwrap();
            prop_assert!(tol.approx_eq(q, a));
        }

        #[test]
        fn prop_square_root_squares_back(a in 0f64..1e9) {
            let root = square_root(a).unwrap();
            prop_assert!(root >= 0.0);
            prop_assert!(Tolerance::default().approx_eq(root * root, a));
        }

        #[test]
        fn prop_power_integer_exponent(base in -10f64..10.0, exp in 0u32..8) {
            let expected = base.powi(exp as i32);
            let actual = power(base, exp as f64).unwrap();
            prop_assert!(Tolerance::default().approx_eq(actual, expected));
        }
    }
}

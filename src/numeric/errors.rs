// ============================================================================
// Numeric Errors
// Error types for arithmetic operations
// ============================================================================

use super::operation::Operation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while evaluating an arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MathError {
    /// Attempted division by zero
    DivisionByZero,
    /// Input lies outside the mathematically valid range of the operation
    InvalidDomain { operation: Operation },
    /// Result is not representable in the output type
    Overflow { operation: Operation },
    /// Wrong number of arguments supplied to a dispatched operation
    ArityMismatch {
        operation: Operation,
        expected: usize,
        found: usize,
    },
    /// Operation name could not be resolved
    UnknownOperation,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "division by zero"),
            MathError::InvalidDomain { operation } => {
                write!(f, "invalid domain: input outside the domain of {}", operation)
            },
            MathError::Overflow { operation } => {
                write!(f, "arithmetic overflow: result of {} is not representable", operation)
            },
            MathError::ArityMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "arity mismatch: {} takes {} argument(s), got {}",
                operation, expected, found
            ),
            MathError::UnknownOperation => write!(f, "unknown operation"),
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for arithmetic operations
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(MathError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            MathError::InvalidDomain {
                operation: Operation::SquareRoot
            }
            .to_string(),
            "invalid domain: input outside the domain of square_root"
        );
        assert_eq!(
            MathError::ArityMismatch {
                operation: Operation::Add,
                expected: 2,
                found: 1
            }
            .to_string(),
            "arity mismatch: add takes 2 argument(s), got 1"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MathError::DivisionByZero, MathError::DivisionByZero);
        assert_ne!(
            MathError::InvalidDomain {
                operation: Operation::Factorial
            },
            MathError::InvalidDomain {
                operation: Operation::SquareRoot
            }
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MathError::UnknownOperation);
        assert_eq!(err.to_string(), "unknown operation");
    }
}

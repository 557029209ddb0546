// ============================================================================
// Operation Dispatch
// Evaluates an operation chosen at runtime
// ============================================================================

use super::{factorial, float};
use crate::numeric::{MathError, MathResult, Operation};

impl Operation {
    /// Applies this operation to `args`.
    ///
    /// Factorial results are converted to `f64` and may lose precision above
    /// 2^53.
    ///
    /// # Errors
    /// Returns `ArityMismatch` when `args.len()` differs from
    /// [`Operation::arity`], otherwise whatever the operation itself returns.
    ///
    /// # Example
    /// ```
    /// use mathutils::numeric::Operation;
    ///
    /// assert_eq!(Operation::Divide.apply(&[10.0, 2.0]), Ok(5.0));
    /// assert_eq!(Operation::Factorial.apply(&[5.0]), Ok(120.0));
    /// ```
    pub fn apply(self, args: &[f64]) -> MathResult<f64> {
        let expected = self.arity();
        if args.len() != expected {
            return Err(MathError::ArityMismatch {
                operation: self,
                expected,
                found: args.len(),
            });
        }

        tracing::trace!(operation = %self, ?args, "evaluating");

        // Length matches arity from here on
        let result = match self {
            Operation::Add => Ok(float::add(args[0], args[1])),
            Operation::Subtract => Ok(float::subtract(args[0], args[1])),
            Operation::Multiply => Ok(float::multiply(args[0], args[1])),
            Operation::Divide => float::divide(args[0], args[1]),
            Operation::Power => float::power(args[0], args[1]),
            Operation::SquareRoot => float::square_root(args[0]),
            Operation::Factorial => factorial::factorial_of(args[0]).map(|v| v as f64),
        };

        if let Err(err) = &result {
            tracing::debug!(operation = %self, ?args, error = %err, "evaluation failed");
        }
        result
    }
}

/// Resolves `name` to an [`Operation`] and applies it to `args`.
///
/// # Errors
/// Returns `UnknownOperation` when `name` is not one of the seven operation
/// names, otherwise see [`Operation::apply`].
pub fn evaluate(name: &str, args: &[f64]) -> MathResult<f64> {
    let operation: Operation = name.parse().inspect_err(|_| {
        tracing::debug!(name, "unknown operation");
    })?;
    operation.apply(args)
}

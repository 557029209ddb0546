// ============================================================================
// Math Utilities Library
// Elementary arithmetic operations with explicit domain errors
// ============================================================================

//! # mathutils
//!
//! Simple mathematical utilities: add, subtract, multiply, divide, power,
//! square root and factorial.
//!
//! ## Features
//!
//! - **Pure functions**: no state, no I/O, safe to call from any thread
//! - **Explicit errors**: division by zero and out-of-domain inputs come back
//!   as [`MathError`](numeric::MathError), never as a panic or NaN
//! - **Exact decimal variants** in [`ops::decimal`] backed by `rust_decimal`
//! - **Runtime dispatch** by operation name via [`ops::evaluate`]
//!
//! ## Example
//!
//! ```rust
//! use mathutils::prelude::*;
//!
//! assert_eq!(add(2.0, 3.0), 5.0);
//! assert_eq!(divide(10.0, 2.0), Ok(5.0));
//! assert_eq!(divide(1.0, 0.0), Err(MathError::DivisionByZero));
//! assert_eq!(square_root(16.0), Ok(4.0));
//! assert_eq!(factorial(5), Ok(120));
//! assert_eq!(power(2.0, 10.0), Ok(1024.0));
//! ```

pub mod numeric;
pub mod ops;

pub use ops::{add, divide, factorial, multiply, power, square_root, subtract};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{MathError, MathResult, Operation, Tolerance};
    pub use crate::ops::{
        add, divide, evaluate, factorial, factorial_of, multiply, power, square_root, subtract,
    };
}

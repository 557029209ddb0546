// ============================================================================
// Operations Module
// The elementary arithmetic operations
// ============================================================================

mod dispatch;

pub mod decimal;
pub mod factorial;
pub mod float;

pub use dispatch::evaluate;
pub use factorial::{factorial, factorial_of, MAX_FACTORIAL_INPUT};
pub use float::{add, divide, multiply, power, square_root, subtract};

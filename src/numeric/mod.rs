// ============================================================================
// Numeric Module
// Shared types for the arithmetic operations
// ============================================================================
//
// This module provides:
// - MathError: Error types for arithmetic operations
// - Operation: Names and arities of the seven operations
// - Tolerance: Floating-point comparison bounds
//
// Design principles:
// - All fallible arithmetic returns Result (no panics)
// - Every type is Copy and carries no state

mod errors;
mod operation;
mod tolerance;

pub use errors::{MathError, MathResult};
pub use operation::Operation;
pub use tolerance::Tolerance;

// ============================================================================
// Tolerance
// Floating-point comparison configuration
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute and relative bounds used to compare floating-point results.
///
/// Two values `a` and `b` are considered equal when
/// `|a - b| <= max(absolute, relative * max(|a|, |b|))`.
///
/// # Example
/// ```
/// use mathutils::numeric::Tolerance;
///
/// let tol = Tolerance::default();
/// assert!(tol.approx_eq(0.1 + 0.2, 0.3));
/// assert!(!Tolerance::exact().approx_eq(0.1 + 0.2, 0.3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    /// Largest absolute difference accepted
    pub absolute: f64,

    /// Largest difference accepted relative to the larger magnitude
    pub relative: f64,
}

impl Tolerance {
    /// Default bound for both absolute and relative comparisons.
    pub const DEFAULT_EPSILON: f64 = 1e-9;

    /// Creates a tolerance from explicit bounds.
    ///
    /// # Errors
    /// Returns a description of the problem when either bound is negative,
    /// NaN, or infinite.
    pub fn new(absolute: f64, relative: f64) -> Result<Self, String> {
        let tolerance = Self { absolute, relative };
        tolerance.validate()?;
        Ok(tolerance)
    }

    /// Bit-for-bit comparison (zero tolerance).
    pub const fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Validates the bounds.
    pub fn validate(&self) -> Result<(), String> {
        if !self.absolute.is_finite() || self.absolute < 0.0 {
            return Err(format!(
                "absolute tolerance must be finite and non-negative, got {}",
                self.absolute
            ));
        }
        if !self.relative.is_finite() || self.relative < 0.0 {
            return Err(format!(
                "relative tolerance must be finite and non-negative, got {}",
                self.relative
            ));
        }
        Ok(())
    }

    /// Compares two values within this tolerance.
    ///
    /// NaN is never equal to anything. Infinities compare equal only to an
    /// infinity of the same sign.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.absolute.max(self.relative * scale)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: Self::DEFAULT_EPSILON,
            relative: Self::DEFAULT_EPSILON,
        }
    }
}

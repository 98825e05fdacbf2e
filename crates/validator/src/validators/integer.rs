//! Integer range validator

use crate::foundation::result::reject;
use crate::foundation::{Validate, ValidationResult};

/// Validates that an integer lies within optional inclusive bounds.
///
/// An unset bound is `None`, which is distinct from a bound of `0`.
///
/// # Examples
///
/// ```
/// use fluent_validator::prelude::*;
///
/// let age = integer().min(18).max(120);
/// assert!(age.validate(&18).is_valid());
/// assert_eq!(
///     age.validate(&15).error_message(),
///     "Value must be greater than or equal to 18"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntegerValidator {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerValidator {
    /// Creates a validator with no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Configured lower bound, if any.
    pub fn lower_bound(&self) -> Option<i64> {
        self.min
    }

    /// Configured upper bound, if any.
    pub fn upper_bound(&self) -> Option<i64> {
        self.max
    }
}

impl Validate for IntegerValidator {
    type Input = i64;

    fn validate(&self, input: &i64) -> ValidationResult {
        if let Some(min) = self.min {
            if *input < min {
                return reject(
                    "min",
                    format!("Value must be greater than or equal to {min}"),
                );
            }
        }

        if let Some(max) = self.max {
            if *input > max {
                return reject("max", format!("Value must be less than or equal to {max}"));
            }
        }

        ValidationResult::valid()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! The outcome of a single validation call.
//!
//! A [`ValidationResult`] is either valid (with an empty message) or invalid
//! with a human-readable explanation. Fields are private so that invariant
//! cannot be broken after construction.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::ValidatorError;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Pass/fail outcome of [`Validate::validate`](crate::foundation::Validate::validate).
///
/// Uses `Cow<'static, str>` so the fixed messages of the built-in validators
/// never allocate.
///
/// # Examples
///
/// ```
/// use fluent_validator::foundation::ValidationResult;
///
/// let ok = ValidationResult::valid();
/// assert!(ok.is_valid());
/// assert_eq!(ok.error_message(), "");
///
/// let failed = ValidationResult::invalid("Value is required");
/// assert!(!failed.is_valid());
/// assert_eq!(failed.error_message(), "Value is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    error_message: Cow<'static, str>,
}

impl ValidationResult {
    /// A passing result with an empty message.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: Cow::Borrowed(""),
        }
    }

    /// A failing result carrying `message`.
    #[must_use]
    pub fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            is_valid: false,
            error_message: message.into(),
        }
    }

    /// Returns `true` if the value passed every configured check.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The failure explanation; empty when [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Replaces the message of a failed result. Passing results are returned
    /// unchanged.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        if self.is_valid {
            self
        } else {
            Self::invalid(message)
        }
    }

    /// Converts into a `Result` so failures can be propagated with `?`.
    ///
    /// ```
    /// use fluent_validator::prelude::*;
    ///
    /// fn check_age(age: i64) -> Result<i64, ValidatorError> {
    ///     integer().min(18).validate(&age).into_result()?;
    ///     Ok(age)
    /// }
    ///
    /// assert!(check_age(30).is_ok());
    /// assert!(check_age(12).is_err());
    /// ```
    pub fn into_result(self) -> Result<(), ValidatorError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidatorError::Failed {
                message: self.error_message,
            })
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            f.write_str("valid")
        } else {
            write!(f, "invalid: {}", self.error_message)
        }
    }
}

impl From<ValidationResult> for Result<(), ValidatorError> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

/// Builds a failed result and records which rule rejected the value.
pub(crate) fn reject(
    rule: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationResult {
    let result = ValidationResult::invalid(message);
    tracing::trace!(rule, message = result.error_message(), "validation rejected");
    result
}

// ============================================================================
// TESTS
// ============================================================================

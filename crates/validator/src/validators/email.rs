//! Email address validator
//!
//! Reuses [`StringValidator`] by composition: the wrapped validator starts
//! out with the email pattern and keeps every other string rule available.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationResult, ValidatorError};
use crate::validators::string::{LengthMode, StringValidator};

/// Pattern every email validator starts with.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Message reported for any failure on a non-empty address.
const INVALID_EMAIL: &str = "Invalid email address format";

/// Validates email addresses.
///
/// Runs the full string check sequence. A failure on a non-empty value is
/// reported as "Invalid email address format"; an empty value with
/// [`required`](Self::required) still reports "Value is required".
///
/// # Examples
///
/// ```
/// use fluent_validator::prelude::*;
///
/// let validator = email();
/// assert!(validator.validate("user@example.com").is_valid());
/// assert!(validator.validate("").is_valid());
/// assert_eq!(
///     validator.validate("not-an-email").error_message(),
///     "Invalid email address format"
/// );
///
/// let required = email().required();
/// assert_eq!(required.validate("").error_message(), "Value is required");
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
    inner: StringValidator,
}

impl EmailValidator {
    /// Creates a validator preset with [`EMAIL_PATTERN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: StringValidator::new().matches_regex(EMAIL_REGEX.clone()),
        }
    }

    /// Rejects the empty string.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.map(StringValidator::required)
    }

    /// Sets whether the empty string is rejected.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required(self, required: bool) -> Self {
        self.map(|inner| inner.with_required(required))
    }

    /// Minimum length of a non-empty address. `0` disables the check.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize) -> Self {
        self.map(|inner| inner.min_length(min))
    }

    /// Maximum length of an address.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize) -> Self {
        self.map(|inner| inner.max_length(max))
    }

    /// Replaces the email pattern with a stricter (or looser) one.
    pub fn matches(self, pattern: &str) -> Result<Self, ValidatorError> {
        Ok(Self {
            inner: self.inner.matches(pattern)?,
        })
    }

    /// Replaces the email pattern with an already compiled expression.
    #[must_use = "builder methods must be chained or built"]
    pub fn matches_regex(self, regex: Regex) -> Self {
        self.map(|inner| inner.matches_regex(regex))
    }

    /// Selects how length is counted. Defaults to [`LengthMode::Chars`].
    #[must_use = "builder methods must be chained or built"]
    pub fn length_mode(self, mode: LengthMode) -> Self {
        self.map(|inner| inner.length_mode(mode))
    }

    /// The underlying string configuration.
    pub fn as_string_validator(&self) -> &StringValidator {
        &self.inner
    }

    fn map(self, f: impl FnOnce(StringValidator) -> StringValidator) -> Self {
        Self {
            inner: f(self.inner),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for EmailValidator {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        let result = self.inner.validate(input);
        if input.is_empty() {
            result
        } else {
            result.with_message(INVALID_EMAIL)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

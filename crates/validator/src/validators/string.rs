//! String validator
//!
//! One configurable validator covering presence, length bounds and a
//! regular-expression pattern. Checks run in a fixed order and the first
//! failure wins: required, minimum length, maximum length, pattern. An empty
//! string skips every check except `required`.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::result::reject;
use crate::foundation::{Validate, ValidationResult, ValidatorError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// STRING VALIDATOR
// ============================================================================

/// Validates strings against presence, length and pattern rules.
///
/// # Examples
///
/// ```
/// use fluent_validator::prelude::*;
///
/// let username = string()
///     .required()
///     .min_length(5)
///     .max_length(20)
///     .matches("^[a-zA-Z0-9_]+$")?;
///
/// assert!(username.validate("john123").is_valid());
/// assert_eq!(
///     username.validate("bob").error_message(),
///     "Minimum length is 5 characters"
/// );
/// # Ok::<(), ValidatorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    required: bool,
    min_length: usize,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    mode: LengthMode,
}

impl StringValidator {
    /// Creates a validator with no rules; every string passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects the empty string.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.with_required(true)
    }

    /// Sets whether the empty string is rejected.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Minimum length of a non-empty value. `0` disables the check.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Maximum length of a value.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Requires non-empty values to match `pattern`.
    ///
    /// The pattern is compiled here, so a malformed expression is reported at
    /// configuration time rather than during validation.
    pub fn matches(self, pattern: &str) -> Result<Self, ValidatorError> {
        let regex = Regex::new(pattern).map_err(|source| ValidatorError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.matches_regex(regex))
    }

    /// Requires non-empty values to match an already compiled expression.
    #[must_use = "builder methods must be chained or built"]
    pub fn matches_regex(mut self, regex: Regex) -> Self {
        self.pattern = Some(regex);
        self
    }

    /// Selects how length is counted. Defaults to [`LengthMode::Chars`].
    #[must_use = "builder methods must be chained or built"]
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether the empty string is rejected.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Configured minimum length (`0` when unchecked).
    pub fn min(&self) -> usize {
        self.min_length
    }

    /// Configured maximum length, if any.
    pub fn max(&self) -> Option<usize> {
        self.max_length
    }

    /// Configured pattern, if any.
    pub fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }
}

impl Validate for StringValidator {
    type Input = str;

    fn validate(&self, input: &str) -> ValidationResult {
        if input.is_empty() {
            return if self.required {
                reject("required", "Value is required")
            } else {
                ValidationResult::valid()
            };
        }

        let len = self.mode.measure(input);

        if self.min_length > 0 && len < self.min_length {
            return reject(
                "min_length",
                format!("Minimum length is {} characters", self.min_length),
            );
        }

        if let Some(max) = self.max_length {
            if len > max {
                return reject("max_length", format!("Maximum length is {max} characters"));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(input) {
                return reject("pattern", "Value does not match the required pattern");
            }
        }

        ValidationResult::valid()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Error type for validator configuration and conversion failures.
//!
//! Built-in validators never return this from `validate`; a failed check is a
//! [`ValidationResult`](crate::foundation::ValidationResult). `ValidatorError`
//! covers everything that is not a verdict on a value: a pattern that does
//! not compile, an input of the wrong shape, malformed rule configuration, or
//! a failed result the caller chose to propagate with `?`.

use std::borrow::Cow;

use thiserror::Error;

/// The single error kind of the crate.
///
/// Custom validators may raise it to signal malformed configuration instead of
/// returning a failed result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// A regular expression given to `matches` did not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compilation error from the regex engine.
        #[source]
        source: regex::Error,
    },

    /// An input could not be converted to the type a validator checks.
    #[error("Expected {expected}, got {actual}")]
    TypeMismatch {
        /// What the validator accepts, e.g. "a string".
        expected: &'static str,
        /// What was supplied, e.g. "number".
        actual: &'static str,
    },

    /// A value failed validation.
    #[error("{message}")]
    Failed {
        /// The message of the failed result.
        message: Cow<'static, str>,
    },

    /// Rule configuration could not be parsed.
    #[error("invalid rule configuration: {0}")]
    Rules(#[from] serde_json::Error),
}

impl ValidatorError {
    /// Creates a [`Failed`](Self::Failed) error with a custom message.
    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Returns `true` if this error is a verdict on a value rather than a
    /// configuration or conversion problem.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

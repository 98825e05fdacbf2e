//! Validator configuration as data.
//!
//! [`Rules`] describes a validator in any serde format, so validation rules
//! can live in configuration files instead of code. Building a [`Rules`]
//! value yields an [`AnyValidator`], which checks `serde_json::Value`
//! inputs.
//!
//! # Examples
//!
//! ```
//! use fluent_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = Rules::from_json(r#"{
//!     "type": "string",
//!     "required": true,
//!     "min_length": 5,
//!     "max_length": 20,
//!     "pattern": "^[a-zA-Z0-9_]+$"
//! }"#)?;
//!
//! let username = rules.build()?;
//! assert!(username.validate(&json!("john123")).is_valid());
//! assert_eq!(
//!     username.validate(&json!(null)).error_message(),
//!     "Value is required"
//! );
//! # Ok::<(), ValidatorError>(())
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{Validate, ValidationResult, ValidatorError};
use crate::validators::{
    DateValidator, EmailValidator, IntegerValidator, LengthMode, StringValidator,
};

// ============================================================================
// TYPED RULES
// ============================================================================

/// Configuration of a [`StringValidator`] or [`EmailValidator`].
///
/// For email rules, a missing `pattern` keeps the built-in email pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringRules {
    /// Reject the empty string.
    pub required: bool,
    /// Minimum length of a non-empty value; `0` disables the check.
    pub min_length: usize,
    /// Maximum length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression non-empty values must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// How length is counted.
    pub length_mode: LengthMode,
}

impl TryFrom<&StringRules> for StringValidator {
    type Error = ValidatorError;

    fn try_from(rules: &StringRules) -> Result<Self, Self::Error> {
        let mut validator = StringValidator::new()
            .with_required(rules.required)
            .min_length(rules.min_length)
            .length_mode(rules.length_mode);
        if let Some(max) = rules.max_length {
            validator = validator.max_length(max);
        }
        if let Some(pattern) = &rules.pattern {
            validator = validator.matches(pattern)?;
        }
        Ok(validator)
    }
}

impl TryFrom<&StringRules> for EmailValidator {
    type Error = ValidatorError;

    fn try_from(rules: &StringRules) -> Result<Self, Self::Error> {
        let mut validator = EmailValidator::new()
            .with_required(rules.required)
            .min_length(rules.min_length)
            .length_mode(rules.length_mode);
        if let Some(max) = rules.max_length {
            validator = validator.max_length(max);
        }
        if let Some(pattern) = &rules.pattern {
            validator = validator.matches(pattern)?;
        }
        Ok(validator)
    }
}

/// Configuration of an [`IntegerValidator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerRules {
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl From<&IntegerRules> for IntegerValidator {
    fn from(rules: &IntegerRules) -> Self {
        let mut validator = IntegerValidator::new();
        if let Some(min) = rules.min {
            validator = validator.min(min);
        }
        if let Some(max) = rules.max {
            validator = validator.max(max);
        }
        validator
    }
}

/// Configuration of a [`DateValidator`]. Dates are ISO-8601 (`YYYY-MM-DD`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRules {
    /// Earliest accepted date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDate>,
    /// Latest accepted date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDate>,
}

impl From<&DateRules> for DateValidator<NaiveDate> {
    fn from(rules: &DateRules) -> Self {
        let mut validator = DateValidator::new();
        if let Some(after) = rules.after {
            validator = validator.after(after);
        }
        if let Some(before) = rules.before {
            validator = validator.before(before);
        }
        validator
    }
}

// ============================================================================
// TAGGED RULES
// ============================================================================

/// Configuration of any built-in validator, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rules {
    /// `{"type": "string", ...}`
    String(StringRules),
    /// `{"type": "integer", ...}`
    Integer(IntegerRules),
    /// `{"type": "date", ...}`
    Date(DateRules),
    /// `{"type": "email", ...}`
    Email(StringRules),
}

impl Rules {
    /// Parses rules from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ValidatorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses rules from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, ValidatorError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The `"type"` tag of these rules.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Date(_) => "date",
            Self::Email(_) => "email",
        }
    }

    /// Builds the configured validator.
    ///
    /// Fails only if a `pattern` does not compile.
    pub fn build(&self) -> Result<AnyValidator, ValidatorError> {
        let validator = match self {
            Self::String(rules) => AnyValidator::String(rules.try_into()?),
            Self::Integer(rules) => AnyValidator::Integer(rules.into()),
            Self::Date(rules) => AnyValidator::Date(rules.into()),
            Self::Email(rules) => AnyValidator::Email(rules.try_into()?),
        };
        tracing::debug!(kind = self.kind(), "built validator from rules");
        Ok(validator)
    }
}

// ============================================================================
// ANY VALIDATOR
// ============================================================================

/// A built-in validator chosen at runtime, validating JSON values.
///
/// Strings and emails accept JSON strings (`null` counts as empty), integers
/// accept JSON integers, and dates accept ISO-8601 strings. Any other shape
/// fails with a type-mismatch message.
#[derive(Debug, Clone)]
pub enum AnyValidator {
    /// See [`StringValidator`].
    String(StringValidator),
    /// See [`IntegerValidator`].
    Integer(IntegerValidator),
    /// See [`DateValidator`].
    Date(DateValidator<NaiveDate>),
    /// See [`EmailValidator`].
    Email(EmailValidator),
}

impl Validate for AnyValidator {
    type Input = Value;

    fn validate(&self, input: &Value) -> ValidationResult {
        match self {
            Self::String(v) => v.validate_any(input),
            Self::Integer(v) => v.validate_any(input),
            Self::Date(v) => v.validate_any(input),
            Self::Email(v) => v.validate_any(input),
        }
    }
}

impl TryFrom<&Rules> for AnyValidator {
    type Error = ValidatorError;

    fn try_from(rules: &Rules) -> Result<Self, Self::Error> {
        rules.build()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_tagged_rules() {
        let rules = Rules::from_value(json!({ "type": "integer", "min": 18, "max": 120 })).unwrap();
        assert_eq!(
            rules,
            Rules::Integer(IntegerRules {
                min: Some(18),
                max: Some(120)
            })
        );
        assert_eq!(rules.kind(), "integer");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let rules = Rules::from_json(r#"{ "type": "string" }"#).unwrap();
        assert_eq!(rules, Rules::String(StringRules::default()));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = Rules::from_json(r#"{ "type": "uuid" }"#).unwrap_err();
        assert!(matches!(err, ValidatorError::Rules(_)));
    }

    #[test]
    fn bad_pattern_fails_build() {
        let rules = Rules::String(StringRules {
            pattern: Some("[".to_string()),
            ..StringRules::default()
        });
        assert!(matches!(
            rules.build(),
            Err(ValidatorError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn date_rules_from_iso_strings() {
        let rules =
            Rules::from_json(r#"{ "type": "date", "after": "2024-01-01", "before": "2024-12-31" }"#)
                .unwrap();
        let validator = rules.build().unwrap();
        assert!(validator.validate(&json!("2024-06-01")).is_valid());
        assert_eq!(
            validator.validate(&json!("2025-01-01")).error_message(),
            "Date must be before the maximum date"
        );
        assert_eq!(
            validator.validate(&json!("June 1st")).error_message(),
            "Expected an ISO-8601 date, got string"
        );
    }

    #[test]
    fn email_rules_keep_default_pattern() {
        let validator = Rules::from_json(r#"{ "type": "email", "required": true }"#)
            .unwrap()
            .build()
            .unwrap();
        assert!(validator.validate(&json!("user@example.com")).is_valid());
        assert_eq!(
            validator.validate(&json!("nope")).error_message(),
            "Invalid email address format"
        );
        assert_eq!(
            validator.validate(&json!("")).error_message(),
            "Value is required"
        );
    }

    #[test]
    fn email_rules_honor_length_mode() {
        let rules = json!({
            "type": "email",
            "max_length": 6,
            "length_mode": "bytes",
            "pattern": "^.+@.+$"
        });
        let email = Rules::from_value(rules.clone()).unwrap().build().unwrap();
        assert_eq!(
            email.validate(&json!("\u{e9}@a.bc")).error_message(),
            "Invalid email address format"
        );

        let mut as_string = rules;
        as_string["type"] = json!("string");
        let string = Rules::from_value(as_string).unwrap().build().unwrap();
        assert_eq!(
            string.validate(&json!("\u{e9}@a.bc")).error_message(),
            "Maximum length is 6 characters"
        );
    }

    #[test]
    fn type_mismatch_is_a_failed_result() {
        let validator = Rules::Integer(IntegerRules::default()).build().unwrap();
        assert_eq!(
            validator.validate(&json!("12")).error_message(),
            "Expected an integer, got string"
        );
    }

    #[test]
    fn serializes_back_to_json() {
        let rules = Rules::String(StringRules {
            required: true,
            min_length: 3,
            ..StringRules::default()
        });
        assert_eq!(
            serde_json::to_value(&rules).unwrap(),
            json!({
                "type": "string",
                "required": true,
                "min_length": 3,
                "length_mode": "chars"
            })
        );
    }
}

//! Entry points for creating validators.
//!
//! [`ValidatorBuilder`] groups one constructor per validator kind; the free
//! functions are the same constructors for use through the prelude.

use chrono::NaiveDate;

use crate::validators::{DateValidator, EmailValidator, IntegerValidator, StringValidator};

/// Stateless factory for default-configured validators.
///
/// # Examples
///
/// ```
/// use fluent_validator::builder::ValidatorBuilder;
/// use fluent_validator::foundation::Validate;
///
/// let age = ValidatorBuilder::integer().min(18).max(120);
/// assert!(!age.validate(&15).is_valid());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorBuilder;

impl ValidatorBuilder {
    /// A [`StringValidator`] with no rules.
    #[must_use]
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    /// An [`IntegerValidator`] with no bounds.
    #[must_use]
    pub fn integer() -> IntegerValidator {
        IntegerValidator::new()
    }

    /// A [`DateValidator`] over [`NaiveDate`] with no bounds.
    #[must_use]
    pub fn date() -> DateValidator<NaiveDate> {
        DateValidator::new()
    }

    /// An [`EmailValidator`] preset with the email pattern.
    #[must_use]
    pub fn email() -> EmailValidator {
        EmailValidator::new()
    }
}

/// Creates a [`StringValidator`] with no rules.
#[must_use]
pub fn string() -> StringValidator {
    ValidatorBuilder::string()
}

/// Creates an [`IntegerValidator`] with no bounds.
#[must_use]
pub fn integer() -> IntegerValidator {
    ValidatorBuilder::integer()
}

/// Creates a [`DateValidator`] over [`NaiveDate`] with no bounds.
#[must_use]
pub fn date() -> DateValidator<NaiveDate> {
    ValidatorBuilder::date()
}

/// Creates an [`EmailValidator`].
#[must_use]
pub fn email() -> EmailValidator {
    ValidatorBuilder::email()
}

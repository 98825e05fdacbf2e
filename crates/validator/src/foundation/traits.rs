//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all validators implement.

use std::borrow::Borrow;

use crate::foundation::validatable::AsValidatable;
use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Generic over the input type through `Input`, so a validator can exist for
/// any type without a shared base class. Validation never fails with an
/// error: the outcome is always a [`ValidationResult`].
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// A custom validator only needs `validate`:
///
/// ```
/// use fluent_validator::foundation::{Validate, ValidationResult};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> ValidationResult {
///         if input % 2 == 0 {
///             ValidationResult::valid()
///         } else {
///             ValidationResult::invalid("Value must be even")
///         }
///     }
/// }
///
/// assert!(Even.is_valid(&4));
/// assert_eq!(Even.validate(&3).error_message(), "Value must be even");
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Must not change the validator: the same input always yields the same
    /// result.
    fn validate(&self, input: &Self::Input) -> ValidationResult;

    /// Shorthand for `self.validate(input).is_valid()`.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_valid()
    }

    /// Validates any value that can be viewed as `Self::Input`.
    ///
    /// Lets a single validator accept `String`, narrower integer types or a
    /// `serde_json::Value` without the caller converting first. A value that
    /// cannot be converted yields a failed result describing the mismatch.
    ///
    /// ```
    /// use fluent_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let name = string().required().max_length(5);
    /// assert!(name.validate_any(&String::from("alice")).is_valid());
    /// assert!(name.validate_any(&json!("bob")).is_valid());
    /// assert!(!name.validate_any(&json!(null)).is_valid());
    ///
    /// let age = integer().min(18);
    /// assert!(age.validate_any(&30_u8).is_valid());
    /// ```
    fn validate_any<S>(&self, value: &S) -> ValidationResult
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        match value.as_validatable() {
            Ok(output) => self.validate(output.borrow()),
            Err(err) => crate::foundation::result::reject("type_mismatch", err.to_string()),
        }
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================

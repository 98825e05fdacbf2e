//! Prelude module for convenient imports.
//!
//! Provides a single `use fluent_validator::prelude::*;` import that brings
//! in the traits, result and error types, every validator, the factory
//! functions and rule configuration.
//!
//! # Examples
//!
//! ```
//! use fluent_validator::prelude::*;
//!
//! let age = integer().min(18).max(120);
//! let result = age.validate(&15);
//! assert!(!result.is_valid());
//! assert_eq!(result.error_message(), "Value must be greater than or equal to 18");
//! ```

// ============================================================================
// FOUNDATION: Core traits and types
// ============================================================================

pub use crate::foundation::{AsValidatable, Validate, ValidationResult, ValidatorError};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    DateValidator, EMAIL_PATTERN, EmailValidator, IntegerValidator, LengthMode, StringValidator,
};

// ============================================================================
// BUILDER
// ============================================================================

pub use crate::builder::{ValidatorBuilder, date, email, integer, string};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rules::{AnyValidator, DateRules, IntegerRules, Rules, StringRules};

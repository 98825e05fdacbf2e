//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Outcome**: [`ValidationResult`]
//! - **Errors**: [`ValidatorError`]
//!
//! # Architecture
//!
//! ## 1. Type Safety
//!
//! Validators are generic over their input type through an associated type:
//!
//! ```rust,ignore
//! impl Validate for StringValidator {
//!     type Input = str;  // Only validates strings
//!
//!     fn validate(&self, input: &str) -> ValidationResult {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## 2. Results, not errors
//!
//! A failed check is a value. `validate` always returns a
//! [`ValidationResult`]; [`ValidatorError`] is reserved for configuration
//! problems and for callers that want `?` via
//! [`ValidationResult::into_result`].
//!
//! # Examples
//!
//! ```
//! use fluent_validator::foundation::Validate;
//! use fluent_validator::builder::string;
//!
//! let validator = string().min_length(5);
//! assert!(validator.validate("hello").is_valid());
//! assert!(!validator.validate("hi").is_valid());
//! ```

pub mod error;
pub(crate) mod result;
pub mod traits;
pub mod validatable;

pub use error::ValidatorError;
pub use result::ValidationResult;
pub use traits::Validate;
pub use validatable::AsValidatable;

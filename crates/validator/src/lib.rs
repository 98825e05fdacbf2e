//! # fluent-validator
//!
//! Typed validators for strings, integers, dates and emails, configured with
//! chained builder calls and evaluated with a single `validate` call.
//!
//! ## Quick Start
//!
//! ```
//! use fluent_validator::prelude::*;
//!
//! let username = string()
//!     .required()
//!     .min_length(5)
//!     .max_length(20)
//!     .matches("^[a-zA-Z0-9_]+$")?;
//!
//! let result = username.validate("john123");
//! assert!(result.is_valid());
//! assert_eq!(result.error_message(), "");
//! # Ok::<(), ValidatorError>(())
//! ```
//!
//! ## Outcomes
//!
//! `validate` never panics and never returns `Err`: every outcome is a
//! [`ValidationResult`](foundation::ValidationResult). Use
//! [`into_result`](foundation::ValidationResult::into_result) to propagate a
//! failure with `?`.
//!
//! ## Built-in Validators
//!
//! - **String**: [`StringValidator`](validators::StringValidator)
//! - **Integer**: [`IntegerValidator`](validators::IntegerValidator)
//! - **Date**: [`DateValidator`](validators::DateValidator)
//! - **Email**: [`EmailValidator`](validators::EmailValidator)
//!
//! ## Custom Validators
//!
//! Implement [`Validate`](foundation::Validate) for any input type; nothing
//! needs to be registered.
//!
//! ## Configuration
//!
//! [`Rules`](rules::Rules) describes a validator as serde data, so rules can
//! be loaded from JSON.

pub mod builder;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod validators;

//! Built-in validators
//!
//! - [`StringValidator`]: required flag, length bounds, pattern
//! - [`IntegerValidator`]: inclusive `min` / `max`
//! - [`DateValidator`]: `after` / `before` bounds over any ordered date type
//! - [`EmailValidator`]: a string validator preset with an email pattern
//!
//! # Examples
//!
//! ```
//! use fluent_validator::prelude::*;
//!
//! let username = string().required().min_length(3).max_length(20);
//! let age = integer().min(18).max(120);
//!
//! assert!(username.validate("alice").is_valid());
//! assert!(!age.validate(&12).is_valid());
//! ```

pub mod date;
pub mod email;
pub mod integer;
pub mod string;

pub use date::DateValidator;
pub use email::{EMAIL_PATTERN, EmailValidator};
pub use integer::IntegerValidator;
pub use string::{LengthMode, StringValidator};

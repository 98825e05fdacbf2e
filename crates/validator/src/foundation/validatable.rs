//! AsValidatable trait with GAT for universal type conversion
//!
//! Lets validators accept several input types (owned strings, narrower
//! integers, `serde_json::Value`) through
//! [`Validate::validate_any`](crate::foundation::Validate::validate_any).

use std::borrow::Borrow;

use chrono::NaiveDate;
use serde_json::Value;

use crate::foundation::ValidatorError;

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses GAT to allow returning either borrowed reference or owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidatorError>;
}

// ============================================================================
// STRINGS
// ============================================================================

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidatorError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a> = &'a str;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidatorError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for std::borrow::Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidatorError> {
        Ok(self.as_ref())
    }
}

// ============================================================================
// INTEGERS
// ============================================================================

impl AsValidatable<i64> for i64 {
    type Output<'a> = i64;

    #[inline]
    fn as_validatable(&self) -> Result<i64, ValidatorError> {
        Ok(*self)
    }
}

macro_rules! widen_to_i64 {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsValidatable<i64> for $ty {
                type Output<'a> = i64;

                #[inline]
                fn as_validatable(&self) -> Result<i64, ValidatorError> {
                    Ok(i64::from(*self))
                }
            }
        )+
    };
}

widen_to_i64!(i8, i16, i32, u8, u16, u32);

macro_rules! narrow_to_i64 {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsValidatable<i64> for $ty {
                type Output<'a> = i64;

                #[inline]
                fn as_validatable(&self) -> Result<i64, ValidatorError> {
                    i64::try_from(*self).map_err(|_| ValidatorError::TypeMismatch {
                        expected: "an integer within i64 range",
                        actual: stringify!($ty),
                    })
                }
            }
        )+
    };
}

narrow_to_i64!(u64, usize, isize, i128, u128);

// ============================================================================
// DATES
// ============================================================================

impl AsValidatable<NaiveDate> for NaiveDate {
    type Output<'a> = NaiveDate;

    #[inline]
    fn as_validatable(&self) -> Result<NaiveDate, ValidatorError> {
        Ok(*self)
    }
}

impl AsValidatable<NaiveDate> for str {
    type Output<'a> = NaiveDate;

    fn as_validatable(&self) -> Result<NaiveDate, ValidatorError> {
        self.parse().map_err(|_| ValidatorError::TypeMismatch {
            expected: "an ISO-8601 date",
            actual: "string",
        })
    }
}

// ============================================================================
// SERDE_JSON::VALUE
// ============================================================================

/// Name of a JSON value's type, for mismatch messages.
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `null` is treated as an absent value: the empty string.
impl AsValidatable<str> for Value {
    type Output<'a> = &'a str;

    fn as_validatable(&self) -> Result<&str, ValidatorError> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            Value::Null => Ok(""),
            other => Err(ValidatorError::TypeMismatch {
                expected: "a string",
                actual: json_type_name(other),
            }),
        }
    }
}

impl AsValidatable<i64> for Value {
    type Output<'a> = i64;

    fn as_validatable(&self) -> Result<i64, ValidatorError> {
        self.as_i64().ok_or_else(|| ValidatorError::TypeMismatch {
            expected: "an integer",
            actual: json_type_name(self),
        })
    }
}

impl AsValidatable<NaiveDate> for Value {
    type Output<'a> = NaiveDate;

    fn as_validatable(&self) -> Result<NaiveDate, ValidatorError> {
        match self {
            Value::String(s) => AsValidatable::<NaiveDate>::as_validatable(s.as_str()),
            other => Err(ValidatorError::TypeMismatch {
                expected: "an ISO-8601 date",
                actual: json_type_name(other),
            }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

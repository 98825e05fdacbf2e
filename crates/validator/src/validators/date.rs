//! Date bound validator
//!
//! Bounds are exclusive-fail thresholds: a value equal to `after` or
//! `before` passes.

use chrono::NaiveDate;

use crate::foundation::result::reject;
use crate::foundation::{Validate, ValidationResult};

/// Validates that a date falls between optional bounds.
///
/// Generic over the date type so the same validator works with
/// [`NaiveDate`] (the default), `NaiveDateTime` or `DateTime<Tz>`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fluent_validator::prelude::*;
///
/// let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let booking = date().after(ymd(2024, 1, 1)).before(ymd(2024, 12, 31));
/// assert!(booking.validate(&ymd(2024, 6, 15)).is_valid());
/// assert!(booking.validate(&ymd(2024, 1, 1)).is_valid());
/// assert_eq!(
///     booking.validate(&ymd(2023, 12, 31)).error_message(),
///     "Date must be after the minimum date"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateValidator<D = NaiveDate> {
    after: Option<D>,
    before: Option<D>,
}

impl<D> DateValidator<D> {
    /// Creates a validator with no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            after: None,
            before: None,
        }
    }

    /// Rejects dates earlier than `date`.
    #[must_use = "builder methods must be chained or built"]
    pub fn after(mut self, date: D) -> Self {
        self.after = Some(date);
        self
    }

    /// Rejects dates later than `date`.
    #[must_use = "builder methods must be chained or built"]
    pub fn before(mut self, date: D) -> Self {
        self.before = Some(date);
        self
    }

    /// Configured lower bound, if any.
    pub fn earliest(&self) -> Option<&D> {
        self.after.as_ref()
    }

    /// Configured upper bound, if any.
    pub fn latest(&self) -> Option<&D> {
        self.before.as_ref()
    }
}

impl<D> Default for DateValidator<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: PartialOrd> Validate for DateValidator<D> {
    type Input = D;

    fn validate(&self, input: &D) -> ValidationResult {
        if let Some(after) = &self.after {
            if input < after {
                return reject("after", "Date must be after the minimum date");
            }
        }

        if let Some(before) = &self.before {
            if input > before {
                return reject("before", "Date must be before the maximum date");
            }
        }

        ValidationResult::valid()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Single-value validators.
//!
//! Each validator takes the name of the field being checked together with its value, and returns
//! the value unchanged on success. Nothing is ever clamped or coerced: a value either satisfies the
//! constraint as given or the validator returns a [`ValidationError`] naming the field, the
//! offending value, and the violated [`Constraint`].
//!
//! ```rust
//! use chime_params::validators::{rate, strictly_positive};
//!
//! assert_eq!(rate("market_share", 0.15), Ok(0.15));
//! assert!(strictly_positive("n_days", 0).is_err());
//! ```
use std::fmt::Display;

use chrono::NaiveDate;

use crate::error::{Constraint, ParseError, ValidationError};

/// Succeeds iff `value >= 0`.
///
/// The zero of `T` is taken to be `T::default()`, which holds for every primitive numeric type.
/// `NaN` never compares as `>= 0` and is rejected.
pub fn positive<T>(field: &'static str, value: T) -> Result<T, ValidationError>
where
    T: PartialOrd + Default + Display + Copy,
{
    if value >= T::default() {
        Ok(value)
    } else {
        Err(ValidationError::new(field, value, Constraint::Positive))
    }
}

/// Succeeds iff `value > 0`.
pub fn strictly_positive<T>(field: &'static str, value: T) -> Result<T, ValidationError>
where
    T: PartialOrd + Default + Display + Copy,
{
    if value > T::default() {
        Ok(value)
    } else {
        Err(ValidationError::new(
            field,
            value,
            Constraint::StrictlyPositive,
        ))
    }
}

/// Succeeds for `None`, otherwise defers to [`strictly_positive`].
pub fn optional_strictly_positive<T>(
    field: &'static str,
    value: Option<T>,
) -> Result<Option<T>, ValidationError>
where
    T: PartialOrd + Default + Display + Copy,
{
    value.map(|v| strictly_positive(field, v)).transpose()
}

/// Succeeds iff `value` lies in the closed interval `[0, 1]`.
pub fn rate(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(field, value, Constraint::Rate))
    }
}

/// Accepts any calendar date, past or future.
///
/// A `NaiveDate` can only hold a real calendar date, so the type already carries the check; this
/// exists so that every date field passes through the same validation step as the numeric ones.
/// Use [`calendar_date`] to build a date from untrusted components.
pub fn date(field: &'static str, value: NaiveDate) -> Result<NaiveDate, ValidationError> {
    log::trace!("{field} = {value}");
    Ok(value)
}

/// Succeeds for `None`, otherwise defers to [`date`].
pub fn optional_date(
    field: &'static str,
    value: Option<NaiveDate>,
) -> Result<Option<NaiveDate>, ValidationError> {
    value.map(|v| date(field, v)).transpose()
}

/// Builds a date from year, month, and day components, rejecting components that do not name a
/// day on the proleptic Gregorian calendar (month 13, February 30, and so on).
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate { year, month, day })
}

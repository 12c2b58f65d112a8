//! Resolving a civil month of days at once.

use typikon_computus::Calendar;
use typikon_records::{RecordStore, SupplementalSource};
use typikon_year::YearCache;

use crate::day::Day;
use crate::error::DayError;
use crate::position::DayPosition;

/// Resolves every day of a civil Gregorian month, in order.
///
/// The month is always the civil one; under the Julian reckoning each day
/// is restated individually, so the result can straddle two fixed-cycle
/// months.
///
/// # Errors
///
/// Returns [`DayError`] if the month is invalid, the year unsupported, or
/// the store unreadable.
pub fn month_of_days(
    year: i32,
    month: u8,
    calendar: Calendar,
    years: &YearCache,
    store: &dyn RecordStore,
) -> Result<Vec<Day>, DayError> {
    let days_in_month = Calendar::Gregorian.days_in_month(year, month)?;
    let mut days = Vec::with_capacity(usize::from(days_in_month));
    for day in 1..=days_in_month {
        let position = DayPosition::new(year, month, day, calendar, years)?;
        days.push(position.resolve(store)?);
    }
    Ok(days)
}

/// Like [`month_of_days`], folding a supplemental source into each day.
///
/// # Errors
///
/// Returns [`DayError`] if the month is invalid, the year unsupported, or
/// either source unreadable.
pub fn month_of_days_with_supplement(
    year: i32,
    month: u8,
    calendar: Calendar,
    years: &YearCache,
    store: &dyn RecordStore,
    supplement: &dyn SupplementalSource,
) -> Result<Vec<Day>, DayError> {
    let days_in_month = Calendar::Gregorian.days_in_month(year, month)?;
    let mut days = Vec::with_capacity(usize::from(days_in_month));
    for day in 1..=days_in_month {
        let position = DayPosition::new(year, month, day, calendar, years)?;
        days.push(position.resolve_with_supplement(store, supplement)?);
    }
    Ok(days)
}

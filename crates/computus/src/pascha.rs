//! Paschal computus.
//!
//! The date of Pascha is computed with Meeus's Julian algorithm, which is
//! exact for the Julian reckoning in every year of the supported window.
//! The result is a Julian calendar date; callers wanting the civil date
//! re-express it through [`Date::to_gregorian`].

use crate::date::{check_supported_year, Calendar, Date};
use crate::error::ComputusError;

/// Offsets this far below Pascha belong to the preceding Paschal year.
///
/// The earliest commemoration keyed to Pascha is the Sunday of the
/// Publican and Pharisee at -70; -77 is its preceding Sunday, the last
/// day the lectionary still reads with the old year.
const EARLIEST_PDIST: i32 = -77;

/// A date's signed offset from Pascha, together with the year whose
/// Pascha anchors it.
///
/// The anchoring year is the date's own civil year except in the window
/// between January 1 and the old year's cutoff, where it is the year
/// before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaschaDistance {
    /// Days from the anchoring Pascha (0 on Pascha itself, negative before).
    pub pdist: i32,
    /// The year whose Pascha anchors the date.
    pub year: i32,
}

/// Computes the Julian calendar date of Pascha for `year`.
///
/// # Errors
///
/// Returns [`ComputusError::UnsupportedYear`] if `year` is outside
/// 1583..=4099.
pub fn pascha_julian_date(year: i32) -> Result<Date, ComputusError> {
    check_supported_year(year)?;
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    Date::new(Calendar::Julian, year, month as u8, day as u8)
}

/// Computes the Gregorian (civil) calendar date of Pascha for `year`.
///
/// # Errors
///
/// Returns [`ComputusError::UnsupportedYear`] if `year` is outside
/// 1583..=4099.
pub fn pascha_gregorian_date(year: i32) -> Result<Date, ComputusError> {
    pascha_julian_date(year)?.to_gregorian()
}

/// Computes the Julian day number of Pascha for `year`.
///
/// # Errors
///
/// Returns [`ComputusError::UnsupportedYear`] if `year` is outside
/// 1583..=4099.
pub fn pascha_jdn(year: i32) -> Result<i64, ComputusError> {
    Ok(pascha_julian_date(year)?.jdn())
}

/// Computes a date's offset from Pascha and the year that anchors it.
///
/// Dates more than 77 days before their own year's Pascha re-anchor to
/// the preceding year, so that January days still counting through the
/// old lectionary carry a large positive offset rather than a deeply
/// negative one.
///
/// # Errors
///
/// Returns [`ComputusError::UnsupportedYear`] if the anchoring year is
/// outside 1583..=4099. Early 1583 therefore fails: its anchoring year
/// is 1582.
pub fn pascha_distance(date: Date) -> Result<PaschaDistance, ComputusError> {
    let mut year = date.year();
    // Same-year differences are bounded by one year, so the narrowing
    // casts cannot truncate.
    let mut pdist = (date.jdn() - pascha_jdn(year)?) as i32;
    if pdist < EARLIEST_PDIST {
        year -= 1;
        pdist = (date.jdn() - pascha_jdn(year)?) as i32;
    }
    Ok(PaschaDistance { pdist, year })
}

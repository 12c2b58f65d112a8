//! Calendar dates with precomputed Julian day numbers.

use crate::error::ComputusError;
use crate::jdn;
use crate::weekday::Weekday;

/// First year for which the computus and the calendar conversions are defined.
pub const MIN_YEAR: i32 = 1583;

/// Last year for which the computus and the calendar conversions are defined.
pub const MAX_YEAR: i32 = 4099;

/// Number of days in each month of a non-leap year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The reckoning a [`Date`] is expressed in.
///
/// `Gregorian` is the civil calendar; `Julian` is the old-style calendar
/// still used by some churches for the fixed cycle of commemorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calendar {
    Gregorian,
    Julian,
}

impl Calendar {
    /// Returns whether `year` is a leap year under this reckoning.
    pub fn is_leap_year(self, year: i32) -> bool {
        match self {
            Calendar::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
            Calendar::Julian => year % 4 == 0,
        }
    }

    /// Returns the number of days in `month` of `year` under this reckoning.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn days_in_month(self, year: i32, month: u8) -> Result<u8, ComputusError> {
        if !(1..=12).contains(&month) {
            return Err(ComputusError::InvalidMonth { month });
        }
        if month == 2 && self.is_leap_year(year) {
            Ok(29)
        } else {
            Ok(DAYS_PER_MONTH[month as usize])
        }
    }

    /// Returns the lowercase name used in configuration and logging.
    pub fn as_str(self) -> &'static str {
        match self {
            Calendar::Gregorian => "gregorian",
            Calendar::Julian => "julian",
        }
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar date labelled with its reckoning, carrying its Julian day
/// number so that distance arithmetic never re-derives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
    jdn: i64,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Physical ordering: two dates compare by the day they denote,
        // regardless of the reckoning they are expressed in.
        (self.jdn, self.calendar as u8).cmp(&(other.jdn, other.calendar as u8))
    }
}

impl Date {
    /// Creates a date under the given reckoning.
    ///
    /// Any year is accepted here; the supported-year window is enforced by
    /// the conversions and by the Paschal computus, which are the operations
    /// whose correctness depends on it.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError::InvalidMonth`] or [`ComputusError::InvalidDay`]
    /// if the month/day pair is not a valid date under `calendar`.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> Result<Self, ComputusError> {
        let max_day = calendar.days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(ComputusError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        let jdn = match calendar {
            Calendar::Gregorian => jdn::gregorian_to_jdn(year, month, day),
            Calendar::Julian => jdn::julian_to_jdn(year, month, day),
        };
        Ok(Self {
            calendar,
            year,
            month,
            day,
            jdn,
        })
    }

    /// Creates a Gregorian calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError`] if the month/day pair is invalid.
    pub fn gregorian(year: i32, month: u8, day: u8) -> Result<Self, ComputusError> {
        Self::new(Calendar::Gregorian, year, month, day)
    }

    /// Creates a Julian calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError`] if the month/day pair is invalid.
    pub fn julian(year: i32, month: u8, day: u8) -> Result<Self, ComputusError> {
        Self::new(Calendar::Julian, year, month, day)
    }

    /// Recovers the calendar date a Julian day number falls on under the
    /// given reckoning.
    pub fn from_jdn(calendar: Calendar, jdn: i64) -> Self {
        let (year, month, day) = match calendar {
            Calendar::Gregorian => jdn::jdn_to_gregorian(jdn),
            Calendar::Julian => jdn::jdn_to_julian(jdn),
        };
        Self {
            calendar,
            year,
            month,
            day,
            jdn,
        }
    }

    /// Returns the reckoning this date is expressed in.
    pub fn calendar(self) -> Calendar {
        self.calendar
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Returns the Julian day number.
    pub fn jdn(self) -> i64 {
        self.jdn
    }

    /// Returns the day of the week this date falls on.
    pub fn weekday(self) -> Weekday {
        Weekday::from_jdn(self.jdn)
    }

    /// Re-expresses this date in the Julian reckoning.
    ///
    /// The result denotes the same physical day; only the label changes.
    /// The resulting year may precede `year()` near January 1.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError::UnsupportedYear`] if the input year is
    /// outside 1583..=4099.
    pub fn to_julian(self) -> Result<Self, ComputusError> {
        check_supported_year(self.year)?;
        Ok(Self::from_jdn(Calendar::Julian, self.jdn))
    }

    /// Re-expresses this date in the Gregorian reckoning.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError::UnsupportedYear`] if the input year is
    /// outside 1583..=4099.
    pub fn to_gregorian(self) -> Result<Self, ComputusError> {
        check_supported_year(self.year)?;
        Ok(Self::from_jdn(Calendar::Gregorian, self.jdn))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Checks that `year` lies in the window the computus is defined for.
///
/// # Errors
///
/// Returns [`ComputusError::UnsupportedYear`] if it does not.
pub fn check_supported_year(year: i32) -> Result<(), ComputusError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ComputusError::UnsupportedYear { year });
    }
    Ok(())
}

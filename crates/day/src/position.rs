//! Locating a civil date inside its liturgical year.

use std::sync::Arc;

use typikon_computus::{pascha_distance, Calendar, Date, Weekday};
use typikon_records::{FloatIndex, RecordStore, SupplementalSource};
use typikon_year::{Year, YearCache};

use crate::day::Day;
use crate::error::DayError;

/// A date located inside its liturgical year, before any records are
/// attached.
///
/// The input date is always the civil Gregorian one; under the Julian
/// reckoning it is restated as a Julian date first, so the fixed-cycle
/// month and day are the Julian ones. Resolving a position consumes it
/// and produces a [`Day`].
#[derive(Debug, Clone)]
pub struct DayPosition {
    date: Date,
    gregorian: Date,
    pdist: i32,
    weekday: Weekday,
    year: Arc<Year>,
}

impl DayPosition {
    /// Locates a civil Gregorian date under the given reckoning.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::Computus`] if the date is invalid or outside
    /// the supported window.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        calendar: Calendar,
        years: &YearCache,
    ) -> Result<Self, DayError> {
        let gregorian = Date::gregorian(year, month, day)?;
        let date = match calendar {
            Calendar::Gregorian => gregorian,
            Calendar::Julian => gregorian.to_julian()?,
        };
        let distance = pascha_distance(date)?;
        let year_tables = years.get(distance.year, calendar)?;
        Ok(Self {
            date,
            gregorian,
            pdist: distance.pdist,
            weekday: Weekday::from_pdist(distance.pdist),
            year: year_tables,
        })
    }

    /// The date under this position's reckoning.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The civil Gregorian date, whatever the reckoning.
    pub fn gregorian_date(&self) -> Date {
        self.gregorian
    }

    /// Julian day number of this date.
    pub fn jdn(&self) -> i64 {
        self.date.jdn()
    }

    /// Days from this liturgical year's Pascha.
    pub fn pdist(&self) -> i32 {
        self.pdist
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Fixed-cycle month under this reckoning.
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Fixed-cycle day of month under this reckoning.
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// The liturgical year tables this date resolved into.
    pub fn year(&self) -> &Year {
        &self.year
    }

    /// The floating-feast key observed on this date, if any.
    pub fn float_index(&self) -> Option<FloatIndex> {
        self.year.float_at(self.pdist)
    }

    /// Composes the day from the record store: commemorations, then the
    /// fasting adjustments.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::Store`] if the store cannot be read.
    pub fn resolve(self, store: &dyn RecordStore) -> Result<Day, DayError> {
        let mut day = Day::collect(self, store)?;
        day.apply_fasting_adjustments();
        Ok(day)
    }

    /// Like [`resolve`](Self::resolve), folding in commemorations from a
    /// supplemental source between collection and the fasting adjustments.
    ///
    /// # Errors
    ///
    /// Returns [`DayError::Store`] if either source cannot be read.
    pub fn resolve_with_supplement(
        self,
        store: &dyn RecordStore,
        supplement: &dyn SupplementalSource,
    ) -> Result<Day, DayError> {
        let mut day = Day::collect(self, store)?;
        day.merge_supplement(supplement)?;
        day.apply_fasting_adjustments();
        Ok(day)
    }
}

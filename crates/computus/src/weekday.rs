//! Days of the week, indexed from Sunday.
//!
//! Pascha always falls on a Sunday, so a day's offset from Pascha taken
//! modulo 7 is its weekday. Indexing from Sunday makes that identity hold
//! directly: `pdist % 7 == 0` is a Sunday.

/// Day of the week, with `Sunday = 0`.
///
/// The derived ordering runs Sunday through Saturday, which is the order
/// the fasting rules compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in index order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday of a day at the given offset from Pascha.
    ///
    /// Works for negative offsets: day -1 is Great and Holy Saturday.
    pub fn from_pdist(pdist: i32) -> Self {
        Self::ALL[pdist.rem_euclid(7) as usize]
    }

    /// Returns the weekday of a Julian day number.
    pub fn from_jdn(jdn: i64) -> Self {
        Self::ALL[(jdn + 1).rem_euclid(7) as usize]
    }

    /// Returns the 0-based index (Sunday = 0, Saturday = 6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The Saturdays and Sundays bracketing a day, as offsets from Pascha.
///
/// `sat_before`/`sun_before` are the nearest strictly-earlier Saturday and
/// Sunday; `sat_after`/`sun_after` the nearest strictly-later ones. For a
/// Sunday, `sun_before` is seven days back and `sat_after` six days ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurroundingWeekends {
    pub sat_before: i32,
    pub sun_before: i32,
    pub sat_after: i32,
    pub sun_after: i32,
}

/// Computes the weekend days bracketing the given offset from Pascha.
pub fn surrounding_weekends(pdist: i32) -> SurroundingWeekends {
    let weekday = i32::from(Weekday::from_pdist(pdist).index());
    SurroundingWeekends {
        sat_before: pdist - weekday - 1,
        sun_before: pdist - 7 + (7 - weekday) % 7,
        sat_after: pdist + 7 - (weekday + 1) % 7,
        sun_after: pdist + 7 - weekday,
    }
}

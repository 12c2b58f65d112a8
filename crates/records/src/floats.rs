//! Synthetic store keys for floating feasts.
//!
//! Floating feasts are fixed-cycle commemorations whose observed day moves
//! with the weekday structure of a given year (a Saturday-of service, an
//! eve whose readings shift when it collides with a Sunday, and so on).
//! Their records are keyed by synthetic offsets at 1000 and above, well
//! clear of any real offset from Pascha, and the year table maps each
//! affected day to the key that should be pulled in.

/// Store key of a floating feast (1001..=1037).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i16)]
pub enum FloatIndex {
    // Fixed-cycle Sundays and Saturdays snapped to a nearby date.
    FathersSix = 1001,
    FathersSeventh = 1002,
    DemetriusSaturday = 1003,
    SynaxisUnmercenaries = 1004,

    // The Elevation of the Cross cluster.
    SunBeforeElevation = 1005,
    SatBeforeElevation = 1006,
    SatBeforeElevationMoved = 1007,
    SatAfterElevation = 1008,
    SunAfterElevation = 1009,

    // Forefathers and the Nativity cluster.
    SunForefathers = 1010,
    SatBeforeNativity = 1011,
    SunBeforeNativity = 1012,
    RoyalHoursNativityFriday = 1013,
    EveNativity = 1014,
    SatBeforeNativityEve = 1015,
    SunBeforeNativityEve = 1016,
    SatAfterNativity = 1017,
    SunAfterNativity = 1018,
    SatAfterNativityBeforeTheophany = 1019,
    SatAfterNativityFriday = 1020,
    SunAfterNativityMonday = 1021,

    // The Theophany cluster.
    SatBeforeTheophany = 1022,
    SatBeforeTheophanyEve = 1023,
    SatBeforeTheophanyJan = 1024,
    SunBeforeTheophany = 1025,
    SunBeforeTheophanyEve = 1026,
    TheophanyEve = 1027,
    RoyalHoursTheophanyFriday = 1028,
    SatAfterTheophany = 1029,
    SunAfterTheophany = 1030,

    NewMartyrsRussia = 1031,

    // The Annunciation cluster.
    AnnunciationParemFriday = 1032,
    AnnunciationSat = 1033,
    AnnunciationSun = 1034,
    AnnunciationMon = 1035,
    AnnunciationParemEve = 1036,
    AnnunciationWeekday = 1037,
}

impl FloatIndex {
    /// Returns the store key this feast's records are filed under.
    pub fn value(self) -> i32 {
        self as i32
    }
}

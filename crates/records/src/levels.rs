//! Fast and feast level scales.
//!
//! Levels are small ordered scalars stored on commemoration records. When
//! several records land on the same day, the effective level is the maximum
//! across them, so everything here derives `Ord`.

use serde::{Deserialize, Serialize};

/// The fasting season a day belongs to.
///
/// Ordering matters twice: composite days take the maximum across their
/// records, and the fasting adjustments match on the season.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum FastLevel {
    #[default]
    NoFast = 0,
    Fast = 1,
    GreatLent = 2,
    ApostlesFast = 3,
    DormitionFast = 4,
    NativityFast = 5,
}

impl FastLevel {
    /// Returns the numeric store value.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the display description.
    pub fn desc(self) -> &'static str {
        FAST_LEVEL_DESC[self as usize]
    }
}

impl From<FastLevel> for u8 {
    fn from(level: FastLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for FastLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FastLevel::NoFast),
            1 => Ok(FastLevel::Fast),
            2 => Ok(FastLevel::GreatLent),
            3 => Ok(FastLevel::ApostlesFast),
            4 => Ok(FastLevel::DormitionFast),
            5 => Ok(FastLevel::NativityFast),
            _ => Err(format!("invalid fast level: {value} (must be 0..=5)")),
        }
    }
}

/// Display descriptions for [`FastLevel`], indexed by value.
pub const FAST_LEVEL_DESC: [&str; 6] = [
    "No Fast",
    "Fast",
    "Great Lent",
    "Apostles Fast",
    "Dormition Fast",
    "Nativity Fast",
];

/// Display descriptions for fast exceptions, indexed by value.
///
/// Exceptions 0..=9 soften or tighten the base fast; 10 locks out the
/// weekday overrides; 11 marks a fast-free day.
#[rustfmt::skip]
pub const FAST_EXCEPTION_DESC: [&str; 12] = [
    "",
    "Wine and Oil are Allowed",
    "Fish, Wine and Oil are Allowed",
    "Wine and Oil are Allowed",
    "Fish, Wine and Oil are Allowed",
    "Wine is Allowed",
    "Wine, Oil and Caviar are Allowed",
    "Meat Fast",
    "Strict Fast (Wine and Oil)",
    "Strict Fast",
    "No overrides",
    "Fast Free",
];

/// Fast-exception value that marks a fast-free day.
pub const FAST_FREE: u8 = 11;

/// Fast-exception value that locks out the weekday overrides.
pub const NO_OVERRIDES: u8 = 10;

/// Display descriptions for feast levels -1..=8, indexed by `level + 1`.
#[rustfmt::skip]
pub const FEAST_LEVEL_DESC: [&str; 10] = [
    "No Liturgy",
    "Liturgy",
    "Presanctified",
    "Black squigg (6-stich typikon symbol)",
    "Red squigg (doxology typikon symbol)",
    "Red cross (polyeleos typikon symbol)",
    "Red cross half-circle (vigil typikon symbol)",
    "Red cross circle (great feast typikon symbol)",
    "Major feast Theotokos",
    "Major feast Lord",
];

/// Returns the description for a fast-exception value, clamped into range.
pub fn fast_exception_desc(exception: u8) -> &'static str {
    let idx = usize::from(exception).min(FAST_EXCEPTION_DESC.len() - 1);
    FAST_EXCEPTION_DESC[idx]
}

/// Returns the description for a feast level, clamped into -1..=8.
pub fn feast_level_desc(level: i8) -> &'static str {
    let idx = (i16::from(level) + 1).clamp(0, FEAST_LEVEL_DESC.len() as i16 - 1);
    FEAST_LEVEL_DESC[idx as usize]
}

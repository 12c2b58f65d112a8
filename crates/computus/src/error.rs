//! Error types for the typikon-computus crate.

/// Error type for all fallible operations in the typikon-computus crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values, and years outside the range for which the Paschal computus and
/// the calendar conversions are defined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputusError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which determines whether February has 29 days.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a year falls outside the supported range 1583..=4099.
    #[error("unsupported year: {year} (must be 1583..=4099)")]
    UnsupportedYear {
        /// The out-of-range year that was provided.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = ComputusError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = ComputusError::InvalidDay {
            day: 29,
            month: 2,
            year: 2019,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month 2 of 2019 (max 28)"
        );
    }

    #[test]
    fn error_unsupported_year() {
        let err = ComputusError::UnsupportedYear { year: 1500 };
        assert_eq!(err.to_string(), "unsupported year: 1500 (must be 1583..=4099)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ComputusError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ComputusError>();
    }

    #[test]
    fn error_is_clone_and_partial_eq() {
        let a = ComputusError::UnsupportedYear { year: 4100 };
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, ComputusError::UnsupportedYear { year: 1582 });
    }
}

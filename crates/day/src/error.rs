//! Error types for the typikon-day crate.

/// Error type for all fallible operations in the typikon-day crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DayError {
    /// Returned when the reading lists are indexed before both have been
    /// selected.
    #[error("full and abbreviated readings must be selected before indexing")]
    ReadingsNotSelected,

    /// Date arithmetic error.
    #[error(transparent)]
    Computus(#[from] typikon_computus::ComputusError),

    /// Record store error.
    #[error(transparent)]
    Store(#[from] typikon_records::StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_readings_not_selected() {
        let e = DayError::ReadingsNotSelected;
        assert_eq!(
            e.to_string(),
            "full and abbreviated readings must be selected before indexing"
        );
    }

    #[test]
    fn from_computus_error() {
        let ce = typikon_computus::ComputusError::UnsupportedYear { year: 1300 };
        let de: DayError = ce.into();
        assert!(matches!(de, DayError::Computus(_)));
    }

    #[test]
    fn from_store_error() {
        let se = typikon_records::StoreError::Unavailable {
            reason: "connection refused".to_string(),
        };
        let de: DayError = se.into();
        assert!(matches!(de, DayError::Store(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DayError>();
    }
}

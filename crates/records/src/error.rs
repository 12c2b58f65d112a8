//! Error types for the typikon-records crate.

/// Error type for store operations.
///
/// `Unavailable` is the transient class (a backing service that is down);
/// `Data` is the permanent class (records that cannot be parsed or are
/// internally inconsistent). The engine propagates both without retrying;
/// whether `Unavailable` is worth retrying is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Returned when the backing store cannot be reached.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },

    /// Returned when store data is malformed.
    #[error("malformed store data: {reason}")]
    Data {
        /// Human-readable cause.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::Unavailable {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "store unavailable: connection refused");

        let err = StoreError::Data {
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed store data: expected value at line 1"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<StoreError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StoreError>();
    }
}

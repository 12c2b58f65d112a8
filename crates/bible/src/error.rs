//! Error types for the typikon-bible crate.

use typikon_records::StoreError;

/// Error type for all fallible operations in the typikon-bible crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BibleError {
    /// Returned when a book name does not normalize to a known book.
    #[error("unknown book: {name}")]
    UnknownBook {
        /// The name as it appeared in the reference.
        name: String,
    },

    /// Returned when a reference does not match the citation grammar.
    #[error("malformed reference: {reference}")]
    Malformed {
        /// The full reference that failed to parse.
        reference: String,
    },

    /// Returned when a composite pericope points at a missing entry.
    #[error("unknown composite passage: {number}")]
    UnknownComposite {
        /// The `preverse` number the pericope carried.
        number: i32,
    },
}

// At the resolver seam every bible failure is bad data: the reference or
// composite number came out of the record store.
impl From<BibleError> for StoreError {
    fn from(e: BibleError) -> Self {
        StoreError::Data {
            reason: e.to_string(),
        }
    }
}

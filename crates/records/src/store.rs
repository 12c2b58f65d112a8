//! Store interfaces.
//!
//! The engine talks to its data through these three seams, so a database,
//! an HTTP service, or the in-memory fixture store are interchangeable.
//! All of them are `Send + Sync`: days resolve concurrently against one
//! shared store.

use crate::error::StoreError;
use crate::query::{CommemorationQuery, ReadingQuery};
use crate::records::{CommemorationRecord, Pericope, ReadingRecord, SupplementalCommemoration, Verse};

/// Primary record store: commemorations and lectionary readings.
pub trait RecordStore: Send + Sync {
    /// Returns every commemoration matching the query, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn commemorations(
        &self,
        query: &CommemorationQuery,
    ) -> Result<Vec<CommemorationRecord>, StoreError>;

    /// Returns every reading matching the query, sorted by `ordering`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn readings(&self, query: &ReadingQuery) -> Result<Vec<ReadingRecord>, StoreError>;
}

/// Resolves a pericope to its verse text.
pub trait PassageResolver: Send + Sync {
    /// Returns the verses of the passage, in reading order.
    ///
    /// Composite pericopes resolve to a single pre-composed entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the passage cannot be resolved.
    fn passage(&self, pericope: &Pericope) -> Result<Vec<Verse>, StoreError>;
}

/// Secondary commemoration source keyed by fixed-cycle date.
pub trait SupplementalSource: Send + Sync {
    /// Returns the supplemental rows for a month and day, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the source cannot be read.
    fn by_month_day(
        &self,
        month: u8,
        day: u8,
    ) -> Result<Vec<SupplementalCommemoration>, StoreError>;
}

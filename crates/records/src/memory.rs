//! In-memory record store.
//!
//! Backs the store traits with plain vectors and predicate scans. Record
//! counts are small (a few thousand rows) and queries touch a handful of
//! keys, so a scan is simpler than an index and fast enough for every
//! caller this crate has.

use tracing::debug;

use crate::error::StoreError;
use crate::query::{CommemorationQuery, ReadingQuery};
use crate::records::{CommemorationRecord, ReadingRecord, SupplementalCommemoration};
use crate::store::{RecordStore, SupplementalSource};

/// Vector-backed implementation of [`RecordStore`] and
/// [`SupplementalSource`].
///
/// Immutable once loaded; share it across threads by reference.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    commemorations: Vec<CommemorationRecord>,
    readings: Vec<ReadingRecord>,
    supplemental: Vec<SupplementalCommemoration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds commemoration rows, keeping insertion order.
    pub fn with_commemorations(mut self, records: Vec<CommemorationRecord>) -> Self {
        self.commemorations.extend(records);
        self
    }

    /// Adds reading rows, keeping insertion order.
    pub fn with_readings(mut self, records: Vec<ReadingRecord>) -> Self {
        self.readings.extend(records);
        self
    }

    /// Adds supplemental rows, keeping insertion order.
    pub fn with_supplemental(mut self, records: Vec<SupplementalCommemoration>) -> Self {
        self.supplemental.extend(records);
        self
    }

    /// Loads commemoration rows from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Data`] if the JSON does not parse.
    pub fn load_commemorations_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let records: Vec<CommemorationRecord> = parse_json(json)?;
        let count = records.len();
        debug!(count, "loaded commemoration records");
        self.commemorations.extend(records);
        Ok(count)
    }

    /// Loads reading rows from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Data`] if the JSON does not parse.
    pub fn load_readings_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let records: Vec<ReadingRecord> = parse_json(json)?;
        let count = records.len();
        debug!(count, "loaded reading records");
        self.readings.extend(records);
        Ok(count)
    }

    /// Loads supplemental rows from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Data`] if the JSON does not parse.
    pub fn load_supplemental_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let records: Vec<SupplementalCommemoration> = parse_json(json)?;
        let count = records.len();
        debug!(count, "loaded supplemental records");
        self.supplemental.extend(records);
        Ok(count)
    }

    /// Returns `(commemorations, readings, supplemental)` row counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.commemorations.len(),
            self.readings.len(),
            self.supplemental.len(),
        )
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<Vec<T>, StoreError> {
    serde_json::from_str(json).map_err(|e| StoreError::Data {
        reason: e.to_string(),
    })
}

impl RecordStore for MemoryStore {
    fn commemorations(
        &self,
        query: &CommemorationQuery,
    ) -> Result<Vec<CommemorationRecord>, StoreError> {
        Ok(self
            .commemorations
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect())
    }

    fn readings(&self, query: &ReadingQuery) -> Result<Vec<ReadingRecord>, StoreError> {
        let mut matched: Vec<ReadingRecord> = self
            .readings
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        // Stable: rows with equal ordering keep store order.
        matched.sort_by_key(|r| r.ordering);
        Ok(matched)
    }
}

impl SupplementalSource for MemoryStore {
    fn by_month_day(
        &self,
        month: u8,
        day: u8,
    ) -> Result<Vec<SupplementalCommemoration>, StoreError> {
        let mut matched: Vec<SupplementalCommemoration> = self
            .supplemental
            .iter()
            .filter(|r| r.month == month && r.day == day)
            .cloned()
            .collect();
        matched.sort_by_key(|r| r.ordering);
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{DayKey, ReadingClause};
    use crate::records::Pericope;
    use crate::sources;

    fn reading(pdist: i32, source: &str, ordering: i16, display: &str) -> ReadingRecord {
        ReadingRecord {
            pdist: Some(pdist),
            source: source.to_string(),
            ordering,
            pericope: Pericope {
                display: display.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn readings_come_back_sorted_by_ordering() {
        let mut store = MemoryStore::new().with_readings(vec![
            reading(7, sources::GOSPEL, 20, "John 20.19-31"),
            reading(7, sources::EPISTLE, 10, "Acts 5.12-20"),
            reading(7, sources::VESPERS, 30, "unused"),
        ]);
        store = store.with_readings(vec![reading(8, sources::GOSPEL, 1, "other day")]);

        let query = ReadingQuery::new().clause(ReadingClause::at(DayKey::Pdist(7)));
        let result = store.readings(&query).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].source, sources::EPISTLE);
        assert_eq!(result[1].source, sources::GOSPEL);
        assert_eq!(result[2].source, sources::VESPERS);
    }

    #[test]
    fn equal_ordering_keeps_store_order() {
        let store = MemoryStore::new().with_readings(vec![
            reading(0, sources::GOSPEL, 5, "first"),
            reading(0, sources::GOSPEL, 5, "second"),
        ]);
        let query = ReadingQuery::new().clause(ReadingClause::at(DayKey::Pdist(0)));
        let result = store.readings(&query).unwrap();
        assert_eq!(result[0].pericope.display, "first");
        assert_eq!(result[1].pericope.display, "second");
    }

    #[test]
    fn commemorations_keep_store_order() {
        let store = MemoryStore::new().with_commemorations(vec![
            CommemorationRecord {
                pdist: Some(0),
                title: "Pascha".to_string(),
                ..Default::default()
            },
            CommemorationRecord {
                month: Some(4),
                day: Some(8),
                saint: "St John".to_string(),
                ..Default::default()
            },
        ]);
        let query = CommemorationQuery::new()
            .key(DayKey::Pdist(0))
            .key(DayKey::MonthDay { month: 4, day: 8 });
        let result = store.commemorations(&query).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Pascha");
        assert_eq!(result[1].saint, "St John");
    }

    #[test]
    fn supplemental_by_month_day() {
        let store = MemoryStore::new().with_supplemental(vec![
            SupplementalCommemoration {
                month: 4,
                day: 8,
                title: "Second".to_string(),
                ordering: 2,
                ..Default::default()
            },
            SupplementalCommemoration {
                month: 4,
                day: 8,
                title: "First".to_string(),
                ordering: 1,
                ..Default::default()
            },
            SupplementalCommemoration {
                month: 4,
                day: 9,
                title: "Other day".to_string(),
                ..Default::default()
            },
        ]);
        let result = store.by_month_day(4, 8).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "First");
        assert_eq!(result[1].title, "Second");
    }

    #[test]
    fn json_loading() {
        let mut store = MemoryStore::new();
        let count = store
            .load_commemorations_json(r#"[{"pdist": 0, "title": "Pascha", "feast_level": 8}]"#)
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.counts(), (1, 0, 0));

        let err = store.load_readings_json("not json").unwrap_err();
        assert!(matches!(err, StoreError::Data { .. }));
    }

    #[test]
    fn empty_query_matches_nothing() {
        let store = MemoryStore::new().with_readings(vec![reading(0, sources::GOSPEL, 1, "x")]);
        assert!(store.readings(&ReadingQuery::new()).unwrap().is_empty());
        assert!(store
            .commemorations(&CommemorationQuery::new())
            .unwrap()
            .is_empty());
    }
}

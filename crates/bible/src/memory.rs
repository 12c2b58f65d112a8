//! In-memory verse store.
//!
//! The scripture-side counterpart of the record store: a verse table in
//! canonical reading order plus the composite table for pre-composed
//! passages, loaded from JSON fixtures and scanned per query.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use typikon_records::{PassageResolver, Pericope, StoreError, Verse};

use crate::books;
use crate::error::BibleError;
use crate::reference;

/// One row of the composite table.
#[derive(Debug, Clone, Deserialize)]
struct CompositeRow {
    composite_num: i32,
    reading: String,
}

/// Vector-backed implementation of [`PassageResolver`].
///
/// Verses must be loaded in canonical order (book, chapter, verse); a
/// passage is the ordered subsequence of the table matched by any span of
/// the parsed reference. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryBible {
    verses: Vec<Verse>,
    composites: BTreeMap<i32, String>,
}

impl MemoryBible {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds verses, keeping insertion order.
    pub fn with_verses(mut self, verses: Vec<Verse>) -> Self {
        self.verses.extend(verses);
        self
    }

    /// Adds one composite passage.
    pub fn with_composite(mut self, number: i32, reading: &str) -> Self {
        self.composites.insert(number, reading.to_string());
        self
    }

    /// Loads verse rows from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Data`] if the JSON does not parse.
    pub fn load_verses_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let verses: Vec<Verse> = serde_json::from_str(json).map_err(|e| StoreError::Data {
            reason: e.to_string(),
        })?;
        let count = verses.len();
        debug!(count, "loaded verses");
        self.verses.extend(verses);
        Ok(count)
    }

    /// Loads composite rows from a JSON array of
    /// `{composite_num, reading}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Data`] if the JSON does not parse.
    pub fn load_composites_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let rows: Vec<CompositeRow> = serde_json::from_str(json).map_err(|e| StoreError::Data {
            reason: e.to_string(),
        })?;
        let count = rows.len();
        debug!(count, "loaded composite passages");
        self.composites
            .extend(rows.into_iter().map(|r| (r.composite_num, r.reading)));
        Ok(count)
    }

    /// Returns `(verses, composites)` row counts.
    pub fn counts(&self) -> (usize, usize) {
        (self.verses.len(), self.composites.len())
    }

    fn composite_passage(&self, pericope: &Pericope) -> Result<Vec<Verse>, BibleError> {
        let number = pericope.preverse.ok_or(BibleError::UnknownComposite { number: 0 })?;
        let reading = self
            .composites
            .get(&number)
            .ok_or(BibleError::UnknownComposite { number })?;
        Ok(vec![Verse {
            book: pericope.book.clone(),
            chapter: 1,
            verse: 1,
            content: reading.clone(),
        }])
    }

    fn lookup_reference(&self, reference: &str) -> Result<Vec<Verse>, BibleError> {
        let spans = reference::parse(reference)?;
        Ok(self
            .verses
            .iter()
            .filter(|v| {
                spans
                    .iter()
                    .any(|s| s.contains(&v.book, v.chapter, v.verse))
            })
            .cloned()
            .collect())
    }
}

impl PassageResolver for MemoryBible {
    fn passage(&self, pericope: &Pericope) -> Result<Vec<Verse>, StoreError> {
        if pericope.is_composite() {
            return Ok(self.composite_passage(pericope)?);
        }
        // The stored book name may be any accepted alias; the table is
        // keyed by canonical code.
        let code = books::normalize(&pericope.book)?;
        let verses = self.lookup_reference(&format!("{} {}", code, pericope.verses))?;
        Ok(verses)
    }
}

//! Query predicates for the record store.
//!
//! A query is an OR of clauses; each clause narrows one day key with
//! source and description filters. Stores evaluate queries however they
//! like (the in-memory store scans; a database store would compile them
//! to SQL), but the matching semantics are fixed here.

use crate::records::{CommemorationRecord, ReadingRecord};

/// A single way of addressing records for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKey {
    /// Offset from Pascha, including the synthetic floating-feast keys.
    Pdist(i32),
    /// Fixed-cycle month and day.
    MonthDay { month: u8, day: u8 },
}

impl DayKey {
    fn matches(self, pdist: Option<i32>, month: Option<u8>, day: Option<u8>) -> bool {
        match self {
            DayKey::Pdist(p) => pdist == Some(p),
            DayKey::MonthDay { month: m, day: d } => month == Some(m) && day == Some(d),
        }
    }

    /// Returns whether a commemoration row is filed under this key.
    pub fn matches_commemoration(self, record: &CommemorationRecord) -> bool {
        self.matches(record.pdist, record.month, record.day)
    }

    /// Returns whether a reading row is filed under this key.
    pub fn matches_reading(self, record: &ReadingRecord) -> bool {
        self.matches(record.pdist, record.month, record.day)
    }
}

/// Commemoration query: any record filed under any of the keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommemorationQuery {
    pub keys: Vec<DayKey>,
}

impl CommemorationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key to the OR set.
    pub fn key(mut self, key: DayKey) -> Self {
        self.keys.push(key);
        self
    }

    /// Returns whether the record matches any key.
    pub fn matches(&self, record: &CommemorationRecord) -> bool {
        self.keys.iter().any(|k| k.matches_commemoration(record))
    }
}

/// One conjunctive clause of a reading query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingClause {
    pub key: DayKey,
    /// When set, only these sources match.
    pub include_sources: Option<Vec<String>>,
    /// Sources that never match.
    pub exclude_sources: Vec<String>,
    /// Descriptions that never match.
    pub exclude_descs: Vec<String>,
}

impl ReadingClause {
    /// A clause matching every reading filed under `key`.
    pub fn at(key: DayKey) -> Self {
        Self {
            key,
            include_sources: None,
            exclude_sources: Vec::new(),
            exclude_descs: Vec::new(),
        }
    }

    /// Restricts the clause to the given sources.
    pub fn only_sources(mut self, sources: &[&str]) -> Self {
        self.include_sources = Some(sources.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Excludes a source from the clause.
    pub fn except_source(mut self, source: &str) -> Self {
        self.exclude_sources.push(source.to_string());
        self
    }

    /// Excludes a description from the clause.
    pub fn except_desc(mut self, desc: &str) -> Self {
        self.exclude_descs.push(desc.to_string());
        self
    }

    /// Returns whether the record satisfies every condition of the clause.
    pub fn matches(&self, record: &ReadingRecord) -> bool {
        if !self.key.matches_reading(record) {
            return false;
        }
        if let Some(include) = &self.include_sources {
            if !include.iter().any(|s| *s == record.source) {
                return false;
            }
        }
        if self.exclude_sources.iter().any(|s| *s == record.source) {
            return false;
        }
        !self.exclude_descs.iter().any(|d| *d == record.desc)
    }
}

/// Reading query: any record matching any clause, returned in `ordering`
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingQuery {
    pub clauses: Vec<ReadingClause>,
}

impl ReadingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause to the OR set.
    pub fn clause(mut self, clause: ReadingClause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Returns whether the record matches any clause.
    pub fn matches(&self, record: &ReadingRecord) -> bool {
        self.clauses.iter().any(|c| c.matches(record))
    }
}

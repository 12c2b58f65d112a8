//! Record types backing the liturgical store.
//!
//! Records are keyed two ways: movable-cycle rows carry an offset from
//! Pascha (`pdist`, which is also where the synthetic floating-feast keys
//! live), fixed-cycle rows carry a month and day. A row normally sets one
//! side only; a row with neither never matches anything.

use serde::{Deserialize, Serialize};

use crate::levels::FastLevel;

/// Sentinel book name marking a pre-composed passage.
///
/// Composite pericopes stitch verses from several places into one text;
/// they resolve through a separate composite table via `preverse` instead
/// of through the verse table.
pub const COMPOSITE_BOOK: &str = "Composite";

/// One commemoration row: a feast, fast, or saint bound to a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommemorationRecord {
    /// Offset from Pascha for movable-cycle rows, or a floating-feast key.
    #[serde(default)]
    pub pdist: Option<i32>,
    /// Fixed-cycle month.
    #[serde(default)]
    pub month: Option<u8>,
    /// Fixed-cycle day.
    #[serde(default)]
    pub day: Option<u8>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub feast_name: String,
    /// Feast rank, -1..=8.
    #[serde(default)]
    pub feast_level: i8,
    #[serde(default)]
    pub service_note: String,
    /// Semicolon-separated saint names.
    #[serde(default)]
    pub saint: String,
    #[serde(default)]
    pub fast: FastLevel,
    /// Fast exception, 0..=11.
    #[serde(default)]
    pub fast_exception: u8,
}

impl CommemorationRecord {
    /// Returns the title with its subtitle appended, or `None` when the
    /// row has no title of its own.
    pub fn full_title(&self) -> Option<String> {
        if self.title.is_empty() {
            return None;
        }
        if self.subtitle.is_empty() {
            Some(self.title.clone())
        } else {
            Some(format!("{}; {}", self.title, self.subtitle))
        }
    }
}

/// A named scripture passage as the lectionary cites it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pericope {
    /// Short store code.
    pub pericope: String,
    /// Book name as cited, or [`COMPOSITE_BOOK`].
    pub book: String,
    /// Full display citation.
    pub display: String,
    /// Short display citation.
    #[serde(default)]
    pub sdisplay: String,
    /// Verse expression, e.g. `"4.25-5.13"`.
    pub verses: String,
    /// Composite number for [`COMPOSITE_BOOK`] rows.
    #[serde(default)]
    pub preverse: Option<i32>,
}

impl Pericope {
    /// Returns the parseable reference, book and verses joined.
    pub fn reference(&self) -> String {
        format!("{} {}", self.book, self.verses)
    }

    /// Returns whether this pericope resolves through the composite table.
    pub fn is_composite(&self) -> bool {
        self.book == COMPOSITE_BOOK
    }
}

/// One lectionary row binding a pericope to a day and service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Offset from Pascha for movable-cycle rows, or a floating-feast key.
    #[serde(default)]
    pub pdist: Option<i32>,
    /// Fixed-cycle month.
    #[serde(default)]
    pub month: Option<u8>,
    /// Fixed-cycle day.
    #[serde(default)]
    pub day: Option<u8>,
    /// Service this reading belongs to (see [`crate::sources`]).
    pub source: String,
    /// Free-text qualifier (see [`crate::sources`]).
    #[serde(default)]
    pub desc: String,
    /// Sort key within a day.
    #[serde(default)]
    pub ordering: i16,
    pub pericope: Pericope,
}

/// One verse of scripture with its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub book: String,
    pub chapter: u16,
    pub verse: u16,
    pub content: String,
}

/// A commemoration row from a secondary source, with its hagiography.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementalCommemoration {
    pub month: u8,
    pub day: u8,
    pub title: String,
    /// Short form matched against primary commemorations to drop duplicates.
    #[serde(default)]
    pub alt_title: Option<String>,
    #[serde(default)]
    pub story: String,
    /// Sort key within a day.
    #[serde(default)]
    pub ordering: i16,
}

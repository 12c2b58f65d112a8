//! # typikon-records
//!
//! The record model behind the liturgical engine: commemoration and
//! lectionary rows, the query predicates used to select them, the store
//! traits the engine talks through, and an in-memory store for fixtures
//! and tests.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CommemorationQuery / ReadingQuery"] -->|"matches()"| B["records"]
//!     C["RecordStore / SupplementalSource"] -->|"impl"| D["MemoryStore"]
//!     D -->|"load_*_json()"| B
//!     E["PassageResolver"] -->|"passage()"| F["Vec of Verse"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use typikon_records::{query::{CommemorationQuery, DayKey}, MemoryStore, RecordStore};
//!
//! let mut store = MemoryStore::new();
//! store.load_commemorations_json(fixture)?;
//! let query = CommemorationQuery::new()
//!     .key(DayKey::Pdist(0))
//!     .key(DayKey::MonthDay { month: 4, day: 8 });
//! let records = store.commemorations(&query)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `records` | Record structs and serde shapes |
//! | `levels` | Fast/feast level scales and their descriptions |
//! | `floats` | Synthetic store keys for floating feasts |
//! | `sources` | Well-known `source`/`desc` vocabulary |
//! | `query` | Query predicates (OR of conjunctive clauses) |
//! | `store` | Store traits |
//! | `memory` | Vector-backed store implementation |
//! | `error` | Error types |

mod error;
mod floats;
mod memory;
pub mod query;
mod records;
pub mod sources;
mod store;

pub mod levels;

pub use error::StoreError;
pub use floats::FloatIndex;
pub use levels::FastLevel;
pub use memory::MemoryStore;
pub use records::{
    CommemorationRecord, Pericope, ReadingRecord, SupplementalCommemoration, Verse, COMPOSITE_BOOK,
};
pub use store::{PassageResolver, RecordStore, SupplementalSource};

//! # typikon-bible
//!
//! Scripture-text side of the engine: normalizes cited book names,
//! parses human references into verse spans, and resolves pericopes to
//! verse text through an in-memory table with composite-passage support.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Pericope"] -->|"reference()"| B["reference::parse"]
//!     B -->|"books::normalize"| C["Vec of VerseSpan"]
//!     C -->|"MemoryBible::passage"| D["Vec of Verse"]
//!     A -->|"is_composite()"| E["composite table"] --> D
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use typikon_bible::MemoryBible;
//! use typikon_records::PassageResolver;
//!
//! let mut bible = MemoryBible::new();
//! bible.load_verses_json(fixture)?;
//! let verses = bible.passage(&reading.pericope)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `books` | Book-name normalization and the chapterless set |
//! | `reference` | Citation grammar parser |
//! | `memory` | [`MemoryBible`], a `PassageResolver` over fixtures |
//! | `error` | Error types |

pub mod books;
mod error;
mod memory;
pub mod reference;

pub use error::BibleError;
pub use memory::MemoryBible;
pub use reference::VerseSpan;

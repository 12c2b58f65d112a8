//! # typikon-day
//!
//! Composes a liturgical day from its date: merges movable-cycle,
//! floating, and fixed-cycle commemorations, applies the fasting
//! adjustments, derives the tone and Eothinon cycles, and selects the
//! appointed readings in full and abbreviated forms.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DayPosition::new()"] -->|"YearCache"| B["located date"]
//!     B -->|"resolve(store)"| C["Day"]
//!     C -->|"readings(store)"| D["full list"]
//!     C -->|"abbreviated_readings(store)"| E["epistle + gospel"]
//!     D -->|"fetch_passages(resolver)"| F["verse text"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use typikon_computus::Calendar;
//! use typikon_day::DayPosition;
//! use typikon_year::YearCache;
//!
//! let years = YearCache::new();
//! let position = DayPosition::new(2018, 4, 8, Calendar::Gregorian, &years)?;
//! let mut day = position.resolve(&store)?;
//! println!("{:?} tone {}", day.summary_title(), day.tone());
//! for reading in day.readings(&store)? {
//!     println!("{} ({})", reading.record.pericope.display, reading.record.source);
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `position` | [`DayPosition`], a date located in its liturgical year |
//! | `day` | [`Day`], the composite with fasting, cycles, and readings |
//! | `month` | Whole-month resolution |
//! | `error` | Error types |

mod day;
mod error;
mod month;
mod position;

pub use day::{Day, Reading};
pub use error::DayError;
pub use month::{month_of_days, month_of_days_with_supplement};
pub use position::DayPosition;

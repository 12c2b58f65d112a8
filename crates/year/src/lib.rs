//! # typikon-year
//!
//! Precomputed liturgical year structure: everything that is fixed once a
//! year's Pascha is known. Anchor offsets for the great feasts, the
//! floating-commemoration schedule, the Lukan jump and reserve Gospels,
//! moved paremias, and the days whose daily readings are suppressed.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["pascha_jdn()"] --> B["Year::new()"]
//!     B --> C["anchors + surrounding weekends"]
//!     B --> D["floats: pdist -> FloatIndex"]
//!     B --> E["reserves / paremias / no_daily"]
//!     F["YearCache"] -->|"Arc&lt;Year&gt;"| B
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use typikon_computus::Calendar;
//! use typikon_year::YearCache;
//!
//! let cache = YearCache::new();
//! let year = cache.get(2018, Calendar::Gregorian)?;
//! assert_eq!(year.lukan_jump(), 7);
//! assert!(year.has_daily_readings(100));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | [`Year`] tables computed eagerly per year |
//! | `cache` | [`YearCache`], a shared map of computed years |

mod cache;
mod year;

pub use cache::YearCache;
pub use year::Year;

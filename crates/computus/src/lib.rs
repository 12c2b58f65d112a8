//! # typikon-computus
//!
//! Date arithmetic for the liturgical calendar: Julian day numbers,
//! Gregorian/Julian conversion, weekdays, and the Paschal computus.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Date (Gregorian or Julian)"] -->|".jdn()"| B["Julian day number"]
//!     B -->|"Date::from_jdn()"| A
//!     A -->|".to_julian() / .to_gregorian()"| A
//!     C["year"] -->|"pascha_julian_date()"| A
//!     A -->|"pascha_distance()"| D["PaschaDistance"]
//!     D -->|"Weekday::from_pdist()"| E["Weekday"]
//!     D -->|"surrounding_weekends()"| F["SurroundingWeekends"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use typikon_computus::{pascha_distance, Date, Weekday};
//!
//! let date = Date::gregorian(2018, 5, 9)?;
//! let d = pascha_distance(date)?;
//! assert_eq!((d.pdist, d.year), (31, 2018));
//! assert_eq!(Weekday::from_pdist(d.pdist), Weekday::Wednesday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar dates with precomputed Julian day numbers |
//! | `jdn` | Raw Julian day number conversions |
//! | `pascha` | Paschal computus and offsets from Pascha |
//! | `weekday` | Weekdays and surrounding-weekend arithmetic |
//! | `error` | Error types |

mod date;
mod error;
mod jdn;
mod pascha;
mod weekday;

pub use date::{check_supported_year, Calendar, Date, MAX_YEAR, MIN_YEAR};
pub use error::ComputusError;
pub use pascha::{
    pascha_distance, pascha_gregorian_date, pascha_jdn, pascha_julian_date, PaschaDistance,
};
pub use weekday::{surrounding_weekends, SurroundingWeekends, Weekday};

//! Shared cache of computed year tables.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use typikon_computus::{Calendar, ComputusError};

use crate::year::Year;

/// A thread-safe cache of [`Year`] tables keyed by year and reckoning.
///
/// Building a `Year` touches three Paschas and a few dozen calendar
/// conversions; resolving a month of days would repeat that work thirty
/// times over without a cache. Entries are handed out as [`Arc`]s so
/// resolved days can hold their year past the cache's lifetime.
#[derive(Debug, Default)]
pub struct YearCache {
    years: Mutex<HashMap<(i32, Calendar), Arc<Year>>>,
}

impl YearCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tables for a year, computing and caching them on first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`ComputusError`] if the year (or a neighbor its tables
    /// depend on) falls outside the supported window. Failures are not
    /// cached.
    pub fn get(&self, year: i32, calendar: Calendar) -> Result<Arc<Year>, ComputusError> {
        // Nothing panics while the lock is held, but recover from a
        // poisoned mutex anyway rather than propagating the panic.
        let mut years = self.years.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = years.get(&(year, calendar)) {
            return Ok(Arc::clone(cached));
        }
        let built = Arc::new(Year::new(year, calendar)?);
        tracing::debug!(year, calendar = %calendar, "computed year tables");
        years.insert((year, calendar), Arc::clone(&built));
        Ok(built)
    }

    /// Returns how many year tables are currently cached.
    pub fn len(&self) -> usize {
        self.years.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_by_year_and_reckoning() {
        let cache = YearCache::new();
        assert!(cache.is_empty());

        let first = cache.get(2018, Calendar::Gregorian).unwrap();
        let again = cache.get(2018, Calendar::Gregorian).unwrap();
        assert!(Arc::ptr_eq(&first, &again), "repeat lookups must share one table");
        assert_eq!(cache.len(), 1);

        let julian = cache.get(2018, Calendar::Julian).unwrap();
        assert!(!Arc::ptr_eq(&first, &julian), "reckonings are cached separately");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = YearCache::new();
        assert!(cache.get(1583, Calendar::Gregorian).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn entries_outlive_the_cache() {
        let year = {
            let cache = YearCache::new();
            cache.get(2020, Calendar::Gregorian).unwrap()
        };
        assert_eq!(year.year(), 2020);
    }
}

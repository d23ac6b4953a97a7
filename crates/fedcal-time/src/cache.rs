//! `YearCache` — memoised holiday sets, keyed by year.
//!
//! [`HolidayEngine::resolve_holidays`] returns the same `CalendarYear` for
//! the same year on every call, so a cached entry never goes stale and is
//! never evicted.  The cache is guarded by an `RwLock` and may be shared
//! between threads behind an `Arc`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::calendar_year::CalendarYear;
use crate::classification::Classification;
use crate::date::CalendarDate;
use crate::engine::HolidayEngine;
use fedcal_core::errors::Result;

/// Caller-side cache of resolved holiday years.
#[derive(Debug, Default)]
pub struct YearCache {
    engine: HolidayEngine,
    years: RwLock<HashMap<u16, Arc<CalendarYear>>>,
}

impl YearCache {
    /// An empty cache in front of `engine`.
    pub fn new(engine: HolidayEngine) -> Self {
        Self {
            engine,
            years: RwLock::new(HashMap::new()),
        }
    }

    /// The engine that fills the cache.
    pub fn engine(&self) -> HolidayEngine {
        self.engine
    }

    /// The holidays of `year`, resolving them on first use.
    pub fn get_or_resolve(&self, year: u16) -> Result<Arc<CalendarYear>> {
        // A poisoned lock still holds complete entries: every insert is a
        // single map operation on a value built outside the lock.
        if let Some(hit) = self
            .years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Ok(Arc::clone(hit));
        }
        debug!(year, "holiday cache miss");
        let resolved = Arc::new(self.engine.resolve_holidays(year)?);
        let mut years = self.years.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(years.entry(year).or_insert(resolved)))
    }

    /// Classify `date` using the cached holiday set of its year.
    pub fn classify(&self, date: CalendarDate) -> Result<Classification> {
        Ok(self.get_or_resolve(date.year())?.classify(date))
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.years.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached year.
    pub fn clear(&self) {
        self.years
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_set::RuleSet;
    use std::thread;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn resolves_once_per_year() {
        let cache = YearCache::default();
        assert!(cache.is_empty());
        let a = cache.get_or_resolve(2024).unwrap();
        let b = cache.get_or_resolve(2024).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn classify_matches_engine() {
        let engine = HolidayEngine::new(RuleSet::Legacy);
        let cache = YearCache::new(engine);
        for d in [date(2024, 11, 21), date(2024, 11, 28), date(2024, 4, 13)] {
            assert_eq!(cache.classify(d).unwrap(), engine.classify(d));
        }
    }

    #[test]
    fn shared_between_threads() {
        let cache = Arc::new(YearCache::default());
        let handles: Vec<_> = (2020..2028u16)
            .map(|y| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_resolve(y).map(|c| c.year()))
            })
            .collect();
        for (h, y) in handles.into_iter().zip(2020..2028u16) {
            assert_eq!(h.join().unwrap().unwrap(), y);
        }
        assert_eq!(cache.len(), 8);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = YearCache::default();
        assert!(cache.get_or_resolve(2200).is_err());
        assert!(cache.is_empty());
    }
}

//! Explicit response cache with a time-to-live, owned by whoever builds the
//! source stack instead of living in module state.

use super::{SourceError, SwipeSource};
use crate::models::{AttendanceStatus, PeriodTotal, RawSwipe};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, (Instant, V)>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Every write is a single map call, so a poisoned map is still whole.
    fn entries(&self) -> MutexGuard<'_, HashMap<K, (Instant, V)>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("source cache lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Fresh value for `key`, if any. Expired entries are evicted.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries();
        let fresh = entries
            .get(key)
            .filter(|(stored, _)| stored.elapsed() < self.ttl)
            .map(|(_, value)| value.clone());

        if fresh.is_none() {
            entries.remove(key);
        }
        fresh
    }

    pub fn insert(&self, key: K, value: V) {
        self.entries().insert(key, (Instant::now(), value));
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Range = (NaiveDate, NaiveDate);

/// One cache per upstream call. Failures are never cached.
pub struct SourceCache {
    swipes: TtlCache<NaiveDate, Vec<RawSwipe>>,
    totals: TtlCache<Range, PeriodTotal>,
    statuses: TtlCache<Range, AttendanceStatus>,
}

impl SourceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            swipes: TtlCache::new(ttl),
            totals: TtlCache::new(ttl),
            statuses: TtlCache::new(ttl),
        }
    }
}

fn cached<K, V, F>(cache: &TtlCache<K, V>, key: K, fetch: F) -> Result<V, SourceError>
where
    K: Eq + Hash,
    V: Clone,
    F: FnOnce() -> Result<V, SourceError>,
{
    if let Some(hit) = cache.get(&key) {
        return Ok(hit);
    }
    let value = fetch()?;
    cache.insert(key, value.clone());
    Ok(value)
}

/// Wraps a source, answering repeated calls from `cache` until they expire.
pub struct CachedSource<'c, S> {
    inner: S,
    cache: &'c SourceCache,
}

impl<'c, S: SwipeSource> CachedSource<'c, S> {
    pub fn new(inner: S, cache: &'c SourceCache) -> Self {
        Self { inner, cache }
    }
}

impl<S: SwipeSource> SwipeSource for CachedSource<'_, S> {
    fn fetch_swipes(&self, date: NaiveDate) -> Result<Vec<RawSwipe>, SourceError> {
        cached(&self.cache.swipes, date, || self.inner.fetch_swipes(date))
    }

    fn fetch_period_total(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodTotal, SourceError> {
        cached(&self.cache.totals, (start, end), || {
            self.inner.fetch_period_total(start, end)
        })
    }

    fn fetch_attendance_status(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AttendanceStatus, SourceError> {
        cached(&self.cache.statuses, (start, end), || {
            self.inner.fetch_attendance_status(start, end)
        })
    }
}

//! Memoized inflection results.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::trace;

/// The operation a cache entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    Pluralize,
    Singularize,
    Camelize,
    Underscore,
    Humanize,
}

impl CacheKind {
    pub const ALL: [CacheKind; 5] = [
        CacheKind::Pluralize,
        CacheKind::Singularize,
        CacheKind::Camelize,
        CacheKind::Underscore,
        CacheKind::Humanize,
    ];

    fn index(self) -> usize {
        match self {
            CacheKind::Pluralize => 0,
            CacheKind::Singularize => 1,
            CacheKind::Camelize => 2,
            CacheKind::Underscore => 3,
            CacheKind::Humanize => 4,
        }
    }
}

/// Per-operation maps from exact input to result.
///
/// Entries are never evicted; they live until [`InflectionCache::clear`]. The
/// maps sit behind mutexes so lookups work through a shared reference.
#[derive(Debug, Default)]
pub struct InflectionCache {
    maps: [Mutex<HashMap<String, String>>; 5],
}

impl InflectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: CacheKind) -> MutexGuard<'_, HashMap<String, String>> {
        self.maps[kind.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a cached result.
    pub fn get(&self, kind: CacheKind, key: &str) -> Option<String> {
        let hit = self.map(kind).get(key).cloned();
        if hit.is_some() {
            trace!(?kind, key, "inflection cache hit");
        }
        hit
    }

    pub fn contains(&self, kind: CacheKind, key: &str) -> bool {
        self.map(kind).contains_key(key)
    }

    /// Number of entries cached for `kind`.
    pub fn len(&self, kind: CacheKind) -> usize {
        self.map(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        CacheKind::ALL.iter().all(|kind| self.map(*kind).is_empty())
    }

    /// Store `value` and hand it back.
    pub(crate) fn insert(&self, kind: CacheKind, key: &str, value: String) -> String {
        self.map(kind).insert(key.to_string(), value.clone());
        value
    }

    pub(crate) fn remove(&self, kind: CacheKind, key: &str) {
        self.map(kind).remove(key);
    }

    /// Drop every entry of every kind.
    pub fn clear(&mut self) {
        for map in &mut self.maps {
            map.get_mut().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }
}

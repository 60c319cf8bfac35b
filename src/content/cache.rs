//! In-memory cache for article lists, invalidated by tag.
//!
//! Each entry is stored under a key and labelled with one or more tags. The
//! publishing webhook clears entries by tag; entries also expire after a TTL.
//! A zero TTL disables caching entirely.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Tag shared by every article list.
pub const TAG_ARTICLES: &str = "articles";
/// Tag for the featured list.
pub const TAG_FEATURED: &str = "featured-articles";
/// Tag for the latest list.
pub const TAG_LATEST: &str = "latest-articles";

/// Tags the publishing webhook invalidates.
pub const WEBHOOK_TAGS: &[&str] = &[TAG_ARTICLES, TAG_FEATURED, TAG_LATEST];

#[derive(Debug, Clone)]
struct CachedEntry<T> {
    value: T,
    tags: Vec<&'static str>,
    cached_at: Instant,
}

impl<T> CachedEntry<T> {
    fn is_valid(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() < ttl
    }
}

/// TTL cache keyed by name and invalidated by tag.
pub struct TagCache<T> {
    entries: RwLock<HashMap<&'static str, CachedEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone> TagCache<T> {
    /// Create a cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Fresh value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<T> {
        if !self.is_enabled() {
            return None;
        }
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.is_valid(self.ttl))
            .map(|entry| entry.value.clone())
    }

    /// Store `value` under `key`, labelled with `tags`.
    pub fn insert(&self, key: &'static str, tags: &[&'static str], value: T) {
        if !self.is_enabled() {
            return;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key,
            CachedEntry {
                value,
                tags: tags.to_vec(),
                cached_at: Instant::now(),
            },
        );
    }

    /// Drop every entry carrying any of `tags`. Returns how many were dropped.
    pub fn invalidate(&self, tags: &[&str]) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.iter().any(|tag| tags.contains(tag)));
        before - entries.len()
    }
}

impl<T: Clone> Default for TagCache<T> {
    fn default() -> Self {
        Self::new(Duration::from_secs(60))
    }
}

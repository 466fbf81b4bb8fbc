//! Generic cache trait and in-memory implementation
//!
//! Provides a type-safe interface for memoizing resolved values with:
//! - Shared access from many tasks (`RwLock` guarded map)
//! - Explicit invalidation only (no TTL)
//! - Fault tolerance (a poisoned lock is recovered, not propagated)
//!

use super::CacheStats;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Generic cache trait supporting any cloneable value
pub trait Cache<T: Clone + Send + Sync> {
    /// Get a value from cache by key
    fn get(&self, key: &str) -> Option<T>;

    /// Store a value, replacing any previous entry for the key
    fn set(&self, key: &str, value: T);

    /// Delete a value from cache
    fn delete(&self, key: &str) -> bool;

    /// Check if a key exists in cache
    fn exists(&self, key: &str) -> bool;

    /// Remove every entry
    fn clear(&self);

    /// Entry count and sorted key list
    fn stats(&self) -> CacheStats;
}

/// In-memory implementation of the Cache trait
#[derive(Debug)]
pub struct InMemoryCache<T> {
    entries: RwLock<HashMap<String, T>>,
}

impl<T> Default for InMemoryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // Every writer leaves the map consistent, so a poisoned lock still
    // guards valid data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, T>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("Cache lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, T>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("Cache lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl<T: Clone + Send + Sync> Cache<T> for InMemoryCache<T> {
    fn get(&self, key: &str) -> Option<T> {
        let value = self.read().get(key).cloned();
        match value {
            Some(_) => debug!("Cache hit for key: {}", key),
            None => debug!("Cache miss for key: {}", key),
        }
        value
    }

    fn set(&self, key: &str, value: T) {
        self.write().insert(key.to_string(), value);
        debug!("Cache set for key: {}", key);
    }

    fn delete(&self, key: &str) -> bool {
        let deleted = self.write().remove(key).is_some();
        if deleted {
            debug!("Cache delete for key: {}", key);
        }
        deleted
    }

    fn exists(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    fn clear(&self) {
        let mut entries = self.write();
        let removed = entries.len();
        entries.clear();
        debug!("Cache cleared ({} entries)", removed);
    }

    fn stats(&self) -> CacheStats {
        let entries = self.read();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            size: entries.len(),
            keys,
        }
    }
}

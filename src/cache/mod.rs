//! In-process caching layer for resolved processors

pub mod cache;

// Re-export commonly used items
pub use cache::{Cache, InMemoryCache};

use serde::{Deserialize, Serialize};

/// Snapshot of cache contents
///
/// Serialized as `{ "cacheSize": .., "cachedKeys": [..] }` for the stats endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheStats {
    #[serde(rename = "cacheSize")]
    pub size: usize,
    #[serde(rename = "cachedKeys")]
    pub keys: Vec<String>,
}

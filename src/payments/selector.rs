//! Processor selection
//!
//! Maps a normalized `method_country` key onto one of the provider families
//! and memoizes the result. Keys are matched exactly, so full country names
//! and their 2-letter codes are separate entries.

use crate::cache::{Cache, CacheStats, InMemoryCache};
use crate::error::{PayoutError, PayoutResult};
use crate::payments::providers::Processor;
use crate::payments::traits::PayoutProcessor;
use crate::payments::types::{PayoutMethod, ProviderKind};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Every routing key the selector recognizes
pub const ROUTING_TABLE: &[(&str, ProviderKind)] = &[
    ("mobile_wallet_philippines", ProviderKind::GCash),
    ("mobile_wallet_ph", ProviderKind::GCash),
    ("mobile_wallet_india", ProviderKind::Paytm),
    ("mobile_wallet_in", ProviderKind::Paytm),
    ("digital_wallet_india", ProviderKind::Paytm),
    ("digital_wallet_in", ProviderKind::Paytm),
    ("bank_transfer_india", ProviderKind::BankTransfer),
    ("bank_transfer_in", ProviderKind::BankTransfer),
    ("bank_transfer_philippines", ProviderKind::BankTransfer),
    ("bank_transfer_ph", ProviderKind::BankTransfer),
    ("bank_transfer_bangladesh", ProviderKind::BankTransfer),
    ("bank_transfer_bd", ProviderKind::BankTransfer),
    ("bank_transfer_nepal", ProviderKind::BankTransfer),
    ("bank_transfer_np", ProviderKind::BankTransfer),
    ("bank_transfer_sri lanka", ProviderKind::BankTransfer),
    ("bank_transfer_lk", ProviderKind::BankTransfer),
    ("wire_transfer_india", ProviderKind::BankTransfer),
    ("wire_transfer_in", ProviderKind::BankTransfer),
    ("wire_transfer_philippines", ProviderKind::BankTransfer),
    ("wire_transfer_ph", ProviderKind::BankTransfer),
];

/// Lowercase and trim a routing input
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Resolves (method, country) pairs to processors
///
/// Owns exactly one processor per provider family, so every resolution of a
/// key returns the same `Arc` whether it came from the cache or not.
pub struct ProcessorSelector {
    processors: HashMap<ProviderKind, Arc<Processor>>,
    routes: HashMap<&'static str, ProviderKind>,
    cache: InMemoryCache<Arc<Processor>>,
}

impl Default for ProcessorSelector {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProcessorSelector {
    /// Create a selector; `simulate_latency = false` makes every processor
    /// answer immediately.
    pub fn new(simulate_latency: bool) -> Self {
        let processors = [
            ProviderKind::GCash,
            ProviderKind::Paytm,
            ProviderKind::BankTransfer,
        ]
        .into_iter()
        .map(|kind| (kind, Arc::new(Processor::for_kind(kind, simulate_latency))))
        .collect();

        let routes = ROUTING_TABLE.iter().copied().collect();

        Self {
            processors,
            routes,
            cache: InMemoryCache::new(),
        }
    }

    /// Resolve a processor for the given method and country
    ///
    /// # Errors
    /// `PayoutError::UnsupportedCombination` carrying the normalized inputs
    /// when no provider serves the pair.
    pub fn resolve(&self, method: &str, country: &str) -> PayoutResult<Arc<Processor>> {
        let method = normalize(method);
        let country = normalize(country);
        let key = format!("{}_{}", method, country);

        if let Some(processor) = self.cache.get(&key) {
            debug!(key = %key, "Processor retrieved from cache");
            return Ok(processor);
        }

        let processor = self.lookup(&key).ok_or_else(|| {
            warn!(
                method = %method,
                country = %country,
                known_method = method.parse::<PayoutMethod>().is_ok(),
                "Unsupported payout combination"
            );
            PayoutError::unsupported_combination(&method, &country)
        })?;

        self.cache.set(&key, Arc::clone(&processor));
        info!(
            provider = processor.name(),
            method = %method,
            country = %country,
            "Processor selected"
        );
        Ok(processor)
    }

    fn lookup(&self, key: &str) -> Option<Arc<Processor>> {
        let kind = self.routes.get(key)?;
        self.processors.get(kind).cloned()
    }

    /// `true` when `resolve` would succeed for the pair
    pub fn is_supported(&self, method: &str, country: &str) -> bool {
        self.resolve(method, country).is_ok()
    }

    /// Every recognized routing key mapped to its provider display name
    pub fn list_supported_combinations(&self) -> BTreeMap<String, String> {
        ROUTING_TABLE
            .iter()
            .map(|(key, kind)| (key.to_string(), kind.display_name().to_string()))
            .collect()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("Processor cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

//! Cache store trait and the in-memory TTL implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use riskcast_core::{ReturnSeries, RiskResult};

/// Key-value store for computed return series with per-key expiry.
///
/// Entries are immutable once written: a write within the TTL window
/// replaces the whole value (last-writer-wins), never a partial update.
/// An overwrite race between two concurrent misses for the same key is
/// acceptable - the recomputed value is deterministic-equivalent.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the live (non-expired) series for a key, if any.
    async fn get(&self, key: &str) -> RiskResult<Option<ReturnSeries>>;

    /// Stores a series under a key with a fixed TTL from write time.
    async fn set(&self, key: &str, series: ReturnSeries, ttl: Duration) -> RiskResult<()>;
}

struct CachedSeries {
    series: ReturnSeries,
    expires_at: Instant,
}

/// Concurrent in-memory cache with lazy TTL expiry.
///
/// Expiry is checked on read, not actively evicted: an expired entry is
/// removed the next time its key is requested.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, CachedSeries>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of entries currently held, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> RiskResult<Option<ReturnSeries>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > Instant::now() {
                return Ok(Some(entry.series.clone()));
            }
        } else {
            return Ok(None);
        }
        // Expired: evict lazily.
        self.entries.remove(key);
        Ok(None)
    }

    async fn set(&self, key: &str, series: ReturnSeries, ttl: Duration) -> RiskResult<()> {
        self.entries.insert(
            key.to_string(),
            CachedSeries {
                series,
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}

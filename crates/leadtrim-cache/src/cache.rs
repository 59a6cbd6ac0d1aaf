//! Result Cache
//!
//! Memoizes generated results per (tool version, URL). Entries are written
//! once and never invalidated: a new tool version reads and writes new keys.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{CacheError, CacheKey, Storage};

/// Version-namespaced cache over a [`Storage`] backend
pub struct ResultCache {
    storage: Arc<dyn Storage>,
    version: String,
    hits: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
    failures: AtomicU64,
}

impl ResultCache {
    pub fn new(storage: Arc<dyn Storage>, version: &str) -> Self {
        Self {
            storage,
            version: version.to_string(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            writes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Key a URL is stored under
    pub fn key(&self, url: &str) -> CacheKey {
        CacheKey::for_url(&self.version, url)
    }

    /// Get a cached result; missing or unreadable entries are misses
    pub fn load<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let key = self.key(url);

        match self.try_load(&key) {
            Ok(entry) => {
                tracing::debug!("Cache hit for {} ({})", url, key);
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry)
            }
            Err(CacheError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Cache miss for {}", url);
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Err(e) => {
                tracing::warn!("Ignoring cache entry {}: {}", key, e);
                self.misses.fetch_add(1, Ordering::Relaxed);
                self.failures.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a result; failures are logged and dropped
    pub fn store<T: Serialize>(&self, url: &str, entry: &T) {
        let key = self.key(url);

        match self.try_store(&key, entry) {
            Ok(()) => {
                tracing::debug!("Cached result for {} ({})", url, key);
                self.writes.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::warn!("Failed to cache result for {}: {}", url, e);
                self.failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<T, CacheError> {
        let data = self.storage.read(key)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn try_store<T: Serialize>(&self, key: &CacheKey, entry: &T) -> Result<(), CacheError> {
        let data = serde_json::to_vec(entry)?;
        self.storage.write(key, &data)?;
        Ok(())
    }

    /// Get cache stats
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    /// Corrupt reads and failed writes
    pub failures: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}

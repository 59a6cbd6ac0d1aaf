//! leadtrim Cache
//!
//! Persists generated results keyed by tool version and URL fingerprint.
//! Every failure in here is a cache miss; callers never see an error.

mod cache;
mod key;
mod storage;

pub use cache::{CacheStats, ResultCache};
pub use key::{CacheKey, fingerprint};
pub use storage::{DiskStorage, MemoryStorage, Storage};

/// Cache error, logged and swallowed by [`ResultCache`]
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt cache entry: {0}")]
    Corrupt(#[from] serde_json::Error),
}

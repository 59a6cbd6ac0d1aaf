//! Importer Configuration

use std::path::PathBuf;
use std::time::Duration;

/// Importer configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Prepended to every mixin name
    pub prefix: String,

    /// Cache namespace; entries from other versions are never read
    pub version: String,

    /// Directory holding cached fragments
    pub cache_dir: PathBuf,

    /// Persist fragments to `cache_dir` (in-memory only when false)
    pub caching: bool,

    /// Root for resolving local font paths
    pub base_dir: PathBuf,

    /// User agent string for font downloads
    pub user_agent: String,

    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            version: crate::VERSION.to_string(),
            cache_dir: PathBuf::from(".cache"),
            caching: true,
            base_dir: PathBuf::from("."),
            user_agent: format!("leadtrim/{}", crate::VERSION),
            request_timeout: Duration::from_secs(30),
        }
    }
}

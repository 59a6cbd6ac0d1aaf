//! Cache keys

use std::fmt;

use md5::{Digest, Md5};

/// Hex MD5 digest of a URL
pub fn fingerprint(url: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Identifies one stored result: `<version>.<fingerprint>.json`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    version: String,
    fingerprint: String,
}

impl CacheKey {
    pub fn new(version: &str, fingerprint: &str) -> Self {
        Self {
            version: version.to_string(),
            fingerprint: fingerprint.to_string(),
        }
    }

    /// Key for a URL under a tool version
    pub fn for_url(version: &str, url: &str) -> Self {
        Self::new(version, &fingerprint(url))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.json", self.version, self.fingerprint)
    }
}

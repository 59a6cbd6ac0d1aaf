//! Font sources
//!
//! One implementation per transport. Both hand the bytes to
//! [`RawFontMetrics::from_bytes`] and differ only in how they get them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use leadtrim_text::RawFontMetrics;

use crate::{FontSource, NetError, ResourceLoader};

/// Reads fonts from disk.
///
/// Relative references are looked up like module paths: first against the
/// base directory, then in `node_modules/` of the base directory and each of
/// its ancestors.
#[derive(Debug, Clone)]
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Locate the file a reference points at
    pub fn resolve_path(&self, reference: &str) -> Option<PathBuf> {
        let path = Path::new(reference);
        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }

        std::iter::once(self.base_dir.join(path))
            .chain(
                self.base_dir
                    .ancestors()
                    .map(|dir| dir.join("node_modules").join(path)),
            )
            .find(|candidate| candidate.is_file())
    }
}

impl FontSource for FileSource {
    fn fetch_raw_metrics(&self, reference: &str) -> Result<RawFontMetrics, NetError> {
        let path = self
            .resolve_path(reference)
            .ok_or_else(|| NetError::unavailable(reference, "cannot resolve path"))?;

        tracing::debug!("Reading font from {}", path.display());

        let data = std::fs::read(&path).map_err(|e| NetError::unavailable(reference, e))?;
        Ok(RawFontMetrics::from_bytes(&data)?)
    }
}

/// Downloads fonts over HTTP(S)
pub struct HttpSource {
    loader: ResourceLoader,
}

impl HttpSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, NetError> {
        Ok(Self {
            loader: ResourceLoader::new(user_agent, timeout)?,
        })
    }
}

impl FontSource for HttpSource {
    fn fetch_raw_metrics(&self, reference: &str) -> Result<RawFontMetrics, NetError> {
        let response = self.loader.fetch(reference)?;

        if !response.is_success() {
            return Err(NetError::HttpError {
                status: response.status,
            });
        }

        tracing::debug!("Fetched {} ({} bytes)", reference, response.body.len());

        Ok(RawFontMetrics::from_bytes(&response.body)?)
    }
}

//! leadtrim Networking
//!
//! Font source resolution: local files and HTTP.

mod loader;
mod resolver;
mod source;

pub use loader::{ResourceLoader, Response};
pub use resolver::FontResolver;
pub use source::{FileSource, HttpSource};

use leadtrim_text::{RawFontMetrics, TextError};

/// Transport a font reference is loaded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Local module or file path
    File,
    /// Absolute `http://` or `https://` URL
    Remote,
}

impl SourceKind {
    /// Pick the transport for a reference
    pub fn of(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            SourceKind::Remote
        } else {
            SourceKind::File
        }
    }
}

/// Something that can turn a font reference into raw metrics.
///
/// Implementations block on I/O; [`FontResolver`] runs them off the async
/// executor.
pub trait FontSource: Send + Sync {
    fn fetch_raw_metrics(&self, reference: &str) -> Result<RawFontMetrics, NetError>;
}

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("Source unavailable: {reference}: {reason}")]
    SourceUnavailable { reference: String, reason: String },

    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error(transparent)]
    Font(#[from] TextError),
}

impl NetError {
    pub(crate) fn unavailable(reference: &str, reason: impl ToString) -> Self {
        NetError::SourceUnavailable {
            reference: reference.to_string(),
            reason: reason.to_string(),
        }
    }
}

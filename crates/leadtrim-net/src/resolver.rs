//! Font Resolver
//!
//! Chooses a [`FontSource`] by reference and runs it on the blocking pool.

use std::sync::Arc;

use leadtrim_text::RawFontMetrics;

use crate::{FontSource, NetError, SourceKind};

/// Dispatches font references to the file or remote source
#[derive(Clone)]
pub struct FontResolver {
    file: Arc<dyn FontSource>,
    remote: Arc<dyn FontSource>,
}

impl FontResolver {
    pub fn new(file: Arc<dyn FontSource>, remote: Arc<dyn FontSource>) -> Self {
        Self { file, remote }
    }

    /// Source responsible for a reference
    pub fn source_for(&self, reference: &str) -> &Arc<dyn FontSource> {
        match SourceKind::of(reference) {
            SourceKind::File => &self.file,
            SourceKind::Remote => &self.remote,
        }
    }

    /// Load raw metrics for a font reference
    pub async fn resolve(&self, reference: &str) -> Result<RawFontMetrics, NetError> {
        let source = Arc::clone(self.source_for(reference));
        let reference = reference.to_string();

        smol::unblock(move || source.fetch_raw_metrics(&reference)).await
    }
}

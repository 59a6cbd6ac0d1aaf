//! Font Importer
//!
//! Entry point called by the host compiler for every `@import`. Per URL:
//! pattern check, cache lookup, font resolution, normalization, assembly,
//! cache store. Imports share nothing but the cache storage, so any number
//! may run at once; duplicate cold imports of one URL both do the work and
//! write equivalent entries.

use std::path::Path;
use std::sync::Arc;

use leadtrim_cache::{DiskStorage, MemoryStorage, ResultCache, Storage};
use leadtrim_css::{Fragment, FragmentName, QueryParameters, assemble, is_font_import, strip_query};
use leadtrim_net::{FileSource, FontResolver, FontSource, HttpSource, NetError};
use leadtrim_text::{FontMetrics, TextError};

use crate::Config;

/// Import error, logged by [`Importer::import`]
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Source(#[from] NetError),

    #[error(transparent)]
    Metrics(#[from] TextError),
}

/// Importer builder for swapping storage and font sources
pub struct ImporterBuilder {
    config: Config,
    storage: Option<Arc<dyn Storage>>,
    file: Option<Arc<dyn FontSource>>,
    remote: Option<Arc<dyn FontSource>>,
}

impl ImporterBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: None,
            file: None,
            remote: None,
        }
    }

    pub fn storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn file_source(mut self, source: Arc<dyn FontSource>) -> Self {
        self.file = Some(source);
        self
    }

    pub fn remote_source(mut self, source: Arc<dyn FontSource>) -> Self {
        self.remote = Some(source);
        self
    }

    pub fn build(self) -> Result<Importer, ImportError> {
        let config = self.config;

        let storage: Arc<dyn Storage> = match self.storage {
            Some(storage) => storage,
            None if config.caching => Arc::new(DiskStorage::new(&config.cache_dir)),
            None => Arc::new(MemoryStorage::new()),
        };

        let file: Arc<dyn FontSource> = match self.file {
            Some(source) => source,
            None => Arc::new(FileSource::new(&config.base_dir)),
        };

        let remote: Arc<dyn FontSource> = match self.remote {
            Some(source) => source,
            None => Arc::new(HttpSource::new(&config.user_agent, config.request_timeout)?),
        };

        Ok(Importer {
            cache: Arc::new(ResultCache::new(storage, &config.version)),
            resolver: FontResolver::new(file, remote),
            config,
        })
    }
}

/// Turns font imports into stylesheet fragments
pub struct Importer {
    config: Config,
    cache: Arc<ResultCache>,
    resolver: FontResolver,
}

impl Importer {
    /// Create an importer with disk caching and the default sources
    pub fn new(config: Config) -> Result<Self, ImportError> {
        Self::builder(config).build()
    }

    /// Create an importer builder
    pub fn builder(config: Config) -> ImporterBuilder {
        ImporterBuilder::new(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Fragment for a font import, `None` when the URL is not one or the
    /// font cannot be loaded. Failures are logged, never returned.
    pub async fn import(&self, url: &str, prefix: &str) -> Option<Fragment> {
        match self.try_import(url, prefix).await {
            Ok(fragment) => fragment,
            Err(e) => {
                tracing::warn!("Skipping font import {}: {}", url, e);
                None
            }
        }
    }

    /// Like [`Importer::import`] but surfaces resolution failures
    pub async fn try_import(&self, url: &str, prefix: &str) -> Result<Option<Fragment>, ImportError> {
        if !is_font_import(url) {
            return Ok(None);
        }

        let cache_id = cache_id(url, prefix);

        let cache = Arc::clone(&self.cache);
        let id = cache_id.clone();
        if let Some(cached) = smol::unblock(move || cache.load::<Fragment>(&id)).await {
            return Ok(Some(cached));
        }

        let params = QueryParameters::parse(url);
        let href = strip_query(url);

        let raw = self.resolver.resolve(href).await?;
        let metrics = FontMetrics::new(raw)?;

        let family = params
            .family()
            .or_else(|| metrics.raw.family_name.clone())
            .unwrap_or_else(|| file_stem(href).to_string());
        let name = FragmentName::new(family, params.weight(), params.italic());
        let generated = assemble(href, &name, &metrics, prefix);
        tracing::info!("Including font from {} as @mixin {}", url, generated.mixin_name);
        let fragment = generated.into_fragment();

        let cache = Arc::clone(&self.cache);
        let entry = fragment.clone();
        smol::unblock(move || cache.store(&cache_id, &entry)).await;

        Ok(Some(fragment))
    }

    /// Callback-style hook: `done` runs exactly once, with the fragment or
    /// `None`.
    ///
    /// `prev` is the importing stylesheet. Local fonts resolve against the
    /// configured base directory instead.
    pub fn handle<F>(&self, url: &str, _prev: &str, done: F)
    where
        F: FnOnce(Option<Fragment>),
    {
        let fragment = smol::block_on(self.import(url, &self.config.prefix));
        done(fragment);
    }

    /// Functions the host compiler must register for emitted fragments
    pub fn functions(&self) -> &'static [leadtrim_css::HostFunction] {
        leadtrim_css::host_functions()
    }
}

/// String the cache fingerprints: the URL, plus the prefix when there is one
fn cache_id(url: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        url.to_string()
    } else {
        format!("{}\n{}", url, prefix)
    }
}

fn file_stem(href: &str) -> &str {
    Path::new(href)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(href)
}

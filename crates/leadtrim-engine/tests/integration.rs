//! Integration tests - Full import pipeline
//!
//! Tests the complete workflow: URL → cache → resolve → normalize → fragment → cache

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leadtrim_engine::cache::{MemoryStorage, fingerprint};
use leadtrim_engine::net::{FileSource, FontSource, NetError};
use leadtrim_engine::text::RawFontMetrics;
use leadtrim_engine::{Config, ImportError, Importer};
use leadtrim_text::fixture::FixtureFont;

/// File source that counts how often fonts are actually loaded
struct Counting {
    inner: FileSource,
    calls: AtomicUsize,
}

impl Counting {
    fn new(dir: &Path) -> Arc<Self> {
        Arc::new(Self {
            inner: FileSource::new(dir),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FontSource for Counting {
    fn fetch_raw_metrics(&self, reference: &str) -> Result<RawFontMetrics, NetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_raw_metrics(reference)
    }
}

/// Remote source that must never be reached
struct Offline;

impl FontSource for Offline {
    fn fetch_raw_metrics(&self, reference: &str) -> Result<RawFontMetrics, NetError> {
        Err(NetError::SourceUnavailable {
            reference: reference.to_string(),
            reason: "offline".into(),
        })
    }
}

struct Fixture {
    dir: tempfile::TempDir,
    source: Arc<Counting>,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/Inter.ttf"), FixtureFont::default().build()).unwrap();
        fs::write(dir.path().join("fonts/Plain.ttf"), FixtureFont::new("Plain Family").build()).unwrap();
        fs::write(dir.path().join("fonts/broken.ttf"), b"not a font").unwrap();

        let source = Counting::new(dir.path());
        Self { dir, source }
    }

    fn config(&self, version: &str) -> Config {
        Config {
            version: version.to_string(),
            cache_dir: self.dir.path().join(".cache"),
            base_dir: self.dir.path().to_path_buf(),
            ..Default::default()
        }
    }

    fn importer(&self, version: &str) -> Importer {
        Importer::builder(self.config(version))
            .file_source(self.source.clone())
            .remote_source(Arc::new(Offline))
            .build()
            .unwrap()
    }
}

// ============================================================================
// URL MATCHING TESTS
// ============================================================================

#[test]
fn test_non_font_imports_are_ignored() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");

    smol::block_on(async {
        assert_eq!(importer.import("fonts/Inter.ttf", "").await, None);
        assert_eq!(importer.import("theme.scss?name=Inter", "").await, None);
        assert_eq!(importer.import("variables", "").await, None);
    });

    assert_eq!(fx.source.calls(), 0);
    assert!(!fx.dir.path().join(".cache").exists());
}

// ============================================================================
// FRAGMENT TESTS
// ============================================================================

#[test]
fn test_import_local_font() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");

    let fragment = smol::block_on(importer.import("fonts/Inter.ttf?name=Inter&700&italic", "type-")).unwrap();

    assert!(fragment.contents.contains("src: url(fonts/Inter.ttf);"));
    assert!(fragment.contents.contains("@mixin type-Inter-700-italic("));
    assert!(fragment.contents.contains("--metric-Inter-700-italic-unitsPerEm: 2048;"));
    assert!(fragment.contents.contains("--metric-Inter-700-italic-lineHeightScale: 1.171875;"));
}

#[test]
fn test_family_falls_back_to_font_name() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");

    let fragment = smol::block_on(importer.import("fonts/Plain.ttf?700", "")).unwrap();

    assert!(fragment.contents.contains("  font-family: Plain Family;\n"));
    assert!(fragment.contents.contains("@mixin Plain-Family-700("));
    assert!(fragment.contents.contains("--metric-Plain-Family-700-capHeightScale: "));
    assert!(!fragment.contents.contains("Plain Family-"));
}

#[test]
fn test_explicit_normal_weight_sets_mixin_weight() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");

    let explicit = smol::block_on(importer.import("fonts/Inter.ttf?name=Inter&400", "")).unwrap();
    let implicit = smol::block_on(importer.import("fonts/Inter.ttf?name=Inter", "")).unwrap();

    assert!(explicit.contents.contains("@mixin Inter("));
    assert_eq!(explicit.contents.matches("font-weight: 400;").count(), 2);
    assert_eq!(implicit.contents.matches("font-weight: 400;").count(), 1);
}

// ============================================================================
// CACHE TESTS
// ============================================================================

#[test]
fn test_cold_then_warm_is_identical() {
    let fx = Fixture::new();
    let url = "fonts/Inter.ttf?name=Inter&400&italic";

    let cold = smol::block_on(fx.importer("1.0.0").import(url, "")).unwrap();
    let warm = smol::block_on(fx.importer("1.0.0").import(url, "")).unwrap();

    assert_eq!(cold.contents, warm.contents);
    assert_eq!(fx.source.calls(), 1);
}

#[test]
fn test_cache_file_layout() {
    let fx = Fixture::new();
    let url = "fonts/Inter.ttf?name=Inter";

    smol::block_on(fx.importer("2.3.4").import(url, "")).unwrap();

    let path = fx.dir.path().join(".cache").join(format!("2.3.4.{}.json", fingerprint(url)));
    let stored = fs::read_to_string(path).unwrap();
    assert!(stored.starts_with("{\"contents\":\""));
}

#[test]
fn test_version_change_rederives() {
    let fx = Fixture::new();
    let url = "fonts/Inter.ttf?name=Inter";

    smol::block_on(fx.importer("1.0.0").import(url, "")).unwrap();
    smol::block_on(fx.importer("1.0.1").import(url, "")).unwrap();
    assert_eq!(fx.source.calls(), 2);

    smol::block_on(fx.importer("1.0.0").import(url, "")).unwrap();
    assert_eq!(fx.source.calls(), 2);
}

#[test]
fn test_prefix_is_part_of_cache_identity() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");
    let url = "fonts/Inter.ttf?name=Inter";

    let plain = smol::block_on(importer.import(url, "")).unwrap();
    let prefixed = smol::block_on(importer.import(url, "ds-")).unwrap();

    assert!(plain.contents.contains("@mixin Inter("));
    assert!(prefixed.contents.contains("@mixin ds-Inter("));
}

#[test]
fn test_corrupt_cache_entry_is_regenerated() {
    let fx = Fixture::new();
    let url = "fonts/Inter.ttf?name=Inter";
    let cache_dir = fx.dir.path().join(".cache");
    fs::create_dir_all(&cache_dir).unwrap();
    fs::write(cache_dir.join(format!("1.0.0.{}.json", fingerprint(url))), "{\"contents\":").unwrap();

    let fragment = smol::block_on(fx.importer("1.0.0").import(url, "")).unwrap();

    assert!(fragment.contents.contains("@mixin Inter("));
    assert_eq!(fx.source.calls(), 1);
}

#[test]
fn test_unwritable_cache_still_returns_fragment() {
    let fx = Fixture::new();
    let blocker = fx.dir.path().join("blocker");
    fs::write(&blocker, b"").unwrap();

    let config = Config {
        cache_dir: blocker.join(".cache"),
        ..fx.config("1.0.0")
    };
    let importer = Importer::builder(config)
        .file_source(fx.source.clone())
        .remote_source(Arc::new(Offline))
        .build()
        .unwrap();

    let fragment = smol::block_on(importer.import("fonts/Inter.ttf?name=Inter", ""));

    assert!(fragment.is_some());
    assert_eq!(importer.cache().stats().writes, 0);
}

#[test]
fn test_memory_storage_injection() {
    let fx = Fixture::new();
    let storage = Arc::new(MemoryStorage::new());
    let importer = Importer::builder(fx.config("1.0.0"))
        .storage(storage.clone())
        .file_source(fx.source.clone())
        .remote_source(Arc::new(Offline))
        .build()
        .unwrap();

    smol::block_on(importer.import("fonts/Inter.ttf?name=Inter", "")).unwrap();

    assert_eq!(storage.len(), 1);
    assert!(!fx.dir.path().join(".cache").exists());
}

#[test]
fn test_caching_disabled_uses_memory() {
    let fx = Fixture::new();
    let config = Config {
        caching: false,
        ..fx.config("1.0.0")
    };
    let importer = Importer::builder(config)
        .file_source(fx.source.clone())
        .remote_source(Arc::new(Offline))
        .build()
        .unwrap();

    smol::block_on(importer.import("fonts/Inter.ttf?name=Inter", "")).unwrap();
    smol::block_on(importer.import("fonts/Inter.ttf?name=Inter", "")).unwrap();

    assert_eq!(fx.source.calls(), 1);
    assert!(!fx.dir.path().join(".cache").exists());
}

// ============================================================================
// FAILURE TESTS
// ============================================================================

#[test]
fn test_missing_font_yields_no_fragment() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");

    let fragment = smol::block_on(importer.import("fonts/Missing.ttf?name=Missing", ""));
    assert_eq!(fragment, None);

    let err = smol::block_on(importer.try_import("fonts/Missing.ttf?name=Missing", "")).unwrap_err();
    assert!(matches!(err, ImportError::Source(NetError::SourceUnavailable { .. })));
}

#[test]
fn test_broken_font_is_not_cached() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");
    let url = "fonts/broken.ttf?name=Broken";

    assert_eq!(smol::block_on(importer.import(url, "")), None);
    assert_eq!(smol::block_on(importer.import(url, "")), None);

    assert_eq!(fx.source.calls(), 2);
    assert_eq!(importer.cache().stats().writes, 0);
}

#[test]
fn test_remote_failure_yields_no_fragment() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");

    let fragment = smol::block_on(importer.import("https://fonts.example.com/Inter.ttf?name=Inter", ""));

    assert_eq!(fragment, None);
    assert_eq!(fx.source.calls(), 0);
}

// ============================================================================
// HOST HOOK TESTS
// ============================================================================

#[test]
fn test_handle_calls_done_once() {
    let fx = Fixture::new();
    let importer = Importer::builder(Config {
        prefix: "t-".into(),
        ..fx.config("1.0.0")
    })
    .file_source(fx.source.clone())
    .remote_source(Arc::new(Offline))
    .build()
    .unwrap();

    for url in ["fonts/Inter.ttf?name=Inter", "fonts/Missing.ttf?name=M", "plain.scss"] {
        let mut calls = Vec::new();
        importer.handle(url, "styles/main.scss", |result| calls.push(result));
        assert_eq!(calls.len(), 1, "{}", url);
    }

    let mut result = None;
    importer.handle("fonts/Inter.ttf?name=Inter", "stdin", |r| result = r);
    assert!(result.unwrap().contents.contains("@mixin t-Inter("));
}

#[test]
fn test_host_functions() {
    let fx = Fixture::new();
    let importer = fx.importer("1.0.0");

    let names: Vec<_> = importer.functions().iter().map(|f| f.name()).collect();
    assert_eq!(names, ["pow"]);
}

// ============================================================================
// CONCURRENCY TESTS
// ============================================================================

#[test]
fn test_concurrent_imports() {
    let fx = Fixture::new();
    let importer = Arc::new(fx.importer("1.0.0"));
    let url = "fonts/Inter.ttf?name=Inter&700";

    let (a, b) = smol::block_on(smol::future::zip(importer.import(url, ""), importer.import(url, "")));
    assert_eq!(a, b);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let importer = Arc::clone(&importer);
            std::thread::spawn(move || smol::block_on(importer.import(url, "")))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), a);
    }
}

//! leadtrim Engine
//!
//! Font import hook for stylesheet compilers. An `@import` of a font file
//! with a query string becomes a fragment of custom properties and a
//! leading-trim mixin for that face.
//!
//! # Example
//! ```rust,ignore
//! use leadtrim_engine::{Config, Importer};
//!
//! let importer = Importer::new(Config::default())?;
//! let fragment = importer.import("fonts/Inter.ttf?name=Inter&700", "type-").await;
//! ```

mod config;
mod importer;

pub use config::Config;
pub use importer::{ImportError, Importer, ImporterBuilder};

// Re-export sub-crates for advanced usage
pub use leadtrim_cache as cache;
pub use leadtrim_css as css;
pub use leadtrim_net as net;
pub use leadtrim_text as text;

pub use leadtrim_css::Fragment;

/// Engine version, also the cache namespace
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

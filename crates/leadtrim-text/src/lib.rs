//! leadtrim Text - Font Metrics
//!
//! This crate turns font files into the numbers leading trim needs:
//! - Font face reading (ttf-parser)
//! - Raw metric extraction (units per em, ascent, descent, cap height, ...)
//! - Normalization into size-independent scale ratios

pub mod font;
pub mod metrics;

pub use font::FontFace;
pub use metrics::{FontMetrics, MetricValue, NormalizedMetrics, RawFontMetrics, normalize};

#[cfg(any(test, feature = "fixtures"))]
pub use font::fixture;

/// Font metric error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Unsupported font: {0}")]
    UnsupportedFont(String),

    #[error("Division by zero: font reports 0 units per em")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, TextError>;

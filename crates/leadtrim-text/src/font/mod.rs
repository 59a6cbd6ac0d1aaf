//! Font loading module

mod face;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;

pub use face::FontFace;

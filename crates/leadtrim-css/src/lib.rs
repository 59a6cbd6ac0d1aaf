//! leadtrim CSS
//!
//! Turns an `@import "font.ttf?..."` URL and a font's metrics into a
//! stylesheet fragment: custom properties plus a leading-trim mixin.

mod fragment;
mod functions;
mod query;
mod writer;

pub use fragment::{Fragment, FragmentName, GeneratedFragment, assemble, declarations};
pub use functions::{HostFunction, host_functions};
pub use query::{FONT_EXTENSIONS, QueryParameters, Weight, is_font_import, strip_query};

/// CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl ToString) -> Self {
        Self {
            property: property.into(),
            value: value.to_string(),
        }
    }
}

//! Import query parser
//!
//! `Inter.ttf?name=Inter&700&italic` carries the family, weight and style of
//! the face being imported. Values are read as JSON literals when they parse
//! and kept as raw strings otherwise; a part without `=` is a `true` flag.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

/// Extensions that mark an import URL as a font
pub const FONT_EXTENSIONS: &[&str] = &[".ttf", ".otf"];

/// Whether an import URL should be handled: a font extension and a query
pub fn is_font_import(url: &str) -> bool {
    FONT_EXTENSIONS.iter().any(|ext| url.contains(ext)) && url.contains('?')
}

/// URL without its query string
pub fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(href, _)| href)
}

/// Parameters parsed from an import URL's query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    params: IndexMap<String, Value>,
}

impl QueryParameters {
    pub fn parse(url: &str) -> Self {
        let query = url
            .split_once('?')
            .map(|(_, query)| query.split_once('#').map_or(query, |(q, _)| q))
            .unwrap_or("");

        let mut params = IndexMap::new();
        for part in query.split('&').filter(|part| !part.is_empty()) {
            match part.split_once('=') {
                Some((key, value)) => params.insert(key.to_string(), parse_value(value)),
                None => params.insert(part.to_string(), Value::Bool(true)),
            };
        }

        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// All parameters in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Family from the `name` parameter
    pub fn family(&self) -> Option<String> {
        self.get("name").map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn italic(&self) -> bool {
        self.get("italic").is_some_and(truthy)
    }

    /// First numeric key, 400 when there is none.
    ///
    /// "First" follows JavaScript object key order: canonical integer keys in
    /// ascending order, then every other key in insertion order.
    pub fn weight(&self) -> Weight {
        let mut numeric: Vec<(&str, f64)> = self
            .params
            .keys()
            .filter_map(|key| numeric_key(key).map(|value| (key.as_str(), value)))
            .collect();

        numeric.sort_by_key(|(key, _)| array_index(key).map_or((1, 0), |i| (0, i)));

        numeric
            .first()
            .map(|(key, value)| Weight::new(key, *value))
            .unwrap_or_default()
    }
}

/// Numeric font weight as written in the query
#[derive(Debug, Clone, PartialEq)]
pub struct Weight {
    text: String,
    value: f64,
    /// Taken from a query key rather than defaulted
    explicit: bool,
}

impl Weight {
    pub const NORMAL: f64 = 400.0;

    /// Weight named by a query key
    pub fn new(text: &str, value: f64) -> Self {
        Self {
            text: text.to_string(),
            value,
            explicit: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_normal(&self) -> bool {
        self.value == Self::NORMAL
    }

    /// Whether the query named a weight, even `400`
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self {
            text: "400".into(),
            value: Self::NORMAL,
            explicit: false,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn numeric_key(key: &str) -> Option<f64> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Keys JavaScript treats as array indices ("0", "7", "400" but not "07")
fn array_index(key: &str) -> Option<u32> {
    let canonical = key == "0" || (!key.starts_with('0') && key.bytes().all(|b| b.is_ascii_digit()));
    if !canonical {
        return None;
    }
    key.parse::<u32>().ok().filter(|i| *i != u32::MAX)
}

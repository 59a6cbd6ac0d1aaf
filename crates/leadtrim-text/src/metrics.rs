//! Font metrics
//!
//! Raw values are read once per font in font-unit space. Normalization
//! divides them by units-per-em, which makes every `*_scale` a ratio that
//! holds at any rendered font size and can be multiplied back inside `calc()`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{FontFace, Result, TextError};

/// Vertical metrics and names as stored in the font tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFontMetrics {
    pub units_per_em: u32,
    pub ascent: i32,
    /// Below baseline, usually negative
    pub descent: i32,
    pub cap_height: i32,
    pub line_gap: i32,
    pub x_height: i32,
    pub family_name: Option<String>,
    pub full_name: Option<String>,
    pub postscript_name: Option<String>,
    pub subfamily_name: Option<String>,
}

impl RawFontMetrics {
    /// Read the metric field set from a parsed face
    pub fn from_face(face: &FontFace<'_>) -> Self {
        Self {
            units_per_em: face.units_per_em().into(),
            ascent: face.ascender().into(),
            descent: face.descender().into(),
            cap_height: face.cap_height().into(),
            line_gap: face.line_gap().into(),
            x_height: face.x_height().into(),
            family_name: face.family_name(),
            full_name: face.full_name(),
            postscript_name: face.postscript_name(),
            subfamily_name: face.subfamily_name(),
        }
    }

    /// Parse font bytes and read the metric field set
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        FontFace::parse(data).map(|face| Self::from_face(&face))
    }

    pub fn normalize(&self) -> Result<NormalizedMetrics> {
        normalize(self)
    }
}

/// Size-independent metrics derived from [`RawFontMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetrics {
    pub absolute_descent: i32,
    /// ascent + line gap + |descent|
    pub content_area: i32,
    pub cap_height_scale: f64,
    pub descent_scale: f64,
    pub ascent_scale: f64,
    pub line_gap_scale: f64,
    pub line_height_scale: f64,
}

/// Derive scale ratios from raw font-unit metrics.
///
/// Fails with [`TextError::DivisionByZero`] when the font reports zero units
/// per em.
pub fn normalize(raw: &RawFontMetrics) -> Result<NormalizedMetrics> {
    if raw.units_per_em == 0 {
        return Err(TextError::DivisionByZero);
    }

    let units_per_em = f64::from(raw.units_per_em);
    let absolute_descent = raw.descent.abs();
    let content_area = raw.ascent + raw.line_gap + absolute_descent;

    Ok(NormalizedMetrics {
        absolute_descent,
        content_area,
        cap_height_scale: f64::from(raw.cap_height) / units_per_em,
        descent_scale: f64::from(absolute_descent) / units_per_em,
        ascent_scale: f64::from(raw.ascent) / units_per_em,
        line_gap_scale: f64::from(raw.line_gap) / units_per_em,
        line_height_scale: f64::from(content_area) / units_per_em,
    })
}

/// A single metric as emitted into a stylesheet
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Integer(v) => write!(f, "{}", v),
            MetricValue::Number(v) => write!(f, "{}", v),
            MetricValue::Text(v) => f.write_str(v),
        }
    }
}

/// Raw and normalized metrics of one font
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    pub raw: RawFontMetrics,
    pub normalized: NormalizedMetrics,
}

impl FontMetrics {
    pub fn new(raw: RawFontMetrics) -> Result<Self> {
        let normalized = normalize(&raw)?;
        Ok(Self { raw, normalized })
    }

    /// Every metric in emission order, keyed by its camelCase name.
    ///
    /// Names the font does not carry are left out.
    pub fn properties(&self) -> Vec<(&'static str, MetricValue)> {
        use MetricValue::{Integer, Number, Text};

        let raw = &self.raw;
        let n = &self.normalized;
        let names = [
            ("familyName", &raw.family_name),
            ("fullName", &raw.full_name),
            ("postscriptName", &raw.postscript_name),
            ("subfamilyName", &raw.subfamily_name),
        ];

        let mut props = vec![
            ("capHeight", Integer(raw.cap_height.into())),
            ("ascent", Integer(raw.ascent.into())),
            ("descent", Integer(raw.descent.into())),
            ("lineGap", Integer(raw.line_gap.into())),
            ("unitsPerEm", Integer(raw.units_per_em.into())),
        ];
        props.extend(
            names
                .into_iter()
                .filter_map(|(key, value)| value.clone().map(|v| (key, Text(v)))),
        );
        props.extend([
            ("xHeight", Integer(raw.x_height.into())),
            ("absoluteDescent", Integer(n.absolute_descent.into())),
            ("capHeightScale", Number(n.cap_height_scale)),
            ("descentScale", Number(n.descent_scale)),
            ("ascentScale", Number(n.ascent_scale)),
            ("lineGapScale", Number(n.line_gap_scale)),
            ("lineHeightScale", Number(n.line_height_scale)),
            ("contentArea", Integer(n.content_area.into())),
        ]);
        props
    }
}

//! Fragment Assembler
//!
//! Emits, for one font face:
//! - `roundTo()` / `getCapHeight()` helpers and `$preventCollapse`
//! - an `@font-face` rule
//! - `:root` custom properties `--metric-{name}-{metric}`
//! - the `{prefix}{name}` leading-trim mixin
//!
//! The mixin reads every font constant through `var()`, so the emitted text
//! stays the same for every size the author asks for.

use std::fmt;

use leadtrim_text::FontMetrics;
use serde::{Deserialize, Serialize};

use crate::writer::ScssWriter;
use crate::{Declaration, Weight};

/// Import result handed back to the host compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub contents: String,
}

/// Family, weight and style that name a face: `family[-weight][-italic]`.
///
/// Whitespace in the family becomes `-` so the name is a valid SCSS
/// identifier; `family` itself is kept verbatim for `font-family`.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentName {
    pub family: String,
    pub weight: Weight,
    pub italic: bool,
}

impl FragmentName {
    pub fn new(family: impl Into<String>, weight: Weight, italic: bool) -> Self {
        Self {
            family: family.into(),
            weight,
            italic,
        }
    }

    /// Custom property for one metric
    pub fn property(&self, metric: &str) -> String {
        format!("--metric-{}-{}", self, metric)
    }

    /// `var()` reference to one metric
    pub fn var(&self, metric: &str) -> String {
        format!("var({})", self.property(metric))
    }

    /// Family as an identifier: whitespace runs replaced by `-`
    pub fn family_ident(&self) -> String {
        self.family.split_whitespace().collect::<Vec<_>>().join("-")
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.family_ident())?;
        if !self.weight.is_normal() {
            write!(f, "-{}", self.weight)?;
        }
        if self.italic {
            f.write_str("-italic")?;
        }
        Ok(())
    }
}

/// Assembled fragment with the names it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFragment {
    pub name: FragmentName,
    pub mixin_name: String,
    pub contents: String,
}

impl GeneratedFragment {
    pub fn into_fragment(self) -> Fragment {
        Fragment {
            contents: self.contents,
        }
    }
}

const MIXIN_PARAMS: &str = "$fontSize: false, $lineGap: false, $lineHeight: false, \
$letterSpacing: false, $leading: false, $capHeight: false, $weight: 400, $italic: false";

/// Build the stylesheet fragment for a face served at `href`
pub fn assemble(href: &str, name: &FragmentName, metrics: &FontMetrics, prefix: &str) -> GeneratedFragment {
    let mixin_name = format!("{}{}", prefix, name);
    let mut w = ScssWriter::new();

    write_helpers(&mut w);
    w.blank();
    write_font_face(&mut w, href, name);
    w.blank();
    write_root(&mut w, name, metrics);
    w.blank();
    write_mixin(&mut w, &mixin_name, name);

    GeneratedFragment {
        name: name.clone(),
        mixin_name,
        contents: w.finish(),
    }
}

/// Custom property declarations for every metric of the face
pub fn declarations(name: &FragmentName, metrics: &FontMetrics) -> Vec<Declaration> {
    metrics
        .properties()
        .into_iter()
        .map(|(metric, value)| Declaration::new(name.property(metric), value))
        .collect()
}

fn write_helpers(w: &mut ScssWriter) {
    w.open("@function roundTo($num, $precision: 2)");
    w.line("$factor: pow(10, $precision);");
    w.line("@return round($num * $factor) / $factor;");
    w.close();
    w.open("@function getCapHeight($fontSize, $capHeight, $unitsPerEm, $precision: 2)");
    w.line("@return roundTo(($fontSize * $capHeight) / $unitsPerEm, $precision);");
    w.close();
    w.line("$preventCollapse: 0.05;");
}

fn write_font_face(w: &mut ScssWriter, href: &str, name: &FragmentName) {
    w.open("@font-face");
    w.line(format!("src: url({});", href));
    w.line(format!("font-family: {};", name.family));
    if name.italic {
        w.line("font-style: italic;");
    }
    w.line(format!("font-weight: {};", name.weight));
    w.close();
}

fn write_root(w: &mut ScssWriter, name: &FragmentName, metrics: &FontMetrics) {
    w.open(":root");
    for decl in declarations(name, metrics) {
        w.line(format!("{}: {};", decl.property, decl.value));
    }
    w.close();
}

/// Subtract the half-leading offset from a trim amount, keeping the
/// collapse-preventing padding.
fn leading_trim(pre_calc: &str) -> String {
    format!(
        "calc({} - #{{$specifiedLineHeightOffset}} / #{{$specifiedFontSize}} \
         + #{{$preventCollapse}} / #{{$specifiedFontSize}})",
        pre_calc
    )
}

fn write_mixin(w: &mut ScssWriter, mixin_name: &str, name: &FragmentName) {
    let cap_height_scale = name.var("capHeightScale");
    let line_gap_scale = name.var("lineGapScale");

    w.open(format!("@mixin {}({})", mixin_name, MIXIN_PARAMS));
    w.line(format!(
        "font-family: {}, var(--{}-stack, var(--{}-stack));",
        name.family,
        name,
        name.family_ident()
    ));
    if name.italic {
        w.line("font-style: italic;");
    }
    if name.weight.is_explicit() {
        w.line(format!("font-weight: {};", name.weight));
    }
    w.open("@if $letterSpacing != false");
    w.line("letter-spacing: $letterSpacing;");
    w.close();

    w.open("@if $fontSize != false and $lineHeight != false");
    w.line("font-size: $fontSize;");
    w.line("line-height: ($lineHeight / $fontSize);");
    w.chain("@else");

    w.open("@if $leading != false and $lineGap != false");
    w.line(r#"@error 'Only a single line height style can be provided. Please pass either "lineGap" OR "leading".';"#);
    w.close();
    w.open("@if $capHeight != false and $fontSize != false");
    w.line(r#"@error 'Please pass either "capHeight" OR "fontSize", not both.';"#);
    w.close();

    w.line("$specifiedFontSize: false;");
    w.line("$specifiedCapHeight: false;");
    w.open("@if $capHeight != false");
    w.line(format!("$specifiedFontSize: calc(#{{$capHeight}} / {});", cap_height_scale));
    w.line("$specifiedCapHeight: $capHeight;");
    w.chain("@else if $fontSize != false");
    w.line("$specifiedFontSize: $fontSize;");
    w.line(format!("$specifiedCapHeight: calc(#{{$specifiedFontSize}} * {});", cap_height_scale));
    w.chain("@else");
    w.line(r#"@error 'Please pass either "capHeight" OR "fontSize".';"#);
    w.close();

    w.line("$specifiedLineHeight: 0;");
    w.open("@if $lineGap != false");
    w.line("$specifiedLineHeight: calc(#{$specifiedCapHeight} + #{$lineGap});");
    w.chain("@else if $leading != false");
    w.line("$specifiedLineHeight: $leading;");
    w.close();

    w.line(format!(
        "$lineHeightNormal: calc({} * #{{$specifiedFontSize}});",
        name.var("lineHeightScale")
    ));
    w.line("$specifiedLineHeightOffset: 0;");
    w.open("@if $specifiedLineHeight");
    w.line("$specifiedLineHeightOffset: calc((#{$lineHeightNormal} - #{$specifiedLineHeight}) / 2);");
    w.close();

    w.line("font-size: calc(#{$specifiedFontSize} * 1px);");
    w.open("@if $specifiedLineHeight and $specifiedLineHeight != 0");
    w.line("line-height: calc(#{$specifiedLineHeight} * 1px);");
    w.chain("@else");
    w.line("line-height: normal;");
    w.close();
    w.line("padding: #{$preventCollapse}px 0;");

    w.open("&::before");
    w.line(r#"content: "";"#);
    w.line(format!(
        "--a: calc({} - {} + {} / 2);",
        name.var("ascentScale"),
        cap_height_scale,
        line_gap_scale
    ));
    w.line(format!("margin-top: calc({} * -1em);", leading_trim("var(--a)")));
    w.line("display: block;");
    w.line("height: 0;");
    w.close();

    w.open("&::after");
    w.line(r#"content: "";"#);
    let descent = format!("{} + {} / 2", name.var("descentScale"), line_gap_scale);
    w.line(format!("margin-bottom: calc({} * -1em);", leading_trim(&descent)));
    w.line("display: block;");
    w.line("height: 0;");
    w.close();

    // closes the outer @else and the mixin
    w.close();
    w.close();
}

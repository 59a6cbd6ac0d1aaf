//! Comprehensive tests for leadtrim-css
//!
//! Tests query parsing through fragment assembly, as the importer drives them.

use leadtrim_css::*;
use leadtrim_text::{FontMetrics, RawFontMetrics};

fn inter() -> FontMetrics {
    FontMetrics::new(RawFontMetrics {
        units_per_em: 2816,
        ascent: 2728,
        descent: -680,
        cap_height: 2048,
        line_gap: 0,
        x_height: 1536,
        family_name: Some("Inter".into()),
        full_name: Some("Inter Regular".into()),
        postscript_name: Some("Inter-Regular".into()),
        subfamily_name: Some("Regular".into()),
    })
    .unwrap()
}

fn name_for(url: &str) -> FragmentName {
    let q = QueryParameters::parse(url);
    FragmentName::new(q.family().unwrap_or_default(), q.weight(), q.italic())
}

// ============================================================================
// NAMING TESTS
// ============================================================================

#[test]
fn test_name_from_query() {
    assert_eq!(name_for("Inter.ttf?name=Inter").to_string(), "Inter");
    assert_eq!(name_for("Inter.ttf?name=Inter&400").to_string(), "Inter");
    assert_eq!(name_for("Inter.ttf?name=Inter&700").to_string(), "Inter-700");
    assert_eq!(name_for("Inter.ttf?name=Inter&italic").to_string(), "Inter-italic");
    assert_eq!(name_for("Inter.ttf?italic&name=Inter&300").to_string(), "Inter-300-italic");
}

#[test]
fn test_name_ignores_passthrough_flags() {
    assert_eq!(name_for("Inter.ttf?name=Inter&swap&subset=latin").to_string(), "Inter");
}

// ============================================================================
// ASSEMBLY TESTS
// ============================================================================

#[test]
fn test_fragment_exposes_scale_properties() {
    let name = name_for("Inter.ttf?name=Inter&700");
    let contents = assemble("Inter.ttf", &name, &inter(), "").contents;

    for metric in ["capHeightScale", "lineHeightScale", "ascentScale", "descentScale", "lineGapScale"] {
        let property = format!("--metric-Inter-700-{}: ", metric);
        assert!(contents.contains(&property), "missing {}", property);
    }
}

#[test]
fn test_fragment_scale_values() {
    let name = name_for("Inter.ttf?name=Inter");
    let decls = declarations(&name, &inter());
    let value = |metric: &str| -> f64 {
        let property = name.property(metric);
        decls
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.parse().unwrap())
            .unwrap()
    };

    assert!((value("lineHeightScale") - (2728.0 + 680.0) / 2816.0).abs() < 1e-12);
    assert!((value("capHeightScale") - 2048.0 / 2816.0).abs() < 1e-12);
    assert_eq!(value("lineGapScale"), 0.0);
}

#[test]
fn test_fragment_is_deterministic() {
    let name = name_for("Inter.ttf?name=Inter&italic");
    let a = assemble("Inter.ttf", &name, &inter(), "t-");
    let b = assemble("Inter.ttf", &name, &inter(), "t-");

    assert_eq!(a, b);
}

#[test]
fn test_prefix_only_affects_mixin() {
    let name = name_for("Inter.ttf?name=Inter");
    let plain = assemble("Inter.ttf", &name, &inter(), "").contents;
    let prefixed = assemble("Inter.ttf", &name, &inter(), "ds-").contents;

    assert!(prefixed.contains("@mixin ds-Inter("));
    assert_eq!(plain.replace("@mixin Inter(", "@mixin ds-Inter("), prefixed);
}

#[test]
fn test_remote_href() {
    let url = "https://cdn.example.com/Inter.ttf?name=Inter";
    let contents = assemble(strip_query(url), &name_for(url), &inter(), "").contents;

    assert!(contents.contains("src: url(https://cdn.example.com/Inter.ttf);"));
}

#[test]
fn test_host_functions_cover_fragment() {
    let contents = assemble("Inter.ttf", &name_for("Inter.ttf?name=Inter"), &inter(), "").contents;

    for function in host_functions() {
        assert!(contents.contains(&format!("{}(", function.name())));
    }
}

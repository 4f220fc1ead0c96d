#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_page() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.mobile_breakpoint_px, 768.0);
    assert_eq!(cfg.resize_debounce_ms, 250);
    assert_eq!(cfg.navbar_scrolled_after_px, 50.0);
    assert_eq!(cfg.section_activation_offset_px, 100.0);
    assert_eq!(cfg.anchor_scroll_offset_px, 80.0);
    assert_eq!(cfg.reveal.threshold, 0.1);
    assert_eq!(cfg.reveal.root_margin, "0px 0px -50px 0px");
    assert_eq!(cfg.lazy_images.threshold, 0.01);
    assert_eq!(cfg.lazy_images.root_margin, "100px 0px");
    assert_eq!(cfg.mobile_preload_count, 20);
}

#[test]
fn from_json_keeps_defaults_for_absent_fields() {
    let cfg = FxConfig::from_json(r#"{ "mobileBreakpointPx": 1024, "cardStaggerMs": 40 }"#).unwrap();
    assert_eq!(cfg.mobile_breakpoint_px, 1024.0);
    assert_eq!(cfg.card_stagger_ms, 40);
    assert_eq!(cfg.tag_stagger_ms, 50);
    assert_eq!(cfg.reveal, FxConfig::default().reveal);
}

#[test]
fn from_json_accepts_nested_observer_override() {
    let cfg = FxConfig::from_json(r#"{ "lazyImages": { "threshold": 0.5, "rootMargin": "200px 0px" } }"#).unwrap();
    assert_eq!(cfg.lazy_images.threshold, 0.5);
    assert_eq!(cfg.lazy_images.root_margin, "200px 0px");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = FxConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_threshold_out_of_range() {
    let err = FxConfig::from_json(r#"{ "reveal": { "threshold": 1.5, "rootMargin": "0px" } }"#).unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "reveal"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_json_rejects_negative_breakpoint() {
    let err = FxConfig::from_json(r#"{ "mobileBreakpointPx": -1 }"#).unwrap_err();
    assert!(err.to_string().contains("mobileBreakpointPx"));
}

#[test]
fn resolve_falls_back_to_defaults() {
    assert_eq!(FxConfig::resolve(None), FxConfig::default());
    assert_eq!(FxConfig::resolve(Some("   ")), FxConfig::default());
    assert_eq!(FxConfig::resolve(Some(r#""just a string""#)), FxConfig::default());
}

#[test]
fn resolve_applies_valid_override() {
    let cfg = FxConfig::resolve(Some(r#"{ "resizeDebounceMs": 100 }"#));
    assert_eq!(cfg.resize_debounce_ms, 100);
}

#[test]
fn pointer_capable_is_strictly_above_breakpoint() {
    let cfg = FxConfig::default();
    assert!(!cfg.is_pointer_capable(768.0));
    assert!(cfg.is_pointer_capable(769.0));
    assert!(!cfg.is_pointer_capable(320.0));
}

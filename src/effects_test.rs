use super::*;

// --- percent ---

#[test]
fn percent_formats_shortest_decimal() {
    assert_eq!(percent(50.0), "50%");
    assert_eq!(percent(12.75), "12.75%");
}

// --- image hover ---

#[test]
fn image_hover_transform_at_center_only_scales() {
    assert_eq!(image_hover_transform(Point::new(0.0, 0.0)), "scale(1.1) translate(0px, 0px)");
}

#[test]
fn image_hover_transform_scales_offset_to_pixels() {
    assert_eq!(image_hover_transform(Point::new(1.0, -0.5)), "scale(1.1) translate(10px, -5px)");
}

// --- hero ---

#[test]
fn hero_transform_moves_at_half_speed() {
    assert_eq!(hero_transform(300.0), "translateY(150px)");
    assert_eq!(hero_transform(0.0), "translateY(0px)");
}

// --- cursor ---

#[test]
fn cursor_transforms_center_their_element() {
    assert_eq!(cursor_dot_transform(Point::new(100.0, 50.0), 1.0), "translate(95px, 45px) scale(1)");
    assert_eq!(cursor_follower_transform(Point::new(100.0, 50.0), 1.5), "translate(80px, 30px) scale(1.5)");
}

// --- stagger ---

#[test]
fn stagger_delay_multiplies_index() {
    assert_eq!(stagger_delay_ms(0, 100), 0);
    assert_eq!(stagger_delay_ms(3, 50), 150);
}

#[test]
fn stagger_delay_saturates() {
    assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
}

// --- ripple ---

#[test]
fn ripple_css_places_span() {
    let css = ripple_css(Ripple { size: 120.0, left: -10.0, top: 4.5 });
    assert!(css.contains("width: 120px; height: 120px"));
    assert!(css.contains("left: -10px; top: 4.5px"));
    assert!(css.contains("animation: ripple 0.6s ease-out"));
}

// --- AOS delays ---

#[test]
fn positive_delay_parses_leading_integer() {
    assert!(has_positive_delay("300"));
    assert!(has_positive_delay("150ms"));
    assert!(has_positive_delay(" 20"));
    assert!(has_positive_delay("+5"));
}

#[test]
fn non_positive_or_non_numeric_delay_is_kept() {
    assert!(!has_positive_delay("0"));
    assert!(!has_positive_delay("000"));
    assert!(!has_positive_delay("-100"));
    assert!(!has_positive_delay("abc"));
    assert!(!has_positive_delay(""));
}

// --- preload ---

#[test]
fn preload_source_prefers_src() {
    assert_eq!(preload_source(Some("a.png".into()), Some("b.png".into())).as_deref(), Some("a.png"));
}

#[test]
fn preload_source_falls_back_to_data_src() {
    assert_eq!(preload_source(Some(String::new()), Some("b.png".into())).as_deref(), Some("b.png"));
    assert_eq!(preload_source(None, Some("b.png".into())).as_deref(), Some("b.png"));
    assert_eq!(preload_source(None, None), None);
}

// --- constants ---

#[test]
fn keyframes_define_every_animation() {
    for name in ["spin", "pulse", "gradientMove", "ripple"] {
        assert!(KEYFRAMES_CSS.contains(&format!("@keyframes {name}")), "missing {name}");
    }
}

#[test]
fn card_styles_hide_and_show() {
    assert_eq!(CARD_HIDDEN.opacity, "0");
    assert_eq!(CARD_SHOWN.transform, "translateY(0)");
    assert_eq!(TAG_HIDDEN.transform, "translateY(20px)");
}

use super::*;

fn section(id: &str, top: f64, height: f64) -> SectionBounds {
    SectionBounds { id: id.to_owned(), top, height }
}

fn page() -> Vec<SectionBounds> {
    vec![section("home", 0.0, 600.0), section("projects", 600.0, 900.0), section("contact", 1500.0, 400.0)]
}

// =============================================================
// Navbar
// =============================================================

#[test]
fn navbar_scrolled_strictly_after_threshold() {
    assert!(!navbar_scrolled(0.0, 50.0));
    assert!(!navbar_scrolled(50.0, 50.0));
    assert!(navbar_scrolled(50.5, 50.0));
}

// =============================================================
// Active section
// =============================================================

#[test]
fn active_section_uses_activation_offset() {
    let sections = page();
    assert_eq!(active_section(550.0, &sections, 100.0), Some("projects"));
    assert_eq!(active_section(450.0, &sections, 100.0), Some("home"));
}

#[test]
fn active_section_range_is_half_open() {
    let sections = vec![section("only", 200.0, 100.0)];
    assert_eq!(active_section(100.0, &sections, 100.0), None);
    assert_eq!(active_section(100.5, &sections, 100.0), Some("only"));
    assert_eq!(active_section(200.0, &sections, 100.0), Some("only"));
    assert_eq!(active_section(200.5, &sections, 100.0), None);
}

#[test]
fn active_section_none_at_top_of_page() {
    let sections = vec![section("about", 400.0, 300.0)];
    assert_eq!(active_section(0.0, &sections, 100.0), None);
}

#[test]
fn active_section_last_match_wins_on_overlap() {
    let sections = vec![section("a", 0.0, 1000.0), section("b", 300.0, 200.0)];
    assert_eq!(active_section(250.0, &sections, 100.0), Some("b"));
}

#[test]
fn link_targets_matches_hash_href() {
    assert!(link_targets("#projects", "projects"));
    assert!(!link_targets("projects", "projects"));
    assert!(!link_targets("#project", "projects"));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn in_page_link_scrolls_to_its_section() {
    assert_eq!(anchor_click("#contact"), AnchorClick::ScrollTo("#contact"));
}

#[test]
fn bare_hash_stays_put() {
    assert_eq!(anchor_click("#"), AnchorClick::Stay);
}

#[test]
fn other_links_navigate_normally() {
    assert_eq!(anchor_click("https://example.com/#x"), AnchorClick::Follow);
    assert_eq!(anchor_click("/about"), AnchorClick::Follow);
    assert_eq!(anchor_click("resume.pdf"), AnchorClick::Follow);
}

#[test]
fn anchor_scroll_top_subtracts_offset() {
    assert!((anchor_scroll_top(1200.0, 80.0) - 1120.0).abs() < f64::EPSILON);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_and_styles_hamburger() {
    let mut menu = MenuState::default();
    let frame = menu.toggle();
    assert!(menu.is_open());
    assert_eq!(frame.top_transform, "rotate(45deg) translateY(8px)");
    assert_eq!(frame.middle_opacity, "0");
    assert_eq!(frame.bottom_transform, "rotate(-45deg) translateY(-8px)");
}

#[test]
fn close_resets_hamburger() {
    let mut menu = MenuState::default();
    menu.toggle();
    let frame = menu.close();
    assert!(!menu.is_open());
    assert_eq!(frame, HamburgerFrame { top_transform: "", middle_opacity: "1", bottom_transform: "" });
}

#[test]
fn outside_click_closes_open_compact_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    let click = ClickContext { compact: true, inside_menu: false, inside_toggle: false };
    assert!(closes_menu(menu, click));
}

#[test]
fn inside_clicks_and_wide_layouts_keep_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(!closes_menu(menu, ClickContext { compact: true, inside_menu: true, inside_toggle: false }));
    assert!(!closes_menu(menu, ClickContext { compact: true, inside_menu: false, inside_toggle: true }));
    assert!(!closes_menu(menu, ClickContext { compact: false, inside_menu: false, inside_toggle: false }));
    assert!(!closes_menu(MenuState::default(), ClickContext { compact: true, ..ClickContext::default() }));
}

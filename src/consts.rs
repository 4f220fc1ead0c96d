//! Shared constants: smoothing weights, transform magnitudes, and the DOM contract.

// ── Continuous animation ────────────────────────────────────────

/// Per-frame interpolation weight for the card glow position. Fixed; not part of
/// [`crate::config::FxConfig`].
pub const GLOW_SMOOTHING: f64 = 0.15;

/// Per-frame interpolation weight for the cursor follower ring.
pub const FOLLOWER_SMOOTHING: f64 = 0.1;

// ── Cursor decoration ───────────────────────────────────────────

/// Half the cursor dot diameter in CSS pixels.
pub const CURSOR_DOT_HALF_PX: f64 = 5.0;

/// Half the follower ring diameter in CSS pixels.
pub const CURSOR_FOLLOWER_HALF_PX: f64 = 20.0;

/// Scale applied to both cursor elements while over an interactive element.
pub const CURSOR_HOVER_SCALE: f64 = 1.5;

// ── Image and hero effects ──────────────────────────────────────

/// Zoom applied to a hovered project image.
pub const IMAGE_HOVER_SCALE: f64 = 1.1;

/// Maximum parallax shift of a hovered image, in pixels, at the image edge.
pub const IMAGE_PARALLAX_PX: f64 = 10.0;

/// Fraction of the scroll offset applied to the hero background.
pub const HERO_PARALLAX_SPEED: f64 = 0.5;

// ── DOM contract ────────────────────────────────────────────────

/// `localStorage` key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const GLOW_X_PROPERTY: &str = "--glow-x";
pub const GLOW_Y_PROPERTY: &str = "--glow-y";
pub const GLOW_ACTIVE_CLASS: &str = "glow-active";

/// Present on an image until its real source has been swapped in.
pub const DATA_SRC_ATTRIBUTE: &str = "data-src";

/// Optional JSON overrides for [`crate::config::FxConfig`], read from `<html>`.
pub const CONFIG_ATTRIBUTE: &str = "data-fx-config";

pub const SMOOTH_SCROLL_POLYFILL_URL: &str =
    "https://cdn.jsdelivr.net/npm/smoothscroll-polyfill@0.4.4/dist/smoothscroll.min.js";

// ── Selectors ───────────────────────────────────────────────────

pub const GLOW_CARD_SELECTOR: &str = ".project-card, .project-card-mini, .project-mini, .tech-showcase";
pub const REVEAL_CARD_SELECTOR: &str = ".project-card, .project-mini, .project-card-mini";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const HOVER_IMAGE_SELECTOR: &str = ".hoverable-image";
pub const HOVER_IMAGE_PARENT_SELECTOR: &str = ".project-image, .project-mini-image, .project-card-image";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .hoverable-image, .project-card";
pub const TECH_TAG_SELECTOR: &str = ".tech-tag, .tech-stack-mini span";
pub const GRADIENT_TITLE_SELECTOR: &str = ".hero-title, .section-title";
pub const HERO_BG_SELECTOR: &str = ".hero-bg";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const AOS_DELAY_SELECTOR: &str = "[data-aos-delay]";

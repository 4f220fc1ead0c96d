//! Style values for the decorative effects.
//!
//! Everything here is a pure function from geometry or an index to the CSS
//! text the DOM layer writes.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::consts::{
    CURSOR_DOT_HALF_PX, CURSOR_FOLLOWER_HALF_PX, HERO_PARALLAX_SPEED, IMAGE_HOVER_SCALE, IMAGE_PARALLAX_PX,
};
use crate::geometry::{Point, Ripple};

/// Transform of a project image at rest.
pub const IMAGE_REST_TRANSFORM: &str = "scale(1) translate(0, 0)";

/// Keyframes used by the spinner, tag pulse, title gradient and button ripple.
pub const KEYFRAMES_CSS: &str = "\
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.1); } }
@keyframes gradientMove { 0%, 100% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } }
@keyframes ripple { to { transform: scale(4); opacity: 0; } }
";

pub const CURSOR_DOT_CSS: &str = "position: fixed; width: 10px; height: 10px; border-radius: 50%; \
background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); pointer-events: none; z-index: 9999; \
transition: transform 0.1s ease; opacity: 0;";

pub const CURSOR_FOLLOWER_CSS: &str = "position: fixed; width: 40px; height: 40px; border-radius: 50%; \
border: 2px solid rgba(102, 126, 234, 0.3); pointer-events: none; z-index: 9998; \
transition: transform 0.2s ease; opacity: 0;";

pub const LOADER_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); display: flex; align-items: center; \
justify-content: center; z-index: 10000; transition: opacity 0.5s ease;";

pub const SPINNER_CSS: &str = "width: 60px; height: 60px; border: 4px solid rgba(255, 255, 255, 0.3); \
border-top-color: white; border-radius: 50%; animation: spin 1s linear infinite;";

/// Hidden starting state of a reveal card.
pub const CARD_HIDDEN: CardStyle = CardStyle { opacity: "0", transform: "translateY(50px)" };

/// Resting state of a revealed card.
pub const CARD_SHOWN: CardStyle = CardStyle { opacity: "1", transform: "translateY(0)" };

pub const CARD_TRANSITION: &str = "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)";

/// Hidden starting state of a tech tag.
pub const TAG_HIDDEN: CardStyle = CardStyle { opacity: "0", transform: "translateY(20px)" };
pub const TAG_SHOWN: CardStyle = CardStyle { opacity: "1", transform: "translateY(0)" };
pub const TAG_TRANSITION: &str = "all 0.5s ease";
pub const TAG_PULSE_ANIMATION: &str = "pulse 0.5s ease";

pub const GRADIENT_BACKGROUND_SIZE: &str = "200% 200%";
pub const GRADIENT_ANIMATION: &str = "gradientMove 3s ease infinite";

/// Opacity/transform pair written together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

/// A percentage custom-property value, e.g. `"42.5%"`.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value}%")
}

/// Zoomed and shifted transform for a hovered image; `offset` in half-extents.
#[must_use]
pub fn image_hover_transform(offset: Point) -> String {
    format!(
        "scale({IMAGE_HOVER_SCALE}) translate({}px, {}px)",
        offset.x * IMAGE_PARALLAX_PX,
        offset.y * IMAGE_PARALLAX_PX
    )
}

/// Hero background shift for the current scroll offset.
#[must_use]
pub fn hero_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * HERO_PARALLAX_SPEED)
}

/// Transform of the cursor dot centered on `pointer`.
#[must_use]
pub fn cursor_dot_transform(pointer: Point, scale: f64) -> String {
    centered_transform(pointer, CURSOR_DOT_HALF_PX, scale)
}

/// Transform of the follower ring centered on its eased position.
#[must_use]
pub fn cursor_follower_transform(position: Point, scale: f64) -> String {
    centered_transform(position, CURSOR_FOLLOWER_HALF_PX, scale)
}

fn centered_transform(p: Point, half: f64, scale: f64) -> String {
    format!("translate({}px, {}px) scale({scale})", p.x - half, p.y - half)
}

/// Delay before the `index`-th element of a batch animates.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Inline style of a click ripple.
#[must_use]
pub fn ripple_css(ripple: Ripple) -> String {
    format!(
        "position: absolute; width: {size}px; height: {size}px; border-radius: 50%; \
         background: rgba(255, 255, 255, 0.5); left: {left}px; top: {top}px; transform: scale(0); \
         animation: ripple 0.6s ease-out; pointer-events: none;",
        size = ripple.size,
        left = ripple.left,
        top = ripple.top,
    )
}

/// Whether a `data-aos-delay` value holds a positive delay.
///
/// Reads a leading integer the way `parseInt` does: `"300ms"` is 300, `"abc"`
/// is not a number.
#[must_use]
pub fn has_positive_delay(raw: &str) -> bool {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let digits = &digits[..end];
    sign > 0 && digits.bytes().any(|b| b != b'0')
}

/// Source to preload for an image: its `src`, else its `data-src`.
///
/// Empty values count as missing.
#[must_use]
pub fn preload_source(src: Option<String>, data_src: Option<String>) -> Option<String> {
    src.filter(|s| !s.is_empty()).or_else(|| data_src.filter(|s| !s.is_empty()))
}

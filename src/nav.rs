//! Navigation state: scrolled navbar, active section link, mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical extent of a page section, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Whether the navbar shows its scrolled style.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The section whose link should be highlighted at `scroll_y`.
///
/// A section counts from `activation_offset` above its top through its
/// height. When ranges overlap the last matching section wins; when none
/// matches the highlight is left alone (`None`).
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], activation_offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - activation_offset;
            scroll_y > top && scroll_y <= top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Whether a nav link's `href` points at section `id`.
#[must_use]
pub fn link_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#') == Some(id)
}

/// What a click on a nav link's `href` should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorClick<'a> {
    /// Not an in-page link; let the browser navigate.
    Follow,
    /// A bare `#`: suppress the jump, scroll nowhere.
    Stay,
    /// Suppress the jump and scroll to the element matching this selector.
    ScrollTo(&'a str),
}

#[must_use]
pub fn anchor_click(href: &str) -> AnchorClick<'_> {
    match href.strip_prefix('#') {
        None => AnchorClick::Follow,
        Some("") => AnchorClick::Stay,
        Some(_) => AnchorClick::ScrollTo(href),
    }
}

/// Scroll position that leaves `offset` pixels above the target.
#[must_use]
pub fn anchor_scroll_top(target_offset_top: f64, offset: f64) -> f64 {
    target_offset_top - offset
}

/// Inline styles for the three hamburger bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HamburgerFrame {
    pub top_transform: &'static str,
    pub middle_opacity: &'static str,
    pub bottom_transform: &'static str,
}

impl HamburgerFrame {
    #[must_use]
    pub fn for_menu(open: bool) -> Self {
        if open {
            Self {
                top_transform: "rotate(45deg) translateY(8px)",
                middle_opacity: "0",
                bottom_transform: "rotate(-45deg) translateY(-8px)",
            }
        } else {
            Self { top_transform: "", middle_opacity: "1", bottom_transform: "" }
        }
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new hamburger styling.
    pub fn toggle(&mut self) -> HamburgerFrame {
        self.open = !self.open;
        HamburgerFrame::for_menu(self.open)
    }

    /// Close the menu and return the reset styling.
    pub fn close(&mut self) -> HamburgerFrame {
        self.open = false;
        HamburgerFrame::for_menu(false)
    }
}

/// Where a document click landed relative to the menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickContext {
    /// Viewport is at or below the mobile breakpoint.
    pub compact: bool,
    pub inside_menu: bool,
    pub inside_toggle: bool,
}

/// Whether a document click should close an open menu.
#[must_use]
pub fn closes_menu(menu: MenuState, click: ClickContext) -> bool {
    click.compact && menu.is_open() && !click.inside_menu && !click.inside_toggle
}

//! Navbar, mobile menu, anchor scrolling and active-link highlighting.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::config::FxConfig;
use crate::consts::{NAV_LINK_SELECTOR, SECTION_SELECTOR};
use crate::dom::{bus, html, query_all, query_all_in, report, scroll_y, set_style, viewport_width};
use crate::error::FxError;
use crate::nav::{
    AnchorClick, ClickContext, HamburgerFrame, MenuState, SectionBounds, active_section, anchor_click,
    anchor_scroll_top, closes_menu, link_targets, navbar_scrolled,
};

/// Bind every navigation behaviour present on the page.
///
/// # Errors
///
/// Returns the first lookup or listener registration failure.
pub fn bind(window: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
    let links = query_all(document, NAV_LINK_SELECTOR)?;
    if let Some(navbar) = document.get_element_by_id("navbar") {
        bind_scrolled(window, navbar, config.navbar_scrolled_after_px)?;
    }
    if let (Some(toggle), Some(menu)) = (document.get_element_by_id("mobileToggle"), document.get_element_by_id("navMenu")) {
        bind_menu(window, document, &toggle, &menu, &links, config.mobile_breakpoint_px)?;
    }
    bind_anchor_links(window, document, &links, config.anchor_scroll_offset_px)?;
    bind_active_link(window, document, links, config.section_activation_offset_px)?;
    Ok(())
}

fn bind_scrolled(window: &Window, navbar: Element, threshold: f64) -> Result<(), FxError> {
    let win = window.clone();
    bus::listen_forever(window, "scroll", move |_| {
        let scrolled = navbar_scrolled(scroll_y(&win), threshold);
        if let Err(e) = navbar.class_list().toggle_with_force("scrolled", scrolled) {
            log::debug!("navbar class update failed: {e:?}");
        }
    })
}

struct Menu {
    state: Cell<MenuState>,
    toggle: Element,
    panel: Element,
    bars: Vec<Element>,
}

impl Menu {
    fn flip(&self) -> Result<(), FxError> {
        let mut state = self.state.get();
        let frame = state.toggle();
        self.state.set(state);
        self.render(state, frame)
    }

    fn close(&self) -> Result<(), FxError> {
        let mut state = self.state.get();
        let frame = state.close();
        self.state.set(state);
        self.render(state, frame)
    }

    fn render(&self, state: MenuState, frame: HamburgerFrame) -> Result<(), FxError> {
        self.panel.class_list().toggle_with_force("active", state.is_open())?;
        let styles = [("transform", frame.top_transform), ("opacity", frame.middle_opacity), ("transform", frame.bottom_transform)];
        for (bar, (property, value)) in self.bars.iter().zip(styles) {
            if let Some(bar) = html(bar) {
                set_style(bar, property, value)?;
            }
        }
        Ok(())
    }

    fn click_context(&self, window: &Window, event: &Event, breakpoint: f64) -> ClickContext {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        ClickContext {
            compact: viewport_width(window) <= breakpoint,
            inside_menu: self.panel.contains(node),
            inside_toggle: self.toggle.contains(node),
        }
    }
}

fn bind_menu(
    window: &Window,
    document: &Document,
    toggle: &Element,
    panel: &Element,
    links: &[Element],
    breakpoint: f64,
) -> Result<(), FxError> {
    let menu = Rc::new(Menu {
        state: Cell::new(MenuState::default()),
        toggle: toggle.clone(),
        panel: panel.clone(),
        bars: query_all_in(toggle, "span")?,
    });

    {
        let menu = Rc::clone(&menu);
        bus::listen_forever(toggle, "click", move |_| report("menu toggle", menu.flip()))?;
    }

    for link in links {
        let menu = Rc::clone(&menu);
        let win = window.clone();
        bus::listen_forever(link, "click", move |_| {
            if viewport_width(&win) <= breakpoint {
                report("menu close", menu.close());
            }
        })?;
    }

    let win = window.clone();
    bus::listen_forever(document, "click", move |event| {
        if closes_menu(menu.state.get(), menu.click_context(&win, &event, breakpoint)) {
            report("menu close", menu.close());
        }
    })
}

/// Smooth-scroll nav links that point into the page. Other links navigate.
fn bind_anchor_links(window: &Window, document: &Document, links: &[Element], offset: f64) -> Result<(), FxError> {
    for link in links {
        let win = window.clone();
        let doc = document.clone();
        let anchor = link.clone();
        bus::listen_forever(link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            match anchor_click(&href) {
                AnchorClick::Follow => {}
                AnchorClick::Stay => event.prevent_default(),
                AnchorClick::ScrollTo(selector) => {
                    event.prevent_default();
                    report("anchor scroll", scroll_to_anchor(&win, &doc, selector, offset));
                }
            }
        })?;
    }
    Ok(())
}

fn scroll_to_anchor(window: &Window, document: &Document, selector: &str, offset: f64) -> Result<(), FxError> {
    let Some(target) = document.query_selector(selector)? else {
        log::debug!("anchor target {selector} not found");
        return Ok(());
    };
    let Some(target) = html(&target) else {
        return Err(FxError::NodeType("anchor target"));
    };
    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(target.offset_top()), offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn bind_active_link(window: &Window, document: &Document, links: Vec<Element>, offset: f64) -> Result<(), FxError> {
    let sections = query_all(document, SECTION_SELECTOR)?;
    if sections.is_empty() || links.is_empty() {
        return Ok(());
    }
    let win = window.clone();
    bus::listen_forever(window, "scroll", move |_| {
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .filter_map(|section| {
                let el = html(section)?;
                Some(SectionBounds {
                    id: section.id(),
                    top: f64::from(el.offset_top()),
                    height: f64::from(el.offset_height()),
                })
            })
            .collect();
        let Some(current) = active_section(scroll_y(&win), &bounds, offset) else {
            return;
        };
        for link in &links {
            let on = link.get_attribute("href").is_some_and(|href| link_targets(&href, current));
            if let Err(e) = link.class_list().toggle_with_force("active", on) {
                log::debug!("nav link class update failed: {e:?}");
            }
        }
    })
}

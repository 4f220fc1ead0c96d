//! Browser bindings: everything that touches `web_sys`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate root holds the page logic as plain Rust so it can be tested
//! natively. This module adapts it to the DOM: it looks elements up, owns
//! listeners and timers, and reports failures through `log` instead of
//! surfacing them, since every behaviour here is a best-effort enhancement.

pub mod bus;
pub mod decoration;
pub mod effects;
pub mod frames;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod theme;
pub mod watch;

use js_sys::Object;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, NodeList, Window};

use crate::error::FxError;
use crate::geometry::{Point, Rect};
use crate::lazy::Attributes;
use crate::viewport::Capabilities;

/// The global `window`.
///
/// # Errors
///
/// Returns [`FxError::NoWindow`] outside a browser.
pub fn window() -> Result<Window, FxError> {
    web_sys::window().ok_or(FxError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`FxError::NoWindow`] or [`FxError::NoDocument`].
pub fn document() -> Result<Document, FxError> {
    window()?.document().ok_or(FxError::NoDocument)
}

/// Log a failed binder or handler and carry on.
pub fn report(context: &str, result: Result<(), FxError>) {
    if let Err(e) = result {
        log::warn!("{context}: {e}");
    }
}

/// Elements in `document` matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`FxError::Js`] for an invalid selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FxError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Descendants of `root` matching `selector`.
///
/// # Errors
///
/// Returns [`FxError::Js`] for an invalid selector.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, FxError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// `element` as an `HtmlElement`, if it is one.
#[must_use]
pub fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Set one inline style property.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the style declaration rejects the write.
pub fn set_style(element: &HtmlElement, name: &str, value: &str) -> Result<(), FxError> {
    element.style().set_property(name, value)?;
    Ok(())
}

/// Create a `tag` element with a class and inline CSS.
///
/// # Errors
///
/// Returns [`FxError::Js`] if creation fails.
pub fn create_styled(document: &Document, tag: &'static str, class: &str, css: &str) -> Result<HtmlElement, FxError> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    let element = element.dyn_into::<HtmlElement>().map_err(|_| FxError::NodeType(tag))?;
    element.style().set_css_text(css);
    Ok(element)
}

/// Layout viewport width in CSS pixels; 0 when unavailable.
#[must_use]
pub fn viewport_width(window: &Window) -> f64 {
    match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Bounding box of `element` measured now.
#[must_use]
pub fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Client-space pointer position of a mouse event.
#[must_use]
pub fn client_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

/// Probe the browser once for the facilities the page can use.
#[must_use]
pub fn detect_capabilities(window: &Window, document: &Document) -> Capabilities {
    let smooth_scroll = document
        .document_element()
        .as_ref()
        .and_then(html)
        .is_some_and(|root| has_property(&root.style(), "scrollBehavior"));
    let local_storage = matches!(window.local_storage(), Ok(Some(_)));
    Capabilities {
        animation_frames: has_property(window, "requestAnimationFrame"),
        intersection_observer: has_property(window, "IntersectionObserver"),
        smooth_scroll,
        local_storage,
    }
}

fn has_property(target: &Object, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

impl Attributes for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FxError> {
        Element::set_attribute(self, name, value)?;
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<(), FxError> {
        Element::remove_attribute(self, name)?;
        Ok(())
    }
}

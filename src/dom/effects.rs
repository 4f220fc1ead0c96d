//! Decorative effects that need no per-frame state.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::FxConfig;
use crate::consts::{
    BUTTON_SELECTOR, GRADIENT_TITLE_SELECTOR, HERO_BG_SELECTOR, HOVER_IMAGE_PARENT_SELECTOR, HOVER_IMAGE_SELECTOR,
    SMOOTH_SCROLL_POLYFILL_URL, TECH_TAG_SELECTOR,
};
use crate::dom::reveal::apply_card_style;
use crate::dom::{bus, client_point, create_styled, html, query_all, rect_of, report, scroll_y, set_style};
use crate::effects::{
    GRADIENT_ANIMATION, GRADIENT_BACKGROUND_SIZE, IMAGE_REST_TRANSFORM, KEYFRAMES_CSS, LOADER_CSS, SPINNER_CSS,
    TAG_HIDDEN, TAG_PULSE_ANIMATION, TAG_SHOWN, TAG_TRANSITION, hero_transform, image_hover_transform, ripple_css,
    stagger_delay_ms,
};
use crate::error::FxError;
use crate::geometry::Ripple;

/// Append the shared `@keyframes` rules to `<head>`.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the style element cannot be created or attached.
pub fn inject_keyframes(document: &Document) -> Result<(), FxError> {
    let head = document.head().ok_or(FxError::NoDocument)?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(KEYFRAMES_CSS));
    head.append_child(&style)?;
    Ok(())
}

/// Load the smooth-scroll polyfill script.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the script element cannot be attached.
pub fn load_scroll_polyfill(document: &Document) -> Result<(), FxError> {
    let head = document.head().ok_or(FxError::NoDocument)?;
    let script = document.create_element("script")?;
    script.set_attribute("src", SMOOTH_SCROLL_POLYFILL_URL)?;
    head.append_child(&script)?;
    log::info!("smooth scrolling unsupported; loading polyfill");
    Ok(())
}

/// Zoom and shift project images toward the pointer while hovered.
///
/// # Errors
///
/// Returns [`FxError::Js`] if a lookup or listener registration fails.
pub fn bind_image_hover(document: &Document) -> Result<(), FxError> {
    for image in query_all(document, HOVER_IMAGE_SELECTOR)? {
        let Some(parent) = image.closest(HOVER_IMAGE_PARENT_SELECTOR)? else {
            continue;
        };
        let Some(img) = html(&image).cloned() else {
            continue;
        };

        let target = img.clone();
        bus::listen_forever(&parent, "mousemove", move |event| {
            let Some(offset) = client_point(&event).and_then(|p| rect_of(&target).centered_offset(p)) else {
                return;
            };
            report("image hover", set_style(&target, "transform", &image_hover_transform(offset)));
        })?;

        bus::listen_forever(&parent, "mouseleave", move |_| {
            report("image hover", set_style(&img, "transform", IMAGE_REST_TRANSFORM));
        })?;
    }
    Ok(())
}

/// Move the hero background at half the scroll speed.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the lookup or listener registration fails.
pub fn bind_hero_parallax(window: &Window, document: &Document) -> Result<(), FxError> {
    let layers: Vec<HtmlElement> = query_all(document, HERO_BG_SELECTOR)?.iter().filter_map(html).cloned().collect();
    if layers.is_empty() {
        return Ok(());
    }
    let win = window.clone();
    bus::listen_forever(window, "scroll", move |_| {
        let transform = hero_transform(scroll_y(&win));
        for layer in &layers {
            report("hero parallax", set_style(layer, "transform", &transform));
        }
    })
}

/// Fade tech tags in one after another and pulse them on hover.
///
/// # Errors
///
/// Returns [`FxError::Js`] if a lookup, style write or listener registration fails.
pub fn animate_tech_tags(document: &Document, config: &FxConfig) -> Result<(), FxError> {
    let tags = query_all(document, TECH_TAG_SELECTOR)?;
    for (index, tag) in tags.iter().enumerate() {
        let Some(tag) = html(tag).cloned() else {
            continue;
        };
        apply_card_style(&tag, TAG_HIDDEN)?;

        let shown = tag.clone();
        Timeout::new(stagger_delay_ms(index, config.tag_stagger_ms), move || {
            report("tech tag", set_style(&shown, "transition", TAG_TRANSITION));
            report("tech tag", apply_card_style(&shown, TAG_SHOWN));
        })
        .forget();

        let pulsing = tag.clone();
        bus::listen_forever(&tag, "mouseenter", move |_| {
            report("tech tag", set_style(&pulsing, "animation", TAG_PULSE_ANIMATION));
        })?;
        let settled = tag.clone();
        bus::listen_forever(&tag, "animationend", move |_| {
            report("tech tag", set_style(&settled, "animation", ""));
        })?;
    }
    log::debug!("animating {} tech tags", tags.len());
    Ok(())
}

/// Give section titles a moving gradient background.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the lookup or a style write fails.
pub fn style_gradient_titles(document: &Document) -> Result<(), FxError> {
    for title in query_all(document, GRADIENT_TITLE_SELECTOR)?.iter().filter_map(html) {
        set_style(title, "background-size", GRADIENT_BACKGROUND_SIZE)?;
        set_style(title, "animation", GRADIENT_ANIMATION)?;
    }
    Ok(())
}

/// Cover the page with a spinner until the window has loaded.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the overlay cannot be built or attached.
pub fn show_loader(window: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
    let body = document.body().ok_or(FxError::NoDocument)?;
    let overlay = create_styled(document, "div", "loading-overlay", LOADER_CSS)?;
    let spinner = create_styled(document, "div", "", SPINNER_CSS)?;
    overlay.append_child(&spinner)?;
    body.append_child(&overlay)?;

    let (fade, remove) = (config.loader_fade_delay_ms, config.loader_remove_delay_ms);
    // Startup may run after `load` already fired.
    if document.ready_state() == "complete" {
        dismiss_loader(overlay, fade, remove);
        return Ok(());
    }
    let mut overlay = Some(overlay);
    bus::listen_forever(window, "load", move |_| {
        if let Some(overlay) = overlay.take() {
            dismiss_loader(overlay, fade, remove);
        }
    })
}

fn dismiss_loader(overlay: HtmlElement, fade_ms: u32, remove_ms: u32) {
    Timeout::new(fade_ms, move || {
        report("loader", set_style(&overlay, "opacity", "0"));
        Timeout::new(remove_ms, move || overlay.remove()).forget();
    })
    .forget();
}

/// Spawn a ripple from the click point inside each `.btn`.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the lookup or listener registration fails.
pub fn bind_button_ripple(document: &Document, config: &FxConfig) -> Result<(), FxError> {
    let lifetime = config.ripple_lifetime_ms;
    for button in query_all(document, BUTTON_SELECTOR)? {
        let (doc, target) = (document.clone(), button.clone());
        bus::listen_forever(&button, "click", move |event| {
            let Some(click) = client_point(&event) else {
                return;
            };
            report("ripple", spawn_ripple(&doc, &target, Ripple::centered(rect_of(&target), click), lifetime));
        })?;
    }
    Ok(())
}

fn spawn_ripple(document: &Document, button: &Element, ripple: Ripple, lifetime_ms: u32) -> Result<(), FxError> {
    let span = create_styled(document, "span", "", &ripple_css(ripple))?;
    if let Some(button) = html(button) {
        set_style(button, "position", "relative")?;
        set_style(button, "overflow", "hidden")?;
    }
    button.append_child(&span)?;
    Timeout::new(lifetime_ms, move || span.remove()).forget();
    Ok(())
}

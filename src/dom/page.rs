//! Composition root: wires every behaviour onto the live document.
//!
//! STARTUP
//! =======
//! 1. Read the optional `data-fx-config` JSON off `<html>`.
//! 2. Probe browser capabilities once.
//! 3. Run each binder. A failing binder is logged and skipped; the rest of the
//!    page still gets its behaviour.
//! 4. Install the pointer decoration when the viewport is wide enough, then
//!    re-evaluate that on every debounced resize.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Window};

use crate::config::FxConfig;
use crate::consts::CONFIG_ATTRIBUTE;
use crate::dom::decoration::PointerDecoration;
use crate::dom::{bus, detect_capabilities, effects, nav, reveal, report, theme, viewport_width};
use crate::error::FxError;
use crate::viewport::{Capabilities, DecorationChange, decoration_change};

struct Page {
    window: Window,
    document: Document,
    config: FxConfig,
    capabilities: Capabilities,
    decoration: Option<PointerDecoration>,
    resize_timer: Option<Timeout>,
}

impl Page {
    fn wants_decoration(&self) -> bool {
        self.capabilities.supports_decoration() && self.config.is_pointer_capable(viewport_width(&self.window))
    }

    /// Install or remove the pointer decoration to match the viewport.
    fn sync_decoration(&mut self) {
        match decoration_change(self.wants_decoration(), self.decoration.is_some()) {
            DecorationChange::Install => match PointerDecoration::install(&self.window, &self.document) {
                Ok(decoration) => self.decoration = Some(decoration),
                Err(e) => log::warn!("pointer decoration: {e}"),
            },
            DecorationChange::Remove => self.decoration = None,
            DecorationChange::Keep => {}
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Mount now, or once the DOM has been parsed.
pub fn start() {
    match crate::dom::document() {
        Ok(document) if document.ready_state() == "loading" => {
            report("startup", bus::listen_forever(&document, "DOMContentLoaded", |_| report("mount", mount())));
        }
        Ok(_) => report("mount", mount()),
        Err(e) => log::error!("cannot start: {e}"),
    }
}

/// Bind every page behaviour.
///
/// # Errors
///
/// Returns [`FxError::NoWindow`]/[`FxError::NoDocument`] outside a page, or
/// [`FxError::Js`] if the resize listener cannot be attached. Individual
/// binder failures are only logged.
pub fn mount() -> Result<(), FxError> {
    let window = crate::dom::window()?;
    let document = window.document().ok_or(FxError::NoDocument)?;

    let raw_config = document.document_element().and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let config = FxConfig::resolve(raw_config.as_deref());
    let capabilities = detect_capabilities(&window, &document);
    let strategy = capabilities.watch_strategy();
    log::info!("mounting page effects ({capabilities:?})");

    report("keyframes", effects::inject_keyframes(&document));
    report("loader", effects::show_loader(&window, &document, &config));
    report("theme", theme::bind(&window, &document, &capabilities));
    report("navigation", nav::bind(&window, &document, &config));
    report("scroll reveal", reveal::bind_scroll_reveal(&document, strategy, &config));
    report("card reveal", reveal::bind_card_reveal(&document, strategy, &config));
    report("lazy images", reveal::bind_lazy_images(&document, strategy, &config));
    report("image hover", effects::bind_image_hover(&document));
    report("hero parallax", effects::bind_hero_parallax(&window, &document));
    report("tech tags", effects::animate_tech_tags(&document, &config));
    report("gradient titles", effects::style_gradient_titles(&document));
    report("button ripple", effects::bind_button_ripple(&document, &config));
    let pointer_capable = config.is_pointer_capable(viewport_width(&window));
    if !pointer_capable {
        report("animation delays", reveal::reset_aos_delays(&document));
    }
    if capabilities.preloads_for_touch(pointer_capable) {
        report("touch preload", reveal::preload_for_touch(&document, &config));
    }
    if capabilities.needs_scroll_polyfill() {
        report("scroll polyfill", effects::load_scroll_polyfill(&document));
    }

    let mut page = Page { window: window.clone(), document, config, capabilities, decoration: None, resize_timer: None };
    page.sync_decoration();
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));

    bus::listen_forever(&window, "resize", |_| schedule_resync())?;
    log::debug!("{} page listeners registered", bus::bus_len());
    Ok(())
}

/// Restart the resize debounce; the pending timer is cancelled when replaced.
fn schedule_resync() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().as_mut() {
            page.resize_timer = Some(Timeout::new(page.config.resize_debounce_ms, resync));
        }
    });
}

fn resync() {
    PAGE.with(|slot| {
        if let Some(page) = slot.borrow_mut().as_mut() {
            page.sync_decoration();
        }
    });
}

//! Visibility-driven content: reveal classes, staggered cards, lazy images and
//! the touch-layout preload.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::config::FxConfig;
use crate::consts::{AOS_DELAY_SELECTOR, DATA_SRC_ATTRIBUTE, LAZY_IMAGE_SELECTOR, REVEAL_CARD_SELECTOR};
use crate::dom::watch::watch;
use crate::dom::{html, query_all, report, set_style};
use crate::effects::{
    CARD_HIDDEN, CARD_SHOWN, CARD_TRANSITION, CardStyle, has_positive_delay, preload_source, stagger_delay_ms,
};
use crate::error::FxError;
use crate::lazy::LazyImages;
use crate::viewport::{WatchMode, WatchOptions, WatchStrategy};

const REVEALED_CLASS: &str = "animate-in";

/// Add the reveal class each time a project card scrolls into view.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the lookup or observer fails.
pub fn bind_scroll_reveal(document: &Document, strategy: WatchStrategy, config: &FxConfig) -> Result<(), FxError> {
    let elements = query_all(document, REVEAL_CARD_SELECTOR)?;
    let options = WatchOptions::new(&config.reveal, WatchMode::Repeat);
    watch(strategy, &elements, &options, |element, _| {
        if let Err(e) = element.class_list().add_1(REVEALED_CLASS) {
            log::debug!("reveal class update failed: {e:?}");
        }
        false
    })
}

/// Hide project cards, then fade them in with a per-batch stagger.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the lookup, a style write or the observer fails.
pub fn bind_card_reveal(document: &Document, strategy: WatchStrategy, config: &FxConfig) -> Result<(), FxError> {
    let cards = query_all(document, REVEAL_CARD_SELECTOR)?;
    for card in cards.iter().filter_map(html) {
        apply_card_style(card, CARD_HIDDEN)?;
        set_style(card, "transition", CARD_TRANSITION)?;
    }
    let options = WatchOptions::new(&config.card_reveal, WatchMode::Repeat);
    let step = config.card_stagger_ms;
    watch(strategy, &cards, &options, move |card, index| {
        if let Some(card) = html(card).cloned() {
            Timeout::new(stagger_delay_ms(index, step), move || {
                report("card reveal", apply_card_style(&card, CARD_SHOWN));
            })
            .forget();
        }
        false
    })
}

/// Write a paired opacity and transform.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the style declaration rejects a write.
pub fn apply_card_style(element: &HtmlElement, style: CardStyle) -> Result<(), FxError> {
    set_style(element, "opacity", style.opacity)?;
    set_style(element, "transform", style.transform)
}

/// Swap `data-src` into `src` the first time each image nears the viewport.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the lookup or observer fails.
pub fn bind_lazy_images(document: &Document, strategy: WatchStrategy, config: &FxConfig) -> Result<(), FxError> {
    let images = query_all(document, LAZY_IMAGE_SELECTOR)?;
    let mut lazy = LazyImages::new();
    for image in &images {
        lazy.track(image.clone());
    }

    if strategy == WatchStrategy::Immediate {
        let loaded = lazy.load_all();
        log::debug!("loaded {loaded} lazy images without an observer");
        return Ok(());
    }

    let lazy = Rc::new(RefCell::new(lazy));
    let options = WatchOptions::new(&config.lazy_images, WatchMode::Once);
    watch(strategy, &images, &options, move |image, _| {
        let mut lazy = lazy.borrow_mut();
        let Some(key) = lazy.key_of(image) else {
            return true;
        };
        match lazy.on_visible(key, true) {
            Ok(done) => done,
            Err(e) => {
                log::warn!("lazy image failed to load: {e}");
                true
            }
        }
    })
}

/// Start fetching the first images that have not loaded yet.
///
/// # Errors
///
/// Returns [`FxError::Js`] if a lookup or image construction fails.
pub fn preload_for_touch(document: &Document, config: &FxConfig) -> Result<(), FxError> {
    let mut requested = 0;
    for image in query_all(document, "img")?.iter().take(config.mobile_preload_count) {
        if preload(image)? {
            requested += 1;
        }
    }
    log::debug!("preloading {requested} images for touch layout");
    Ok(())
}

/// Drop scroll-animation delays so touch layouts reveal content at once.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the lookup or an attribute write fails.
pub fn reset_aos_delays(document: &Document) -> Result<(), FxError> {
    for element in query_all(document, AOS_DELAY_SELECTOR)? {
        let delayed = element.get_attribute("data-aos-delay").is_some_and(|raw| has_positive_delay(&raw));
        if delayed {
            element.set_attribute("data-aos-delay", "0")?;
        }
    }
    Ok(())
}

fn preload(image: &Element) -> Result<bool, FxError> {
    let Some(img) = image.dyn_ref::<HtmlImageElement>() else {
        return Ok(false);
    };
    if img.complete() {
        return Ok(false);
    }
    let Some(source) = preload_source(image.get_attribute("src"), image.get_attribute(DATA_SRC_ATTRIBUTE)) else {
        return Ok(false);
    };
    let fetcher = HtmlImageElement::new()?;
    fetcher.set_src(&source);
    Ok(true)
}

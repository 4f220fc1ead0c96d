//! Visibility watching over `IntersectionObserver`.
//!
//! With [`WatchStrategy::Immediate`] (no observer support) every element is
//! reported visible straight away, so content is never left hidden.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::FxError;
use crate::viewport::{WatchMode, WatchOptions, WatchStrategy};

/// Call `on_visible(element, batch_index)` whenever a watched element enters
/// the viewport.
///
/// `batch_index` is the entry's position in the observer batch that reported
/// it. An element stops being observed once `on_visible` returns `true`, and
/// always after its first report in [`WatchMode::Once`].
///
/// # Errors
///
/// Returns [`FxError::Js`] if the observer cannot be constructed.
pub fn watch<F>(strategy: WatchStrategy, elements: &[Element], options: &WatchOptions, mut on_visible: F) -> Result<(), FxError>
where
    F: FnMut(&Element, usize) -> bool + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }
    match strategy {
        WatchStrategy::Immediate => {
            for (index, element) in elements.iter().enumerate() {
                on_visible(element, index);
            }
            Ok(())
        }
        WatchStrategy::Observer => {
            let once = options.mode == WatchMode::Once;
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for (index, entry) in entries.iter().enumerate() {
                        let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        if on_visible(&target, index) || once {
                            observer.unobserve(&target);
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            for element in elements {
                observer.observe(element);
            }
            // The observer holds the callback for the page's lifetime.
            callback.forget();
            Ok(())
        }
    }
}

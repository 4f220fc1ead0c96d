//! Event listener ownership.
//!
//! LIFECYCLE
//! =========
//! Page-wide listeners are registered once during mount on the process bus
//! and never removed; the wasm instance lives exactly as long as the page.
//! Listeners that come and go with a feature (the pointer decoration) live in
//! their own [`ListenerSet`], which detaches them when dropped.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::FxError;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Listeners detached together when the set is cleared or dropped.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` to `kind` events on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the target rejects the listener.
    pub fn listen<F>(&mut self, target: &EventTarget, kind: &'static str, handler: F) -> Result<(), FxError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener { target: target.clone(), kind, callback });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Detach every listener and free its closure.
    pub fn clear(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(e) = listener
                .target
                .remove_event_listener_with_callback(listener.kind, listener.callback.as_ref().unchecked_ref())
            {
                log::debug!("failed to detach {} listener: {e:?}", listener.kind);
            }
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.clear();
    }
}

thread_local! {
    static BUS: RefCell<ListenerSet> = RefCell::new(ListenerSet::new());
}

/// Attach a listener for the rest of the page's life.
///
/// # Errors
///
/// Returns [`FxError::Js`] if the target rejects the listener.
pub fn listen_forever<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<(), FxError>
where
    F: FnMut(Event) + 'static,
{
    BUS.with(|bus| bus.borrow_mut().listen(target, kind, handler))
}

/// Number of page-lifetime listeners registered so far.
#[must_use]
pub fn bus_len() -> usize {
    BUS.with(|bus| bus.borrow().len())
}

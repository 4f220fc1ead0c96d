//! `requestAnimationFrame` backed [`FrameScheduler`].
//!
//! Each request wraps its callback in a JS closure kept alive in `pending`
//! until it fires or is cancelled. A closure cannot be freed while it runs, so
//! fired closures move to `spent` and are dropped on the next request.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::driver::{FrameHandle, FrameScheduler};

#[derive(Default)]
struct RafState {
    pending: HashMap<i32, Closure<dyn FnMut()>>,
    spent: Vec<Closure<dyn FnMut()>>,
}

pub struct RafScheduler {
    window: Window,
    state: Rc<RefCell<RafState>>,
}

impl RafScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window, state: Rc::new(RefCell::new(RafState::default())) }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
        self.state.borrow_mut().spent.clear();

        let id = Rc::new(Cell::new(None::<i32>));
        let fired_id = Rc::clone(&id);
        let state = Rc::downgrade(&self.state);
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
            if let (Some(state), Some(id)) = (state.upgrade(), fired_id.get()) {
                let mut state = state.borrow_mut();
                if let Some(done) = state.pending.remove(&id) {
                    state.spent.push(done);
                }
            }
        });

        match self.window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => {
                id.set(Some(handle));
                self.state.borrow_mut().pending.insert(handle, closure);
                Some(FrameHandle(handle))
            }
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {e:?}");
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::debug!("cancelAnimationFrame({}) failed: {e:?}", handle.0);
        }
        self.state.borrow_mut().pending.remove(&handle.0);
    }
}

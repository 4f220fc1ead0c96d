//! Interactive behaviour for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! every script-driven effect on the page: the persisted light/dark theme,
//! navigation state, reveal-on-scroll, lazy images, and the pointer-following
//! glow and cursor, which ease toward the pointer once per animation frame.
//! The page state and timing rules are plain Rust and are tested natively;
//! only [`dom`] (behind the `browser` feature) talks to `web_sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`driver`] | Per-frame smoothing of hover sessions with frame cancellation |
//! | [`theme`] | Theme preference persistence and application |
//! | [`nav`] | Navbar, active section and mobile menu state |
//! | [`viewport`] | Visibility watch bookkeeping and capability strategy |
//! | [`lazy`] | `data-src` swap for lazily loaded images |
//! | [`pointer`] | Last pointer position and cursor hover scale |
//! | [`geometry`] | Points, rectangles and pointer-to-element mappings |
//! | [`effects`] | CSS values for the decorative effects |
//! | [`config`] | Tunable page constants, overridable from the page |
//! | [`consts`] | Smoothing factors and the DOM contract (selectors, attributes) |
//! | [`error`] | Error type shared by fallible operations |
//! | `dom` | Browser bindings and the composition root (`browser` feature) |

pub mod config;
pub mod consts;
pub mod driver;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod lazy;
pub mod nav;
pub mod pointer;
pub mod theme;
pub mod viewport;

#[cfg(feature = "browser")]
pub mod dom;

/// Wasm entry point: install panic and log hooks, then mount the page.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("logger already installed: {e}");
    }
    dom::page::start();
}

//! Error type for fallible page operations.
//!
//! Nothing here is fatal to the page: the composition root logs each error and
//! moves on to the next binder.

/// Errors produced while binding or running page behaviour.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// No global `window` (e.g. running outside a browser).
    #[error("browser window is unavailable")]
    NoWindow,

    /// The window has no document.
    #[error("document is unavailable")]
    NoDocument,

    /// A node did not have the expected element type.
    #[error("unexpected node type for {0}")]
    NodeType(&'static str),

    /// A JavaScript call threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// Writing to durable storage failed.
    #[error("storage write failed for key {key}")]
    Storage { key: String },
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

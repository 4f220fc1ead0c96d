//! Theme toggle wiring: `localStorage`, the root `data-theme` attribute and
//! the two toggle buttons.

use std::rc::Rc;

use web_sys::{Document, Element, Storage, Window};

use crate::consts::THEME_ATTRIBUTE;
use crate::dom::bus;
use crate::error::FxError;
use crate::theme::{KeyValueStore, MemoryStore, PreferenceStore, ThemePreference, ThemeSurface};
use crate::viewport::Capabilities;

const TOGGLE_IDS: [&str; 2] = ["themeToggle", "themeToggleMobile"];
const MODE_LABEL_SELECTOR: &str = ".theme-switch-mode";

/// Durable storage when the browser offers it, otherwise this visit only.
pub enum PageStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl PageStore {
    #[must_use]
    pub fn detect(window: &Window, capabilities: &Capabilities) -> Self {
        if capabilities.persists_preferences()
            && let Ok(Some(storage)) = window.local_storage()
        {
            return Self::Local(storage);
        }
        log::info!("localStorage unavailable; theme choice lasts for this visit only");
        Self::Memory(MemoryStore::new())
    }
}

impl KeyValueStore for PageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::debug!("localStorage read of {key} failed: {e:?}");
                    None
                }
            },
            Self::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FxError> {
        match self {
            Self::Local(storage) => {
                storage.set_item(key, value).map_err(|_| FxError::Storage { key: key.to_owned() })
            }
            Self::Memory(store) => store.set_item(key, value),
        }
    }
}

/// The document root plus the optional mobile mode label.
pub struct DocumentTheme {
    root: Option<Element>,
    label: Option<Element>,
}

impl DocumentTheme {
    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the label lookup throws.
    pub fn new(document: &Document) -> Result<Self, FxError> {
        Ok(Self { root: document.document_element(), label: document.query_selector(MODE_LABEL_SELECTOR)? })
    }
}

impl ThemeSurface for DocumentTheme {
    fn apply_theme(&self, theme: ThemePreference) {
        if let Some(root) = &self.root
            && let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str())
        {
            log::warn!("failed to apply theme {theme}: {e:?}");
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(theme.label()));
        }
    }
}

/// Restore the saved theme and bind both toggles.
///
/// # Errors
///
/// Returns [`FxError::Js`] if a lookup or listener registration fails.
pub fn bind(window: &Window, document: &Document, capabilities: &Capabilities) -> Result<(), FxError> {
    let store = PageStore::detect(window, capabilities);
    let prefs = Rc::new(PreferenceStore::new(store, DocumentTheme::new(document)?));
    let theme = prefs.restore();
    log::debug!("theme restored: {theme}");

    for id in TOGGLE_IDS {
        let Some(toggle) = document.get_element_by_id(id) else {
            log::debug!("#{id} not on this page");
            continue;
        };
        let prefs = Rc::clone(&prefs);
        bus::listen_forever(&toggle, "click", move |_| {
            let theme = prefs.toggle();
            log::debug!("theme switched to {theme}");
        })?;
    }
    Ok(())
}

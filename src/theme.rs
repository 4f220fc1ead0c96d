//! Theme preference: persisted light/dark choice applied to the document.
//!
//! The preference lives under one key in a [`KeyValueStore`] (browser
//! `localStorage` at runtime) and is pushed to a [`ThemeSurface`] (the
//! `data-theme` attribute plus the mobile switch label) on every change.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort. A failed storage write still applies the theme to
//! the page, so the toggle never appears broken; the choice just won't
//! survive a reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::consts::THEME_STORAGE_KEY;
use crate::error::FxError;

/// The user's colour scheme choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The persisted and attribute value: `"light"` or `"dark"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Unknown strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Text for the mobile theme switch.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`FxError::Storage`] when the value could not be persisted.
    fn set_item(&self, key: &str, value: &str) -> Result<(), FxError>;
}

/// Session-scoped storage used when durable storage is unavailable.
///
/// Clones share the same map, so a second handle observes earlier writes the
/// way a reloaded page observes `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FxError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Where an applied theme becomes visible.
pub trait ThemeSurface {
    fn apply_theme(&self, theme: ThemePreference);
}

/// Reads, persists and applies the theme preference.
///
/// The current choice is held in memory; storage is write-through and only
/// read when the store is created or restored.
pub struct PreferenceStore<S, T> {
    store: S,
    surface: T,
    current: Cell<ThemePreference>,
}

impl<S: KeyValueStore, T: ThemeSurface> PreferenceStore<S, T> {
    pub fn new(store: S, surface: T) -> Self {
        let current = Cell::new(load(&store));
        Self { store, surface, current }
    }

    /// The current preference, `Light` when nothing usable was stored.
    pub fn get(&self) -> ThemePreference {
        self.current.get()
    }

    /// Apply `theme` immediately and persist it.
    pub fn set(&self, theme: ThemePreference) {
        self.current.set(theme);
        self.surface.apply_theme(theme);
        if let Err(e) = self.store.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }

    /// Flip the current preference and return the new value.
    pub fn toggle(&self) -> ThemePreference {
        let next = self.current.get().toggled();
        self.set(next);
        next
    }

    /// Re-read the stored preference and apply it, writing the default back
    /// when nothing was stored yet.
    pub fn restore(&self) -> ThemePreference {
        let theme = load(&self.store);
        self.set(theme);
        theme
    }
}

fn load(store: &impl KeyValueStore) -> ThemePreference {
    store
        .get_item(THEME_STORAGE_KEY)
        .and_then(|raw| ThemePreference::parse(&raw))
        .unwrap_or_default()
}

//! Lazy image loading through the `data-src` attribute contract.
//!
//! An image carrying `data-src` has not loaded its real source yet. When it
//! first becomes visible the value moves to `src`, `data-src` is removed, and
//! the image is no longer watched.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use crate::consts::DATA_SRC_ATTRIBUTE;
use crate::error::FxError;
use crate::viewport::{WatchMode, Watchlist};

/// Attribute access on an element.
pub trait Attributes {
    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the DOM rejects the write.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FxError>;

    /// # Errors
    ///
    /// Returns [`FxError::Js`] if the DOM rejects the removal.
    fn remove_attribute(&self, name: &str) -> Result<(), FxError>;
}

/// Move a pending `data-src` into `src`.
///
/// Returns `Ok(false)` when the element had nothing pending.
///
/// # Errors
///
/// Propagates attribute write failures.
pub fn swap_in_source<E: Attributes>(image: &E) -> Result<bool, FxError> {
    let Some(src) = image.attribute(DATA_SRC_ATTRIBUTE).filter(|s| !s.is_empty()) else {
        return Ok(false);
    };
    image.set_attribute("src", &src)?;
    image.remove_attribute(DATA_SRC_ATTRIBUTE)?;
    Ok(true)
}

/// One-shot loader over a set of lazily loaded images.
pub struct LazyImages<E> {
    images: Vec<E>,
    watch: Watchlist,
}

impl<E> Default for LazyImages<E> {
    fn default() -> Self {
        Self { images: Vec::new(), watch: Watchlist::new(WatchMode::Once) }
    }
}

impl<E: Attributes> LazyImages<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `image`; returns its key.
    pub fn track(&mut self, image: E) -> usize {
        self.images.push(image);
        self.watch.observe()
    }

    /// Key of a tracked image.
    pub fn key_of(&self, image: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.images.iter().position(|tracked| tracked == image)
    }

    #[must_use]
    pub fn is_watching(&self, key: usize) -> bool {
        self.watch.is_watching(key)
    }

    /// Handle a visibility change for `key`.
    ///
    /// Returns `Ok(true)` when the caller should stop observing the element.
    ///
    /// # Errors
    ///
    /// Propagates attribute write failures; the image is unwatched regardless.
    pub fn on_visible(&mut self, key: usize, intersecting: bool) -> Result<bool, FxError> {
        if !self.watch.notify(key, intersecting) {
            return Ok(false);
        }
        let Some(image) = self.images.get(key) else {
            return Ok(true);
        };
        if !swap_in_source(image)? {
            log::debug!("lazy image {key} had no pending source");
        }
        Ok(true)
    }

    /// Treat every watched image as visible now. Returns how many were released.
    pub fn load_all(&mut self) -> usize {
        let mut loaded = 0;
        for key in 0..self.images.len() {
            match self.on_visible(key, true) {
                Ok(true) => loaded += 1,
                Ok(false) => {}
                Err(e) => log::warn!("lazy image {key} failed to load: {e}"),
            }
        }
        loaded
    }
}

//! Viewport bookkeeping: visibility watch lists, breakpoint transitions, and
//! the capability-checked choice of strategies made once at startup.
//!
//! DESIGN
//! ======
//! Reveal watchers repeat (an element re-animates each time it re-enters the
//! viewport) while lazy-image watchers are one-shot. The two modes are kept
//! distinct on purpose.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::collections::BTreeSet;

use crate::config::ObserverConfig;

/// Whether a watched element keeps firing after its first visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchMode {
    /// Fire on every entry into the viewport.
    Repeat,
    /// Fire once, then stop watching.
    Once,
}

/// Threshold, margin and mode for one visibility watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub mode: WatchMode,
}

impl WatchOptions {
    #[must_use]
    pub fn new(config: &ObserverConfig, mode: WatchMode) -> Self {
        Self { threshold: config.threshold, root_margin: config.root_margin.clone(), mode }
    }
}

/// Which elements a watcher still reports on, keyed by registration index.
#[derive(Debug, Clone)]
pub struct Watchlist {
    mode: WatchMode,
    next: usize,
    watching: BTreeSet<usize>,
}

impl Watchlist {
    #[must_use]
    pub fn new(mode: WatchMode) -> Self {
        Self { mode, next: 0, watching: BTreeSet::new() }
    }

    /// Start watching a new element and return its key.
    pub fn observe(&mut self) -> usize {
        let key = self.next;
        self.next += 1;
        self.watching.insert(key);
        key
    }

    #[must_use]
    pub fn is_watching(&self, key: usize) -> bool {
        self.watching.contains(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.watching.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watching.is_empty()
    }

    /// Process a visibility change for `key`.
    ///
    /// Returns `true` when the callback should fire: the element is
    /// intersecting and still watched. A one-shot key is unwatched as it fires.
    pub fn notify(&mut self, key: usize, intersecting: bool) -> bool {
        if !intersecting || !self.watching.contains(&key) {
            return false;
        }
        if self.mode == WatchMode::Once {
            self.watching.remove(&key);
        }
        true
    }
}

/// What the resize handler should do with the pointer decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationChange {
    Install,
    Remove,
    Keep,
}

/// Decide whether a breakpoint crossing installs or removes the decoration.
#[must_use]
pub fn decoration_change(pointer_capable: bool, installed: bool) -> DecorationChange {
    match (pointer_capable, installed) {
        (true, false) => DecorationChange::Install,
        (false, true) => DecorationChange::Remove,
        _ => DecorationChange::Keep,
    }
}

/// Browser facilities detected at startup.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub animation_frames: bool,
    pub intersection_observer: bool,
    pub smooth_scroll: bool,
    pub local_storage: bool,
}

/// How visibility-triggered behaviour runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchStrategy {
    /// Use the browser's visibility notifications.
    Observer,
    /// Treat every element as visible right away.
    Immediate,
}

impl Capabilities {
    /// Everything available.
    #[must_use]
    pub fn full() -> Self {
        Self { animation_frames: true, intersection_observer: true, smooth_scroll: true, local_storage: true }
    }

    #[must_use]
    pub fn watch_strategy(&self) -> WatchStrategy {
        if self.intersection_observer { WatchStrategy::Observer } else { WatchStrategy::Immediate }
    }

    /// Whether the frame-driven decorations may be built at all.
    #[must_use]
    pub fn supports_decoration(&self) -> bool {
        self.animation_frames
    }

    #[must_use]
    pub fn needs_scroll_polyfill(&self) -> bool {
        !self.smooth_scroll
    }

    /// Whether the theme choice can outlive the visit.
    #[must_use]
    pub fn persists_preferences(&self) -> bool {
        self.local_storage
    }

    /// Whether touch layouts should reveal images up front. Only worth doing
    /// when lazy loading is observer driven; the immediate strategy has already
    /// swapped every source.
    #[must_use]
    pub fn preloads_for_touch(&self, pointer_capable: bool) -> bool {
        !pointer_capable && self.watch_strategy() == WatchStrategy::Observer
    }
}

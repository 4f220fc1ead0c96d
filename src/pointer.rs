//! Pointer tracking for the cursor decoration.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use std::cell::Cell;

use crate::consts::CURSOR_HOVER_SCALE;
use crate::geometry::Point;

/// Last known pointer position plus whether it rests on an interactive element.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Cell<Option<Point>>,
    over_interactive: Cell<bool>,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw client-space position from a move event.
    pub fn record(&self, client: Point) {
        self.last.set(Some(client));
    }

    /// The latest recorded position; `None` before the first move.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last.get()
    }

    pub fn set_over_interactive(&self, over: bool) {
        self.over_interactive.set(over);
    }

    /// Scale applied to the cursor elements.
    #[must_use]
    pub fn scale(&self) -> f64 {
        if self.over_interactive.get() { CURSOR_HOVER_SCALE } else { 1.0 }
    }
}

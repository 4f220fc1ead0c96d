//! Points, element rectangles, and pointer-to-element mappings.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in client (viewport) pixels or in element-relative percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Map a client-space pointer to percent of this box, clamped to `[0, 100]`.
    ///
    /// Returns `None` for a zero-sized box. Callers pass the box measured at
    /// event time.
    #[must_use]
    pub fn percent_of(&self, client: Point) -> Option<Point> {
        if !self.has_area() {
            return None;
        }
        let x = (client.x - self.left) / self.width * 100.0;
        let y = (client.y - self.top) / self.height * 100.0;
        Some(Point::new(x.clamp(0.0, 100.0), y.clamp(0.0, 100.0)))
    }

    /// Offset of a client-space pointer from the box center, in half-extents.
    ///
    /// `(0, 0)` is the center; `(±1, ±1)` the edges. Not clamped, since the
    /// pointer may sit on a parent larger than the box.
    #[must_use]
    pub fn centered_offset(&self, client: Point) -> Option<Point> {
        if !self.has_area() {
            return None;
        }
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Some(Point::new(
            (client.x - self.left - half_w) / half_w,
            (client.y - self.top - half_h) / half_h,
        ))
    }
}

/// Size and placement of a click ripple inside a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// A square ripple as large as the button's longest side, centered on the click.
    #[must_use]
    pub fn centered(button: Rect, click: Point) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: click.x - button.left - size / 2.0,
            top: click.y - button.top - size / 2.0,
        }
    }
}

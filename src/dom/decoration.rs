//! Pointer decoration: card glow and the custom cursor.
//!
//! Both only make sense with a precise pointer, so they are installed and torn
//! down together as the viewport crosses the mobile breakpoint. Everything
//! they own (listeners, frame callbacks, injected cursor elements) is released
//! when the [`PointerDecoration`] is dropped.

use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::consts::{
    FOLLOWER_SMOOTHING, GLOW_ACTIVE_CLASS, GLOW_CARD_SELECTOR, GLOW_SMOOTHING, GLOW_X_PROPERTY, GLOW_Y_PROPERTY,
    INTERACTIVE_SELECTOR,
};
use crate::dom::bus::ListenerSet;
use crate::dom::frames::RafScheduler;
use crate::dom::{client_point, create_styled, html, query_all, rect_of, report, set_style};
use crate::driver::{AnimationDriver, AnimationSurface, SessionId};
use crate::effects::{CURSOR_DOT_CSS, CURSOR_FOLLOWER_CSS, cursor_dot_transform, cursor_follower_transform, percent};
use crate::error::FxError;
use crate::geometry::Point;
use crate::pointer::PointerTracker;

pub struct PointerDecoration {
    driver: AnimationDriver,
    listeners: ListenerSet,
    cursor: Vec<HtmlElement>,
}

impl PointerDecoration {
    /// Bind card glow and build the custom cursor.
    ///
    /// # Errors
    ///
    /// Returns the first DOM failure; anything already attached is released.
    pub fn install(window: &Window, document: &Document) -> Result<Self, FxError> {
        let mut decoration = Self {
            driver: AnimationDriver::new(RafScheduler::new(window.clone())),
            listeners: ListenerSet::new(),
            cursor: Vec::new(),
        };
        let cards = decoration.bind_card_glow(document)?;
        decoration.install_cursor(document)?;
        log::debug!("pointer decoration installed on {cards} cards");
        Ok(decoration)
    }

    fn bind_card_glow(&mut self, document: &Document) -> Result<usize, FxError> {
        let cards = query_all(document, GLOW_CARD_SELECTOR)?;
        let mut bound = 0;
        for card in cards {
            let Some(surface) = html(&card).cloned() else {
                continue;
            };
            let id = self.driver.register(CardGlow { card: surface }, GLOW_SMOOTHING);
            self.bind_card(&card, id)?;
            bound += 1;
        }
        Ok(bound)
    }

    fn bind_card(&mut self, card: &Element, id: SessionId) -> Result<(), FxError> {
        let (driver, el) = (self.driver.clone(), card.clone());
        self.listeners.listen(card, "mouseenter", move |event| {
            if let Some(p) = pointer_percent(&el, &event) {
                driver.begin(id, p);
            }
        })?;

        let (driver, el) = (self.driver.clone(), card.clone());
        self.listeners.listen(card, "mousemove", move |event| {
            if let Some(p) = pointer_percent(&el, &event) {
                driver.update_target(id, p);
            }
        })?;

        let driver = self.driver.clone();
        self.listeners.listen(card, "mouseleave", move |_| driver.end(id))
    }

    fn install_cursor(&mut self, document: &Document) -> Result<(), FxError> {
        let body = document.body().ok_or(FxError::NoDocument)?;
        let dot = create_styled(document, "div", "custom-cursor", CURSOR_DOT_CSS)?;
        let ring = create_styled(document, "div", "cursor-follower", CURSOR_FOLLOWER_CSS)?;
        body.append_child(&dot)?;
        self.cursor.push(dot.clone());
        body.append_child(&ring)?;
        self.cursor.push(ring.clone());

        let tracker = Rc::new(PointerTracker::new());
        let follower = self.driver.register(
            FollowerRing { ring: ring.clone(), tracker: Rc::clone(&tracker) },
            FOLLOWER_SMOOTHING,
        );
        // The ring chases the pointer for as long as the decoration exists.
        self.driver.begin(follower, Point::default());

        {
            let (driver, tracker, dot) = (self.driver.clone(), Rc::clone(&tracker), dot.clone());
            self.listeners.listen(document, "mousemove", move |event| {
                let Some(p) = client_point(&event) else {
                    return;
                };
                tracker.record(p);
                report("cursor", show_cursor(&dot, &ring, p, tracker.scale()));
                driver.update_target(follower, p);
            })?;
        }

        for target in query_all(document, INTERACTIVE_SELECTOR)? {
            for (kind, over) in [("mouseenter", true), ("mouseleave", false)] {
                let (tracker, dot) = (Rc::clone(&tracker), dot.clone());
                self.listeners.listen(&target, kind, move |_| {
                    tracker.set_over_interactive(over);
                    if let Some(p) = tracker.last() {
                        report("cursor", set_style(&dot, "transform", &cursor_dot_transform(p, tracker.scale())));
                    }
                })?;
            }
        }
        Ok(())
    }
}

impl Drop for PointerDecoration {
    fn drop(&mut self) {
        self.driver.end_all();
        self.listeners.clear();
        for element in self.cursor.drain(..) {
            element.remove();
        }
        log::debug!("pointer decoration removed");
    }
}

fn pointer_percent(card: &Element, event: &Event) -> Option<Point> {
    rect_of(card).percent_of(client_point(event)?)
}

fn show_cursor(dot: &HtmlElement, ring: &HtmlElement, p: Point, scale: f64) -> Result<(), FxError> {
    set_style(dot, "opacity", "1")?;
    set_style(ring, "opacity", "1")?;
    set_style(dot, "transform", &cursor_dot_transform(p, scale))
}

/// Glow highlight of one card, positioned through two custom properties.
struct CardGlow {
    card: HtmlElement,
}

impl CardGlow {
    fn write(&self, p: Point) -> Result<(), FxError> {
        set_style(&self.card, GLOW_X_PROPERTY, &percent(p.x))?;
        set_style(&self.card, GLOW_Y_PROPERTY, &percent(p.y))
    }
}

impl AnimationSurface for CardGlow {
    fn set_engaged(&self, engaged: bool) {
        if let Err(e) = self.card.class_list().toggle_with_force(GLOW_ACTIVE_CLASS, engaged) {
            log::debug!("glow class update failed: {e:?}");
        }
    }

    fn render(&self, position: Point) {
        report("card glow", self.write(position));
    }
}

struct FollowerRing {
    ring: HtmlElement,
    tracker: Rc<PointerTracker>,
}

impl AnimationSurface for FollowerRing {
    // Visibility follows the first pointer move.
    fn set_engaged(&self, _engaged: bool) {}

    fn render(&self, position: Point) {
        report(
            "cursor follower",
            set_style(&self.ring, "transform", &cursor_follower_transform(position, self.tracker.scale())),
        );
    }
}

//! Continuous animation driver: frame-by-frame smoothing toward a moving target.
//!
//! Each animated element registers once and gets a [`SessionId`]. While a
//! session is active the driver keeps exactly one frame request outstanding
//! for it; every frame moves the displayed position a fixed fraction of the
//! way toward the latest target and writes it to the element's
//! [`AnimationSurface`].
//!
//! ```text
//!            begin                      end
//!  Inactive ───────▶ Active ──────────────────▶ Inactive
//!                    │  ▲
//!                    └──┘ tick (reschedules while active)
//! ```
//!
//! `end` cancels the pending frame by handle, so a frame queued before `end`
//! never runs. The frame callback also re-checks the active flag.
//!
//! The driver is single-threaded: state sits behind `Rc<RefCell<..>>` and
//! frame callbacks hold only a `Weak` reference, so dropping the last driver
//! handle stops every session at its next frame.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::geometry::Point;

/// Identifies one pending frame request so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Per-display-frame callback scheduling (`requestAnimationFrame` in the browser).
///
/// Implementations must not invoke `callback` synchronously from
/// `request_frame`.
pub trait FrameScheduler {
    /// Run `callback` once on the next display frame.
    ///
    /// Returns `None` if no frame could be requested.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle>;

    /// Drop a pending request. Cancelling an already-fired handle is a no-op.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Output side of a session. Called while the driver's state is borrowed, so
/// implementations must not call back into the driver.
pub trait AnimationSurface {
    /// Session started (`true`) or ended (`false`).
    fn set_engaged(&self, engaged: bool);

    /// Display `position`.
    fn render(&self, position: Point);
}

/// Displayed and target positions of one animated element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedPosition {
    pub current: Point,
    pub target: Point,
}

impl AnimatedPosition {
    /// Both positions at `p`.
    #[must_use]
    pub fn at(p: Point) -> Self {
        Self { current: p, target: p }
    }

    /// Move `current` toward `target` by `factor` on each axis independently.
    ///
    /// There is no settle check: the step runs even when already at the
    /// target.
    pub fn step(&mut self, factor: f64) -> Point {
        self.current.x += (self.target.x - self.current.x) * factor;
        self.current.y += (self.target.y - self.current.y) * factor;
        self.current
    }
}

/// Lifecycle flags of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionSession {
    active: bool,
    frame: Option<FrameHandle>,
}

impl InteractionSession {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The outstanding frame request, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }
}

/// Index of a registered element in the driver's session arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(usize);

struct Slot {
    surface: Box<dyn AnimationSurface>,
    factor: f64,
    position: AnimatedPosition,
    session: InteractionSession,
}

struct Shared {
    scheduler: Box<dyn FrameScheduler>,
    slots: RefCell<Vec<Slot>>,
}

/// Owns the sessions of every animated element on the page.
///
/// Cloning yields another handle to the same sessions.
#[derive(Clone)]
pub struct AnimationDriver {
    shared: Rc<Shared>,
}

impl AnimationDriver {
    pub fn new(scheduler: impl FrameScheduler + 'static) -> Self {
        Self {
            shared: Rc::new(Shared { scheduler: Box::new(scheduler), slots: RefCell::new(Vec::new()) }),
        }
    }

    /// Register an element, starting inactive, with its own smoothing factor.
    pub fn register(&self, surface: impl AnimationSurface + 'static, factor: f64) -> SessionId {
        let mut slots = self.shared.slots.borrow_mut();
        slots.push(Slot {
            surface: Box::new(surface),
            factor,
            position: AnimatedPosition::default(),
            session: InteractionSession::default(),
        });
        SessionId(slots.len() - 1)
    }

    /// Number of registered sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.slots.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a session at `initial`: render it and schedule the first tick.
    ///
    /// Calling this on an already active session is ignored.
    pub fn begin(&self, id: SessionId, initial: Point) {
        {
            let mut slots = self.shared.slots.borrow_mut();
            let Some(slot) = slots.get_mut(id.0) else {
                return;
            };
            if slot.session.active {
                log::debug!("begin ignored for active session {id:?}");
                return;
            }
            slot.position = AnimatedPosition::at(initial);
            slot.session.active = true;
            slot.surface.set_engaged(true);
            slot.surface.render(initial);
        }
        schedule(&self.shared, id);
    }

    /// Point the session at a new target. Discarded when inactive.
    pub fn update_target(&self, id: SessionId, target: Point) {
        let mut slots = self.shared.slots.borrow_mut();
        if let Some(slot) = slots.get_mut(id.0)
            && slot.session.active
        {
            slot.position.target = target;
        }
    }

    /// Advance the session by one frame outside the scheduler.
    ///
    /// Any pending frame is cancelled first, so at most one request stays
    /// outstanding.
    pub fn tick(&self, id: SessionId) {
        let pending = {
            let mut slots = self.shared.slots.borrow_mut();
            slots.get_mut(id.0).and_then(|slot| slot.session.frame.take())
        };
        if let Some(handle) = pending {
            self.shared.scheduler.cancel_frame(handle);
        }
        advance(&self.shared, id);
    }

    /// Stop the session and cancel its pending frame.
    pub fn end(&self, id: SessionId) {
        let pending = {
            let mut slots = self.shared.slots.borrow_mut();
            let Some(slot) = slots.get_mut(id.0) else {
                return;
            };
            slot.session.active = false;
            slot.surface.set_engaged(false);
            slot.session.frame.take()
        };
        if let Some(handle) = pending {
            self.shared.scheduler.cancel_frame(handle);
        }
    }

    /// End every active session.
    pub fn end_all(&self) {
        let active = self
            .shared
            .slots
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.session.active)
            .map(|(i, _)| SessionId(i))
            .collect::<Vec<_>>();
        for id in active {
            self.end(id);
        }
    }

    #[must_use]
    pub fn position(&self, id: SessionId) -> Option<AnimatedPosition> {
        self.shared.slots.borrow().get(id.0).map(|slot| slot.position)
    }

    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<InteractionSession> {
        self.shared.slots.borrow().get(id.0).map(|slot| slot.session)
    }
}

/// Request the next frame for `id` and record its handle.
fn schedule(shared: &Rc<Shared>, id: SessionId) {
    let weak: Weak<Shared> = Rc::downgrade(shared);
    let handle = shared.scheduler.request_frame(Box::new(move || {
        if let Some(shared) = weak.upgrade() {
            on_frame(&shared, id);
        }
    }));

    let mut slots = shared.slots.borrow_mut();
    let Some(slot) = slots.get_mut(id.0) else {
        return;
    };
    if handle.is_none() {
        log::warn!("frame request failed; stopping session {id:?}");
        slot.session.active = false;
        slot.surface.set_engaged(false);
    }
    slot.session.frame = handle;
}

fn on_frame(shared: &Rc<Shared>, id: SessionId) {
    if let Some(slot) = shared.slots.borrow_mut().get_mut(id.0) {
        slot.session.frame = None;
    }
    advance(shared, id);
}

/// One smoothing step; reschedules iff the session is still active afterwards.
fn advance(shared: &Rc<Shared>, id: SessionId) {
    let still_active = {
        let mut slots = shared.slots.borrow_mut();
        let Some(slot) = slots.get_mut(id.0) else {
            return;
        };
        if !slot.session.active {
            return;
        }
        let current = slot.position.step(slot.factor);
        slot.surface.render(current);
        slot.session.active
    };
    if still_active {
        schedule(shared, id);
    }
}

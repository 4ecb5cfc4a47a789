//! Event-loop capabilities: scroll, visibility and animation frames
//!
//! The browser delivers these asynchronously. Controllers only see the
//! [`Scheduler`] trait, so tests can drive every callback by hand.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Returned by a frame handler to keep or end the animation loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// Scroll handler
pub type ScrollHandler = Rc<dyn Fn()>;

/// Animation frame handler, called with a monotonic timestamp in milliseconds
pub type FrameHandler = Box<dyn FnMut(f64) -> FrameControl>;

/// Whether a reported visible ratio satisfies a visibility threshold.
///
/// Only float rounding is tolerated: `0.13` never satisfies `0.14`.
pub fn meets_threshold(ratio: f64, threshold: f64) -> bool {
    ratio + f64::EPSILON >= threshold
}

/// A callback that runs at most once.
///
/// Handed to [`Scheduler::on_visible`]; the scheduler stops observing the
/// element as soon as the subscription has fired.
pub struct OneShot {
    callback: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl OneShot {
    pub fn new(callback: impl FnOnce() + 'static) -> Rc<Self> {
        Rc::new(Self {
            callback: RefCell::new(Some(Box::new(callback))),
        })
    }

    /// Run the callback if it has not run yet. Returns whether it ran.
    pub fn fire(&self) -> bool {
        // Take before calling so a re-entrant fire sees the spent state
        let callback = self.callback.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn is_spent(&self) -> bool {
        self.callback.borrow().is_none()
    }
}

impl fmt::Debug for OneShot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneShot")
            .field("spent", &self.is_spent())
            .finish()
    }
}

/// Host event loop as seen by the controllers
pub trait Scheduler<E> {
    /// Call `handler` on every scroll of the window
    fn on_scroll(&self, handler: ScrollHandler);

    /// Fire `subscription` the first time at least `threshold` (0..=1) of
    /// the element is visible, then stop observing it
    fn on_visible(&self, element: &E, threshold: f64, subscription: Rc<OneShot>);

    /// Call `handler` on every animation frame until it returns [`FrameControl::Stop`]
    fn on_frame(&self, handler: FrameHandler);
}

//! Scroll-driven motion: a trailing-edge throttle, the one-shot reveal
//! trigger and the navbar scroll-state reducer.
//!
//! Nothing in here touches the DOM. Platform access goes through the
//! [`Scheduler`], [`ScrollSource`] and [`VisibilitySource`] traits; the
//! browser implementations live in `crate::browser` and the fakes used by the
//! tests in [`testing`].

pub mod reveal;
pub mod schedule;
pub mod scroll_state;
pub mod throttle;

#[cfg(test)]
pub mod testing;

use std::rc::Rc;

use crate::error::MotionError;

pub use reveal::{RevealState, VisibilityTrigger};
pub use schedule::{Scheduler, TaskHandle};
pub use scroll_state::{ScrollDerivedState, ScrollStateController};
pub use throttle::Throttle;

/// Index of a participating element inside its container, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// One reading of the scroll position together with the scrollable range it
/// was taken against.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub timestamp: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Detaches a listener when dropped or when [`Subscription::detach`] is
/// called, whichever comes first.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

pub trait ScrollSource {
    fn sample(&self) -> ScrollSample;

    /// Registers `listener` for scroll and resize events. The listener stays
    /// attached until the returned subscription is detached or dropped.
    fn subscribe(&self, listener: Rc<dyn Fn(ScrollSample)>) -> Result<Subscription, MotionError>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// A live intersection observation over the targets of a [`VisibilitySource`].
pub trait Observation {
    fn unobserve(&self, target: ElementId);
    fn disconnect(&self);
}

pub trait VisibilitySource {
    /// Number of participating elements, addressed as `ElementId(0..n)`.
    fn target_count(&self) -> usize;

    /// Starts observing every target. `Ok(None)` means the platform has no
    /// intersection primitive.
    fn observe(
        &self,
        threshold: f64,
        root_margin: &str,
        callback: Rc<dyn Fn(Vec<IntersectionEntry>)>,
    ) -> Result<Option<Box<dyn Observation>>, MotionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting() -> (Subscription, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let sink = count.clone();
        (Subscription::new(move || sink.set(sink.get() + 1)), count)
    }

    #[test]
    fn subscription_detaches_on_drop() {
        let (subscription, count) = counting();
        assert_eq!(count.get(), 0);
        drop(subscription);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn detached_subscription_does_not_detach_again_on_drop() {
        let (mut subscription, count) = counting();
        subscription.detach();
        subscription.detach();
        drop(subscription);
        assert_eq!(count.get(), 1);
    }
}

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::{Scheduler, Subscription, TaskHandle};

struct ThrottleInner<T> {
    interval_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    handler: Rc<dyn Fn(T)>,
    latest: Option<T>,
    window_end: Option<f64>,
    pending: Option<TaskHandle>,
    listener: Option<Subscription>,
    disposed: bool,
}

/// Trailing-edge throttle. Values pushed within one interval window collapse
/// into a single handler call at the end of the window, carrying the last
/// value pushed.
pub struct Throttle<T> {
    inner: Rc<RefCell<ThrottleInner<T>>>,
}

impl<T> Clone for Throttle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: 'static> Throttle<T> {
    pub fn new(interval_ms: u32, scheduler: Rc<dyn Scheduler>, handler: impl Fn(T) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ThrottleInner {
                interval_ms,
                scheduler,
                handler: Rc::new(handler),
                latest: None,
                window_end: None,
                pending: None,
                listener: None,
                disposed: false,
            })),
        }
    }

    pub fn push(&self, value: T) {
        let scheduler = {
            let inner = self.inner.borrow();
            if inner.disposed {
                return;
            }
            inner.scheduler.clone()
        };
        let now = scheduler.now();

        let (stale, delay) = {
            let mut inner = self.inner.borrow_mut();
            let window_end = match inner.window_end {
                Some(end) if now < end => end,
                _ => {
                    let end = now + inner.interval_ms as f64;
                    inner.window_end = Some(end);
                    end
                }
            };
            inner.latest = Some(value);
            (inner.pending.take(), (window_end - now).max(0.0).ceil() as u32)
        };
        // Cancel the previous deferred delivery before scheduling the new one.
        drop(stale);

        let weak = Rc::downgrade(&self.inner);
        let handle = scheduler.schedule(delay, Box::new(move || Self::fire(&weak)));
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            drop(inner);
            handle.cancel();
        } else {
            inner.pending = Some(handle);
        }
    }

    /// Delivers the pending value now instead of at the end of the window.
    pub fn flush(&self) {
        let (handler, value, pending) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.window_end = None;
            match inner.latest.take() {
                Some(value) => (inner.handler.clone(), value, inner.pending.take()),
                None => return,
            }
        };
        drop(pending);
        handler(value);
    }

    /// Keeps `subscription` alive until the throttle is disposed.
    pub fn bind(&self, subscription: Subscription) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            drop(inner);
            drop(subscription);
        } else {
            inner.listener = Some(subscription);
        }
    }

    /// A listener that feeds the throttle without keeping it alive.
    pub fn listener(&self) -> Rc<dyn Fn(T)> {
        let weak = Rc::downgrade(&self.inner);
        Rc::new(move |value: T| {
            if let Some(inner) = weak.upgrade() {
                Throttle { inner }.push(value);
            }
        })
    }

    /// Cancels any pending delivery and detaches the bound listener. Calling it
    /// again does nothing.
    pub fn dispose(&self) {
        let (pending, listener) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.latest = None;
            inner.window_end = None;
            (inner.pending.take(), inner.listener.take())
        };
        debug!("Disposing throttle");
        drop(pending);
        drop(listener);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    fn fire(weak: &Weak<RefCell<ThrottleInner<T>>>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let (handler, value) = {
            let mut inner = inner.borrow_mut();
            if inner.disposed {
                return;
            }
            // The handle of the running task stays in `pending` until the next
            // push replaces it; dropping it here would free the timer closure
            // while it is still executing.
            inner.window_end = None;
            match inner.latest.take() {
                Some(value) => (inner.handler.clone(), value),
                None => return,
            }
        };
        handler(value);
    }
}

//! Deterministic stand-ins for the browser: a manual clock, a scroll source
//! driven by the test and an intersection source whose entries are fired by
//! hand.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use super::{
    ElementId, IntersectionEntry, Observation, Scheduler, ScrollSample, ScrollSource,
    Subscription, TaskHandle, VisibilitySource,
};
use crate::error::MotionError;

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    tasks: BTreeMap<(u64, u64), Box<dyn FnOnce()>>,
}

#[derive(Clone, Default)]
pub struct FakeClock {
    state: Rc<RefCell<ClockState>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Moves time forward, running every task that falls due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .tasks
                    .keys()
                    .next()
                    .copied()
                    .filter(|(at, _)| *at <= target);
                match due {
                    Some(key) => {
                        state.now = key.0;
                        state.tasks.remove(&key)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for FakeClock {
    fn now(&self) -> f64 {
        self.state.borrow().now as f64
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let key = {
            let mut state = self.state.borrow_mut();
            let key = (state.now + delay_ms as u64, state.next_id);
            state.next_id += 1;
            state.tasks.insert(key, task);
            key
        };
        let weak: Weak<RefCell<ClockState>> = Rc::downgrade(&self.state);
        TaskHandle::new(move || {
            if let Some(state) = weak.upgrade() {
                let removed = state.borrow_mut().tasks.remove(&key);
                drop(removed);
            }
        })
    }
}

#[derive(Default)]
struct ScrollState {
    sample: ScrollSample,
    listeners: Vec<(u64, Rc<dyn Fn(ScrollSample)>)>,
    next_id: u64,
    detached: u32,
}

#[derive(Clone, Default)]
pub struct FakeScrollSource {
    state: Rc<RefCell<ScrollState>>,
}

impl FakeScrollSource {
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        let source = Self::default();
        {
            let mut state = source.state.borrow_mut();
            state.sample.document_height = document_height;
            state.sample.viewport_height = viewport_height;
        }
        source
    }

    /// Moves to `offset` and notifies every attached listener.
    pub fn scroll_to(&self, offset: f64, timestamp: f64) {
        let (sample, listeners) = {
            let mut state = self.state.borrow_mut();
            state.sample.offset = offset;
            state.sample.timestamp = timestamp;
            let listeners: Vec<_> = state.listeners.iter().map(|(_, l)| l.clone()).collect();
            (state.sample, listeners)
        };
        for listener in listeners {
            listener(sample);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn detach_count(&self) -> u32 {
        self.state.borrow().detached
    }
}

impl ScrollSource for FakeScrollSource {
    fn sample(&self) -> ScrollSample {
        self.state.borrow().sample
    }

    fn subscribe(&self, listener: Rc<dyn Fn(ScrollSample)>) -> Result<Subscription, MotionError> {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, listener));
            id
        };
        let state = self.state.clone();
        Ok(Subscription::new(move || {
            let mut state = state.borrow_mut();
            state.listeners.retain(|(other, _)| *other != id);
            state.detached += 1;
        }))
    }
}

#[derive(Default)]
struct ObserverState {
    callback: Option<Rc<dyn Fn(Vec<IntersectionEntry>)>>,
    observed: BTreeSet<ElementId>,
    threshold: f64,
    disconnect_calls: u32,
    disconnects: u32,
}

/// Intersection source over `count` targets. Entries are only delivered for
/// targets that are still observed, like the browser does.
#[derive(Clone)]
pub struct FakeVisibilitySource {
    count: usize,
    supported: bool,
    state: Rc<RefCell<ObserverState>>,
}

impl FakeVisibilitySource {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            supported: true,
            state: Rc::default(),
        }
    }

    pub fn unsupported(count: usize) -> Self {
        Self {
            supported: false,
            ..Self::new(count)
        }
    }

    /// Reports every target as visible at `ratio`.
    pub fn show_all(&self, ratio: f64) {
        let entries = (0..self.count)
            .map(|i| IntersectionEntry {
                target: ElementId(i),
                is_intersecting: ratio > 0.0,
                ratio,
            })
            .collect();
        self.fire(entries);
    }

    pub fn hide_all(&self) {
        self.show_all(0.0);
    }

    pub fn fire(&self, entries: Vec<IntersectionEntry>) {
        let (callback, entries) = {
            let state = self.state.borrow();
            let entries: Vec<_> = entries
                .into_iter()
                .filter(|e| state.observed.contains(&e.target))
                .collect();
            (state.callback.clone(), entries)
        };
        if let (Some(callback), false) = (callback, entries.is_empty()) {
            callback(entries);
        }
    }

    /// Delivers entries even for unobserved targets, the way a callback that
    /// was already queued before `disconnect` still runs.
    pub fn fire_stale(&self, entries: Vec<IntersectionEntry>) {
        let callback = self.state.borrow().callback.clone();
        if let Some(callback) = callback {
            callback(entries);
        }
    }

    pub fn observed(&self) -> usize {
        self.state.borrow().observed.len()
    }

    pub fn threshold(&self) -> f64 {
        self.state.borrow().threshold
    }

    /// Observers actually torn down, by an explicit call or by being dropped.
    pub fn disconnects(&self) -> u32 {
        self.state.borrow().disconnects
    }

    /// Every `Observation::disconnect` call, repeated ones included.
    pub fn disconnect_calls(&self) -> u32 {
        self.state.borrow().disconnect_calls
    }
}

/// Disconnects at most once, explicitly or when dropped, the same way the
/// DOM observation does.
struct FakeObservation {
    state: Rc<RefCell<ObserverState>>,
    connection: RefCell<Subscription>,
}

impl Observation for FakeObservation {
    fn unobserve(&self, target: ElementId) {
        self.state.borrow_mut().observed.remove(&target);
    }

    fn disconnect(&self) {
        self.state.borrow_mut().disconnect_calls += 1;
        self.connection.borrow_mut().detach();
    }
}

impl VisibilitySource for FakeVisibilitySource {
    fn target_count(&self) -> usize {
        self.count
    }

    fn observe(
        &self,
        threshold: f64,
        _root_margin: &str,
        callback: Rc<dyn Fn(Vec<IntersectionEntry>)>,
    ) -> Result<Option<Box<dyn Observation>>, MotionError> {
        if !self.supported {
            return Ok(None);
        }
        {
            let mut state = self.state.borrow_mut();
            state.callback = Some(callback);
            state.threshold = threshold;
            state.observed = (0..self.count).map(ElementId).collect();
        }
        let state = self.state.clone();
        let connection = Subscription::new(move || {
            let mut state = state.borrow_mut();
            state.observed.clear();
            state.disconnects += 1;
        });
        Ok(Some(Box::new(FakeObservation {
            state: self.state.clone(),
            connection: RefCell::new(connection),
        })))
    }
}

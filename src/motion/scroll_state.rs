use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::{Scheduler, ScrollSample, ScrollSource, Throttle};
use crate::config::{MotionConfig, NavConfig};
use crate::error::MotionError;

/// Flags the navbar and scroll-to-top button render from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDerivedState {
    pub is_past_threshold: bool,
    pub progress_percent: f64,
    pub is_nav_visible: bool,
    pub is_scroll_top_visible: bool,
    pub last_offset: f64,
}

impl Default for ScrollDerivedState {
    fn default() -> Self {
        Self {
            is_past_threshold: false,
            progress_percent: 0.0,
            is_nav_visible: true,
            is_scroll_top_visible: false,
            last_offset: 0.0,
        }
    }
}

/// Percentage of the scrollable range covered by `offset`, clamped to
/// `0..=100`. Pages without overflow report 0.
pub fn progress_percent(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if !range.is_finite() || range <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / range * 100.0).clamp(0.0, 100.0)
}

impl ScrollDerivedState {
    /// State for a page first seen at `sample`. There is no direction yet, so
    /// the bar starts out visible wherever the page was restored to.
    pub fn initial(sample: &ScrollSample, config: &NavConfig) -> Self {
        Self {
            is_nav_visible: true,
            ..Self::default().reduce(sample, config)
        }
    }

    pub fn reduce(&self, sample: &ScrollSample, config: &NavConfig) -> Self {
        let offset = sample.offset;
        let is_nav_visible = if offset <= config.always_visible_px {
            true
        } else {
            offset < self.last_offset || offset < config.near_top_px
        };

        Self {
            is_past_threshold: offset > config.past_threshold_px,
            progress_percent: progress_percent(
                offset,
                sample.document_height,
                sample.viewport_height,
            ),
            is_nav_visible,
            is_scroll_top_visible: offset > config.scroll_top_button_px,
            last_offset: offset,
        }
    }

    /// Equal as far as a view can tell; `last_offset` is bookkeeping.
    fn same_view(&self, other: &Self) -> bool {
        self.is_past_threshold == other.is_past_threshold
            && self.progress_percent == other.progress_percent
            && self.is_nav_visible == other.is_nav_visible
            && self.is_scroll_top_visible == other.is_scroll_top_visible
    }
}

type Subscriber = Rc<dyn Fn(&ScrollDerivedState)>;

struct ControllerInner {
    state: ScrollDerivedState,
    config: NavConfig,
    subscribers: Vec<(usize, Subscriber)>,
    next_id: usize,
    disposed: bool,
}

/// Owns the derived scroll state for one mount: listens to a scroll source
/// through a throttle, reduces every delivered sample and notifies
/// subscribers when a visible flag changes.
#[derive(Clone)]
pub struct ScrollStateController {
    inner: Rc<RefCell<ControllerInner>>,
    throttle: Throttle<ScrollSample>,
}

impl ScrollStateController {
    pub fn mount(
        source: &dyn ScrollSource,
        scheduler: Rc<dyn Scheduler>,
        config: &MotionConfig,
    ) -> Result<Self, MotionError> {
        let inner = Rc::new(RefCell::new(ControllerInner {
            state: ScrollDerivedState::default(),
            config: config.nav.clone(),
            subscribers: Vec::new(),
            next_id: 0,
            disposed: false,
        }));

        let weak = Rc::downgrade(&inner);
        let throttle = Throttle::new(config.throttle_ms, scheduler, move |sample| {
            if let Some(inner) = weak.upgrade() {
                Self::apply_to(&inner, &sample);
            }
        });

        let controller = Self { inner, throttle };
        controller.throttle.bind(source.subscribe(controller.throttle.listener())?);
        let first = source.sample();
        {
            let mut inner = controller.inner.borrow_mut();
            let initial = ScrollDerivedState::initial(&first, &inner.config);
            inner.state = initial;
        }
        debug!("Scroll state controller mounted");
        Ok(controller)
    }

    pub fn state(&self) -> ScrollDerivedState {
        self.inner.borrow().state
    }

    pub fn subscribe(&self, subscriber: impl Fn(&ScrollDerivedState) + 'static) -> usize {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(other, _)| *other != id);
    }

    /// Reduces `sample` right away, bypassing the throttle.
    pub fn apply(&self, sample: &ScrollSample) {
        Self::apply_to(&self.inner, sample);
    }

    pub fn dispose(&self) {
        let subscribers = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            std::mem::take(&mut inner.subscribers)
        };
        self.throttle.dispose();
        drop(subscribers);
        debug!("Scroll state controller disposed");
    }

    fn apply_to(inner: &Rc<RefCell<ControllerInner>>, sample: &ScrollSample) {
        let (next, subscribers) = {
            let mut inner = inner.borrow_mut();
            if inner.disposed {
                return;
            }
            let previous = inner.state;
            let next = previous.reduce(sample, &inner.config);
            inner.state = next;
            if previous.same_view(&next) {
                return;
            }
            let subscribers: Vec<Subscriber> =
                inner.subscribers.iter().map(|(_, s)| s.clone()).collect();
            (next, subscribers)
        };
        for subscriber in subscribers {
            subscriber(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{FakeClock, FakeScrollSource};

    fn sample(offset: f64) -> ScrollSample {
        ScrollSample {
            offset,
            timestamp: 0.0,
            document_height: 2000.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn progress_is_offset_over_scrollable_range() {
        assert_eq!(progress_percent(600.0, 2000.0, 800.0), 50.0);
        assert_eq!(progress_percent(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress_percent(1200.0, 2000.0, 800.0), 100.0);
    }

    #[test]
    fn progress_without_overflow_is_zero() {
        for offset in [0.0, 10.0, 600.0, 5000.0] {
            let p = progress_percent(offset, 800.0, 800.0);
            assert_eq!(p, 0.0);
            assert!(!p.is_nan());
        }
        assert_eq!(progress_percent(100.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_percent(-40.0, 2000.0, 800.0), 0.0);
        assert_eq!(progress_percent(1500.0, 2000.0, 800.0), 100.0);
        assert_eq!(progress_percent(f64::NAN, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn nav_hysteresis_scenario() {
        let config = NavConfig::default();
        let start = ScrollDerivedState::default();
        assert!(start.is_nav_visible);
        assert!(!start.is_past_threshold);

        let down = start.reduce(&sample(150.0), &config);
        assert!(down.is_past_threshold);
        assert!(!down.is_nav_visible);

        let up = down.reduce(&sample(140.0), &config);
        assert!(up.is_nav_visible);

        let near_top = up.reduce(&sample(50.0), &config);
        assert!(near_top.is_nav_visible);
        assert!(near_top.is_past_threshold);

        let top_from_below = ScrollDerivedState {
            last_offset: 10.0,
            ..ScrollDerivedState::default()
        }
        .reduce(&sample(50.0), &config);
        assert!(top_from_below.is_nav_visible);
    }

    #[test]
    fn direction_is_measured_against_previous_sample() {
        let config = NavConfig::default();
        let mut state = ScrollDerivedState::default();
        for offset in [400.0, 500.0, 450.0, 460.0] {
            state = state.reduce(&sample(offset), &config);
        }
        // 450 -> 460 is downward even though 460 < 500.
        assert!(!state.is_nav_visible);
        assert_eq!(state.last_offset, 460.0);
    }

    #[test]
    fn near_top_band_is_configurable() {
        let config = NavConfig {
            near_top_px: 300.0,
            ..NavConfig::default()
        };
        let state = ScrollDerivedState::default().reduce(&sample(250.0), &config);
        assert!(state.is_nav_visible);
        let state = state.reduce(&sample(320.0), &config);
        assert!(!state.is_nav_visible);
    }

    #[test]
    fn scroll_top_button_shows_past_300() {
        let config = NavConfig::default();
        let state = ScrollDerivedState::default().reduce(&sample(300.0), &config);
        assert!(!state.is_scroll_top_visible);
        let state = state.reduce(&sample(301.0), &config);
        assert!(state.is_scroll_top_visible);
    }

    #[test]
    fn controller_reduces_throttled_samples() {
        let clock = FakeClock::new();
        let source = FakeScrollSource::new(2000.0, 800.0);
        let controller =
            ScrollStateController::mount(&source, Rc::new(clock.clone()), &MotionConfig::default())
                .unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe(move |s| sink.borrow_mut().push(*s));

        source.scroll_to(100.0, 0.0);
        source.scroll_to(600.0, 5.0);
        assert_eq!(controller.state(), ScrollDerivedState::default());

        clock.advance(16);
        let state = controller.state();
        assert_eq!(state.progress_percent, 50.0);
        assert!(!state.is_nav_visible);
        assert_eq!(state.last_offset, 600.0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn unchanged_flags_do_not_notify() {
        let clock = FakeClock::new();
        let source = FakeScrollSource::new(800.0, 800.0);
        let controller =
            ScrollStateController::mount(&source, Rc::new(clock.clone()), &MotionConfig::default())
                .unwrap();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        controller.subscribe(move |_| *sink.borrow_mut() += 1);

        source.scroll_to(5.0, 0.0);
        clock.advance(16);
        source.scroll_to(10.0, 20.0);
        clock.advance(16);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(controller.state().last_offset, 10.0);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let clock = FakeClock::new();
        let source = FakeScrollSource::new(2000.0, 800.0);
        let controller =
            ScrollStateController::mount(&source, Rc::new(clock.clone()), &MotionConfig::default())
                .unwrap();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = controller.subscribe(move |_| *sink.borrow_mut() += 1);
        controller.unsubscribe(id);

        source.scroll_to(600.0, 0.0);
        clock.advance(16);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn disposed_controller_stays_silent() {
        let clock = FakeClock::new();
        let source = FakeScrollSource::new(2000.0, 800.0);
        let controller =
            ScrollStateController::mount(&source, Rc::new(clock.clone()), &MotionConfig::default())
                .unwrap();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        controller.subscribe(move |_| *sink.borrow_mut() += 1);

        source.scroll_to(600.0, 0.0);
        controller.dispose();
        controller.dispose();
        clock.advance(100);
        controller.apply(&sample(900.0));

        assert_eq!(*count.borrow(), 0);
        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.detach_count(), 1);
        assert_eq!(controller.state(), ScrollDerivedState::default());
    }

    #[test]
    fn mount_reads_initial_position() {
        let clock = FakeClock::new();
        let source = FakeScrollSource::new(2000.0, 800.0);
        source.scroll_to(300.0, 0.0);
        let controller =
            ScrollStateController::mount(&source, Rc::new(clock), &MotionConfig::default())
                .unwrap();
        assert_eq!(controller.state().progress_percent, 25.0);
        assert!(controller.state().is_past_threshold);
    }

    #[test]
    fn mount_mid_page_keeps_nav_visible_until_scrolling_down() {
        let clock = FakeClock::new();
        let source = FakeScrollSource::new(3000.0, 800.0);
        source.scroll_to(900.0, 0.0);
        let controller =
            ScrollStateController::mount(&source, Rc::new(clock.clone()), &MotionConfig::default())
                .unwrap();
        let state = controller.state();
        assert!(state.is_nav_visible);
        assert_eq!(state.last_offset, 900.0);

        source.scroll_to(950.0, 10.0);
        clock.advance(16);
        assert!(!controller.state().is_nav_visible);

        source.scroll_to(930.0, 40.0);
        clock.advance(16);
        assert!(controller.state().is_nav_visible);
    }
}

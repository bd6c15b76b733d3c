use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use log::{debug, warn};

use super::{ElementId, IntersectionEntry, Observation, VisibilitySource};
use crate::config::RevealConfig;

/// Browsers report intersection ratios with some rounding at the exact
/// threshold crossing.
const RATIO_TOLERANCE: f64 = 1e-3;

const STATIC_STYLE: &str = "opacity: 1; transform: none; filter: none;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    Primary,
    Alternate,
}

impl RevealVariant {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 1 {
            RevealVariant::Alternate
        } else {
            RevealVariant::Primary
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    /// Waiting for the element to scroll into view.
    Hidden,
    Animated(RevealVariant),
    /// Shown as-is, without an entrance animation.
    Static,
}

/// Per-element reveal progress for one container. Revealed ids are only ever
/// added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealState {
    phases: Vec<RevealPhase>,
    delays_ms: Vec<f64>,
    revealed: BTreeSet<ElementId>,
}

impl RevealState {
    pub fn staggered(count: usize, step_ms: f64) -> Self {
        Self {
            phases: vec![RevealPhase::Hidden; count],
            delays_ms: (0..count).map(|i| i as f64 * step_ms).collect(),
            revealed: BTreeSet::new(),
        }
    }

    pub fn immediate(count: usize) -> Self {
        Self {
            phases: vec![RevealPhase::Static; count],
            delays_ms: vec![0.0; count],
            revealed: (0..count).map(ElementId).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn phase(&self, id: ElementId) -> Option<RevealPhase> {
        self.phases.get(id.0).copied()
    }

    pub fn delay_ms(&self, id: ElementId) -> f64 {
        self.delays_ms.get(id.0).copied().unwrap_or(0.0)
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.len() == self.phases.len()
    }

    /// Marks `id` revealed. Returns false if it already was or is unknown.
    pub fn reveal(&mut self, id: ElementId) -> bool {
        match self.phases.get_mut(id.0) {
            Some(phase @ RevealPhase::Hidden) => {
                *phase = RevealPhase::Animated(RevealVariant::for_index(id.0));
                self.revealed.insert(id);
                true
            }
            _ => false,
        }
    }

    fn reveal_all_static(&mut self) {
        for (i, phase) in self.phases.iter_mut().enumerate() {
            if *phase == RevealPhase::Hidden {
                *phase = RevealPhase::Static;
                self.delays_ms[i] = 0.0;
                self.revealed.insert(ElementId(i));
            }
        }
    }

    /// CSS classes for the element at `id`. Unknown elements get none, so
    /// content the trigger never saw stays visible.
    pub fn class_names(&self, id: ElementId, config: &RevealConfig) -> Vec<String> {
        match self.phase(id) {
            Some(RevealPhase::Hidden) => vec![config.hidden_class.clone()],
            Some(RevealPhase::Animated(RevealVariant::Primary)) => {
                vec![config.animation_class.clone()]
            }
            Some(RevealPhase::Animated(RevealVariant::Alternate)) => {
                vec![format!("{}-alt", config.animation_class)]
            }
            Some(RevealPhase::Static) | None => Vec::new(),
        }
    }

    pub fn inline_style(&self, id: ElementId) -> Option<String> {
        match self.phase(id)? {
            RevealPhase::Static => Some(STATIC_STYLE.to_string()),
            _ => Some(format!("animation-delay: {}ms;", self.delay_ms(id).round())),
        }
    }
}

/// Stagger step scaled down on narrow viewports so the whole group takes
/// roughly the same time to appear on every device.
pub fn responsive_stagger_delay(config: &RevealConfig, viewport_width: f64) -> f64 {
    let base = config.stagger_delay_ms;
    if viewport_width < config.mobile_breakpoint {
        base * config.mobile_factor
    } else if viewport_width < config.tablet_breakpoint {
        base * config.tablet_factor
    } else {
        base
    }
}

/// What the trigger needs to know about the page at mount time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEnvironment {
    pub viewport_width: f64,
    pub reduced_motion: bool,
}

struct TriggerInner {
    state: RevealState,
    threshold: f64,
    observation: Option<Box<dyn Observation>>,
    connected: bool,
    on_change: Option<Rc<dyn Fn(&RevealState)>>,
    disposed: bool,
}

/// One-shot staggered reveal for the participating children of a container.
#[derive(Clone)]
pub struct VisibilityTrigger {
    inner: Rc<RefCell<TriggerInner>>,
}

impl VisibilityTrigger {
    /// A trigger with nothing to observe.
    pub fn inert() -> Self {
        Self::from_state(RevealState::default(), 0.0, None)
    }

    fn from_state(
        state: RevealState,
        threshold: f64,
        on_change: Option<Rc<dyn Fn(&RevealState)>>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TriggerInner {
                state,
                threshold,
                observation: None,
                connected: false,
                on_change,
                disposed: false,
            })),
        }
    }

    /// Sets up the reveal for `source`'s targets. A missing source is a no-op;
    /// a platform without intersection support gets everything shown at once.
    pub fn mount(
        source: Option<&dyn VisibilitySource>,
        env: RevealEnvironment,
        config: &RevealConfig,
        on_change: impl Fn(&RevealState) + 'static,
    ) -> Self {
        let Some(source) = source else {
            debug!("Reveal container missing, nothing to observe");
            return Self::inert();
        };
        let count = source.target_count();

        if env.reduced_motion {
            debug!("Reduced motion preferred, showing {} elements", count);
            return Self::from_state(RevealState::immediate(count), config.threshold, None);
        }

        let step = responsive_stagger_delay(config, env.viewport_width);
        let trigger = Self::from_state(
            RevealState::staggered(count, step),
            config.threshold,
            Some(Rc::new(on_change)),
        );
        if count == 0 {
            return trigger;
        }

        let weak = Rc::downgrade(&trigger.inner);
        let callback: Rc<dyn Fn(Vec<IntersectionEntry>)> = Rc::new(move |entries| {
            if let Some(inner) = weak.upgrade() {
                Self::handle_entries(&inner, entries);
            }
        });

        match source.observe(config.threshold, &config.root_margin, callback) {
            Ok(Some(observation)) => {
                let mut inner = trigger.inner.borrow_mut();
                inner.observation = Some(observation);
                inner.connected = true;
            }
            Ok(None) => {
                warn!("IntersectionObserver unavailable, revealing {} elements", count);
                trigger.inner.borrow_mut().state.reveal_all_static();
            }
            Err(e) => {
                warn!("Failed to observe reveal targets: {}", e);
                trigger.inner.borrow_mut().state.reveal_all_static();
            }
        }
        trigger
    }

    pub fn state(&self) -> RevealState {
        self.inner.borrow().state.clone()
    }

    pub fn is_observing(&self) -> bool {
        let inner = self.inner.borrow();
        inner.connected && !inner.disposed
    }

    /// Disconnects the observer whether or not every element has revealed.
    /// Later calls and late observer callbacks are ignored.
    pub fn dispose(&self) {
        let (observation, connected) = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.on_change = None;
            let connected = std::mem::replace(&mut inner.connected, false);
            (inner.observation.take(), connected)
        };
        if let Some(observation) = observation {
            if connected {
                observation.disconnect();
            }
        }
    }

    fn handle_entries(inner: &Rc<RefCell<TriggerInner>>, entries: Vec<IntersectionEntry>) {
        let (state, on_change) = {
            let mut guard = inner.borrow_mut();
            let inner = &mut *guard;
            if inner.disposed {
                return;
            }

            let mut changed = false;
            for entry in entries {
                if !entry.is_intersecting || entry.ratio + RATIO_TOLERANCE < inner.threshold {
                    continue;
                }
                if inner.state.reveal(entry.target) {
                    changed = true;
                    if let Some(observation) = &inner.observation {
                        observation.unobserve(entry.target);
                    }
                }
            }

            // The observation itself is kept until dispose; it owns the
            // callback that is running right now.
            if inner.connected && inner.state.all_revealed() {
                if let Some(observation) = &inner.observation {
                    observation.disconnect();
                }
                inner.connected = false;
                debug!("All {} elements revealed", inner.state.len());
            }

            if !changed {
                return;
            }
            (inner.state.clone(), inner.on_change.clone())
        };
        if let Some(on_change) = on_change {
            on_change(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::FakeVisibilitySource;

    const DESKTOP: RevealEnvironment = RevealEnvironment {
        viewport_width: 1280.0,
        reduced_motion: false,
    };

    fn entry(i: usize, ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            target: ElementId(i),
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    fn mount_counting(
        source: &FakeVisibilitySource,
        env: RevealEnvironment,
    ) -> (VisibilityTrigger, Rc<RefCell<Vec<usize>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let trigger = VisibilityTrigger::mount(
            Some(source as &dyn VisibilitySource),
            env,
            &RevealConfig::default(),
            move |s: &RevealState| sink.borrow_mut().push(s.revealed_count()),
        );
        (trigger, changes)
    }

    #[test]
    fn each_element_reveals_exactly_once() {
        let source = FakeVisibilitySource::new(4);
        let (trigger, changes) = mount_counting(&source, DESKTOP);
        assert_eq!(source.observed(), 4);
        assert_eq!(trigger.state().revealed_count(), 0);

        source.fire(vec![entry(0, 0.5), entry(1, 0.5)]);
        assert_eq!(source.observed(), 2);
        source.hide_all();
        source.show_all(1.0);
        // Re-entry after unobserve, delivered anyway.
        source.fire_stale(vec![entry(0, 1.0), entry(1, 1.0)]);
        source.show_all(1.0);

        let state = trigger.state();
        assert!(state.all_revealed());
        assert_eq!(*changes.borrow(), vec![2, 4]);
        for i in 0..4 {
            assert_eq!(
                state.phase(ElementId(i)),
                Some(RevealPhase::Animated(RevealVariant::for_index(i)))
            );
        }
    }

    #[test]
    fn reduced_motion_reveals_everything_without_delay() {
        let source = FakeVisibilitySource::new(5);
        let (trigger, changes) = mount_counting(
            &source,
            RevealEnvironment {
                reduced_motion: true,
                ..DESKTOP
            },
        );
        let state = trigger.state();
        assert!(state.all_revealed());
        for i in 0..5 {
            assert_eq!(state.phase(ElementId(i)), Some(RevealPhase::Static));
            assert_eq!(state.delay_ms(ElementId(i)), 0.0);
        }
        assert_eq!(source.observed(), 0);
        assert!(!trigger.is_observing());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn stagger_scales_with_viewport_width() {
        let config = RevealConfig::default();
        assert!((responsive_stagger_delay(&config, 375.0) - 105.0).abs() < 1e-9);
        assert!((responsive_stagger_delay(&config, 800.0) - 127.5).abs() < 1e-9);
        assert_eq!(responsive_stagger_delay(&config, 1024.0), 150.0);
        assert!((responsive_stagger_delay(&config, 767.0) - 105.0).abs() < 1e-9);
    }

    #[test]
    fn stagger_is_non_decreasing_in_index() {
        for width in [375.0, 800.0, 1440.0] {
            let source = FakeVisibilitySource::new(6);
            let (trigger, _) = mount_counting(
                &source,
                RevealEnvironment {
                    viewport_width: width,
                    reduced_motion: false,
                },
            );
            let state = trigger.state();
            let step = responsive_stagger_delay(&RevealConfig::default(), width);
            let delays: Vec<f64> = (0..6).map(|i| state.delay_ms(ElementId(i))).collect();
            assert!(delays.windows(2).all(|w| w[0] <= w[1]));
            for (i, delay) in delays.iter().enumerate() {
                assert!((delay - i as f64 * step).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let source = FakeVisibilitySource::new(2);
        let (trigger, changes) = mount_counting(&source, DESKTOP);
        assert_eq!(source.threshold(), 0.1);

        source.fire(vec![entry(0, 0.05)]);
        assert_eq!(trigger.state().revealed_count(), 0);
        source.fire(vec![entry(0, 0.1)]);
        assert!(trigger.state().is_revealed(ElementId(0)));
        assert_eq!(*changes.borrow(), vec![1]);
    }

    #[test]
    fn missing_container_is_a_no_op() {
        let trigger =
            VisibilityTrigger::mount(None, DESKTOP, &RevealConfig::default(), |_: &RevealState| {
                panic!("no callbacks expected")
            });
        assert!(trigger.state().is_empty());
        assert!(!trigger.is_observing());
        trigger.dispose();
    }

    #[test]
    fn missing_intersection_support_fails_open() {
        let source = FakeVisibilitySource::unsupported(3);
        let (trigger, _) = mount_counting(&source, DESKTOP);
        let state = trigger.state();
        assert!(state.all_revealed());
        assert_eq!(state.phase(ElementId(2)), Some(RevealPhase::Static));
        assert!(!trigger.is_observing());
    }

    #[test]
    fn disposed_trigger_ignores_late_callbacks() {
        let source = FakeVisibilitySource::new(3);
        let (trigger, changes) = mount_counting(&source, DESKTOP);
        trigger.dispose();
        trigger.dispose();

        source.fire_stale(vec![entry(0, 1.0), entry(1, 1.0)]);
        assert_eq!(trigger.state().revealed_count(), 0);
        assert!(changes.borrow().is_empty());
        assert_eq!(source.disconnects(), 1);
        assert_eq!(source.disconnect_calls(), 1);
    }

    #[test]
    fn dropped_trigger_disconnects_once() {
        let source = FakeVisibilitySource::new(3);
        let (trigger, _) = mount_counting(&source, DESKTOP);
        source.fire(vec![entry(0, 1.0)]);
        drop(trigger);
        assert_eq!(source.disconnects(), 1);
        assert_eq!(source.observed(), 0);
        assert_eq!(source.disconnect_calls(), 0);
    }

    #[test]
    fn observer_disconnects_once_everything_revealed() {
        let source = FakeVisibilitySource::new(2);
        let (trigger, _) = mount_counting(&source, DESKTOP);
        source.show_all(1.0);
        assert_eq!(source.disconnects(), 1);
        assert!(!trigger.is_observing());

        trigger.dispose();
        drop(trigger);
        assert_eq!(source.disconnects(), 1);
        assert_eq!(source.disconnect_calls(), 1);
    }

    #[test]
    fn classes_and_styles_follow_phase() {
        let config = RevealConfig::default();
        let mut state = RevealState::staggered(3, 150.0);
        let id = ElementId;

        assert_eq!(state.class_names(id(1), &config), vec!["service-flip-hidden"]);
        assert_eq!(state.inline_style(id(2)).as_deref(), Some("animation-delay: 300ms;"));

        state.reveal(id(0));
        state.reveal(id(1));
        assert_eq!(state.class_names(id(0), &config), vec!["service-flip-visible"]);
        assert_eq!(state.class_names(id(1), &config), vec!["service-flip-visible-alt"]);

        assert!(state.class_names(id(7), &config).is_empty());
        assert_eq!(state.inline_style(id(7)), None);

        let state = RevealState::immediate(1);
        assert!(state.class_names(id(0), &config).is_empty());
        assert_eq!(state.inline_style(id(0)).as_deref(), Some(STATIC_STYLE));
    }
}

use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::browser::{self, BrowserScheduler, DomTargets, WindowScroll};
use crate::config::MotionConfig;
use crate::motion::reveal::RevealEnvironment;
use crate::motion::{
    ElementId, RevealState, ScrollDerivedState, ScrollStateController, VisibilitySource,
    VisibilityTrigger,
};

/// Motion settings provided by the app root, or the defaults outside of it.
#[hook]
pub fn use_motion_config() -> Rc<MotionConfig> {
    use_context::<Rc<MotionConfig>>().unwrap_or_default()
}

/// Navbar flags derived from the window's scroll position.
#[hook]
pub fn use_scroll_state() -> ScrollDerivedState {
    let config = use_motion_config();
    let state = use_state(ScrollDerivedState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |config: &Rc<MotionConfig>| {
                let controller = mount_scroll_state(config, state);
                move || {
                    if let Some(controller) = controller {
                        controller.dispose();
                    }
                }
            },
            config,
        );
    }

    *state
}

fn mount_scroll_state(
    config: &MotionConfig,
    state: UseStateHandle<ScrollDerivedState>,
) -> Option<ScrollStateController> {
    let mounted = WindowScroll::new().and_then(|source| {
        ScrollStateController::mount(&source, Rc::new(BrowserScheduler), config)
    });
    match mounted {
        Ok(controller) => {
            state.set(controller.state());
            controller.subscribe(move |next| state.set(*next));
            Some(controller)
        }
        Err(e) => {
            warn!("Scroll state unavailable: {}", e);
            None
        }
    }
}

/// Container ref and per-child reveal styling returned by [`use_scroll_reveal`].
pub struct ScrollReveal {
    pub node_ref: NodeRef,
    state: RevealState,
    config: Rc<MotionConfig>,
}

impl ScrollReveal {
    /// Classes for the `index`-th `data-animate="flip"` child.
    pub fn classes(&self, index: usize) -> Classes {
        Classes::from(self.state.class_names(ElementId(index), &self.config.reveal))
    }

    pub fn style(&self, index: usize) -> Option<String> {
        self.state.inline_style(ElementId(index))
    }

    /// True once anything in the container has come into view.
    pub fn any_revealed(&self) -> bool {
        self.state.revealed_count() > 0
    }
}

/// Reveals the `data-animate="flip"` children of the element behind
/// `node_ref` once, staggered, as they scroll into view.
#[hook]
pub fn use_scroll_reveal() -> ScrollReveal {
    let config = use_motion_config();
    let node_ref = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node_ref = node_ref.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |config: &Rc<MotionConfig>| {
                let trigger = mount_reveal(&node_ref, config, state);
                move || trigger.dispose()
            },
            config.clone(),
        );
    }

    ScrollReveal {
        node_ref,
        state: (*state).clone(),
        config,
    }
}

fn mount_reveal(
    node_ref: &NodeRef,
    config: &MotionConfig,
    state: UseStateHandle<RevealState>,
) -> VisibilityTrigger {
    let window = match browser::window() {
        Ok(window) => window,
        Err(e) => {
            warn!("Reveal disabled: {}", e);
            return VisibilityTrigger::inert();
        }
    };

    let targets = match node_ref.cast::<Element>().map(|c| DomTargets::from_container(&c)) {
        Some(Ok(targets)) => Some(targets),
        Some(Err(e)) => {
            warn!("Could not collect reveal targets: {}", e);
            None
        }
        None => None,
    };

    let env = RevealEnvironment {
        viewport_width: browser::viewport_width(&window),
        reduced_motion: browser::prefers_reduced_motion(&window),
    };
    let setter = state.clone();
    let trigger = VisibilityTrigger::mount(
        targets.as_ref().map(|t| t as &dyn VisibilitySource),
        env,
        &config.reveal,
        move |next: &RevealState| setter.set(next.clone()),
    );
    state.set(trigger.state());
    trigger
}

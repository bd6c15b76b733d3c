use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

pub const LOADING_TICK_MS: u32 = 100;
const PROGRESS_STEP: u8 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadProgress(pub u8);

impl Reducible for LoadProgress {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        if self.0 >= 100 {
            return self;
        }
        Rc::new(LoadProgress(self.0.saturating_add(PROGRESS_STEP).min(100)))
    }
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let progress = use_reducer(LoadProgress::default);

    {
        let progress = progress.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(LOADING_TICK_MS, move || progress.dispatch(()));
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="loading-screen">
            <img src="/logo.svg" alt={format!("{} Logo", config::SITE_NAME)} class="loading-logo" />
            <h2 class="gradient-text">{config::SITE_NAME}</h2>
            <div class="loading-bar">
                <div class="loading-bar-fill" style={format!("width: {}%;", progress.0)}></div>
            </div>
            <p class="loading-label">{format!("Loading... {}%", progress.0)}</p>
        </div>
    }
}

use log::warn;
use yew::prelude::*;

use crate::browser;
use crate::hooks::use_scroll_state;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let scroll = use_scroll_state();

    let onclick = Callback::from(|_: MouseEvent| {
        if let Err(e) = browser::smooth_scroll_to(0.0) {
            warn!("Scroll to top failed: {}", e);
        }
    });

    if !scroll.is_scroll_top_visible {
        return html! {};
    }

    html! {
        <button class="scroll-to-top" {onclick} aria-label="Scroll to top">
            {"↑"}
        </button>
    }
}

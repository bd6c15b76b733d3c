use yew::prelude::*;

use crate::config;

#[function_component(FloatingContactButtons)]
pub fn floating_contact_buttons() -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class="floating-contact">
            <div class={classes!("floating-contact-actions", (*is_open).then(|| "open"))}>
                <a href={config::WHATSAPP_LINK} target="_blank" rel="noopener noreferrer"
                    class="floating-contact-whatsapp" aria-label="WhatsApp us">
                    {"💬"}
                </a>
                <a href={config::CONTACT_PHONE_LINK} class="floating-contact-call" aria-label="Call us">
                    {"📞"}
                </a>
            </div>
            <button class="floating-contact-toggle" onclick={toggle}
                aria-label={if *is_open { "Close contact options" } else { "Open contact options" }}>
                { if *is_open { "✕" } else { "☎" } }
            </button>
        </div>
    }
}

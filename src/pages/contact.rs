use yew::prelude::*;

use crate::components::contact_form::ContactFormCard;
use crate::components::scroll_to_top::ScrollToTop;
use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1><span class="gradient-text">{"Get In Touch"}</span></h1>
                <p>
                    {"Ready to transform your business? Let's discuss your project and bring your vision to life."}
                </p>
            </section>

            <section class="contact-cards">
                <div class="contact-card">
                    <h3>{"Our Office Address"}</h3>
                    { for config::OFFICE_ADDRESS.iter().map(|line| html! { <p>{*line}</p> }) }
                </div>
                <div class="contact-card">
                    <h3>{"Call Us Anytime"}</h3>
                    <p><a href={config::CONTACT_PHONE_LINK}>{config::CONTACT_PHONE}</a></p>
                </div>
                <div class="contact-card">
                    <h3>{"Send An Email"}</h3>
                    <p><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></p>
                </div>
            </section>

            <section class="contact-form-section">
                <h2>{"Send Us a Message"}</h2>
                <ContactFormCard />
            </section>
            <ScrollToTop />
        </div>
    }
}

use yew::prelude::*;

use crate::components::scroll_to_top::ScrollToTop;
use crate::config;
use crate::hooks::use_scroll_reveal;

const PILLARS: &[(&str, &str, &str)] = &[
    ("🛡️", "Latest technologies", "We stay ahead of the curve by utilizing cutting-edge technologies and frameworks to deliver modern, scalable solutions."),
    ("👥", "Experienced team", "Our skilled professionals bring years of expertise in web development, mobile apps, and digital marketing strategies."),
    ("🎧", "Dedicated support", "We provide ongoing support and maintenance to ensure your solutions continue to perform at their best."),
];

#[function_component(About)]
pub fn about() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1><span class="gradient-text">{format!("About {}", config::SITE_NAME)}</span></h1>
                <p>
                    {"We offer a comprehensive range of IT solutions, from web development to digital marketing. Everything you need is right here."}
                </p>
            </section>

            <section class="pillars-grid" ref={reveal.node_ref.clone()}>
                { for PILLARS.iter().enumerate().map(|(i, (icon, title, text))| html! {
                    <div class={classes!("pillar-card", reveal.classes(i))}
                        style={reveal.style(i)} data-animate="flip">
                        <div class="pillar-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>

            <section class="about-story">
                <p>
                    {"OrbitDynamix was founded with a simple mission: to propel businesses forward with cutting-edge IT solutions. We believe in the transformative power of technology and its ability to simplify communications, elevate experiences, and engage and inspire people everywhere."}
                </p>
                <p>
                    {"We believe in building long-term partnerships with our clients, working collaboratively to understand their goals and deliver solutions that exceed expectations."}
                </p>
            </section>
            <ScrollToTop />
        </div>
    }
}

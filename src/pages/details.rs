use yew::prelude::*;

use crate::components::scroll_to_top::ScrollToTop;
use crate::config;
use crate::hooks::use_scroll_reveal;

const WEBSITE: &str = "https://orbitdynamix.com";

// (heading, items)
const SERVICE_GROUPS: &[(&str, &[&str])] = &[
    ("Web Development", &["Custom Web Applications", "E-commerce Solutions", "Progressive Web Apps", "API Development", "Database Design"]),
    ("Mobile Development", &["iOS Applications", "Android Applications", "Cross-platform Solutions", "React Native Apps", "Flutter Development"]),
    ("Cloud & DevOps", &["AWS Cloud Solutions", "Docker Containerization", "CI/CD Pipelines", "Microservices Architecture", "Performance Optimization"]),
];

const EXPERTISE: &[&str] = &[
    "React", "TypeScript", "Node.js", "Python", "AWS", "Docker",
    "MongoDB", "PostgreSQL", "GraphQL", "React Native", "Flutter", "Laravel",
];

// (timing, topic)
const PRESENTATION_FLOW: &[(&str, &str)] = &[
    ("1-2 min", "Company Introduction & Logo"),
    ("2-3 min", "Our Services Overview"),
    ("1-2 min", "Technology Stack & Expertise"),
    ("2-3 min", "Previous Projects & Success Stories"),
    ("1-2 min", "Vision, Mission & Why Choose Us"),
    ("1 min", "Next Steps & Call to Action"),
];

const TALKING_POINTS: &[(&str, &str)] = &[
    ("Innovation", "Cutting-edge solutions"),
    ("Reliability", "99.9% uptime guarantee"),
    ("Scalability", "Future-proof architecture"),
    ("Support", "24/7 technical support"),
    ("ROI", "Measurable business impact"),
    ("Timeline", "Agile delivery methodology"),
];

const MATERIALS: &[(&str, &[&str])] = &[
    ("Brand Assets", &["Logo variations (light/dark)", "Business card templates", "Letterhead design", "Social media templates", "Presentation slides"]),
    ("Digital Materials", &["Website portfolio", "Case study documents", "Service brochures", "Technical whitepapers", "Client testimonials"]),
    ("Proposals", &["Project proposal templates", "Pricing structure guides", "Timeline templates", "Contract templates", "ROI calculators"]),
];

fn bullet_columns(groups: &[(&str, &[&str])]) -> Html {
    html! {
        <div class="details-columns">
            { for groups.iter().map(|(heading, items)| html! {
                <div>
                    <h3>{*heading}</h3>
                    <ul>
                        { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </div>
            }) }
        </div>
    }
}

/// Brand overview used for client presentations.
#[function_component(Details)]
pub fn details() -> Html {
    let reveal = use_scroll_reveal();
    let card = |i: usize, title: &str, body: Html| -> Html {
        html! {
            <section class={classes!("details-card", reveal.classes(i))}
                style={reveal.style(i)} data-animate="flip">
                <h2 class="gradient-text">{title.to_string()}</h2>
                { body }
            </section>
        }
    };

    html! {
        <div class="details-page">
            <section class="page-hero">
                <h1><span class="gradient-text">{format!("{} - Complete Brand Overview", config::SITE_NAME)}</span></h1>
                <p>
                    {"A comprehensive guide to our brand, services, and vision for client presentations and marketing discussions"}
                </p>
            </section>

            <div class="details-stack" ref={reveal.node_ref.clone()}>
                { card(0, "🚀 Our Services Portfolio", bullet_columns(SERVICE_GROUPS)) }
                { card(1, "⚡ Technology Expertise", html! {
                    <div class="badge-grid">
                        { for EXPERTISE.iter().map(|tech| html! { <span class="tech-badge">{*tech}</span> }) }
                    </div>
                }) }
                <div class="details-pair">
                    { card(2, "🎯 Our Vision", html! {
                        <p>
                            {"To become the leading force in digital transformation, creating innovative solutions that orbit around our clients' success. We envision a future where technology seamlessly integrates with business goals, driving growth and creating lasting impact in the digital landscape."}
                        </p>
                    }) }
                    { card(3, "🌟 Our Mission", html! {
                        <p>
                            {"To deliver cutting-edge web and mobile solutions that empower businesses to thrive in the digital age. We are committed to excellence, innovation, and building long-term partnerships with our clients through transparent communication and exceptional results."}
                        </p>
                    }) }
                </div>
                { card(4, "💼 10-Minute Presentation Outline", html! {
                    <div class="details-columns">
                        <div>
                            <h3>{"Presentation Flow"}</h3>
                            <ol>
                                { for PRESENTATION_FLOW.iter().map(|(timing, topic)| html! {
                                    <li><strong>{format!("{}:", timing)}</strong>{" "}{*topic}</li>
                                }) }
                            </ol>
                        </div>
                        <div>
                            <h3>{"Key Talking Points"}</h3>
                            <ul>
                                { for TALKING_POINTS.iter().map(|(point, detail)| html! {
                                    <li><strong>{format!("{}:", point)}</strong>{" "}{*detail}</li>
                                }) }
                            </ul>
                        </div>
                    </div>
                }) }
                { card(5, "📈 Marketing & Sales Materials", bullet_columns(MATERIALS)) }
                { card(6, "🤝 Ready to Get Started?", html! {
                    <>
                        <p>
                            {format!("Let's discuss how {} can transform your digital presence and drive your business forward.", config::SITE_NAME)}
                        </p>
                        <div class="details-columns">
                            <div>
                                <strong>{"Email:"}</strong>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </div>
                            <div>
                                <strong>{"Phone:"}</strong>
                                <a href={config::CONTACT_PHONE_LINK}>{config::CONTACT_PHONE}</a>
                            </div>
                            <div>
                                <strong>{"Website:"}</strong>
                                <a href={WEBSITE} target="_blank" rel="noopener noreferrer">{WEBSITE}</a>
                            </div>
                        </div>
                    </>
                }) }
            </div>
            <ScrollToTop />
        </div>
    }
}

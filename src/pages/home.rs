use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactFormCard;
use crate::components::floating_contact::FloatingContactButtons;
use crate::components::rotation::{use_rotation, RotationAction, ROTATE_EVERY_MS};
use crate::components::scroll_to_top::ScrollToTop;
use crate::config;
use crate::data::{Service, FEATURES, MILESTONES, PROJECTS, SERVICES, STATS, TECH_ROWS};
use crate::hooks::use_scroll_reveal;
use crate::Route;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                <h1 class="gradient-text">{format!("Innovate with {}", config::SITE_NAME)}</h1>
                <p class="hero-subtitle">
                    {"Propelling businesses forward with cutting-edge IT solutions designed to transform your digital presence and accelerate growth."}
                </p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Contact} classes="orbit-btn">
                        {"Get Started"}
                    </Link<Route>>
                    <Link<Route> to={Route::Services} classes="orbit-btn-outline">
                        {"Explore Services"}
                    </Link<Route>>
                </div>
            </div>
        </header>
    }
}

/// Reveal slots taken by a section's heading and subtitle, ahead of its cards.
const HEADER_SLOTS: usize = 2;

fn service_card_body(service: &Service) -> Html {
    html! {
        <>
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <div class="service-actions">
                <Link<Route> to={Route::ServiceDetail { id: service.id.to_string() }} classes="orbit-btn">
                    {"Learn More"}
                </Link<Route>>
                <Link<Route> to={Route::Contact} classes="orbit-btn-outline">
                    {"Get Quote"}
                </Link<Route>>
            </div>
        </>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    let reveal = use_scroll_reveal();
    let carousel = use_rotation(SERVICES.len(), ROTATE_EVERY_MS, reveal.any_revealed());

    let prev = {
        let carousel = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| carousel.dispatch(RotationAction::Prev))
    };
    let next = {
        let carousel = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| carousel.dispatch(RotationAction::Next))
    };

    html! {
        <section id="services" class="services-section">
            <div class="section-inner" ref={reveal.node_ref.clone()}>
                <h2 class={classes!("section-title", reveal.classes(0))}
                    style={reveal.style(0)} data-animate="flip">
                    <span class="gradient-text">{"Our Services"}</span>
                </h2>
                <p class={classes!("section-subtitle", reveal.classes(1))}
                    style={reveal.style(1)} data-animate="flip">
                    {"We provide comprehensive IT solutions to empower your business with cutting-edge technology and strategies."}
                </p>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let slot = HEADER_SLOTS + i;
                        html! {
                            <div class={classes!("service-card", reveal.classes(slot))}
                                style={reveal.style(slot)} data-animate="flip">
                                { service_card_body(service) }
                            </div>
                        }
                    }) }
                </div>

                <div class="services-carousel">
                    <div class="carousel-viewport">
                        <div class="carousel-track"
                            style={format!("transform: translateX(-{}%);", carousel.track_offset_percent())}>
                            { for SERVICES.iter().map(|service| html! {
                                <div class="carousel-slide">
                                    <div class="service-card">{ service_card_body(service) }</div>
                                </div>
                            }) }
                        </div>
                        <button class="carousel-arrow carousel-prev" onclick={prev} aria-label="Previous service">
                            {"‹"}
                        </button>
                        <button class="carousel-arrow carousel-next" onclick={next} aria-label="Next service">
                            {"›"}
                        </button>
                    </div>
                    <div class="carousel-dots">
                        { for (0..SERVICES.len()).map(|i| {
                            let carousel_dispatch = carousel.dispatcher();
                            html! {
                                <button class={classes!("carousel-dot", carousel.is_current(i).then(|| "active"))}
                                    aria-label={format!("Go to service {}", i + 1)}
                                    onclick={Callback::from(move |_: MouseEvent| {
                                        carousel_dispatch.dispatch(RotationAction::Select(i))
                                    })}>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(WhyChooseUsSection)]
fn why_choose_us_section() -> Html {
    let reveal = use_scroll_reveal();
    let active = use_rotation(FEATURES.len(), ROTATE_EVERY_MS, true);

    html! {
        <section id="why-choose-us" class="why-section">
            <div class="section-inner" ref={reveal.node_ref.clone()}>
                <div class="section-badge">{format!("★ Why Choose {}", config::SITE_NAME)}</div>
                <h2 class={classes!("section-title", reveal.classes(0))}
                    style={reveal.style(0)} data-animate="flip">
                    {"Built for "}<span class="gradient-text">{"Your Success"}</span>
                </h2>
                <p class={classes!("section-subtitle", reveal.classes(1))}
                    style={reveal.style(1)} data-animate="flip">
                    {"We don't just deliver projects. We build partnerships that drive your business forward."}
                </p>

                <div class="why-grid">
                    <div class="why-features">
                        { for FEATURES.iter().enumerate().map(|(i, feature)| {
                            let slot = HEADER_SLOTS + i;
                            let is_active = active.is_current(i);
                            let select = {
                                let active = active.dispatcher();
                                Callback::from(move |_: MouseEvent| active.dispatch(RotationAction::Select(i)))
                            };
                            html! {
                                <div class={classes!("why-card", is_active.then(|| "active"), reveal.classes(slot))}
                                    style={reveal.style(slot)} data-animate="flip" onclick={select}>
                                    <div class="why-card-head">
                                        <div class="why-icon">{feature.icon}</div>
                                        <h3>{feature.title}</h3>
                                        <div class="why-metric">
                                            <strong>{feature.metric}</strong>
                                            <span>{feature.metric_label}</span>
                                        </div>
                                    </div>
                                    <p>{feature.description}</p>
                                    {
                                        if is_active {
                                            html! {
                                                <ul class="why-benefits">
                                                    { for feature.benefits.iter().map(|b| html! { <li>{"✓ "}{*b}</li> }) }
                                                </ul>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            }
                        }) }
                    </div>

                    <div class="why-side">
                        <div class="stats-grid">
                            { for STATS.iter().enumerate().map(|(i, (icon, number, label))| {
                                let slot = HEADER_SLOTS + FEATURES.len() + i;
                                html! {
                                    <div class={classes!("stat-card", reveal.classes(slot))}
                                        style={reveal.style(slot)} data-animate="flip">
                                        <div class="stat-icon">{*icon}</div>
                                        <strong>{*number}</strong>
                                        <span>{*label}</span>
                                    </div>
                                }
                            }) }
                        </div>
                        <div class="value-card">
                            <h3>{"Your Success is Our Mission"}</h3>
                            <p>
                                {"Every project we undertake is backed by our commitment to excellence, innovation, and your business growth. We're not just service providers, we're your technology partners."}
                            </p>
                            <div class="hero-cta-group">
                                <Link<Route> to={Route::Contact} classes="orbit-btn">{"Start Your Project →"}</Link<Route>>
                                <Link<Route> to={Route::Services} classes="orbit-btn-outline">{"View Services"}</Link<Route>>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="why-cta">
                    <span>{"Ready to get started?"}</span>
                    <Link<Route> to={Route::Contact} classes="service-link">{"Let's talk →"}</Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(TechnologiesSection)]
fn technologies_section() -> Html {
    let reveal = use_scroll_reveal();
    let row_starts: Vec<usize> = TECH_ROWS
        .iter()
        .scan(0, |next, row| {
            let start = *next;
            *next += row.len();
            Some(start)
        })
        .collect();

    html! {
        <section id="technologies" class="tech-section">
            <div class="section-inner">
                <h2 class="section-title"><span class="gradient-text">{"Technologies We Master"}</span></h2>
                <p class="section-subtitle">
                    {"We leverage cutting-edge technologies and industry-leading tools to deliver exceptional, scalable solutions that drive your business forward."}
                </p>
                <div class="tech-rows" ref={reveal.node_ref.clone()}>
                    { for TECH_ROWS.iter().zip(row_starts).map(|(row, start)| html! {
                        <div class="tech-row" style={format!("--tech-columns: {};", row.len())}>
                            { for row.iter().enumerate().map(|(j, (name, logo))| {
                                let i = start + j;
                                html! {
                                    <div class={classes!("tech-item", reveal.classes(i))}
                                        style={reveal.style(i)} data-animate="flip">
                                        <img src={*logo} alt={format!("{} Logo", name)} loading="lazy" />
                                        <span>{*name}</span>
                                    </div>
                                }
                            }) }
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(PortfolioSection)]
fn portfolio_section() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class="section-inner">
                <h2 class="section-title"><span class="gradient-text">{"OUR PORTFOLIO"}</span></h2>
                <p class="section-subtitle">{"Discover Our Latest Projects"}</p>
                <div class="portfolio-grid" ref={reveal.node_ref.clone()}>
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <div class={classes!("portfolio-card", reveal.classes(i))}
                            style={format!("height: {}px; {}", project.height_px, reveal.style(i).unwrap_or_default())}
                            data-animate="flip">
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="portfolio-overlay"></div>
                            <div class="portfolio-content">
                                <span class="portfolio-category">{project.category}</span>
                                <h3>{project.title}</h3>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <section id="about" class="about-section">
            <div class="about-copy">
                <h2 class="section-title"><span class="gradient-text">{format!("About {}", config::SITE_NAME)}</span></h2>
                <p>
                    {"OrbitDynamix is a forward-thinking IT solutions agency committed to delivering exceptional digital experiences that drive business growth."}
                </p>
                <p>
                    {"Our team of skilled professionals specializes in web development, mobile applications, SEO strategies, and cloud services, offering comprehensive solutions tailored to meet the unique needs of each client."}
                </p>
            </div>
            <ol class="timeline" ref={reveal.node_ref.clone()}>
                { for MILESTONES.iter().enumerate().map(|(i, (title, description))| html! {
                    <li class={classes!("timeline-item", reveal.classes(i))}
                        style={reveal.style(i)} data-animate="flip">
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </li>
                }) }
            </ol>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <h2 class="section-title"><span class="gradient-text">{"Let's Build Together"}</span></h2>
            <div class="contact-layout">
                <div class="contact-details">
                    <div class="contact-detail">
                        <h4>{"Call Us"}</h4>
                        <a href={config::CONTACT_PHONE_LINK}>{config::CONTACT_PHONE}</a>
                    </div>
                    <div class="contact-detail">
                        <h4>{"Email Us"}</h4>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </div>
                    <div class="contact-detail">
                        <h4>{"Visit Us"}</h4>
                        { for config::OFFICE_ADDRESS.iter().map(|line| html! { <p>{*line}</p> }) }
                    </div>
                </div>
                <ContactFormCard />
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <Hero />
            <ServicesSection />
            <WhyChooseUsSection />
            <TechnologiesSection />
            <AboutSection />
            <PortfolioSection />
            <ContactSection />
            <FloatingContactButtons />
            <ScrollToTop />
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_to_top::ScrollToTop;
use crate::data::{find_service, SERVICES};
use crate::hooks::use_scroll_reveal;
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(OurServices)]
pub fn our_services() -> Html {
    let reveal = use_scroll_reveal();

    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1><span class="gradient-text">{"Our Services"}</span></h1>
                <p>{"Everything your business needs to grow online, under one roof."}</p>
            </section>
            <section class="services-list" ref={reveal.node_ref.clone()}>
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <article class={classes!("service-row", reveal.classes(i))}
                        style={reveal.style(i)} data-animate="flip">
                        <img src={service.image} alt={service.title} loading="lazy" />
                        <div class="service-row-copy">
                            <h2>{service.title}</h2>
                            <p>{service.description}</p>
                            <Link<Route> to={Route::ServiceDetail { id: service.id.to_string() }} classes="orbit-btn">
                                {"View Details"}
                            </Link<Route>>
                        </div>
                    </article>
                }) }
            </section>
            <ScrollToTop />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub id: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = find_service(&props.id) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="service-detail-page">
            <section class="page-hero">
                <h1><span class="gradient-text">{service.title}</span></h1>
                <div class="title-rule"></div>
            </section>
            <section class="service-detail">
                <p>{service.detailed_description}</p>
                <img src={service.image} alt={service.title} />
            </section>
            <ScrollToTop />
        </div>
    }
}

use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::data::SERVICES;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        {config::SITE_NAME}
                    </Link<Route>>
                    <p>{"Propelling businesses forward with cutting-edge IT solutions."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Services"}</h4>
                    <ul>
                        { for SERVICES.iter().map(|service| html! {
                            <li>
                                <Link<Route> to={Route::ServiceDetail { id: service.id.to_string() }}>
                                    {service.title}
                                </Link<Route>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>{"Contact"}</h4>
                    { for config::OFFICE_ADDRESS.iter().map(|line| html! { <p>{*line}</p> }) }
                    <p><a href={config::CONTACT_PHONE_LINK}>{config::CONTACT_PHONE}</a></p>
                    <p><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></p>
                </div>
            </div>
            <p class="footer-copyright">
                {format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}
            </p>
        </footer>
    }
}

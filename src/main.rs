use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod data;
mod error;
mod hooks;
mod motion;
mod components {
    pub mod contact_form;
    pub mod floating_contact;
    pub mod footer;
    pub mod loading_screen;
    pub mod rotation;
    pub mod scroll_to_top;
    pub mod site_styles;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod details;
    pub mod home;
    pub mod not_found;
    pub mod services;
}

use components::{footer::Footer, loading_screen::LoadingScreen, site_styles::SiteStyles};
use config::MotionConfig;
use data::SERVICES;
use hooks::use_scroll_state;
use pages::{
    about::About,
    contact::Contact,
    details::Details,
    home::Home,
    not_found::NotFound,
    services::{OurServices, ServiceDetail},
};

const LOADING_SCREEN_MS: u32 = 2000;
/// Height of the fixed navbar, kept clear when jumping to a section.
const NAV_OFFSET_PX: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/services")]
    Services,
    #[at("/services/:id")]
    ServiceDetail { id: String },
    #[at("/details")]
    Details,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <OurServices /> }
        }
        Route::ServiceDetail { id } => {
            info!("Rendering Service page for {}", id);
            html! { <ServiceDetail {id} /> }
        }
        Route::Details => {
            info!("Rendering Details page");
            html! { <Details /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let scroll = use_scroll_state();
    let is_home = use_route::<Route>() == Some(Route::Home);
    let menu_open = use_state(|| false);
    let services_open = use_state(|| false);
    let nav_links = [
        ("Home", Route::Home),
        ("About", Route::About),
        ("Contact Us", Route::Contact),
    ];

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_services = {
        let services_open = services_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            services_open.set(!*services_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let services_open = services_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            services_open.set(false);
        })
    };

    let scroll_to_services = {
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu.emit(e);
            if is_home {
                match browser::scroll_to_element("#services", NAV_OFFSET_PX) {
                    Ok(true) => {}
                    Ok(false) => warn!("No services section on this page"),
                    Err(e) => warn!("Scroll to services failed: {}", e),
                }
            } else if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/#services");
            }
        })
    };

    let solid = scroll.is_past_threshold || !is_home;
    let hidden = !scroll.is_nav_visible && !*menu_open;
    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", solid.then(|| "scrolled"), hidden.then(|| "nav-hidden"))}>
            <div class="nav-progress" style={format!("width: {:.2}%;", scroll.progress_percent)}></div>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/logo.svg" alt={format!("{} Logo", config::SITE_NAME)} />
                    <span class="gradient-text">{config::SITE_NAME}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Open main menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_links.iter().map(|(name, route)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*name}
                            </Link<Route>>
                        </div>
                    }) }
                    <div class={classes!("nav-dropdown", (*services_open).then(|| "open"))}>
                        <button class="nav-link nav-dropdown-toggle" onclick={toggle_services}>
                            {"Services ▾"}
                        </button>
                        <div class="nav-dropdown-menu">
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={Route::Services} classes="nav-dropdown-item">
                                    {"All Services"}
                                </Link<Route>>
                            </div>
                            <a href="/#services" class="nav-dropdown-item" onclick={scroll_to_services}>
                                {"Services Section"}
                            </a>
                            { for SERVICES.iter().map(|service| html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={Route::ServiceDetail { id: service.id.to_string() }} classes="nav-dropdown-item">
                                        {service.title}
                                    </Link<Route>>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="orbit-btn nav-cta">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let motion_config = use_state(|| Rc::new(config::load()));
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LOADING_SCREEN_MS, move || loading.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    if *loading {
        return html! {
            <>
                <SiteStyles />
                <LoadingScreen />
            </>
        };
    }

    html! {
        <ContextProvider<Rc<MotionConfig>> context={(*motion_config).clone()}>
            <SiteStyles />
            <BrowserRouter>
                <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
                <Nav />
                <main id="main-content">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<Rc<MotionConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"Oops! This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home} classes="orbit-btn">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}

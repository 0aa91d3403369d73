use crate::core::store::AppStore;
use crate::features::contacts::state::initialize;
use crate::features::contacts::view::ContactPicker;
use preferences::{load_picker_config, load_url_state};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

pub(crate) mod api;
mod preferences;
mod routes;

use api::ApiCtx;

#[function_component(RolodexApp)]
pub(crate) fn rolodex_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(load_picker_config()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <main class="page">
                    <Switch<Route> render={|route| match route {
                        Route::Picker => html! { <ContactPicker /> },
                        Route::NotFound => html! { <p class="muted">{"Page not found"}</p> },
                    }} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Seed picker state from the address, then mount the app.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let url = load_url_state();
    Dispatch::<AppStore>::new().reduce_mut(|store| store.picker = initialize(&url));
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RolodexApp>::with_root(root).render();
    } else {
        yew::Renderer::<RolodexApp>::new().render();
    }
}

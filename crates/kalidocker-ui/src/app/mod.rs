//! Root component and wasm entry point.
//!
//! # Design
//! - The health check is claimed through the store phase before spawning, so
//!   remounts and re-renders never issue a second request.
//! - Failures are dropped by the reducer; the page renders the same either way.

use crate::core::stats::DashboardStats;
use crate::core::store::AppStore;
use crate::features::dashboard::DashboardPage;
use crate::services::api::ApiClient;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Same-origin base URL for API calls.
fn api_base_url() -> String {
    gloo::utils::window().location().origin().unwrap_or_default()
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(KaliDockerApp)]
pub(crate) fn kalidocker_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let client = use_memo(|_| ApiClient::new(api_base_url()), ());
    let services = use_selector(|store: &AppStore| store.services.clone());
    let stats = use_selector(DashboardStats::from_store);

    use_effect_with_deps(
        move |_| {
            if dispatch.get().health.is_idle() {
                dispatch.reduce_mut(|store| {
                    store.begin_health_check();
                });
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = client.fetch_health().await;
                    dispatch.reduce_mut(|store| {
                        store.apply_health_outcome(outcome);
                    });
                });
            }
            || ()
        },
        (),
    );

    html! {
        <DashboardPage
            services={(*services).clone()}
            stats={*stats}
            year={current_year()}
        />
    }
}

/// Mount the dashboard into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<KaliDockerApp>::with_root(root).render();
    } else {
        yew::Renderer::<KaliDockerApp>::new().render();
    }
}

//! Main Leptos application component

use crate::components::{Header, Loading, OrdersView, SharedApi, Toaster};
use crate::settings::Settings;
use crate::state::OrdersViewState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use orderdesk_client::ApiClient;
use tracing::{info, warn};

/// Main application component
///
/// Loads the host's dashboard settings once, then renders the page.
#[component]
pub fn App() -> impl IntoView {
    let defaults = Settings::from_build_env();
    let settings = RwSignal::new(None::<Settings>);

    let client = ApiClient::new(defaults.api_base_url.clone());
    spawn_local(async move {
        let resolved = match client.dashboard_settings().await {
            Ok(dashboard) => {
                info!("Loaded dashboard settings from host");
                defaults.with_dashboard(dashboard)
            }
            Err(e) => {
                warn!(error = %e, "Using built-in dashboard settings");
                defaults
            }
        };
        settings.set(Some(resolved));
    });

    move || match settings.get() {
        Some(settings) => view! { <Page settings /> }.into_any(),
        None => view! { <Loading /> }.into_any(),
    }
}

/// Greeting header, the orders card and the toast stack
#[component]
fn Page(settings: Settings) -> impl IntoView {
    let api: SharedApi = StoredValue::new_local(ApiClient::new(settings.api_base_url));
    let dashboard = settings.dashboard;
    let state = RwSignal::new(OrdersViewState::new(dashboard.per_page));

    view! {
        <div class="min-h-screen bg-gray-50 p-6">
            <div class="mx-auto max-w-7xl space-y-6">
                <Header name=dashboard.greeting_name avatar_url=dashboard.avatar_url />
                <OrdersView state api currency=dashboard.currency />
            </div>
            <Toaster state toast_seconds=dashboard.toast_seconds />
        </div>
    }
}

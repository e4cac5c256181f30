//! CRUD List Frontend App
//!
//! Root component: builds the store and API client and provides them via context.

use leptos::prelude::*;
use reactive_stores::Store;

use items_api::HttpItemApi;

use crate::components::ItemListView;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let api = HttpItemApi::new(config.api_base_url);

    tracing::info!(base_url = api.base_url(), "items service");

    // Provide context to all children
    provide_context(AppContext::new(store, api));

    view! {
        <main class="app-layout">
            <ItemListView />
        </main>
    }
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use items_api::{sync, HttpItemApi, SyncRequest};

use crate::store::{store_apply, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Items and form state
    pub store: AppStore,
    /// REST client for the items service
    api: StoredValue<HttpItemApi, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpItemApi) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    /// Send a request and apply the confirmation once the server accepts it.
    ///
    /// Failures are logged and otherwise dropped; local state is left as it was.
    pub fn dispatch(&self, request: SyncRequest) {
        let api = self.api.get_value();
        let store = self.store;
        let label = request.to_string();

        spawn_local(async move {
            match sync::execute(&api, request).await {
                Ok(confirmation) => store_apply(&store, confirmation),
                Err(err) => tracing::error!(error = %err, "{} failed", label),
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use items_api::{Confirmation, FormState, Item, ItemListState, SyncRequest};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached items plus the add/edit form
    pub list: ItemListState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the displayed items (tracked)
pub fn store_items(store: &AppStore) -> Vec<Item> {
    store.list().read().items.clone()
}

pub fn store_is_empty(store: &AppStore) -> bool {
    store.list().read().is_empty()
}

/// Snapshot of the form (tracked)
pub fn store_form(store: &AppStore) -> FormState {
    store.list().read().form.clone()
}

pub fn store_set_text(store: &AppStore, text: String) {
    store.list().write().set_text(text);
}

pub fn store_begin_edit(store: &AppStore, item: &Item) {
    store.list().write().begin_edit(item);
}

/// Request the action button would send right now, if enabled
pub fn store_submit_request(store: &AppStore) -> Option<SyncRequest> {
    store.list().read_untracked().submit_request()
}

pub fn store_delete_request(store: &AppStore, item: &Item) -> SyncRequest {
    store.list().read_untracked().delete_request(&item.id)
}

/// Apply a server confirmation
pub fn store_apply(store: &AppStore, confirmation: Confirmation) {
    store.list().write().apply(confirmation);
}

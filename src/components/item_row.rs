//! Item Row Component
//!
//! One list entry with inline Edit/Delete.

use leptos::prelude::*;

use items_api::Item;

use crate::context::use_app_context;
use crate::store::{store_begin_edit, store_delete_request, store_form};

/// A single item row
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = item.id.clone();
    let is_editing = move || store_form(&store).editing_id.as_ref() == Some(&id);

    let edit_item = item.clone();
    let delete_item = item.clone();

    view! {
        <li class=move || if is_editing() { "item-row editing" } else { "item-row" }>
            <span class="item-name">{item.name}</span>
            <div class="item-actions">
                <button class="edit-btn" on:click=move |_| store_begin_edit(&store, &edit_item)>
                    "Edit"
                </button>
                // No confirmation step
                <button
                    class="delete-btn"
                    on:click=move |_| ctx.dispatch(store_delete_request(&store, &delete_item))
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

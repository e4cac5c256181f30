//! Item List View Component
//!
//! Heading, form and the rows. Loads the collection once on mount.

use leptos::prelude::*;

use items_api::SyncRequest;

use crate::components::{ItemForm, ItemRow};
use crate::context::use_app_context;
use crate::store::{store_is_empty, store_items};

#[component]
pub fn ItemListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Load items on mount
    Effect::new(move |_| {
        tracing::debug!("loading items");
        ctx.dispatch(SyncRequest::LoadAll);
    });

    view! {
        <div class="item-list-view">
            <h1>"CRUD List"</h1>

            <ItemForm />

            <ul class="item-list">
                <Show when=move || store_is_empty(&store)>
                    <li class="empty-list">"No items added yet."</li>
                </Show>
                <For
                    each=move || store_items(&store)
                    // name is part of the key so a rename re-renders the row
                    key=|item| (item.id.clone(), item.name.clone())
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
        </div>
    }
}

//! Item Form Component
//!
//! Single text input shared by add and edit.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_form, store_set_text, store_submit_request};

/// Add/Update form. The button is disabled while the text is blank.
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let can_submit = move || store_form(&store).can_submit();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match store_submit_request(&store) {
            Some(request) => ctx.dispatch(request),
            None => tracing::debug!("submit ignored: text is empty"),
        }
    };

    view! {
        <form class="item-form" on:submit=submit>
            <input
                type="text"
                class="item-input"
                placeholder="Enter item"
                prop:value=move || store_form(&store).text
                on:input=move |ev| store_set_text(&store, event_target_value(&ev))
            />
            <button
                type="submit"
                class=move || if can_submit() { "action-btn" } else { "action-btn disabled" }
                disabled=move || !can_submit()
            >
                {move || store_form(&store).mode().action_label()}
            </button>
        </form>
    }
}

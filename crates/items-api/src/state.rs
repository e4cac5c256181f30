//! Item List State
//!
//! The displayed collection and the add/edit form, mutated only by
//! applying server confirmations.

use crate::domain::{FormState, Item, ItemId};
use crate::sync::{Confirmation, SyncRequest};

/// Local view state: cached items plus the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemListState {
    /// Items in server order
    pub items: Vec<Item>,
    pub form: FormState,
}

impl ItemListState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.form.set_text(text);
    }

    pub fn begin_edit(&mut self, item: &Item) {
        self.form.begin_edit(item);
    }

    /// Request for the action button, or None while it is disabled.
    ///
    /// Creates send the trimmed text; updates send the text as typed.
    pub fn submit_request(&self) -> Option<SyncRequest> {
        if !self.form.can_submit() {
            return None;
        }
        let request = match &self.form.editing_id {
            Some(id) => SyncRequest::Update {
                id: id.clone(),
                name: self.form.text.clone(),
            },
            None => SyncRequest::Create {
                name: self.form.text.trim().to_string(),
            },
        };
        Some(request)
    }

    pub fn delete_request(&self, id: &ItemId) -> SyncRequest {
        SyncRequest::Delete { id: id.clone() }
    }

    /// Fold a server confirmation into local state.
    pub fn apply(&mut self, confirmation: Confirmation) {
        match confirmation {
            Confirmation::Loaded(items) => {
                self.items = items;
            }
            Confirmation::Created(item) => {
                self.items.push(item);
                self.form.reset();
            }
            Confirmation::Updated { id, name } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.name = name;
                }
                self.form.reset();
            }
            Confirmation::Deleted(id) => {
                self.items.retain(|item| item.id != id);
            }
        }
    }
}

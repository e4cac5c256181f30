//! Form State
//!
//! The single text input and whether it targets a new or an existing item.

use super::item::{Item, ItemId};

/// Which request a submit will produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    Editing,
}

impl FormMode {
    /// Label for the action button
    pub fn action_label(&self) -> &'static str {
        match self {
            FormMode::Adding => "Add",
            FormMode::Editing => "Update",
        }
    }
}

/// Transient add/edit form owned by the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Item being edited (None = adding)
    pub editing_id: Option<ItemId>,
    /// Current input text, untrimmed
    pub text: String,
}

impl FormState {
    pub fn mode(&self) -> FormMode {
        if self.editing_id.is_some() {
            FormMode::Editing
        } else {
            FormMode::Adding
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Whitespace-only text disables the action in both modes.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Load an item into the form and switch to editing it.
    pub fn begin_edit(&mut self, item: &Item) {
        self.editing_id = Some(item.id.clone());
        self.text = item.name.clone();
    }

    /// Back to an empty Adding form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

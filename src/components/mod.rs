//! UI Components
//!
//! Leptos components for the item list page.

mod item_form;
mod item_list_view;
mod item_row;

pub use item_form::ItemForm;
pub use item_list_view::ItemListView;
pub use item_row::ItemRow;

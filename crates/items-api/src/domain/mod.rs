//! Domain Layer
//!
//! Contains the item entity and the transient form state.
//! This layer has NO external dependencies (except serde for serialization).

mod form;
mod item;

pub use form::{FormMode, FormState};
pub use item::{Item, ItemId};

//! Items API
//!
//! Layered the same way on both sides of the wire:
//! - domain: Item, identifiers and the add/edit form state machine
//! - state: the locally cached collection plus form
//! - sync: request/confirmation pairs, the only path that mutates state
//! - api: the `ItemApi` seam and its reqwest implementation

pub mod api;
pub mod domain;
pub mod error;
pub mod state;
pub mod sync;

#[cfg(test)]
mod tests;

pub use api::{HttpItemApi, ItemApi, DEFAULT_BASE_URL};
pub use domain::{FormMode, FormState, Item, ItemId};
pub use error::{ApiError, ApiResult};
pub use state::ItemListState;
pub use sync::{execute, Confirmation, SyncRequest};

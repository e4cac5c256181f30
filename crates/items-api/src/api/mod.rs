//! API Layer - Core Trait
//!
//! Defines the abstract interface to the remote `items` collection.
//! `HttpItemApi` talks to the real service; tests plug in fakes.

mod http;

use async_trait::async_trait;

use crate::domain::{Item, ItemId};
use crate::error::ApiResult;

pub use http::{HttpItemApi, DEFAULT_BASE_URL};

/// CRUD access to the remote item collection
///
/// Futures are not `Send`: in the browser they wrap JS promises and
/// are driven by `spawn_local`.
#[async_trait(?Send)]
pub trait ItemApi {
    /// Fetch every item, in server order
    async fn list(&self) -> ApiResult<Vec<Item>>;

    /// Create an item, returning it with its assigned id
    async fn create(&self, name: &str) -> ApiResult<Item>;

    /// Rename an item; the response body is ignored
    async fn update(&self, id: &ItemId, name: &str) -> ApiResult<()>;

    /// Delete an item; the response body is ignored
    async fn delete(&self, id: &ItemId) -> ApiResult<()>;
}

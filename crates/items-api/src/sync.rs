//! Synchronization Boundary
//!
//! Local state is a read-through copy of the server. Every change goes
//! out as a `SyncRequest` and only comes back in as a `Confirmation`
//! once the server has accepted it.

use std::fmt;

use crate::api::ItemApi;
use crate::domain::{Item, ItemId};
use crate::error::ApiResult;

/// One request against the items service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncRequest {
    LoadAll,
    Create { name: String },
    Update { id: ItemId, name: String },
    Delete { id: ItemId },
}

impl fmt::Display for SyncRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncRequest::LoadAll => f.write_str("load items"),
            SyncRequest::Create { name } => write!(f, "create item {:?}", name),
            SyncRequest::Update { id, name } => write!(f, "update item {} to {:?}", id, name),
            SyncRequest::Delete { id } => write!(f, "delete item {}", id),
        }
    }
}

/// What the server confirmed, ready to be applied locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Loaded(Vec<Item>),
    Created(Item),
    Updated { id: ItemId, name: String },
    Deleted(ItemId),
}

/// Run a request against the API.
///
/// Updates and deletes ignore the response body, so their confirmation
/// echoes what was sent.
pub async fn execute<A>(api: &A, request: SyncRequest) -> ApiResult<Confirmation>
where
    A: ItemApi + ?Sized,
{
    match request {
        SyncRequest::LoadAll => {
            let items = api.list().await?;
            tracing::info!(count = items.len(), "loaded items");
            Ok(Confirmation::Loaded(items))
        }
        SyncRequest::Create { name } => {
            let item = api.create(&name).await?;
            tracing::info!(id = %item.id, "created item");
            Ok(Confirmation::Created(item))
        }
        SyncRequest::Update { id, name } => {
            api.update(&id, &name).await?;
            tracing::info!(%id, "updated item");
            Ok(Confirmation::Updated { id, name })
        }
        SyncRequest::Delete { id } => {
            api.delete(&id).await?;
            tracing::info!(%id, "deleted item");
            Ok(Confirmation::Deleted(id))
        }
    }
}

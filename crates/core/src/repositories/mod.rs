//! Repository modules.
//!
//! One repository per table. Each holds a clone of the shared pool and exposes the generic
//! find/save/delete operations of [`Repository`]; HTTP handlers call them directly.

use crate::CoreResult;
use async_trait::async_trait;

pub mod clinical_data;
pub mod patient;

/// Generic persistence operations over one entity type.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Stored record, including its generated identifier.
    type Entity: Send + Sync;
    /// Input for a new record; the store assigns the identifier.
    type NewEntity: Send;

    /// Every record, ordered by identifier.
    async fn find_all(&self) -> CoreResult<Vec<Self::Entity>>;

    async fn find_by_id(&self, id: i32) -> CoreResult<Option<Self::Entity>>;

    async fn insert(&self, new: Self::NewEntity) -> CoreResult<Self::Entity>;

    /// Overwrite the mutable columns of an existing record and return the stored result.
    async fn save(&self, entity: &Self::Entity) -> CoreResult<Self::Entity>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: i32) -> CoreResult<bool>;
}

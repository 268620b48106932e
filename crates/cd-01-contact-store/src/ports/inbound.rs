//! # Inbound Port - ContactStoreApi
//!
//! The contract the coordinator and search controller consume. Every call is
//! a suspension point; implementations may add latency.

use async_trait::async_trait;
use shared_types::{Contact, ContactId, ContactPatch, StoreError};

/// Primary API of a contact store.
///
/// # Errors
///
/// - `get`, `update`, `delete` fail with `StoreError::NotFound` for an
///   unknown id.
/// - Any call may fail with `StoreError::Unavailable`.
///
/// No call retries internally.
#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// All contacts for an absent/empty query, otherwise those whose first or
    /// last name contains the query case-insensitively. Insertion order.
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError>;

    /// A single contact.
    async fn get(&self, id: &ContactId) -> Result<Contact, StoreError>;

    /// A freshly generated blank contact.
    async fn create(&self) -> Result<Contact, StoreError>;

    /// Field-level merge. An empty patch returns the unchanged record.
    async fn update(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact, StoreError>;

    /// Irreversible removal.
    async fn delete(&self, id: &ContactId) -> Result<(), StoreError>;
}

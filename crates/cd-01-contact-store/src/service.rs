//! In-memory contact store service.
//!
//! Implements `ContactStoreApi` over a `ContactBook` behind a single
//! `tokio::sync::RwLock`, so every operation is atomic with respect to the
//! others. Not durable: state lives for the lifetime of the instance.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{Contact, ContactId, ContactPatch, StoreError};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::ContactBook;
use crate::ports::{ContactStoreApi, IdGenerator, SystemTimeSource, TimeSource, UuidGenerator};

/// Attempts at drawing an unissued id before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// Contact store backed by process memory.
pub struct InMemoryContactStore {
    book: RwLock<ContactBook>,
    clock: Arc<dyn TimeSource>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryContactStore {
    /// Empty store using the system clock and random ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(Arc::new(SystemTimeSource), Arc::new(UuidGenerator))
    }

    /// Empty store with injected clock and id source.
    #[must_use]
    pub fn with_sources(clock: Arc<dyn TimeSource>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            book: RwLock::new(ContactBook::new()),
            clock,
            ids,
        }
    }

    /// Insert one contact per patch, in order.
    pub fn seeded(mut self, roster: Vec<ContactPatch>) -> Result<Self, StoreError> {
        let count = roster.len();
        let book = self.book.get_mut();
        for patch in roster {
            let mut contact = fresh_contact(book, self.clock.as_ref(), self.ids.as_ref())?;
            contact.apply(&patch);
            book.insert(contact)?;
        }
        info!(count, "Contact store seeded");
        Ok(self)
    }

    /// Number of live contacts.
    pub async fn len(&self) -> usize {
        self.book.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.book.read().await.is_empty()
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_contact(
    book: &ContactBook,
    clock: &dyn TimeSource,
    ids: &dyn IdGenerator,
) -> Result<Contact, StoreError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if !book.is_issued(&id) {
            return Ok(Contact::empty(id, clock.now()));
        }
        debug!(id = %id, "Id already issued, drawing another");
    }
    Err(StoreError::Unavailable(
        "could not allocate an unissued contact id".to_string(),
    ))
}

#[async_trait]
impl ContactStoreApi for InMemoryContactStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        let contacts = self.book.read().await.list(query);
        debug!(query = ?query, count = contacts.len(), "Listed contacts");
        Ok(contacts)
    }

    async fn get(&self, id: &ContactId) -> Result<Contact, StoreError> {
        self.book
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })
    }

    async fn create(&self) -> Result<Contact, StoreError> {
        let mut book = self.book.write().await;
        let contact = fresh_contact(&book, self.clock.as_ref(), self.ids.as_ref())?;
        let contact = book.insert(contact)?;
        info!(id = %contact.id, "Contact created");
        Ok(contact)
    }

    async fn update(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact, StoreError> {
        let contact = self.book.write().await.update(id, &patch)?;
        debug!(id = %id, ?patch, "Contact updated");
        Ok(contact)
    }

    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        self.book.write().await.remove(id)?;
        info!(id = %id, "Contact deleted");
        Ok(())
    }
}

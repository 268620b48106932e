//! Ordered contact records.
//!
//! Records are keyed by a monotonically increasing insertion sequence, so
//! iterating the map yields insertion order. A separate index maps ids to
//! sequence numbers, and every id ever inserted is remembered so it can never
//! be issued again.

use std::collections::{BTreeMap, HashMap, HashSet};

use shared_types::{Contact, ContactId, ContactPatch, StoreError};

/// In-memory record set.
#[derive(Debug, Default)]
pub struct ContactBook {
    /// Insertion sequence -> record.
    records: BTreeMap<u64, Contact>,
    /// Id -> insertion sequence, live records only.
    index: HashMap<ContactId, u64>,
    /// Every id ever inserted, including deleted ones.
    issued: HashSet<ContactId>,
    /// Next insertion sequence.
    next_seq: u64,
}

impl ContactBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `id` has ever been handed out by this book.
    #[must_use]
    pub fn is_issued(&self, id: &ContactId) -> bool {
        self.issued.contains(id)
    }

    /// Insert a new record at the end of the ordering.
    ///
    /// Fails if the id was issued before; ids are never reused.
    pub fn insert(&mut self, contact: Contact) -> Result<Contact, StoreError> {
        if !self.issued.insert(contact.id.clone()) {
            return Err(StoreError::Unavailable(format!(
                "contact id {} was already issued",
                contact.id
            )));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(contact.id.clone(), seq);
        self.records.insert(seq, contact.clone());
        Ok(contact)
    }

    #[must_use]
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.index.get(id).and_then(|seq| self.records.get(seq))
    }

    /// Contacts matching `query`, in insertion order.
    ///
    /// An absent or empty query returns everything. Otherwise a contact
    /// matches when the query is a case-insensitive substring of its first or
    /// last name.
    #[must_use]
    pub fn list(&self, query: Option<&str>) -> Vec<Contact> {
        match query.filter(|q| !q.is_empty()) {
            None => self.records.values().cloned().collect(),
            Some(query) => {
                let needle = query.to_lowercase();
                self.records
                    .values()
                    .filter(|contact| contact.matches_lowercase(&needle))
                    .cloned()
                    .collect()
            }
        }
    }

    /// Merge `patch` into the record and return the result.
    pub fn update(&mut self, id: &ContactId, patch: &ContactPatch) -> Result<Contact, StoreError> {
        let contact = self
            .index
            .get(id)
            .and_then(|seq| self.records.get_mut(seq))
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;

        contact.apply(patch);
        Ok(contact.clone())
    }

    /// Remove the record. Its id stays issued.
    pub fn remove(&mut self, id: &ContactId) -> Result<Contact, StoreError> {
        let seq = self
            .index
            .remove(id)
            .ok_or_else(|| StoreError::NotFound { id: id.clone() })?;

        self.records
            .remove(&seq)
            .ok_or_else(|| StoreError::Unavailable(format!("index out of sync for {id}")))
    }
}

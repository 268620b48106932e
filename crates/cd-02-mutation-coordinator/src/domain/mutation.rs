//! Mutation requests and settlements.
//!
//! A `MutationRequest` is what the presentation layer submits: an intent plus
//! the raw contact id taken from the route. Validation turns it into a
//! `Mutation`, which is the payload carried through every phase.

use serde::Serialize;
use shared_bus::DirectoryEvent;
use shared_types::{Contact, ContactId, ContactPatch, Location, ValidationError};

/// What the submitter wants to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationIntent {
    Create,
    Update(ContactPatch),
    Delete,
}

/// Raw submission from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub intent: MutationIntent,
    /// Route parameter; required for update and delete.
    pub contact_id: Option<String>,
}

impl MutationRequest {
    #[must_use]
    pub fn create() -> Self {
        Self {
            intent: MutationIntent::Create,
            contact_id: None,
        }
    }

    #[must_use]
    pub fn update(id: impl Into<String>, patch: ContactPatch) -> Self {
        Self {
            intent: MutationIntent::Update(patch),
            contact_id: Some(id.into()),
        }
    }

    /// The favorite toggle: an update carrying only `favorite`.
    #[must_use]
    pub fn favorite(id: impl Into<String>, favorite: bool) -> Self {
        Self::update(id, ContactPatch::favorite(favorite))
    }

    #[must_use]
    pub fn delete(id: impl Into<String>) -> Self {
        Self {
            intent: MutationIntent::Delete,
            contact_id: Some(id.into()),
        }
    }

    /// Check the request before anything is dispatched.
    pub fn validate(self) -> Result<Mutation, ValidationError> {
        match self.intent {
            MutationIntent::Create => Ok(Mutation::Create),
            MutationIntent::Update(patch) => Ok(Mutation::Update {
                id: ContactId::parse(self.contact_id.as_deref())?,
                patch,
            }),
            MutationIntent::Delete => Ok(Mutation::Delete {
                id: ContactId::parse(self.contact_id.as_deref())?,
            }),
        }
    }
}

/// A validated write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mutation {
    Create,
    Update { id: ContactId, patch: ContactPatch },
    Delete { id: ContactId },
}

impl Mutation {
    /// Contact targeted by the mutation. `None` for create.
    #[must_use]
    pub fn target(&self) -> Option<&ContactId> {
        match self {
            Self::Create => None,
            Self::Update { id, .. } | Self::Delete { id } => Some(id),
        }
    }

    /// Patch submitted for `id`, if this mutation updates it.
    #[must_use]
    pub fn patch_for(&self, id: &ContactId) -> Option<&ContactPatch> {
        match self {
            Self::Update { id: target, patch } if target == id => Some(patch),
            _ => None,
        }
    }

    /// Favorite value submitted for `id`, if any.
    #[must_use]
    pub fn favorite_for(&self, id: &ContactId) -> Option<bool> {
        self.patch_for(id).and_then(|patch| patch.favorite)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Successful Settle outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Settled {
    Created(Contact),
    Updated(Contact),
    Deleted(ContactId),
}

impl Settled {
    /// Where a full-page submission lands after settling.
    #[must_use]
    pub fn redirect(&self) -> Location {
        match self {
            Self::Created(contact) => Location::edit(contact.id.clone()),
            Self::Updated(contact) => Location::contact(contact.id.clone()),
            Self::Deleted(_) => Location::index(),
        }
    }

    #[must_use]
    pub fn event(&self) -> DirectoryEvent {
        match self {
            Self::Created(contact) => DirectoryEvent::ContactCreated {
                contact: contact.clone(),
            },
            Self::Updated(contact) => DirectoryEvent::ContactUpdated {
                contact: contact.clone(),
            },
            Self::Deleted(id) => DirectoryEvent::ContactDeleted { id: id.clone() },
        }
    }
}

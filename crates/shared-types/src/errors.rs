//! # Error Types
//!
//! Defines the error taxonomy shared across the directory crates.

use thiserror::Error;

use crate::entities::ContactId;

/// A request was malformed and must not reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The route or payload carried no contact id.
    #[error("Missing contact id")]
    MissingContactId,

    /// The submitted form named a field the contact does not have.
    #[error("Unknown contact field: {0}")]
    UnknownField(String),

    /// A field value could not be interpreted.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A URL did not map to any known route.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Errors surfaced by a contact store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Target id absent from the store. Recoverable.
    #[error("Contact not found: {id}")]
    NotFound { id: ContactId },

    /// Underlying persistence failure.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

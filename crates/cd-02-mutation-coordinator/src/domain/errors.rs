//! Mutation error types.

use shared_types::{StoreError, ValidationError};
use thiserror::Error;

/// Why a mutation did not produce a settled record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// Rejected before reaching the store. No phase ran.
    #[error("Invalid mutation request: {0}")]
    Validation(#[from] ValidationError),

    /// The store rejected the mutation during Settle. Revalidation still ran.
    #[error("Mutation failed: {0}")]
    Store(#[from] StoreError),
}

impl MutationError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(err) if err.is_not_found())
    }
}

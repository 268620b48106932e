//! Search error types.

use shared_types::{StoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The latest search failed to read from the store.
    #[error("Search failed: {0}")]
    Store(#[from] StoreError),

    /// A history entry could not be parsed back into a location.
    #[error("Invalid history entry: {0}")]
    History(#[from] ValidationError),
}

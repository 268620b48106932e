//! # Domain Layer - Search
//!
//! - `state`: query parameter, input text and request sequencing
//! - `errors`: SearchError

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;

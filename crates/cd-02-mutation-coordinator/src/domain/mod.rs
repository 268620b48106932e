//! # Domain Layer - Mutation Coordinator
//!
//! - `mutation`: requests, validated mutations and their settlements
//! - `request_state`: the Idle/Submitting/Loading signal and its payload
//! - `optimistic`: display-value resolution while a request is in flight
//! - `view`: the rendered view state produced by loaders
//! - `errors`: MutationError

pub mod errors;
pub mod mutation;
pub mod optimistic;
pub mod request_state;
pub mod view;

pub use errors::*;
pub use mutation::*;
pub use optimistic::*;
pub use request_state::*;
pub use view::*;

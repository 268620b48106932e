//! # Search
//!
//! Search-as-you-type over the contact list.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | First search pushes a history entry, later ones replace it | `domain/state.rs` - `SearchState::issue` |
//! | INVARIANT-2 | Only the most recently issued search updates the list | `domain/state.rs` - `SearchState::accept` |
//! | INVARIANT-3 | Input text follows external query changes | `service.rs` - `SearchController::resync` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/ - MemoryHistory (NavigationHistory + back/forward)   │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  service.rs - SearchController                                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/ - SearchState, SearchTicket, SearchError               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod adapters;
pub mod domain;
pub mod service;

pub use adapters::MemoryHistory;
pub use domain::{HistoryMode, SearchError, SearchState, SearchTicket};
pub use service::{SearchController, SearchResolution};

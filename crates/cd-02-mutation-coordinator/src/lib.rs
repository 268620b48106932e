//! # Mutation Coordinator
//!
//! Every write to the contact store passes through Submit, Settle and
//! Revalidate, in that order. The request-state signal exposes which phase a
//! request is in, and `OptimisticStateResolver` turns that signal into the
//! value the user should see.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Settle starts after Submit; Revalidate after Settle | `service/coordinator.rs` - `Inner::execute` |
//! | INVARIANT-2 | Revalidation runs whether Settle succeeded or failed | `service/coordinator.rs` - `Inner::execute` |
//! | INVARIANT-3 | The last revalidation to complete is what is shown | `service/screen.rs` - unconditional `show` |
//! | INVARIANT-4 | Invalid requests never reach the store | `domain/mutation.rs` - `MutationRequest::validate` |
//! | INVARIANT-5 | Redirects happen only for successful full-page submissions | `service/coordinator.rs` - `Surface` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  service/ - MutationCoordinator, Fetcher, Screen, loaders       │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/outbound.rs - NavigationHistory                          │
//! │  cd_01_contact_store::ContactStoreApi (consumed)                │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/ - MutationRequest, RequestState, ViewState,            │
//! │            OptimisticStateResolver                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    Detail, Mutation, MutationError, MutationIntent, MutationRequest, OptimisticStateResolver,
    RequestId, RequestState, Settled, Submission, ViewState,
};
pub use ports::NavigationHistory;
pub use service::{
    load_view, Fetcher, MutationCoordinator, MutationReport, NavigationOutcome, Screen,
};

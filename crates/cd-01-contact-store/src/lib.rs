//! # Contact Store
//!
//! Owns the set of contacts and exposes list/get/create/update/delete.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Ids are never reissued, even after delete | `domain/book.rs` - `issued` set |
//! | INVARIANT-2 | `update` is a field-level merge | `shared_types::Contact::apply` |
//! | INVARIANT-3 | `id` and `created_at` are immutable | `ContactPatch` has no such fields |
//! | INVARIANT-4 | `list` is in insertion order | `domain/book.rs` - sequence-keyed `BTreeMap` |
//! | INVARIANT-5 | Operations are atomic w.r.t. each other | `service.rs` - single `RwLock` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - SimulatedLatency wrapper                           │
//! │  test_utils - gated/faulty stores, fixed clocks (test-utils)    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - ContactStoreApi trait                      │
//! │  ports/outbound.rs - TimeSource, IdGenerator traits             │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/book.rs      - ContactBook (ordered records + index)    │
//! │  domain/operation.rs - StoreOp descriptors                      │
//! │  domain/seed.rs      - sample roster                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is in-memory only. Nothing survives a process restart; a
//! seeded store is rebuilt from the sample roster every time it is created.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapters::{DelayPolicy, RandomDelay, SimulatedLatency};
pub use domain::{sample_roster, ContactBook, OpKind, StoreOp};
pub use ports::{ContactStoreApi, IdGenerator, SystemTimeSource, TimeSource, UuidGenerator};
pub use service::InMemoryContactStore;

//! # Contact Directory Test Suite
//!
//! Cross-crate flows, one module per area:
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs                  # Seeded stores, recording history
//! └── integration/
//!     ├── store_properties.rs      # list/get/create/update/delete contracts
//!     ├── mutation_flows.rs        # Submit → Settle → Revalidate, optimistic display
//!     ├── search_flows.rs          # History policy, supersession, resync
//!     └── runtime_flows.rs         # Config and command sessions
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cd-tests
//! cargo test -p cd-tests integration::search_flows
//! ```

pub mod fixtures;
pub mod integration;

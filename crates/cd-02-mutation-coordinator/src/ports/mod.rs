//! Ports Layer
//!
//! - Driven ports (outbound): `NavigationHistory`
//!
//! The store port is `cd_01_contact_store::ContactStoreApi`; the coordinator
//! consumes it directly.

pub mod outbound;

pub use outbound::NavigationHistory;

#[cfg(test)]
pub use outbound::RecordingHistory;

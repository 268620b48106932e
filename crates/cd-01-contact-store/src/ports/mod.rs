//! Ports Layer
//!
//! - Driving port (inbound): `ContactStoreApi`
//! - Driven ports (outbound): `TimeSource`, `IdGenerator`

pub mod inbound;
pub mod outbound;

pub use inbound::ContactStoreApi;
pub use outbound::{IdGenerator, SystemTimeSource, TimeSource, UuidGenerator};

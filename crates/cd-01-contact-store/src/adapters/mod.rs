//! Adapters Layer
//!
//! Decorators over any `ContactStoreApi`:
//!
//! - `SimulatedLatency`: delays each call according to a `DelayPolicy`

pub mod latency;

pub use latency::{DelayPolicy, RandomDelay, SimulatedLatency};

//! # Shared Types Crate
//!
//! This crate contains the contact entities, navigation locations and the
//! error taxonomy used by every directory crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Opaque Identity**: `ContactId` is generated by the store and never
//!   reissued; callers treat it as an opaque string.
//! - **Field-Level Merge**: Writes are expressed as a `ContactPatch`, never as
//!   a replacement record.

pub mod entities;
pub mod errors;
pub mod location;

pub use entities::*;
pub use errors::*;
pub use location::{Location, Route};

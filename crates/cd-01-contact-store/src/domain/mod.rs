//! # Domain Layer - Contact Store
//!
//! Pure data structures, no I/O and no locking.
//!
//! - `book`: ContactBook, the ordered record set with its id index
//! - `operation`: StoreOp, a descriptor of a single store call
//! - `seed`: the sample roster used to seed a fresh store

pub mod book;
pub mod operation;
pub mod seed;

pub use book::*;
pub use operation::*;
pub use seed::*;

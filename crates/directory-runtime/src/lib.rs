//! # Directory Runtime Library
//!
//! Exposes the runtime's modules for testing. The entry point is `main.rs`.
//!
//! - `container/` - configuration and service wiring
//! - `session/` - command parsing and execution against the wired services

pub mod container;
pub mod session;

pub use container::{ConfigError, DirectoryConfig, DirectoryContainer, LogConfig, StoreConfig};
pub use session::{Command, CommandError, Output, Session, SessionError};

//! # Service Container
//!
//! Builds every service once, in dependency order:
//!
//! 1. Contact store (seeded, optionally behind simulated latency)
//! 2. Event bus
//! 3. Screen and session history
//! 4. Mutation coordinator and search controller

pub mod config;
pub mod services;

pub use config::{ConfigError, DirectoryConfig, LogConfig, StoreConfig};
pub use services::DirectoryContainer;

//! # Shared Bus - Event Bus for Directory Events
//!
//! Carries notifications between the directory crates without direct calls.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────────┐
//! │ Coordinator  │                    │ SearchController │
//! │ MemoryHistory│    publish()       │ Runtime logger   │
//! │              │ ──────┐            │                  │
//! └──────────────┘       │            └──────────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! ## Topics
//!
//! - `Contacts`: a mutation settled successfully (created/updated/deleted)
//! - `Navigation`: the history moved because of back/forward

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{DirectoryEvent, EventFilter, EventTopic};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

//! Outbound (Driven) ports for the contact store.

use shared_types::{ContactId, Timestamp};

/// Time source for `created_at` stamps.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Source of candidate contact ids.
///
/// The store rejects candidates it has issued before and asks again.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ContactId;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ContactId {
        ContactId::generate()
    }
}

//! Shared fixtures.

use std::sync::Arc;

use cd_01_contact_store::test_utils::{FixedTimeSource, SequentialIds};
use cd_01_contact_store::{sample_roster, InMemoryContactStore};
use cd_02_mutation_coordinator::NavigationHistory;
use parking_lot::Mutex;
use shared_types::ContactPatch;

/// Creation time stamped on every fixture contact.
pub const CREATED_AT: u64 = 1_700_000_000_000;

/// Store seeded with the sample roster; ids are `c1`..`c12`, new ones continue from `c13`.
pub fn roster_store() -> InMemoryContactStore {
    store_with(sample_roster())
}

/// Store seeded with the given patches; ids are `c1`, `c2`, ...
pub fn store_with(roster: Vec<ContactPatch>) -> InMemoryContactStore {
    InMemoryContactStore::with_sources(
        Arc::new(FixedTimeSource::new(CREATED_AT)),
        Arc::new(SequentialIds::new("c")),
    )
    .seeded(roster)
    .unwrap_or_else(|err| panic!("seeding failed: {err}"))
}

/// Person patch with a first and last name.
pub fn person(first: &str, last: &str) -> ContactPatch {
    ContactPatch::default().with_first(first).with_last(last)
}

/// One recorded history call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCall {
    Push(String),
    Replace(String),
}

/// History that only records calls.
#[derive(Debug, Default)]
pub struct RecordingHistory {
    calls: Mutex<Vec<HistoryCall>>,
}

impl RecordingHistory {
    pub fn calls(&self) -> Vec<HistoryCall> {
        self.calls.lock().clone()
    }

    pub fn push_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HistoryCall::Push(_)))
            .count()
    }

    pub fn replace_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HistoryCall::Replace(_)))
            .count()
    }
}

impl NavigationHistory for RecordingHistory {
    fn push(&self, href: &str) {
        self.calls.lock().push(HistoryCall::Push(href.to_string()));
    }

    fn replace(&self, href: &str) {
        self.calls.lock().push(HistoryCall::Replace(href.to_string()));
    }
}

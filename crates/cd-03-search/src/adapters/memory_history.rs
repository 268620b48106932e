//! In-memory session history.

use std::sync::Arc;

use cd_02_mutation_coordinator::NavigationHistory;
use parking_lot::Mutex;
use shared_bus::{DirectoryEvent, EventPublisher};
use shared_types::Location;
use tracing::debug;

use crate::domain::SearchError;

#[derive(Debug)]
struct Entries {
    stack: Vec<String>,
    index: usize,
}

/// Stack of hrefs with a cursor, like a browser tab.
pub struct MemoryHistory {
    entries: Mutex<Entries>,
    events: Option<Arc<dyn EventPublisher>>,
}

impl MemoryHistory {
    pub fn new(initial: &Location) -> Self {
        Self {
            entries: Mutex::new(Entries {
                stack: vec![initial.href()],
                index: 0,
            }),
            events: None,
        }
    }

    /// History that publishes `HistoryPopped` on back/forward.
    pub fn with_events(initial: &Location, events: Arc<dyn EventPublisher>) -> Self {
        Self {
            events: Some(events),
            ..Self::new(initial)
        }
    }

    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().stack.clone()
    }

    #[must_use]
    pub fn current_href(&self) -> String {
        let entries = self.entries.lock();
        entries.stack[entries.index].clone()
    }

    pub fn current(&self) -> Result<Location, SearchError> {
        Ok(Location::parse(&self.current_href())?)
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.entries.lock().index > 0
    }

    /// Move one entry back. `None` at the first entry.
    pub async fn back(&self) -> Result<Option<Location>, SearchError> {
        self.go(-1).await
    }

    /// Move one entry forward. `None` at the last entry.
    pub async fn forward(&self) -> Result<Option<Location>, SearchError> {
        self.go(1).await
    }

    async fn go(&self, delta: isize) -> Result<Option<Location>, SearchError> {
        let href = {
            let mut entries = self.entries.lock();
            let Some(target) = entries.index.checked_add_signed(delta) else {
                return Ok(None);
            };
            if target >= entries.stack.len() {
                return Ok(None);
            }
            entries.index = target;
            entries.stack[target].clone()
        };

        let location = Location::parse(&href)?;
        debug!(href = %href, "History popped");
        if let Some(events) = &self.events {
            events
                .publish(DirectoryEvent::HistoryPopped {
                    location: location.clone(),
                })
                .await;
        }
        Ok(Some(location))
    }
}

impl NavigationHistory for MemoryHistory {
    fn push(&self, href: &str) {
        let mut entries = self.entries.lock();
        let keep = entries.index + 1;
        entries.stack.truncate(keep);
        entries.stack.push(href.to_string());
        entries.index = keep;
        debug!(href, depth = keep + 1, "History push");
    }

    fn replace(&self, href: &str) {
        let mut entries = self.entries.lock();
        let index = entries.index;
        entries.stack[index] = href.to_string();
        debug!(href, "History replace");
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("entries", &*self.entries.lock())
            .finish()
    }
}

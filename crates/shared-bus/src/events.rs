//! # Directory Events
//!
//! Events published after a mutation settles successfully or the navigation
//! history moves outside of a local edit.

use serde::Serialize;
use shared_types::{Contact, ContactId, Location};

/// Event carried by the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DirectoryEvent {
    /// A blank contact was created.
    ContactCreated { contact: Contact },
    /// A contact was merged with a patch.
    ContactUpdated { contact: Contact },
    /// A contact was removed.
    ContactDeleted { id: ContactId },
    /// Back/forward navigation landed on `location`.
    HistoryPopped { location: Location },
}

impl DirectoryEvent {
    /// Topic this event is published under.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::ContactCreated { .. }
            | Self::ContactUpdated { .. }
            | Self::ContactDeleted { .. } => EventTopic::Contacts,
            Self::HistoryPopped { .. } => EventTopic::Navigation,
        }
    }
}

/// Event topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTopic {
    /// Settled contact mutations.
    Contacts,
    /// History traversal.
    Navigation,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &DirectoryEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}

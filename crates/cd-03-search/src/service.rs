//! # Search Controller
//!
//! Turns input changes into list queries:
//!
//! - the first search while no query is active pushes a history entry; later
//!   ones replace it
//! - only the most recently issued search may update the list, however the
//!   store calls interleave
//! - when the query changes underneath it (back/forward, a plain navigation)
//!   the input text is resynchronized

use std::sync::Arc;

use cd_01_contact_store::ContactStoreApi;
use cd_02_mutation_coordinator::{NavigationHistory, Screen, ViewState};
use parking_lot::Mutex;
use shared_bus::{DirectoryEvent, Subscription};
use shared_types::Location;
use tracing::{debug, info, warn};

use crate::domain::{HistoryMode, SearchError, SearchState};

/// What happened to one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResolution {
    Applied(ViewState),
    /// A newer search or navigation was issued before this one resolved.
    Superseded,
}

pub struct SearchController {
    store: Arc<dyn ContactStoreApi>,
    history: Arc<dyn NavigationHistory>,
    screen: Arc<Screen>,
    state: Mutex<SearchState>,
}

impl SearchController {
    /// Controller in sync with whatever `screen` currently shows.
    pub fn new(
        store: Arc<dyn ContactStoreApi>,
        history: Arc<dyn NavigationHistory>,
        screen: Arc<Screen>,
    ) -> Self {
        let state = SearchState::at(&screen.location());
        Self {
            store,
            history,
            screen,
            state: Mutex::new(state),
        }
    }

    #[must_use]
    pub fn input_text(&self) -> String {
        self.state.lock().input_text().to_string()
    }

    #[must_use]
    pub fn query_param(&self) -> Option<String> {
        self.state.lock().query_param().map(str::to_string)
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.state.lock().is_searching()
    }

    /// Dispatch a search for `text`, exactly as typed.
    pub async fn search(&self, text: &str) -> Result<SearchResolution, SearchError> {
        let ticket = self.state.lock().issue(text);
        let href = ticket.location.href();
        match ticket.mode {
            HistoryMode::Push => self.history.push(&href),
            HistoryMode::Replace => self.history.replace(&href),
        }
        debug!(seq = ticket.seq, query = text, mode = ?ticket.mode, "Search issued");

        let result = self.store.list(Some(text)).await;

        if !self.state.lock().accept(ticket.seq) {
            debug!(seq = ticket.seq, query = text, "Search superseded, result discarded");
            return Ok(SearchResolution::Superseded);
        }

        match result {
            Ok(contacts) => {
                info!(seq = ticket.seq, query = text, results = contacts.len(), "Search applied");
                Ok(SearchResolution::Applied(
                    self.screen.show_contacts(ticket.location, contacts),
                ))
            }
            Err(err) => {
                warn!(seq = ticket.seq, query = text, error = %err, "Search failed");
                self.screen.show_error(ticket.location, err.clone());
                Err(err.into())
            }
        }
    }

    /// Align the input with `location`'s query parameter.
    pub fn resync(&self, location: &Location) {
        self.state.lock().resync(location.query.as_deref());
        debug!(location = %location, "Search input resynchronized");
    }

    /// React to one bus event.
    pub fn on_event(&self, event: &DirectoryEvent) {
        if let DirectoryEvent::HistoryPopped { location } = event {
            self.resync(location);
        }
    }

    /// Resynchronize on every `HistoryPopped` until the bus closes.
    pub async fn follow_history(self: Arc<Self>, mut events: Subscription) {
        while let Some(event) = events.recv().await {
            self.on_event(&event);
        }
        debug!("History subscription closed");
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("state", &*self.state.lock())
            .finish()
    }
}

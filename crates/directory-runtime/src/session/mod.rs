//! # Session
//!
//! Executes commands against a `DirectoryContainer` and renders the result.
//!
//! Page-level commands (`ls`, `open`, `new`, `edit`, `rm`) go through the
//! coordinator's navigation channel, `fav` through a keyed fetcher, and
//! `search` through the search controller. After `back`/`forward`, pending
//! `HistoryPopped` events are drained so the search input follows the
//! restored location before it is loaded.

pub mod command;

pub use command::{Command, CommandError, HELP};

use cd_02_mutation_coordinator::{
    MutationError, MutationReport, MutationRequest, NavigationOutcome, RequestState, ViewState,
};
use cd_03_search::{SearchError, SearchResolution};
use serde::Serialize;
use shared_bus::Subscription;
use shared_types::Location;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::container::DirectoryContainer;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Fetcher task failed: {0}")]
    Task(#[from] JoinError),
}

/// Search box as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    pub input: String,
    pub searching: bool,
}

/// Everything printed after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    pub view: ViewState,
    pub navigation: RequestState,
    pub stale: bool,
    pub search: SearchBox,
    /// Short note about what the command did, when the view alone does not say.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub struct Session {
    container: DirectoryContainer,
    events: Subscription,
}

impl Session {
    pub fn new(container: DirectoryContainer) -> Self {
        let events = container.navigation_events();
        Self { container, events }
    }

    #[must_use]
    pub fn container(&self) -> &DirectoryContainer {
        &self.container
    }

    /// Load the initial location.
    pub async fn start(&mut self) -> Output {
        let location = self.container.screen.location();
        let outcome = self.container.coordinator.restore(location).await;
        self.render(note_for_navigation(&outcome))
    }

    pub async fn execute(&mut self, command: Command) -> Result<Output, SessionError> {
        debug!(?command, "Executing command");
        let note = match command {
            Command::List => self.navigate(Location::index()).await,
            Command::Open(id) => self.navigate(Location::contact(id)).await,
            Command::Search(text) => match self.container.search.search(&text).await? {
                SearchResolution::Applied(_) => None,
                SearchResolution::Superseded => Some("search superseded".to_string()),
            },
            Command::Back => {
                let location = self.container.history.back().await?;
                self.restore(location).await
            }
            Command::Forward => {
                let location = self.container.history.forward().await?;
                self.restore(location).await
            }
            Command::New => self.submit(MutationRequest::create()).await?,
            Command::Edit { id, patch } => {
                self.submit(MutationRequest::update(id.as_str(), patch)).await?
            }
            Command::Remove(id) => self.submit(MutationRequest::delete(id.as_str())).await?,
            Command::Favorite { id, favorite } => {
                let fetcher = self
                    .container
                    .coordinator
                    .fetcher(&format!("favorite:{id}"));
                let report = fetcher
                    .submit(MutationRequest::favorite(id.as_str(), favorite))?
                    .await?;
                note_for_report(&report)
            }
            Command::Help => Some(HELP.to_string()),
            Command::Quit => None,
        };
        Ok(self.render(note))
    }

    async fn navigate(&self, location: Location) -> Option<String> {
        let outcome = self.container.coordinator.navigate(location).await;
        self.sync_search();
        note_for_navigation(&outcome)
    }

    async fn restore(&mut self, location: Option<Location>) -> Option<String> {
        let Some(location) = location else {
            return Some("no history entry in that direction".to_string());
        };
        self.drain_events();
        let outcome = self.container.coordinator.restore(location).await;
        note_for_navigation(&outcome)
    }

    async fn submit(&self, request: MutationRequest) -> Result<Option<String>, SessionError> {
        let report = self.container.coordinator.submit(request).await?;
        self.sync_search();
        Ok(note_for_report(&report))
    }

    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(Some(event)) => self.container.search.on_event(&event),
                Ok(None) => break,
                Err(err) => {
                    warn!(error = %err, "Navigation event stream closed");
                    break;
                }
            }
        }
    }

    fn sync_search(&self) {
        self.container
            .search
            .resync(&self.container.screen.location());
    }

    fn render(&self, note: Option<String>) -> Output {
        let search = &self.container.search;
        Output {
            view: self.container.screen.current(),
            navigation: self.container.coordinator.navigation_state(),
            stale: self.container.coordinator.is_stale(),
            search: SearchBox {
                input: search.input_text(),
                searching: search.is_searching(),
            },
            note,
        }
    }
}

fn note_for_navigation(outcome: &NavigationOutcome) -> Option<String> {
    match outcome {
        NavigationOutcome::Applied(_) => None,
        NavigationOutcome::Superseded => Some("navigation superseded".to_string()),
    }
}

fn note_for_report(report: &MutationReport) -> Option<String> {
    report
        .outcome
        .as_ref()
        .err()
        .map(|err| format!("{} failed: {err}", report.submission.mutation.name()))
}

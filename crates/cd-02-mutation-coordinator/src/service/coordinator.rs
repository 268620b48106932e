//! # Mutation Coordinator
//!
//! Drives every write through three ordered phases:
//!
//! 1. **Submit**: the request is validated and its payload becomes visible
//!    as `RequestState::Submitting`.
//! 2. **Settle**: the store applies the write. Success publishes a contact
//!    event; failure is recorded in the report.
//! 3. **Revalidate**: the target location is re-read, whatever Settle
//!    returned, and the result is shown.
//!
//! Revalidations are never discarded: whichever completes last determines
//! what the screen shows, even if an earlier-submitted mutation finishes
//! after a later one. Only the request-state signal of a channel follows the
//! latest request.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use cd_01_contact_store::ContactStoreApi;
use parking_lot::Mutex;
use shared_bus::EventPublisher;
use shared_types::{Location, StoreError};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::{
    Mutation, MutationError, MutationRequest, RequestId, RequestState, Settled, Submission,
    ViewState,
};
use crate::ports::NavigationHistory;
use crate::service::fetcher::Fetcher;
use crate::service::loader::load_view;
use crate::service::screen::Screen;

/// Result of one mutation after all three phases ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport {
    pub submission: Submission,
    /// Settle outcome.
    pub outcome: Result<Settled, StoreError>,
    /// Location that was revalidated.
    pub location: Location,
    /// View shown when this mutation's revalidation completed.
    pub view: ViewState,
}

impl MutationReport {
    pub fn into_result(self) -> Result<Settled, MutationError> {
        self.outcome.map_err(MutationError::from)
    }
}

/// Whether a navigation's load made it to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Applied(ViewState),
    /// A newer navigation or submission started before this load finished.
    Superseded,
}

impl NavigationOutcome {
    #[must_use]
    pub fn view(&self) -> Option<&ViewState> {
        match self {
            Self::Applied(view) => Some(view),
            Self::Superseded => None,
        }
    }
}

/// Where a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Surface {
    /// Full-page form: follows the redirect on success.
    Navigation,
    /// Keyed fetcher: stays on the current location.
    Fetcher,
}

/// One request-state signal and the request that currently owns it.
#[derive(Debug)]
pub(crate) struct Channel {
    state: watch::Sender<RequestState>,
    latest: AtomicU64,
}

impl Channel {
    fn new() -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            state,
            latest: AtomicU64::new(0),
        }
    }

    pub(crate) fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    fn is_latest(&self, id: RequestId) -> bool {
        self.latest.load(Ordering::SeqCst) == id.0
    }

    /// Make `id` the owner of this channel and publish its first state.
    fn begin(&self, id: RequestId, state: RequestState) {
        self.state.send_modify(|current| {
            self.latest.store(id.0, Ordering::SeqCst);
            *current = state;
        });
    }

    /// Publish `state` if `id` still owns the channel.
    fn advance(&self, id: RequestId, state: RequestState) -> bool {
        self.state.send_if_modified(|current| {
            if self.latest.load(Ordering::SeqCst) != id.0 {
                return false;
            }
            *current = state;
            true
        })
    }
}

pub(crate) struct Inner {
    store: Arc<dyn ContactStoreApi>,
    screen: Arc<Screen>,
    history: Arc<dyn NavigationHistory>,
    events: Option<Arc<dyn EventPublisher>>,
    navigation: Channel,
    fetchers: Mutex<HashMap<String, Arc<Channel>>>,
    next_request: AtomicU64,
}

impl Inner {
    fn next_id(&self) -> RequestId {
        RequestId(self.next_request.fetch_add(1, Ordering::SeqCst))
    }

    /// Submit phase: claim `channel` and expose the payload.
    pub(crate) fn begin(&self, channel: &Channel, mutation: Mutation) -> Submission {
        let submission = Submission {
            id: self.next_id(),
            mutation,
        };
        debug!(
            request = %submission.id,
            mutation = submission.mutation.name(),
            "Mutation submitted"
        );
        channel.begin(
            submission.id,
            RequestState::Submitting {
                submission: submission.clone(),
            },
        );
        submission
    }

    /// Settle and Revalidate phases for a submission already begun on `channel`.
    pub(crate) async fn execute(
        &self,
        channel: &Channel,
        submission: Submission,
        surface: Surface,
    ) -> MutationReport {
        let id = submission.id;
        let outcome = self.settle(&submission.mutation).await;

        match &outcome {
            Ok(settled) => {
                info!(request = %id, mutation = submission.mutation.name(), "Mutation settled");
                if let Some(events) = &self.events {
                    events.publish(settled.event()).await;
                }
            }
            Err(err) => {
                warn!(request = %id, mutation = submission.mutation.name(), error = %err, "Mutation rejected");
            }
        }

        let redirect = match (&outcome, surface) {
            (Ok(settled), Surface::Navigation) => Some(settled.redirect()),
            _ => None,
        };
        let location = redirect
            .clone()
            .unwrap_or_else(|| self.screen.location());

        channel.advance(
            id,
            RequestState::Loading {
                location: location.clone(),
                submission: Some(submission.clone()),
            },
        );

        let view = self.revalidate(&location).await;
        if let Some(redirect) = redirect {
            self.history.push(&redirect.href());
        }

        if channel.advance(id, RequestState::Idle) {
            debug!(request = %id, "Request complete");
        } else {
            debug!(request = %id, "Request complete; channel owned by a newer request");
        }

        MutationReport {
            submission,
            outcome,
            location,
            view,
        }
    }

    async fn settle(&self, mutation: &Mutation) -> Result<Settled, StoreError> {
        match mutation {
            Mutation::Create => self.store.create().await.map(Settled::Created),
            Mutation::Update { id, patch } => self
                .store
                .update(id, patch.clone())
                .await
                .map(Settled::Updated),
            Mutation::Delete { id } => self
                .store
                .delete(id)
                .await
                .map(|()| Settled::Deleted(id.clone())),
        }
    }

    /// Re-read `location` and show the result unconditionally.
    async fn revalidate(&self, location: &Location) -> ViewState {
        match load_view(self.store.as_ref(), location).await {
            Ok(view) => self.screen.show(view),
            Err(err) => {
                warn!(location = %location, error = %err, "Revalidation failed");
                self.screen.show_error(location.clone(), err)
            }
        }
    }
}

/// Entry point for navigations and mutations.
#[derive(Clone)]
pub struct MutationCoordinator {
    inner: Arc<Inner>,
}

impl MutationCoordinator {
    pub fn new(
        store: Arc<dyn ContactStoreApi>,
        screen: Arc<Screen>,
        history: Arc<dyn NavigationHistory>,
    ) -> Self {
        Self::build(store, screen, history, None)
    }

    /// Same as `new`, publishing contact events for every settled mutation.
    pub fn with_events(
        store: Arc<dyn ContactStoreApi>,
        screen: Arc<Screen>,
        history: Arc<dyn NavigationHistory>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self::build(store, screen, history, Some(events))
    }

    fn build(
        store: Arc<dyn ContactStoreApi>,
        screen: Arc<Screen>,
        history: Arc<dyn NavigationHistory>,
        events: Option<Arc<dyn EventPublisher>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                screen,
                history,
                events,
                navigation: Channel::new(),
                fetchers: Mutex::new(HashMap::new()),
                next_request: AtomicU64::new(1),
            }),
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Arc<Screen> {
        &self.inner.screen
    }

    /// Page-level request state.
    #[must_use]
    pub fn navigation_state(&self) -> RequestState {
        self.inner.navigation.state()
    }

    pub fn subscribe_navigation(&self) -> watch::Receiver<RequestState> {
        self.inner.navigation.subscribe()
    }

    /// True while the shown view is about to be replaced by a page-level load.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.inner.navigation.state().is_loading()
    }

    /// Load `location`, show it and push it onto the history.
    pub async fn navigate(&self, location: Location) -> NavigationOutcome {
        self.load(location, true).await
    }

    /// Load `location` without touching the history, as after a back/forward.
    pub async fn restore(&self, location: Location) -> NavigationOutcome {
        self.load(location, false).await
    }

    async fn load(&self, location: Location, push: bool) -> NavigationOutcome {
        let inner = &self.inner;
        let id = inner.next_id();
        inner.navigation.begin(
            id,
            RequestState::Loading {
                location: location.clone(),
                submission: None,
            },
        );

        let result = load_view(inner.store.as_ref(), &location).await;
        if !inner.navigation.is_latest(id) {
            debug!(request = %id, location = %location, "Navigation superseded");
            return NavigationOutcome::Superseded;
        }

        let view = match result {
            Ok(view) => inner.screen.show(view),
            Err(err) => {
                warn!(location = %location, error = %err, "Navigation load failed");
                inner.screen.show_error(location.clone(), err)
            }
        };
        if push {
            inner.history.push(&location.href());
        }
        inner.navigation.advance(id, RequestState::Idle);
        NavigationOutcome::Applied(view)
    }

    /// Full-page form submission.
    ///
    /// On success the screen follows the redirect and the history gains an
    /// entry. On a store failure the current location is revalidated and the
    /// error is carried in the report. Invalid requests return before any
    /// phase runs.
    pub async fn submit(&self, request: MutationRequest) -> Result<MutationReport, MutationError> {
        let mutation = request.validate().map_err(|err| {
            warn!(error = %err, "Mutation request rejected");
            MutationError::from(err)
        })?;

        let inner = &self.inner;
        let submission = inner.begin(&inner.navigation, mutation);
        Ok(inner
            .execute(&inner.navigation, submission, Surface::Navigation)
            .await)
    }

    /// Keyed fetcher. Fetchers with the same key share one request-state.
    #[must_use]
    pub fn fetcher(&self, key: &str) -> Fetcher {
        let channel = Arc::clone(
            self.inner
                .fetchers
                .lock()
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Channel::new())),
        );
        Fetcher::new(key.to_string(), channel, Arc::clone(&self.inner))
    }
}

impl std::fmt::Debug for MutationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationCoordinator")
            .field("location", &self.inner.screen.location())
            .field("navigation", &self.inner.navigation.state().name())
            .field("fetchers", &self.inner.fetchers.lock().len())
            .finish()
    }
}

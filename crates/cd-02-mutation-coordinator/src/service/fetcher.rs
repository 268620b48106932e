//! Keyed fetchers.
//!
//! A fetcher submits a mutation without navigating: the redirect is ignored
//! and the current location is revalidated. Each key owns its own
//! request-state, so a toggle on one row does not disturb another.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::{MutationError, MutationRequest, RequestState};
use crate::service::coordinator::{Channel, Inner, MutationReport, Surface};

/// Handle to one keyed request-state.
#[derive(Clone)]
pub struct Fetcher {
    key: String,
    channel: Arc<Channel>,
    inner: Arc<Inner>,
}

impl Fetcher {
    pub(crate) fn new(key: String, channel: Arc<Channel>, inner: Arc<Inner>) -> Self {
        Self {
            key,
            channel,
            inner,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn state(&self) -> RequestState {
        self.channel.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.channel.subscribe()
    }

    /// Validate and submit. The request-state is `Submitting` when this
    /// returns; Settle and Revalidate run on a spawned task.
    pub fn submit(
        &self,
        request: MutationRequest,
    ) -> Result<JoinHandle<MutationReport>, MutationError> {
        let mutation = request.validate()?;
        let submission = self.inner.begin(&self.channel, mutation);

        let inner = Arc::clone(&self.inner);
        let channel = Arc::clone(&self.channel);
        Ok(tokio::spawn(async move {
            inner
                .execute(&channel, submission, Surface::Fetcher)
                .await
        }))
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("key", &self.key)
            .field("state", &self.channel.state().name())
            .finish()
    }
}

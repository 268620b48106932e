//! Simulated network latency.
//!
//! Wraps a store and sleeps before forwarding each call. `RandomDelay`
//! emulates a cached network: a read is only slow the first time its key is
//! seen, and any write invalidates the cache so the next reads are slow again.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::Rng;
use shared_types::{Contact, ContactId, ContactPatch, StoreError};
use tracing::debug;

use crate::domain::StoreOp;
use crate::ports::ContactStoreApi;

/// Decides how long a call is delayed.
pub trait DelayPolicy: Send + Sync {
    fn delay_for(&self, op: &StoreOp) -> Duration;
}

impl<F> DelayPolicy for F
where
    F: Fn(&StoreOp) -> Duration + Send + Sync,
{
    fn delay_for(&self, op: &StoreOp) -> Duration {
        self(op)
    }
}

/// Uniform random delay in `[min, max]`, skipped for cached reads.
pub struct RandomDelay {
    min: Duration,
    max: Duration,
    seen: Mutex<HashSet<String>>,
}

impl RandomDelay {
    #[must_use]
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
            seen: Mutex::new(HashSet::new()),
        }
    }
}

impl DelayPolicy for RandomDelay {
    fn delay_for(&self, op: &StoreOp) -> Duration {
        match op.read_key() {
            Some(key) => {
                if !self.seen.lock().insert(key) {
                    return Duration::ZERO;
                }
            }
            None => self.seen.lock().clear(),
        }

        if self.max.is_zero() {
            return Duration::ZERO;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

/// Store decorator that sleeps before every call.
pub struct SimulatedLatency<P> {
    inner: Arc<dyn ContactStoreApi>,
    policy: P,
}

impl<P: DelayPolicy> SimulatedLatency<P> {
    pub fn new(inner: Arc<dyn ContactStoreApi>, policy: P) -> Self {
        Self { inner, policy }
    }

    async fn pause(&self, op: StoreOp) {
        let delay = self.policy.delay_for(&op);
        if !delay.is_zero() {
            debug!(op = ?op, delay_ms = delay.as_millis() as u64, "Simulating latency");
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl<P: DelayPolicy> ContactStoreApi for SimulatedLatency<P> {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        self.pause(StoreOp::List {
            query: query.map(str::to_string),
        })
        .await;
        self.inner.list(query).await
    }

    async fn get(&self, id: &ContactId) -> Result<Contact, StoreError> {
        self.pause(StoreOp::Get { id: id.clone() }).await;
        self.inner.get(id).await
    }

    async fn create(&self) -> Result<Contact, StoreError> {
        self.pause(StoreOp::Create).await;
        self.inner.create().await
    }

    async fn update(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact, StoreError> {
        self.pause(StoreOp::Update { id: id.clone() }).await;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        self.pause(StoreOp::Delete { id: id.clone() }).await;
        self.inner.delete(id).await
    }
}

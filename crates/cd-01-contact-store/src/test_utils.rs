//! Centralized Testing Utilities
//!
//! Test helpers shared with the downstream crates. Available under the
//! `test-utils` feature flag.
//!
//! - `FixedTimeSource` / `SequentialIds`: deterministic clocks and ids
//! - `GatedStore`: holds selected operations until a test opens the gate,
//!   so request states can be observed mid-phase
//! - `FaultyStore`: fails selected operations with `StoreError::Unavailable`

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Contact, ContactId, ContactPatch, StoreError, Timestamp};
use tokio::sync::Semaphore;

use crate::domain::{OpKind, StoreOp};
use crate::ports::{ContactStoreApi, IdGenerator, TimeSource};

/// A time source that returns a controllable timestamp.
#[derive(Debug)]
pub struct FixedTimeSource {
    time: AtomicU64,
}

impl FixedTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}

/// Ids `prefix1`, `prefix2`, ... optionally preceded by a fixed script.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
    script: Mutex<VecDeque<ContactId>>,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: AtomicU64::new(0),
            script: Mutex::new(VecDeque::new()),
        }
    }

    /// Hand out these ids first, then fall back to `id1`, `id2`, ...
    pub fn with_script<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let generator = Self::new("id");
        generator
            .script
            .lock()
            .extend(ids.into_iter().map(|id| ContactId::from(id.into())));
        generator
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ContactId {
        if let Some(id) = self.script.lock().pop_front() {
            return id;
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        ContactId::from(format!("{}{}", self.prefix, n))
    }
}

/// One-shot barrier between a held store call and the test driving it.
#[derive(Debug)]
pub struct Gate {
    entered: Semaphore,
    release: Semaphore,
}

impl Gate {
    fn new() -> Self {
        Self {
            entered: Semaphore::new(0),
            release: Semaphore::new(0),
        }
    }

    /// Wait until a call has reached the gate.
    pub async fn entered(&self) {
        if let Ok(permit) = self.entered.acquire().await {
            permit.forget();
        }
    }

    /// Let one held call through.
    pub fn open(&self) {
        self.release.add_permits(1);
    }

    async fn pass(&self) {
        self.entered.add_permits(1);
        if let Ok(permit) = self.release.acquire().await {
            permit.forget();
        }
    }
}

/// Store decorator that parks calls of selected kinds at a gate.
pub struct GatedStore {
    inner: Arc<dyn ContactStoreApi>,
    gates: Mutex<HashMap<OpKind, Arc<Gate>>>,
}

impl GatedStore {
    pub fn new(inner: Arc<dyn ContactStoreApi>) -> Self {
        Self {
            inner,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Hold every subsequent call of `kind` until the returned gate opens.
    pub fn hold(&self, kind: OpKind) -> Arc<Gate> {
        let gate = Arc::new(Gate::new());
        self.gates.lock().insert(kind, Arc::clone(&gate));
        gate
    }

    /// Stop holding calls of `kind`.
    pub fn release(&self, kind: OpKind) {
        self.gates.lock().remove(&kind);
    }

    async fn checkpoint(&self, op: &StoreOp) {
        let gate = self.gates.lock().get(&op.kind()).cloned();
        if let Some(gate) = gate {
            gate.pass().await;
        }
    }
}

#[async_trait]
impl ContactStoreApi for GatedStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        self.checkpoint(&StoreOp::List {
            query: query.map(str::to_string),
        })
        .await;
        self.inner.list(query).await
    }

    async fn get(&self, id: &ContactId) -> Result<Contact, StoreError> {
        self.checkpoint(&StoreOp::Get { id: id.clone() }).await;
        self.inner.get(id).await
    }

    async fn create(&self) -> Result<Contact, StoreError> {
        self.checkpoint(&StoreOp::Create).await;
        self.inner.create().await
    }

    async fn update(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact, StoreError> {
        self.checkpoint(&StoreOp::Update { id: id.clone() }).await;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        self.checkpoint(&StoreOp::Delete { id: id.clone() }).await;
        self.inner.delete(id).await
    }
}

/// Store decorator that fails selected kinds of calls.
pub struct FaultyStore {
    inner: Arc<dyn ContactStoreApi>,
    failing: Mutex<HashSet<OpKind>>,
}

impl FaultyStore {
    pub fn new(inner: Arc<dyn ContactStoreApi>) -> Self {
        Self {
            inner,
            failing: Mutex::new(HashSet::new()),
        }
    }

    pub fn fail(&self, kind: OpKind) {
        self.failing.lock().insert(kind);
    }

    pub fn heal(&self, kind: OpKind) {
        self.failing.lock().remove(&kind);
    }

    fn check(&self, kind: OpKind) -> Result<(), StoreError> {
        if self.failing.lock().contains(&kind) {
            return Err(StoreError::Unavailable(format!("injected {kind:?} failure")));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStoreApi for FaultyStore {
    async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, StoreError> {
        self.check(OpKind::List)?;
        self.inner.list(query).await
    }

    async fn get(&self, id: &ContactId) -> Result<Contact, StoreError> {
        self.check(OpKind::Get)?;
        self.inner.get(id).await
    }

    async fn create(&self) -> Result<Contact, StoreError> {
        self.check(OpKind::Create)?;
        self.inner.create().await
    }

    async fn update(&self, id: &ContactId, patch: ContactPatch) -> Result<Contact, StoreError> {
        self.check(OpKind::Update)?;
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        self.check(OpKind::Delete)?;
        self.inner.delete(id).await
    }
}

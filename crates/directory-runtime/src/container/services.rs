//! Service wiring.

use std::sync::Arc;

use cd_01_contact_store::{
    sample_roster, ContactStoreApi, InMemoryContactStore, RandomDelay, SimulatedLatency,
};
use cd_02_mutation_coordinator::{MutationCoordinator, Screen};
use cd_03_search::{MemoryHistory, SearchController};
use shared_bus::{EventFilter, EventTopic, InMemoryEventBus, Subscription};
use shared_types::{Location, StoreError};
use tracing::info;

use super::config::DirectoryConfig;

/// Every long-lived service of one directory session.
pub struct DirectoryContainer {
    pub store: Arc<dyn ContactStoreApi>,
    pub bus: Arc<InMemoryEventBus>,
    pub screen: Arc<Screen>,
    pub history: Arc<MemoryHistory>,
    pub coordinator: MutationCoordinator,
    pub search: Arc<SearchController>,
}

impl DirectoryContainer {
    /// Build the store described by `config` and wire everything around it.
    pub fn new(config: &DirectoryConfig) -> Result<Self, StoreError> {
        let base = InMemoryContactStore::new();
        let base = if config.store.seed {
            base.seeded(sample_roster())?
        } else {
            base
        };

        let store: Arc<dyn ContactStoreApi> = if config.store.simulates_latency() {
            let (min, max) = config.store.latency();
            info!(
                min_ms = config.store.latency_min_ms,
                max_ms = config.store.latency_max_ms,
                "Simulating store latency"
            );
            Arc::new(SimulatedLatency::new(
                Arc::new(base),
                RandomDelay::new(min, max),
            ))
        } else {
            Arc::new(base)
        };

        Ok(Self::with_store(store))
    }

    /// Wire the services around an existing store.
    pub fn with_store(store: Arc<dyn ContactStoreApi>) -> Self {
        let start = Location::index();
        let bus = Arc::new(InMemoryEventBus::new());
        let screen = Arc::new(Screen::new(start.clone()));
        let history = Arc::new(MemoryHistory::with_events(&start, bus.clone()));

        let coordinator = MutationCoordinator::with_events(
            Arc::clone(&store),
            Arc::clone(&screen),
            history.clone(),
            bus.clone(),
        );
        let search = Arc::new(SearchController::new(
            Arc::clone(&store),
            history.clone(),
            Arc::clone(&screen),
        ));

        Self {
            store,
            bus,
            screen,
            history,
            coordinator,
            search,
        }
    }

    /// Subscription to history pops, for keeping search input in sync.
    #[must_use]
    pub fn navigation_events(&self) -> Subscription {
        self.bus
            .subscribe(EventFilter::topics(vec![EventTopic::Navigation]))
    }
}

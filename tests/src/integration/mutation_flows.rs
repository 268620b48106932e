//! # Mutation Flows
//!
//! Submit → Settle → Revalidate across the store and coordinator crates,
//! observed the way a presentation layer would: through request-state
//! signals, the screen and the optimistic resolver.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use cd_01_contact_store::test_utils::{FaultyStore, GatedStore};
    use cd_01_contact_store::{ContactStoreApi, OpKind, SimulatedLatency, StoreOp};
    use cd_02_mutation_coordinator::{
        MutationCoordinator, MutationError, MutationRequest, OptimisticStateResolver,
        RequestState, Screen, Settled,
    };
    use shared_bus::{DirectoryEvent, EventFilter, EventTopic, InMemoryEventBus};
    use shared_types::{ContactId, ContactPatch, Location, ValidationError};

    use crate::fixtures::{roster_store, HistoryCall, RecordingHistory};

    fn setup(store: Arc<dyn ContactStoreApi>) -> (MutationCoordinator, Arc<RecordingHistory>) {
        let history = Arc::new(RecordingHistory::default());
        let coordinator =
            MutationCoordinator::new(store, Arc::new(Screen::default()), history.clone());
        (coordinator, history)
    }

    fn displayed_favorite(coordinator: &MutationCoordinator, state: &RequestState) -> bool {
        let view = coordinator.screen().current();
        let contact = view
            .find(&ContactId::from("c1"))
            .unwrap_or_else(|| panic!("c1 not shown"));
        OptimisticStateResolver::favorite(state, contact)
    }

    // =========================================================================
    // OPTIMISTIC DISPLAY
    // =========================================================================

    /// Displayed value through idle → submitting → loading → idle.
    #[tokio::test]
    async fn test_optimistic_favorite_through_every_phase() {
        let gated = Arc::new(GatedStore::new(Arc::new(roster_store())));
        let (coordinator, _) = setup(gated.clone());
        coordinator.navigate(Location::index()).await;

        let fetcher = coordinator.fetcher("favorite:c1");
        assert!(!displayed_favorite(&coordinator, &fetcher.state()));

        let update = gated.hold(OpKind::Update);
        let list = gated.hold(OpKind::List);
        let mut states = fetcher.subscribe();
        let task = fetcher
            .submit(MutationRequest::favorite("c1", true))
            .unwrap();

        update.entered().await;
        let submitting = states.borrow_and_update().clone();
        assert!(submitting.is_submitting());
        assert!(displayed_favorite(&coordinator, &submitting));

        update.open();
        list.entered().await;
        let loading = states.borrow_and_update().clone();
        assert!(loading.is_loading());
        assert!(displayed_favorite(&coordinator, &loading));
        // Store already holds the new value; the screen does not yet.
        assert!(!coordinator
            .screen()
            .current()
            .find(&ContactId::from("c1"))
            .unwrap()
            .favorite);

        list.open();
        task.await.unwrap();
        let idle = fetcher.state();
        assert!(idle.is_idle());
        assert!(displayed_favorite(&coordinator, &idle));
        assert!(coordinator
            .screen()
            .current()
            .find(&ContactId::from("c1"))
            .unwrap()
            .favorite);
    }

    /// A rejected toggle looks accepted until revalidation brings the truth back.
    #[tokio::test]
    async fn test_rejected_toggle_reverts_only_after_revalidation() {
        let faulty = Arc::new(FaultyStore::new(Arc::new(roster_store())));
        let gated = Arc::new(GatedStore::new(faulty.clone()));
        let (coordinator, _) = setup(gated.clone());
        coordinator.navigate(Location::index()).await;

        faulty.fail(OpKind::Update);
        let list = gated.hold(OpKind::List);
        let fetcher = coordinator.fetcher("favorite:c1");
        let task = fetcher
            .submit(MutationRequest::favorite("c1", true))
            .unwrap();

        list.entered().await;
        let loading = fetcher.state();
        assert!(loading.is_loading());
        assert!(displayed_favorite(&coordinator, &loading));

        list.open();
        let report = task.await.unwrap();
        assert!(report.outcome.is_err());
        assert!(!displayed_favorite(&coordinator, &fetcher.state()));
    }

    // =========================================================================
    // PHASE ORDERING AND THE STALE-OVERWRITE RACE
    // =========================================================================

    /// Two toggles of the same field: the first one settles last, so its
    /// revalidation is the one left on screen.
    #[tokio::test(start_paused = true)]
    async fn test_last_revalidation_to_complete_wins() {
        let updates = AtomicUsize::new(0);
        let policy = move |op: &StoreOp| match op.kind() {
            OpKind::Update => {
                if updates.fetch_add(1, Ordering::SeqCst) == 0 {
                    Duration::from_millis(200)
                } else {
                    Duration::from_millis(20)
                }
            }
            _ => Duration::from_millis(5),
        };
        let store = Arc::new(SimulatedLatency::new(Arc::new(roster_store()), policy));
        let (coordinator, _) = setup(store.clone());
        coordinator.navigate(Location::index()).await;

        let on = coordinator.fetcher("favorite:c1");
        let off = coordinator.fetcher("favorite:c1:again");
        let first = on.submit(MutationRequest::favorite("c1", true)).unwrap();
        let second = off.submit(MutationRequest::favorite("c1", false)).unwrap();

        let (first, second) = tokio::join!(first, second);
        let (first, second) = (first.unwrap(), second.unwrap());

        assert!(first.outcome.is_ok());
        assert!(second.outcome.is_ok());
        assert!(first.view.revision > second.view.revision);

        let shown = coordinator.screen().current();
        assert!(shown.find(&ContactId::from("c1")).unwrap().favorite);
        assert!(store.get(&ContactId::from("c1")).await.unwrap().favorite);
    }

    // =========================================================================
    // NAVIGATION SUBMISSIONS
    // =========================================================================

    #[tokio::test]
    async fn test_create_edit_delete_roundtrip() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut events = bus.subscribe(EventFilter::topics(vec![EventTopic::Contacts]));
        let history = Arc::new(RecordingHistory::default());
        let coordinator = MutationCoordinator::with_events(
            Arc::new(roster_store()),
            Arc::new(Screen::default()),
            history.clone(),
            bus.clone(),
        );

        let created = match coordinator
            .submit(MutationRequest::create())
            .await
            .unwrap()
            .into_result()
            .unwrap()
        {
            Settled::Created(contact) => contact,
            other => panic!("expected a created contact, got {other:?}"),
        };
        assert_eq!(
            coordinator.screen().location(),
            Location::edit(created.id.clone())
        );

        let patch = ContactPatch::default()
            .with_first("Mara")
            .with_last("Quinn")
            .with_twitter("maraq");
        let report = coordinator
            .submit(MutationRequest::update(created.id.as_str(), patch))
            .await
            .unwrap();
        let detail = report.view.detail_contact().unwrap();
        assert_eq!(detail.display_name().as_deref(), Some("Mara Quinn"));
        assert_eq!(detail.created_at, created.created_at);

        coordinator
            .submit(MutationRequest::delete(created.id.as_str()))
            .await
            .unwrap();
        assert_eq!(coordinator.screen().location(), Location::index());
        assert!(coordinator.screen().current().find(&created.id).is_none());

        let hrefs: Vec<HistoryCall> = history.calls();
        assert_eq!(
            hrefs,
            vec![
                HistoryCall::Push(format!("/contacts/{}/edit", created.id)),
                HistoryCall::Push(format!("/contacts/{}", created.id)),
                HistoryCall::Push("/".to_string()),
            ]
        );

        let mut kinds = Vec::new();
        while let Ok(Some(event)) = events.try_recv() {
            kinds.push(match event {
                DirectoryEvent::ContactCreated { .. } => "created",
                DirectoryEvent::ContactUpdated { .. } => "updated",
                DirectoryEvent::ContactDeleted { .. } => "deleted",
                DirectoryEvent::HistoryPopped { .. } => "popped",
            });
        }
        assert_eq!(kinds, vec!["created", "updated", "deleted"]);
    }

    #[tokio::test]
    async fn test_missing_id_never_reaches_the_store() {
        let faulty = Arc::new(FaultyStore::new(Arc::new(roster_store())));
        // Any store call would fail loudly.
        for kind in [
            OpKind::List,
            OpKind::Get,
            OpKind::Create,
            OpKind::Update,
            OpKind::Delete,
        ] {
            faulty.fail(kind);
        }
        let (coordinator, history) = setup(faulty);

        let err = coordinator
            .submit(MutationRequest::update("", ContactPatch::favorite(true)))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MutationError::Validation(ValidationError::MissingContactId)
        );
        assert_eq!(coordinator.screen().current().revision, 0);
        assert!(coordinator.screen().current().error.is_none());
        assert!(history.calls().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_settle_still_revalidates() {
        let (coordinator, history) = setup(Arc::new(roster_store()));
        coordinator
            .navigate(Location::contact(ContactId::from("c2")))
            .await;

        let report = coordinator
            .submit(MutationRequest::favorite("ghost", true))
            .await
            .unwrap();

        assert!(report.into_result().unwrap_err().is_not_found());
        assert_eq!(
            coordinator.screen().location(),
            Location::contact(ContactId::from("c2"))
        );
        assert_eq!(coordinator.screen().current().revision, 2);
        assert_eq!(history.push_count(), 1);
    }
}

//! # Search Flows
//!
//! History-entry policy, supersession of out-of-order results and input
//! resynchronization on back/forward, with the coordinator and search
//! controller sharing one screen and one history.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use cd_01_contact_store::{ContactStoreApi, SimulatedLatency, StoreOp};
    use cd_02_mutation_coordinator::{MutationCoordinator, Screen, ViewState};
    use cd_03_search::{MemoryHistory, SearchController, SearchResolution};
    use shared_bus::{EventFilter, EventTopic, InMemoryEventBus};
    use shared_types::{ContactId, Location};

    use crate::fixtures::{person, roster_store, store_with, HistoryCall, RecordingHistory};

    fn firsts(view: &ViewState) -> Vec<String> {
        view.contacts.iter().map(|c| c.first.clone()).collect()
    }

    // =========================================================================
    // HISTORY POLICY
    // =========================================================================

    #[tokio::test]
    async fn test_typing_pushes_once_then_replaces() {
        let history = Arc::new(RecordingHistory::default());
        let controller = SearchController::new(
            Arc::new(roster_store()),
            history.clone(),
            Arc::new(Screen::default()),
        );

        controller.search("a").await.unwrap();
        controller.search("ab").await.unwrap();

        assert_eq!(history.push_count(), 1);
        assert_eq!(history.replace_count(), 1);
        assert_eq!(
            history.calls(),
            vec![
                HistoryCall::Push("/?q=a".to_string()),
                HistoryCall::Replace("/?q=ab".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_starting_from_a_query_url_replaces() {
        let history = Arc::new(RecordingHistory::default());
        let screen = Arc::new(Screen::new(Location::index().with_query(Some("lu".into()))));
        let controller = SearchController::new(Arc::new(roster_store()), history.clone(), screen);

        assert_eq!(controller.input_text(), "lu");
        controller.search("luc").await.unwrap();
        assert_eq!(history.push_count(), 0);
        assert_eq!(history.replace_count(), 1);
    }

    // =========================================================================
    // SUPERSESSION
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_out_of_order_results_never_overwrite_newer_query() {
        let policy = |op: &StoreOp| match op {
            StoreOp::List { query } if query.as_deref() == Some("x") => Duration::from_millis(300),
            _ => Duration::from_millis(30),
        };
        let store: Arc<dyn ContactStoreApi> = Arc::new(SimulatedLatency::new(
            Arc::new(store_with(vec![
                person("Xena", "Park"),
                person("Yara", "Stone"),
                person("Olga", "Berg"),
            ])),
            policy,
        ));
        let screen = Arc::new(Screen::default());
        let controller = Arc::new(SearchController::new(
            store,
            Arc::new(RecordingHistory::default()),
            screen.clone(),
        ));

        let x = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.search("x").await }
        });
        tokio::task::yield_now().await;
        let y = tokio::spawn({
            let controller = Arc::clone(&controller);
            async move { controller.search("y").await }
        });

        let y = y.await.unwrap().unwrap();
        assert!(matches!(y, SearchResolution::Applied(_)));
        assert_eq!(firsts(&screen.current()), vec!["Yara"]);

        let x = x.await.unwrap().unwrap();
        assert_eq!(x, SearchResolution::Superseded);
        assert_eq!(firsts(&screen.current()), vec!["Yara"]);
        assert_eq!(controller.input_text(), "y");
    }

    // =========================================================================
    // RESYNC ON HISTORY POP
    // =========================================================================

    #[tokio::test]
    async fn test_back_and_forward_resync_input() {
        let bus = Arc::new(InMemoryEventBus::new());
        let store: Arc<dyn ContactStoreApi> = Arc::new(roster_store());
        let screen = Arc::new(Screen::default());
        let history = Arc::new(MemoryHistory::with_events(&Location::index(), bus.clone()));
        let coordinator =
            MutationCoordinator::new(store.clone(), screen.clone(), history.clone());
        let controller = Arc::new(SearchController::new(store, history.clone(), screen.clone()));

        let mut pops = bus.subscribe(EventFilter::topics(vec![EventTopic::Navigation]));

        controller.search("g").await.unwrap();
        controller.search("gr").await.unwrap();
        coordinator
            .navigate(Location::contact(ContactId::from("c7")))
            .await;
        controller.resync(&screen.location());
        assert_eq!(controller.input_text(), "");

        let back = history.back().await.unwrap().unwrap();
        controller.on_event(&pops.recv().await.unwrap());
        coordinator.restore(back).await;
        assert_eq!(controller.input_text(), "gr");
        assert_eq!(firsts(&screen.current()), vec!["Greta"]);

        let forward = history.forward().await.unwrap().unwrap();
        controller.on_event(&pops.recv().await.unwrap());
        coordinator.restore(forward).await;
        assert_eq!(controller.input_text(), "");
        assert_eq!(controller.query_param(), None);
        assert_eq!(
            screen.current().detail_contact().map(|c| c.first.as_str()),
            Some("Greta")
        );

        assert_eq!(history.entries(), vec!["/", "/?q=gr", "/contacts/c7"]);
    }

    #[tokio::test]
    async fn test_follower_task_resyncs_from_bus() {
        let bus = Arc::new(InMemoryEventBus::new());
        let history = Arc::new(MemoryHistory::with_events(&Location::index(), bus.clone()));
        let controller = Arc::new(SearchController::new(
            Arc::new(roster_store()),
            history.clone(),
            Arc::new(Screen::default()),
        ));
        let follower = tokio::spawn(
            Arc::clone(&controller)
                .follow_history(bus.subscribe(EventFilter::topics(vec![EventTopic::Navigation]))),
        );

        controller.search("ke").await.unwrap();
        controller.search("").await.unwrap();
        assert_eq!(controller.input_text(), "");
        history.back().await.unwrap();

        for _ in 0..100 {
            if controller.query_param().is_none() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(controller.query_param(), None);
        follower.abort();
    }
}

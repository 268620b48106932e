//! # Contact Store Properties
//!
//! The store contract as seen by every caller: ordering, filtering, merge
//! semantics and id lifetime.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cd_01_contact_store::test_utils::{FixedTimeSource, SequentialIds};
    use cd_01_contact_store::{sample_roster, ContactStoreApi, InMemoryContactStore};
    use shared_types::{ContactId, ContactPatch, StoreError};

    use crate::fixtures::{person, roster_store, store_with, CREATED_AT};

    // =========================================================================
    // LIST
    // =========================================================================

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let store = roster_store();
        let listed = store.list(None).await.unwrap();

        let expected: Vec<String> = sample_roster()
            .into_iter()
            .filter_map(|patch| patch.first)
            .collect();
        let firsts: Vec<String> = listed.iter().map(|c| c.first.clone()).collect();
        assert_eq!(firsts, expected);

        let ids: Vec<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids[0], "c1");
        assert_eq!(ids[11], "c12");
    }

    #[tokio::test]
    async fn test_list_matches_case_insensitive_substring_of_names() {
        let store = store_with(vec![
            person("Ada", "Okafor"),
            person("Bruno", "Lindqvist"),
            person("Carmen", "Ruiz"),
            person("adele", "BRANDT"),
        ]);
        let everyone = store.list(None).await.unwrap();

        for needle in ["a", "AD", "ruiz", "nd", "q", "zz", "O", "t"] {
            let lowered = needle.to_lowercase();
            let expected: Vec<ContactId> = everyone
                .iter()
                .filter(|c| {
                    c.first.to_lowercase().contains(&lowered)
                        || c.last.to_lowercase().contains(&lowered)
                })
                .map(|c| c.id.clone())
                .collect();
            let got: Vec<ContactId> = store
                .list(Some(needle))
                .await
                .unwrap()
                .into_iter()
                .map(|c| c.id)
                .collect();
            assert_eq!(got, expected, "query {needle:?}");
        }
    }

    #[tokio::test]
    async fn test_list_ignores_other_fields() {
        let store = store_with(vec![person("Ada", "Okafor")
            .with_twitter("zeta")
            .with_notes("zeta")]);
        assert!(store.list(Some("zeta")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_lists_everyone() {
        let store = roster_store();
        assert_eq!(store.list(Some("")).await.unwrap().len(), 12);
    }

    // =========================================================================
    // CREATE / GET
    // =========================================================================

    #[tokio::test]
    async fn test_create_returns_blank_contact() {
        let store = roster_store();
        let created = store.create().await.unwrap();

        assert_eq!(created.id.as_str(), "c13");
        assert!(created.first.is_empty());
        assert!(created.last.is_empty());
        assert!(created.twitter.is_empty());
        assert!(created.avatar.is_empty());
        assert!(created.notes.is_empty());
        assert!(!created.favorite);
        assert_eq!(created.created_at, CREATED_AT);

        assert_eq!(store.get(&created.id).await.unwrap(), created);
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    #[tokio::test]
    async fn test_update_merges_supplied_fields_only() {
        let store = roster_store();
        let id = ContactId::from("c1");
        let before = store.get(&id).await.unwrap();

        store
            .update(&id, ContactPatch::favorite(true))
            .await
            .unwrap();
        let after = store.get(&id).await.unwrap();

        assert!(after.favorite);
        assert_eq!(after.first, before.first);
        assert_eq!(after.last, before.last);
        assert_eq!(after.twitter, before.twitter);
        assert_eq!(after.avatar, before.avatar);
        assert_eq!(after.notes, before.notes);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_contact_is_not_found() {
        let store = roster_store();
        let err = store
            .update(&ContactId::from("ghost"), ContactPatch::favorite(true))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    // =========================================================================
    // DELETE / ID LIFETIME
    // =========================================================================

    #[tokio::test]
    async fn test_delete_then_get_fails() {
        let store = roster_store();
        let id = ContactId::from("c3");
        store.delete(&id).await.unwrap();

        assert_eq!(
            store.get(&id).await.unwrap_err(),
            StoreError::NotFound { id: id.clone() }
        );
        assert!(store
            .list(None)
            .await
            .unwrap()
            .iter()
            .all(|c| c.id != id));
        assert!(store.delete(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_never_reissued() {
        let store = InMemoryContactStore::with_sources(
            Arc::new(FixedTimeSource::new(CREATED_AT)),
            Arc::new(SequentialIds::with_script(["dup", "dup", "dup"])),
        );
        let first = store.create().await.unwrap();
        assert_eq!(first.id.as_str(), "dup");
        store.delete(&first.id).await.unwrap();

        let second = store.create().await.unwrap();
        assert_ne!(second.id, first.id);
        assert_eq!(second.id.as_str(), "id1");
    }
}

//! # Runtime Flows
//!
//! Whole sessions driven through the command interface, as the binary does.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use directory_runtime::{
        Command, ConfigError, DirectoryConfig, DirectoryContainer, Output, Session,
    };
    use shared_types::Location;

    use crate::fixtures::roster_store;

    fn session() -> Session {
        Session::new(DirectoryContainer::with_store(Arc::new(roster_store())))
    }

    async fn run(session: &mut Session, line: &str) -> Output {
        let command: Command = line
            .parse()
            .unwrap_or_else(|err| panic!("{line:?} did not parse: {err}"));
        session
            .execute(command)
            .await
            .unwrap_or_else(|err| panic!("{line:?} failed: {err}"))
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let mut session = session();
        let output = session.start().await;
        assert_eq!(output.view.contacts.len(), 12);

        let output = run(&mut session, "search h").await;
        assert!(output.view.contacts.iter().all(|c| {
            c.first.to_lowercase().contains('h') || c.last.to_lowercase().contains('h')
        }));
        assert_eq!(output.search.input, "h");
        assert!(!output.search.searching);

        let output = run(&mut session, "search hir").await;
        assert_eq!(output.view.contacts.len(), 1);
        assert_eq!(output.view.contacts[0].first, "Hiro");

        let output = run(&mut session, "open c8").await;
        assert_eq!(output.view.location, Location::contact("c8".into()));
        assert_eq!(output.search.input, "");

        let output = run(&mut session, "fav c8 on").await;
        assert!(output.view.detail_contact().unwrap().favorite);
        assert!(output.navigation.is_idle());

        let output = run(&mut session, "edit c8 notes=prefers+email").await;
        let hiro = output.view.detail_contact().unwrap();
        assert_eq!(hiro.notes, "prefers email");
        assert!(hiro.favorite);

        let output = run(&mut session, "back").await;
        assert_eq!(output.view.location, Location::contact("c8".into()));
        let output = run(&mut session, "back").await;
        assert_eq!(output.view.location.query.as_deref(), Some("hir"));
        assert_eq!(output.search.input, "hir");

        let output = run(&mut session, "forward").await;
        assert_eq!(output.search.input, "");
    }

    #[tokio::test]
    async fn test_errors_do_not_end_the_session() {
        let mut session = session();
        session.start().await;

        assert!("fly away".parse::<Command>().is_err());
        assert!("edit c1 age=40".parse::<Command>().is_err());

        let output = run(&mut session, "rm nobody").await;
        assert!(output.note.is_some());

        let output = run(&mut session, "ls").await;
        assert_eq!(output.view.contacts.len(), 12);
        assert!(output.note.is_none());
    }

    #[test]
    fn test_config_from_environment_lookup() {
        let config = DirectoryConfig::from_lookup(|key| match key {
            "CD_SEED" => Some("no".to_string()),
            "CD_LATENCY_MS" => Some("10-40".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(!config.store.seed);
        assert_eq!(config.store.latency_max_ms, 40);

        let err = DirectoryConfig::from_lookup(|key| {
            (key == "CD_LATENCY_MS").then(|| "90-10".to_string())
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::InvertedLatency { min: 90, max: 10 });
    }
}

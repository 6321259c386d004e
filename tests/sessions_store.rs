#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use lextrack::db::{clients::Clients, entries::Entries, sessions::Sessions};
    use lextrack::libs::client::{ClientDraft, ClientKind};
    use lextrack::libs::timer::{SessionState, TimerSession};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext { _temp_dir: temp_dir }
        }
    }

    fn instant(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_load_without_stored_session_is_idle(_ctx: &mut SessionTestContext) {
        let session = Sessions::new().unwrap().load().unwrap();

        assert_eq!(session.state, SessionState::Idle);
        assert_eq!(session.last_client, None);
        assert_eq!(session.last_project, None);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_running_session_survives_reload(_ctx: &mut SessionTestContext) {
        let mut sessions = Sessions::new().unwrap();
        let mut session = TimerSession::new();
        session
            .start(
                instant(9, 0),
                Some(1),
                Some("Litigation".to_string()),
                Some("Deposition prep".to_string()),
                true,
            )
            .unwrap();
        sessions.store(&session).unwrap();

        // Fresh connection, as a new process invocation would see it.
        let reloaded = Sessions::new().unwrap().load().unwrap();

        assert!(reloaded.is_running());
        match &reloaded.state {
            SessionState::Running {
                start,
                client_id,
                project,
                description,
                billable,
            } => {
                assert_eq!(*start, instant(9, 0));
                assert_eq!(*client_id, 1);
                assert_eq!(project, "Litigation");
                assert_eq!(description.as_deref(), Some("Deposition prep"));
                assert!(*billable);
            }
            SessionState::Idle => panic!("session should be running after reload"),
        }
        assert_eq!(reloaded.last_client, Some(1));
        assert_eq!(reloaded.last_project, Some("Litigation".to_string()));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_clears_session_but_keeps_selection(_ctx: &mut SessionTestContext) {
        let mut sessions = Sessions::new().unwrap();
        let mut session = TimerSession::new();
        session
            .start(instant(9, 0), Some(1), Some("Litigation".to_string()), None, true)
            .unwrap();
        sessions.store(&session).unwrap();

        session.stop(instant(10, 0)).unwrap();
        sessions.store(&session).unwrap();

        let reloaded = Sessions::new().unwrap().load().unwrap();
        assert_eq!(reloaded.state, SessionState::Idle);
        assert_eq!(reloaded.last_client, Some(1));
        assert_eq!(reloaded.last_project, Some("Litigation".to_string()));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_after_client_delete_still_records(_ctx: &mut SessionTestContext) {
        let mut clients = Clients::new().unwrap();
        let client = clients
            .insert(&ClientDraft::new("Acme Corp", ClientKind::Business, vec!["Litigation".to_string()]))
            .unwrap();

        let mut sessions = Sessions::new().unwrap();
        let mut session = TimerSession::new();
        session
            .start(instant(9, 0), Some(client.id), Some("Litigation".to_string()), None, true)
            .unwrap();
        sessions.store(&session).unwrap();

        // Client disappears while the timer is running.
        clients.delete(client.id).unwrap();

        let mut session = Sessions::new().unwrap().load().unwrap();
        let draft = session.stop(instant(10, 0)).unwrap();
        let entry = Entries::new().unwrap().insert(&draft).unwrap();
        sessions.store(&session).unwrap();

        // The tracked hour is recorded and the session is not left running.
        assert_eq!(entry.duration_min, 60);
        assert_eq!(entry.client_id, client.id);
        let reloaded = Sessions::new().unwrap().load().unwrap();
        assert_eq!(reloaded.state, SessionState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use lextrack::db::{clients::Clients, entries::Entries};
    use lextrack::libs::client::{ClientDraft, ClientKind};
    use lextrack::libs::entry::TimeEntryDraft;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ClientTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ClientTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ClientTestContext { _temp_dir: temp_dir }
        }
    }

    fn instant(h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_insert_and_get(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();

        let draft = ClientDraft::new("Acme Corp", ClientKind::Business, vec!["Litigation".to_string(), "Consulting".to_string()]);
        let created = clients.insert(&draft).unwrap();
        assert!(created.id > 0);

        let fetched = clients.get(created.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Acme Corp");
        assert_eq!(fetched.kind, ClientKind::Business);
        assert_eq!(fetched.projects, vec!["Litigation", "Consulting"]);
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_validation_rejects_bad_drafts(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();

        let no_name = ClientDraft::new("  ", ClientKind::Business, vec!["Litigation".to_string()]);
        assert!(clients.insert(&no_name).is_err());

        let no_projects = ClientDraft::new("Acme Corp", ClientKind::Business, vec![]);
        assert!(clients.insert(&no_projects).is_err());

        let duplicate = ClientDraft::new(
            "Acme Corp",
            ClientKind::Business,
            vec!["Litigation".to_string(), "Litigation".to_string()],
        );
        assert!(clients.insert(&duplicate).is_err());

        assert!(clients.fetch_all().unwrap().is_empty());
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_update(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();
        let draft = ClientDraft::new("Jane Doe", ClientKind::Individual, vec!["Estate".to_string()]);
        let mut client = clients.insert(&draft).unwrap();

        client.name = "Jane Smith".to_string();
        client.projects = vec!["Estate".to_string(), "Tax".to_string()];
        let updated = clients.update(&client).unwrap().unwrap();
        assert_eq!(updated.name, "Jane Smith");

        let fetched = clients.get(client.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Jane Smith");
        assert_eq!(fetched.projects, vec!["Estate", "Tax"]);
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_update_removes_labels(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();
        let draft = ClientDraft::new(
            "Acme Corp",
            ClientKind::Business,
            vec!["Litigation".to_string(), "Consulting".to_string(), "Tax".to_string()],
        );
        let mut client = clients.insert(&draft).unwrap();

        client.projects = vec!["Consulting".to_string()];
        clients.update(&client).unwrap().unwrap();

        let fetched = clients.get(client.id).unwrap().unwrap();
        assert_eq!(fetched.projects, vec!["Consulting"]);
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_update_missing_id_returns_none(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();
        let draft = ClientDraft::new("Acme Corp", ClientKind::Business, vec!["Litigation".to_string()]);
        let mut client = clients.insert(&draft).unwrap();

        client.id = 9999;
        assert!(clients.update(&client).unwrap().is_none());
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_fetch_all_ordered_by_name(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();
        for name in ["Zenith LLC", "Acme Corp", "Meridian Partners"] {
            let draft = ClientDraft::new(name, ClientKind::Business, vec!["Litigation".to_string()]);
            clients.insert(&draft).unwrap();
        }

        let all = clients.fetch_all().unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Corp", "Meridian Partners", "Zenith LLC"]);
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_delete_cascades_to_own_entries_only(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();
        let a = clients
            .insert(&ClientDraft::new("Client A", ClientKind::Business, vec!["Litigation".to_string()]))
            .unwrap();
        let b = clients
            .insert(&ClientDraft::new("Client B", ClientKind::Business, vec!["Consulting".to_string()]))
            .unwrap();

        let mut entries = Entries::new().unwrap();
        entries
            .insert(&TimeEntryDraft::new(a.id, "Litigation", instant(9, 0), instant(10, 0), true))
            .unwrap();
        entries
            .insert(&TimeEntryDraft::new(a.id, "Litigation", instant(11, 0), instant(12, 0), true))
            .unwrap();
        let kept = entries
            .insert(&TimeEntryDraft::new(b.id, "Consulting", instant(13, 0), instant(14, 0), true))
            .unwrap();

        clients.delete(a.id).unwrap();

        assert!(clients.get(a.id).unwrap().is_none());
        let remaining = entries.fetch_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
        assert_eq!(remaining[0].client_id, b.id);
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_delete_missing_client_errors(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();
        assert!(clients.delete(42).is_err());
    }
}

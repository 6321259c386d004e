#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use lextrack::db::{clients::Clients, entries::Entries};
    use lextrack::libs::client::{ClientDraft, ClientKind};
    use lextrack::libs::entry::TimeEntryDraft;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EntryTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for EntryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            EntryTestContext { _temp_dir: temp_dir }
        }
    }

    fn instant(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn seed_client() -> i64 {
        let draft = ClientDraft::new("Acme Corp", ClientKind::Business, vec!["Litigation".to_string()]);
        Clients::new().unwrap().insert(&draft).unwrap().id
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_insert_derives_duration(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();

        let draft = TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 10, 30), true)
            .with_description(Some("Discovery review".to_string()));
        let entry = entries.insert(&draft).unwrap();

        assert_eq!(entry.duration_min, 90);
        let fetched = entries.get(entry.id).unwrap().unwrap();
        assert_eq!(fetched.duration_min, 90);
        assert_eq!(fetched.description, Some("Discovery review".to_string()));
        assert!(fetched.billable);
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_insert_rejects_end_before_start(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();

        let backwards = TimeEntryDraft::new(client_id, "Litigation", instant(14, 10, 0), instant(14, 9, 0), true);
        assert!(entries.insert(&backwards).is_err());

        let zero_length = TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 9, 0), true);
        assert!(entries.insert(&zero_length).is_err());

        assert!(entries.fetch_all().unwrap().is_empty());
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_update_recomputes_duration(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();
        let draft = TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 10, 0), true);
        let mut entry = entries.insert(&draft).unwrap();

        // Move the end two hours out but hand over a stale duration; the
        // store must recompute it from the instants.
        entry.end = instant(14, 12, 0);
        entry.duration_min = 1;
        let updated = entries.update(&entry).unwrap().unwrap();

        assert_eq!(updated.duration_min, 180);
        assert_eq!(entries.get(entry.id).unwrap().unwrap().duration_min, 180);
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_update_missing_id_returns_none(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();
        let draft = TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 10, 0), true);
        let mut entry = entries.insert(&draft).unwrap();

        entry.id = 9999;
        assert!(entries.update(&entry).unwrap().is_none());
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_delete_entry(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();
        let draft = TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 10, 0), true);
        let entry = entries.insert(&draft).unwrap();

        entries.delete(entry.id).unwrap();
        assert!(entries.get(entry.id).unwrap().is_none());
        assert!(entries.delete(entry.id).is_err());
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_fetch_all_chronological(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();

        entries
            .insert(&TimeEntryDraft::new(client_id, "Litigation", instant(15, 9, 0), instant(15, 10, 0), true))
            .unwrap();
        entries
            .insert(&TimeEntryDraft::new(client_id, "Litigation", instant(13, 9, 0), instant(13, 10, 0), true))
            .unwrap();
        entries
            .insert(&TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 10, 0), true))
            .unwrap();

        let all = entries.fetch_all().unwrap();
        let days: Vec<u32> = all.iter().map(|e| chrono::Datelike::day(&e.start.date())).collect();
        assert_eq!(days, vec![13, 14, 15]);
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_insert_succeeds_after_client_deleted(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();
        Clients::new().unwrap().delete(client_id).unwrap();

        // An entry may reference a client that no longer exists; reports
        // degrade the name lookup instead of the write failing.
        let draft = TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 10, 0), true);
        let entry = entries.insert(&draft).unwrap();

        assert_eq!(entry.client_id, client_id);
        assert_eq!(entries.fetch_all().unwrap().len(), 1);
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_empty_description_stored_as_none(_ctx: &mut EntryTestContext) {
        let client_id = seed_client();
        let mut entries = Entries::new().unwrap();

        let draft = TimeEntryDraft::new(client_id, "Litigation", instant(14, 9, 0), instant(14, 10, 0), false)
            .with_description(Some("   ".to_string()));
        let entry = entries.insert(&draft).unwrap();

        let fetched = entries.get(entry.id).unwrap().unwrap();
        assert_eq!(fetched.description, None);
        assert!(!fetched.billable);
    }
}

#[cfg(test)]
mod tests_file_store {
    use boxoffice_rs::{
        BookingRecord, Catalog, FileStore, HISTORY_FILE, SHOWS_FILE, StateStore, StoreError, Tier,
    };
    use std::fs;

    #[test]
    fn absent_files_load_as_none() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());

        assert!(store.load_catalog().expect("no error").is_none());
        assert!(store.load_history().expect("no error").is_none());
    }

    #[test]
    fn in_dir_uses_the_default_file_names() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());

        assert_eq!(store.shows_path(), dir.path().join(SHOWS_FILE));
        assert_eq!(store.history_path(), dir.path().join(HISTORY_FILE));
    }

    #[test]
    fn saved_snapshots_load_back_identically() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());
        let catalog = Catalog::seeded().snapshot();
        let history = vec![BookingRecord(
            "Alice".to_string(),
            "Show1".to_string(),
            Tier::Gold,
            100,
        )];

        store.save_catalog(&catalog).expect("save shows");
        store.save_history(&history).expect("save history");

        assert_eq!(store.load_catalog().expect("load"), Some(catalog));
        assert_eq!(store.load_history().expect("load"), Some(history));
    }

    #[test]
    fn saves_replace_the_previous_snapshot_wholesale() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());

        store
            .save_history(&vec![BookingRecord(
                "Alice".to_string(),
                "Show1".to_string(),
                Tier::Silver,
                50,
            )])
            .expect("first save");
        store.save_history(&Vec::new()).expect("second save");

        assert_eq!(store.load_history().expect("load"), Some(Vec::new()));
    }

    #[test]
    fn malformed_file_reports_malformed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());
        fs::write(store.shows_path(), "{not json").expect("write garbage");

        let err = store.load_catalog().expect_err("garbage must not decode");

        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn no_staging_file_is_left_behind() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());

        store
            .save_catalog(&Catalog::seeded().snapshot())
            .expect("save shows");

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "stray staging files: {leftovers:?}");
    }

    #[test]
    fn failed_save_keeps_the_previous_snapshot() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());
        let good = Catalog::seeded().snapshot();
        store.save_catalog(&good).expect("good save");

        // Make the target un-replaceable by pointing a second store at a
        // path whose parent does not exist; the good copy is untouched.
        let broken = FileStore::new(
            dir.path().join("missing").join(SHOWS_FILE),
            dir.path().join("missing").join(HISTORY_FILE),
        );
        let err = broken
            .save_catalog(&good)
            .expect_err("unwritable target must fail");
        assert!(matches!(err, StoreError::Io { .. }));

        assert_eq!(store.load_catalog().expect("load"), Some(good));
    }
}

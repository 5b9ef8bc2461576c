#[cfg(test)]
mod tests_office_restore {
    use boxoffice_rs::{BoxOffice, BoxOfficeError, FileStore, Tier};
    use std::fs;

    #[test]
    fn first_run_comes_up_seeded_with_no_issues() {
        let dir = tempfile::tempdir().expect("temp dir");

        let (office, issues) = BoxOffice::open(FileStore::in_dir(dir.path()));

        assert!(issues.is_empty());
        assert_eq!(office.availability()["Show1"], 10);
        assert_eq!(office.availability()["Show2"], 8);
        assert!(office.history().is_empty());
    }

    #[test]
    fn bookings_survive_a_restart() {
        let dir = tempfile::tempdir().expect("temp dir");

        {
            let (mut office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
            office
                .book("Alice", "Show1", Tier::Gold)
                .expect("booking should succeed");
        }

        let (office, issues) = BoxOffice::open(FileStore::in_dir(dir.path()));
        assert!(issues.is_empty());
        assert_eq!(office.availability()["Show1"], 9);
        assert_eq!(office.history().len(), 1);
        assert_eq!(office.history()[0].customer, "Alice");
        assert_eq!(office.history()[0].price, 100);
    }

    #[test]
    fn load_persist_load_is_lossless() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let (mut office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
            office
                .book("Alice", "Show1", Tier::Gold)
                .expect("first booking");
            office
                .book("Bob", "Show2", Tier::Silver)
                .expect("second booking");
        }

        let (first, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
        first.persist().expect("redundant flush");
        let (second, _) = BoxOffice::open(FileStore::in_dir(dir.path()));

        assert_eq!(first.availability(), second.availability());
        assert_eq!(first.history(), second.history());
        assert_eq!(first.catalog(), second.catalog());
    }

    #[test]
    fn corrupt_shows_file_falls_back_to_the_seeded_catalog() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());
        fs::write(store.shows_path(), "][").expect("write garbage");

        let (office, issues) = BoxOffice::open(store);

        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], BoxOfficeError::Persistence(_)));
        assert_eq!(office.availability()["Show1"], 10);
    }

    #[test]
    fn corrupt_history_file_starts_the_ledger_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::in_dir(dir.path());
        fs::write(store.history_path(), "not json at all").expect("write garbage");

        let (office, issues) = BoxOffice::open(store);

        assert_eq!(issues.len(), 1);
        assert!(office.history().is_empty());
    }

    #[test]
    fn cancellation_is_durable_across_restarts() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let (mut office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
            office
                .book("Alice", "Show1", Tier::Gold)
                .expect("booking should succeed");
            office.cancel("ALICE").expect("cancellation should succeed");
        }

        let (office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
        assert!(office.history().is_empty());
        assert_eq!(office.availability()["Show1"], 10);
    }

    #[test]
    fn persisted_capacity_keeps_refunds_capped_after_a_restart() {
        let dir = tempfile::tempdir().expect("temp dir");
        {
            let (mut office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
            office
                .book("Alice", "Show1", Tier::Gold)
                .expect("booking should succeed");
        }

        // A restart must not mistake the decremented count for capacity.
        let (mut office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
        office.cancel("Alice").expect("cancellation should succeed");

        assert_eq!(office.availability()["Show1"], 10);
        assert_eq!(
            office.catalog().get("Show1").expect("present").capacity(),
            10
        );
    }
}

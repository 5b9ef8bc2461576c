use boxoffice_rs::prelude::*;
use std::error::Error;
use std::fs;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let dir = tempfile::tempdir()?;

    // First session: seed, book, and let every mutation flush the files.
    {
        let (mut office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));
        office.book("Alice", "Show1", Tier::Gold)?;
        office.book("Bob", "Show2", Tier::Silver)?;
        info!(
            "First session recorded {} bookings; files live in {}",
            office.history().len(),
            dir.path().display()
        );
    }

    // Second session: the ledger extends from the persisted history and
    // the catalog restores its decremented counts and capacities.
    {
        let (office, issues) = BoxOffice::open(FileStore::in_dir(dir.path()));
        assert!(issues.is_empty());
        info!("Restored booking history:");
        for booking in office.history() {
            info!("  {booking}");
        }
        for (show, seats) in office.availability() {
            info!("  {show}: {seats} seats available");
        }
    }

    // Third session: a corrupted shows file is reported, not fatal; the
    // office comes up on the seeded catalog while the history survives.
    let store = FileStore::in_dir(dir.path());
    fs::write(store.shows_path(), "{definitely not json")?;
    let (office, issues) = BoxOffice::open(store);
    for issue in &issues {
        info!("Error loading data: {issue}");
    }
    info!(
        "After corruption: {} shows seeded, {} bookings restored",
        office.availability().len(),
        office.history().len()
    );

    Ok(())
}

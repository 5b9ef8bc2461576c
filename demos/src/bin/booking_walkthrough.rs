use boxoffice_rs::prelude::*;
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    // A scratch directory plays the role of the installation directory
    // holding the two state files.
    let dir = tempfile::tempdir()?;
    let (mut office, issues) = BoxOffice::open(FileStore::in_dir(dir.path()));
    for issue in &issues {
        info!("startup issue: {issue}");
    }

    info!("Available shows:");
    for (show, seats) in office.availability() {
        info!("  {show}: {seats} seats available");
    }

    print_history(&office);

    // Book a couple of seats, including a second one under the same name.
    let outcome = office.book("Alice", "Show1", Tier::Gold)?;
    if let Some(booking) = outcome.booking() {
        info!(
            "Booking confirmed for {}. Show: {}, Ticket: {}, Price: ${}",
            booking.customer, booking.show, booking.tier, booking.price
        );
    }
    office.book("Bob", "Show2", Tier::Silver)?;
    office.book("Alice", "Show2", Tier::Platinum)?;

    print_history(&office);

    // Cancellation matches case-insensitively and removes the earliest
    // booking under the name; the snapshotted price is the refund.
    let refunded = office.cancel("alice")?;
    info!(
        "Your booking for {} ({}) has been canceled. Refund: ${}",
        refunded.show, refunded.tier, refunded.price
    );

    print_history(&office);

    info!("Remaining seats after the walkthrough:");
    for (show, seats) in office.availability() {
        info!("  {show}: {seats} seats available");
    }

    // Every mutation already saved both files; this is the redundant
    // flush a shell performs on quit.
    office.persist()?;
    info!("State flushed to {}", dir.path().display());
    Ok(())
}

fn print_history(office: &BoxOffice<FileStore>) {
    if office.history().is_empty() {
        info!("No bookings yet.");
        return;
    }
    info!("Booking history:");
    for booking in office.history() {
        info!("  {booking}");
    }
}

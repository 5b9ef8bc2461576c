use boxoffice_rs::prelude::*;
use std::error::Error;
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let dir = tempfile::tempdir()?;
    let (mut office, _) = BoxOffice::open(FileStore::in_dir(dir.path()));

    // Drain Show2 down to its last seat.
    let seats = office.availability()["Show2"];
    info!("Selling out Show2 ({seats} seats)...");
    for n in 0..seats {
        let outcome = office.book(&format!("Guest{n}"), "Show2", Tier::Silver)?;
        assert!(!outcome.is_waitlisted());
    }
    info!("Show2 now has {} seats available", office.availability()["Show2"]);

    // The next request is not an error: it comes back as a waiting-list
    // notice, nothing is recorded, and the shell owns the message.
    match office.book("Bob", "Show2", Tier::Silver)? {
        BookingOutcome::Waitlisted { customer, show } => {
            info!("No seats available for {show}. {customer} has been added to the waiting list.");
        }
        BookingOutcome::Confirmed(booking) => {
            unreachable!("Show2 is sold out, yet {booking} was confirmed");
        }
    }

    info!(
        "Ledger still holds {} bookings; Show2 still shows {} seats",
        office.history().len(),
        office.availability()["Show2"]
    );

    // A cancellation frees a seat again, capped at the show's capacity.
    let refunded = office.cancel("Guest0")?;
    info!(
        "Cancelled {}'s booking (refund ${}); Show2 is back to {} seat(s)",
        refunded.customer,
        refunded.price,
        office.availability()["Show2"]
    );

    Ok(())
}

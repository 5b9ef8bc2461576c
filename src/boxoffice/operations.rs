//! Box office operations: booking, cancellation, and read-side queries.

use super::error::BoxOfficeError;
use super::office::BoxOffice;
use super::store::StateStore;
use super::types::{Booking, BookingOutcome, Tier};
use std::collections::BTreeMap;
use tracing::{info, trace, warn};

impl<S: StateStore> BoxOffice<S> {
    /// Book one seat on `show` at `tier` for `customer`.
    ///
    /// On success the seat is taken, the tier price snapshotted into the
    /// booking, the booking appended to the ledger, and both state files
    /// rewritten. A sold-out show yields [`BookingOutcome::Waitlisted`]
    /// without touching any state: displaying the waiting-list message is
    /// the shell's job, and nothing is recorded for the request.
    ///
    /// # Errors
    /// - [`BoxOfficeError::InvalidInput`] when `customer` is empty.
    /// - [`BoxOfficeError::ShowNotFound`] when `show` is unknown.
    /// - [`BoxOfficeError::TierNotAvailable`] when the show does not price
    ///   `tier`.
    /// - [`BoxOfficeError::Persistence`] when a state file could not be
    ///   written. The in-memory booking is kept; durable state catches up
    ///   on the next successful save.
    pub fn book(
        &mut self,
        customer: &str,
        show: &str,
        tier: Tier,
    ) -> Result<BookingOutcome, BoxOfficeError> {
        if customer.is_empty() {
            return Err(BoxOfficeError::InvalidInput {
                message: "customer name must not be empty".to_string(),
            });
        }

        // Resolve the price before touching the seat count so an unknown
        // tier never consumes availability.
        let price = self.catalog.price_for(show, tier)?;

        match self.catalog.decrement_seat(show) {
            Ok(remaining) => {
                let booking = Booking {
                    customer: customer.to_string(),
                    show: show.to_string(),
                    tier,
                    price,
                };
                self.ledger.push(booking.clone());
                info!("booked {customer} on {show} ({tier}, ${price}); {remaining} seats left");
                self.persist()?;
                Ok(BookingOutcome::Confirmed(booking))
            }
            Err(BoxOfficeError::NoAvailability { .. }) => {
                trace!("{show} is sold out; routing {customer} to the waiting list");
                Ok(BookingOutcome::Waitlisted {
                    customer: customer.to_string(),
                    show: show.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Cancel the earliest booking held under `customer`, matched
    /// case-insensitively in ledger order.
    ///
    /// Exactly one booking is removed even when the customer holds
    /// several. The seat goes back to the booked show, both state files
    /// are rewritten, and the removed booking is returned; its snapshotted
    /// price is the refund amount. A show that has since vanished from the
    /// catalog does not block the cancellation: the removal stands and the
    /// seat restore is skipped with a warning.
    ///
    /// # Errors
    /// - [`BoxOfficeError::InvalidInput`] when `customer` is empty.
    /// - [`BoxOfficeError::BookingNotFound`] when no booking matches;
    ///   state is left untouched.
    /// - [`BoxOfficeError::Persistence`] when a state file could not be
    ///   written. The in-memory cancellation is kept.
    pub fn cancel(&mut self, customer: &str) -> Result<Booking, BoxOfficeError> {
        if customer.is_empty() {
            return Err(BoxOfficeError::InvalidInput {
                message: "customer name must not be empty".to_string(),
            });
        }

        let booking = self
            .ledger
            .remove_first_for(customer)
            .ok_or_else(|| BoxOfficeError::BookingNotFound(customer.to_string()))?;

        match self.catalog.increment_seat(&booking.show) {
            Ok(seats) => trace!("restored one seat on {}; {seats} available", booking.show),
            Err(err) => warn!(
                "seat not restored for cancelled booking on {}: {err}",
                booking.show
            ),
        }

        info!(
            "cancelled booking for {} on {} (refund ${})",
            booking.customer, booking.show, booking.price
        );
        self.persist()?;
        Ok(booking)
    }

    /// Remaining seats per show. A pure read against the catalog.
    #[must_use]
    pub fn availability(&self) -> BTreeMap<String, u64> {
        self.catalog.availability()
    }

    /// All current bookings in ledger order, oldest first. An empty slice
    /// is the normal no-bookings state; rendering a sentinel for it is the
    /// shell's concern.
    #[must_use]
    pub fn history(&self) -> &[Booking] {
        self.ledger.bookings()
    }

    /// Rewrite both state files from the in-memory state.
    ///
    /// Every mutating operation already persists, so calling this at
    /// shutdown is a redundant final flush; it exists for shells that want
    /// one anyway.
    ///
    /// # Errors
    /// Returns the first [`BoxOfficeError::Persistence`] encountered. Both
    /// files are attempted regardless.
    pub fn persist(&self) -> Result<(), BoxOfficeError> {
        // History first, then shows.
        let history = self.store.save_history(&self.ledger.snapshot());
        let catalog = self.store.save_catalog(&self.catalog.snapshot());
        history.and(catalog).map_err(BoxOfficeError::from)
    }
}

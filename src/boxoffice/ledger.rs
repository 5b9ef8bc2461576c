//! Ordered booking history.

use super::snapshot::{BookingRecord, LedgerSnapshot};
use super::types::Booking;
use tracing::trace;

/// The ordered collection of all current bookings, oldest first.
///
/// Insertion order is the only ordering. Customer names are not unique
/// keys: a customer may hold several bookings, and cancellation matches
/// the earliest one in ledger order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    bookings: Vec<Booking>,
}

impl Ledger {
    /// An empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the bookings from a persisted snapshot, preserving their
    /// order after anything already recorded.
    pub fn extend_from_snapshot(&mut self, snapshot: LedgerSnapshot) {
        trace!("extending ledger with {} persisted bookings", snapshot.len());
        self.bookings.extend(snapshot.into_iter().map(Booking::from));
    }

    /// Serialize the full history into its wire-format snapshot.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.bookings.iter().map(BookingRecord::from).collect()
    }

    /// Append a booking at the end of the history.
    pub fn push(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Remove and return the earliest booking whose customer name matches
    /// `customer`, compared case-insensitively.
    ///
    /// Only one booking is removed even when the customer holds several;
    /// which one is determined solely by ledger order.
    pub fn remove_first_for(&mut self, customer: &str) -> Option<Booking> {
        let needle = customer.to_lowercase();
        let index = self
            .bookings
            .iter()
            .position(|booking| booking.customer.to_lowercase() == needle)?;
        Some(self.bookings.remove(index))
    }

    /// All bookings in insertion order, oldest first.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Number of recorded bookings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Returns `true` when no bookings are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

//! Domain types shared between the catalog and the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named price category applied uniformly across shows that define it.
///
/// The set is closed: these are the only selectable tiers, regardless of
/// what labels a show's price map declares. A show that does not price one
/// of them simply cannot sell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Base price category
    Silver,
    /// Mid price category
    Gold,
    /// Top price category
    Platinum,
}

impl Tier {
    /// All selectable tiers, in ascending price order.
    pub const ALL: [Tier; 3] = [Tier::Silver, Tier::Gold, Tier::Platinum];

    /// The label used as the key in a show's price map and on the wire.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }

    /// Look up a tier by its label. Returns `None` for labels outside the
    /// selectable set, including any extra labels a price map may carry.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Tier> {
        Tier::ALL.into_iter().find(|tier| tier.label() == label)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A confirmed reservation record: customer, show, tier, and price paid.
///
/// The price is snapshotted at booking time and later reported as the
/// refund amount on cancellation; it is never recomputed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Customer the reservation was made for.
    pub customer: String,

    /// Name of the booked show. Held by value: renaming or removing the
    /// show in the catalog does not cascade into existing bookings.
    pub show: String,

    /// Price category the seat was sold at.
    pub tier: Tier,

    /// Price paid, snapshotted at booking time.
    pub price: u64,
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Show: {}, Ticket: {}, Price: ${}",
            self.customer, self.show, self.tier, self.price
        )
    }
}

/// Outcome of a booking request that passed validation.
///
/// A sold-out show is a routing branch, not a fault: the caller displays a
/// waiting-list message for [`BookingOutcome::Waitlisted`] and nothing is
/// recorded for the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// A seat was taken and the booking appended to the ledger.
    Confirmed(Booking),

    /// The show had no remaining seats; no state was mutated.
    Waitlisted {
        /// Customer who asked for the seat.
        customer: String,
        /// Show that is sold out.
        show: String,
    },
}

impl BookingOutcome {
    /// The confirmed booking, if one was made.
    #[must_use]
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            BookingOutcome::Confirmed(booking) => Some(booking),
            BookingOutcome::Waitlisted { .. } => None,
        }
    }

    /// Returns `true` when the request was routed to the waiting list.
    #[must_use]
    pub fn is_waitlisted(&self) -> bool {
        matches!(self, BookingOutcome::Waitlisted { .. })
    }
}

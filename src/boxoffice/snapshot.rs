//! Wire-format records for the two persisted state files.
//!
//! Each file holds one JSON document and is fully rewritten on every save:
//! the shows file maps show names to seat counts and tier prices, and the
//! history file is a flat array of 4-element booking records. Neither file
//! carries a schema version field.

use super::types::{Booking, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized form of the shows file: show name → inventory record.
pub type CatalogSnapshot = BTreeMap<String, ShowRecord>;

/// Serialized form of the history file: booking records in ledger order.
pub type LedgerSnapshot = Vec<BookingRecord>;

/// One show's persisted inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Seats still available for sale.
    pub seats: u64,

    /// Original capacity. Absent from files written before the field
    /// existed; loaders fall back to `seats` for those.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,

    /// Price per tier label.
    pub ticket_prices: BTreeMap<String, u64>,
}

/// One booking as persisted: `[customer, show, tier, price]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord(pub String, pub String, pub Tier, pub u64);

impl From<&Booking> for BookingRecord {
    fn from(booking: &Booking) -> Self {
        BookingRecord(
            booking.customer.clone(),
            booking.show.clone(),
            booking.tier,
            booking.price,
        )
    }
}

impl From<BookingRecord> for Booking {
    fn from(record: BookingRecord) -> Self {
        Booking {
            customer: record.0,
            show: record.1,
            tier: record.2,
            price: record.3,
        }
    }
}

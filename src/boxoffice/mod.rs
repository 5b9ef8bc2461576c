//! Box office implementation: show catalog, booking ledger, and their persistence.

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod office;
/// Contains the core logic for mutating reservation state, such as booking a seat or cancelling an existing booking.
pub mod operations;
/// Wire-format records for the two persisted state files.
pub mod snapshot;
/// Durable storage seam and the flat-file implementation.
pub mod store;
pub mod types;


pub use catalog::{Catalog, Show};
pub use error::BoxOfficeError;
pub use ledger::Ledger;
pub use office::BoxOffice;
pub use types::{Booking, BookingOutcome, Tier};

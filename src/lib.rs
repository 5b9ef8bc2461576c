//! # Box Office Reservation Core
//!
//! A small, single-threaded ticket reservation core written in Rust. It tracks a catalog of shows with tiered seat prices, records confirmed bookings in an insertion-ordered ledger, and keeps both synchronized with flat JSON state files after every mutation.
//!
//! ## Key Features
//!
//! - **Show Catalog**: In-memory inventory mapping show names to remaining seats, an immutable capacity ceiling, and a price per tier label, seeded with a built-in set on first run.
//!
//! - **Booking Ledger**: Insertion-ordered booking history. Customer names are not unique keys; cancellation matches the earliest entry, case-insensitively, and refunds the price snapshotted at booking time.
//!
//! - **Waiting-List Outcome**: Running out of seats is a normal result variant, not an error. Callers route [`BookingOutcome::Waitlisted`] to their waiting-list message; nothing is recorded for the request.
//!
//! - **Crash-Safe Persistence**: Both state files are rewritten through a temp-file-and-rename swap, so a failed save never corrupts the previous good snapshot.
//!
//! - **Best-Effort Startup**: Absent state files seed the defaults, malformed files are reported and fall back to them. Opening the box office never fails and never panics.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: Seat counts never go negative and never exceed a show's original capacity, even across duplicate cancellations.
//! 2. **Durability**: Every mutation flushes both snapshots; a save failure is surfaced but keeps the in-memory state authoritative until the next successful save.
//! 3. **Simplicity**: One controller instance owns all state and is driven synchronously from a single control thread; `&mut self` is the whole locking discipline.
//!
//! ## Example
//!
//! ```
//! use boxoffice_rs::prelude::*;
//!
//! let dir = tempfile::tempdir().expect("temp dir");
//! let (mut office, issues) = BoxOffice::open(FileStore::in_dir(dir.path()));
//! assert!(issues.is_empty());
//!
//! let outcome = office.book("Alice", "Show1", Tier::Gold).expect("booking");
//! let booking = outcome.booking().expect("confirmed");
//! assert_eq!(booking.price, 100);
//! assert_eq!(office.availability()["Show1"], 9);
//!
//! let refunded = office.cancel("alice").expect("cancellation");
//! assert_eq!(refunded.price, 100);
//! assert!(office.history().is_empty());
//! ```
//!
//! ## Status
//!
//! The core is intentionally small: screen navigation, prompts, and rendering belong to an external shell that calls the operations above and displays their results.

pub mod boxoffice;
pub mod prelude;

pub use boxoffice::snapshot::{BookingRecord, CatalogSnapshot, LedgerSnapshot, ShowRecord};
pub use boxoffice::store::{FileStore, HISTORY_FILE, SHOWS_FILE, StateStore, StoreError};
pub use boxoffice::{Booking, BookingOutcome, BoxOffice, BoxOfficeError, Catalog, Ledger, Show, Tier};

/// Default type alias for `BoxOffice<FileStore>` representing the most common use case.
///
/// This is the recommended type to use when the reservation state lives in
/// the two flat JSON files on disk. Construct one with [`BoxOffice::open`]
/// over a [`FileStore`].
pub type DefaultBoxOffice = BoxOffice<FileStore>;

//! Prelude module that re-exports commonly used types and traits.
//!
//! This module provides a convenient way to import the most commonly used
//! types, traits, and functions from the boxoffice-rs crate. Instead of
//! importing each type individually, you can use:
//!
//! ```rust
//! use boxoffice_rs::prelude::*;
//! ```
//!
//! This will import all the essential types needed for working with the box office.

// Core controller and error types
pub use crate::boxoffice::BoxOffice;
pub use crate::boxoffice::BoxOfficeError;

// Domain types
pub use crate::boxoffice::{Booking, BookingOutcome, Catalog, Ledger, Show, Tier};

// Wire-format record types
pub use crate::boxoffice::snapshot::{BookingRecord, CatalogSnapshot, LedgerSnapshot, ShowRecord};

// Storage seam
pub use crate::boxoffice::store::{FileStore, HISTORY_FILE, SHOWS_FILE, StateStore, StoreError};

// Type aliases for common use cases
pub use crate::DefaultBoxOffice;

//! Durable storage for catalog and ledger snapshots.
//!
//! [`StateStore`] is the persistence seam between the box office and its
//! storage medium. The shipped implementation, [`FileStore`], keeps the
//! reservation state in two independent flat JSON files; tests swap in an
//! in-memory store through the same trait.

mod error;
mod file_store;

pub use error::StoreError;
pub use file_store::{FileStore, HISTORY_FILE, SHOWS_FILE};

use super::snapshot::{CatalogSnapshot, LedgerSnapshot};

/// Durable storage for the two state snapshots.
///
/// An absent snapshot is not an error: the `load_*` methods return
/// `Ok(None)` and the caller falls back to the seeded catalog or an empty
/// history. Saves replace the previous snapshot wholesale; nothing is ever
/// appended in place.
pub trait StateStore {
    /// Load the shows snapshot, or `None` when none has been saved yet.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the snapshot exists but cannot be read
    /// or decoded.
    fn load_catalog(&self) -> Result<Option<CatalogSnapshot>, StoreError>;

    /// Load the booking history snapshot, or `None` when none has been
    /// saved yet.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the snapshot exists but cannot be read
    /// or decoded.
    fn load_history(&self) -> Result<Option<LedgerSnapshot>, StoreError>;

    /// Replace the shows snapshot.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the snapshot cannot be serialized or
    /// written. The previously saved snapshot must survive a failed save.
    fn save_catalog(&self, snapshot: &CatalogSnapshot) -> Result<(), StoreError>;

    /// Replace the booking history snapshot.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the snapshot cannot be serialized or
    /// written. The previously saved snapshot must survive a failed save.
    fn save_history(&self, snapshot: &LedgerSnapshot) -> Result<(), StoreError>;
}

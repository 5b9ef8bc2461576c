//! The box office controller: one instance owns all reservation state.

use super::catalog::Catalog;
use super::error::BoxOfficeError;
use super::ledger::Ledger;
use super::store::StateStore;
use tracing::warn;

/// The box office holds the show catalog and the booking ledger and keeps
/// both synchronized with durable storage.
///
/// One instance is constructed at startup and handed to the UI shell, which
/// drives it synchronously in response to user actions. Every mutating
/// operation takes `&mut self`, so the borrow checker enforces the
/// one-mutation-in-flight rule; a server adaptation would wrap the instance
/// in a mutex for the same effect.
#[derive(Debug)]
pub struct BoxOffice<S> {
    /// Show inventory and pricing.
    pub(super) catalog: Catalog,

    /// Ordered booking history.
    pub(super) ledger: Ledger,

    /// Durable storage for both snapshots.
    pub(super) store: S,
}

impl<S: StateStore> BoxOffice<S> {
    /// Open the box office over `store`, best-effort.
    ///
    /// Absent state files are normal: the catalog comes up seeded with the
    /// built-in inventory and the ledger starts empty. A malformed file
    /// does the same, with the failure returned in the issue list so the
    /// shell can surface it. Startup itself never fails.
    pub fn open(store: S) -> (Self, Vec<BoxOfficeError>) {
        let mut issues = Vec::new();

        let catalog = match store.load_catalog() {
            Ok(Some(snapshot)) => Catalog::from_snapshot(snapshot),
            Ok(None) => Catalog::seeded(),
            Err(err) => {
                warn!("falling back to seeded catalog: {err}");
                issues.push(BoxOfficeError::from(err));
                Catalog::seeded()
            }
        };

        let mut ledger = Ledger::new();
        match store.load_history() {
            Ok(Some(snapshot)) => ledger.extend_from_snapshot(snapshot),
            Ok(None) => {}
            Err(err) => {
                warn!("starting with an empty booking history: {err}");
                issues.push(BoxOfficeError::from(err));
            }
        }

        (
            Self {
                catalog,
                ledger,
                store,
            },
            issues,
        )
    }

    /// Construct a box office from already-built state, bypassing the load
    /// step. Useful for tests and tooling.
    pub fn with_state(catalog: Catalog, ledger: Ledger, store: S) -> Self {
        Self {
            catalog,
            ledger,
            store,
        }
    }

    /// Show inventory and pricing.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ordered booking history.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

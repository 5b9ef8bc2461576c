//! Show inventory and pricing.

use super::error::BoxOfficeError;
use super::snapshot::{CatalogSnapshot, ShowRecord};
use super::types::Tier;
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// A bookable event: remaining seats, an immutable capacity, and a price
/// per tier label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Seats still available for sale.
    pub(super) seats: u64,

    /// Original capacity. Seat restores never push `seats` past this.
    pub(super) capacity: u64,

    /// Price per tier label. String-keyed so that labels beyond the closed
    /// selectable set survive a load/save round trip untouched.
    pub(super) prices: BTreeMap<String, u64>,
}

impl Show {
    /// Create a show whose capacity equals its initial seat count.
    #[must_use]
    pub fn new(seats: u64, prices: BTreeMap<String, u64>) -> Self {
        Self {
            seats,
            capacity: seats,
            prices,
        }
    }

    /// Create a show with an explicit capacity ceiling.
    ///
    /// `capacity` is raised to `seats` when it is smaller, so a show never
    /// starts out over its own ceiling.
    #[must_use]
    pub fn with_capacity(seats: u64, capacity: u64, prices: BTreeMap<String, u64>) -> Self {
        Self {
            seats,
            capacity: capacity.max(seats),
            prices,
        }
    }

    /// Convenience constructor pricing exactly the three selectable tiers.
    #[must_use]
    pub fn tiered(seats: u64, silver: u64, gold: u64, platinum: u64) -> Self {
        let prices = Tier::ALL
            .into_iter()
            .zip([silver, gold, platinum])
            .map(|(tier, price)| (tier.label().to_string(), price))
            .collect();
        Self::new(seats, prices)
    }

    /// Seats still available for sale.
    #[must_use]
    pub fn seats(&self) -> u64 {
        self.seats
    }

    /// Original capacity of the show.
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Price for `tier`, or `None` when the show does not offer it.
    #[must_use]
    pub fn price(&self, tier: Tier) -> Option<u64> {
        self.prices.get(tier.label()).copied()
    }

    /// The full price map, including any labels outside the selectable set.
    #[must_use]
    pub fn prices(&self) -> &BTreeMap<String, u64> {
        &self.prices
    }
}

/// The collection of all shows and their live seat counts.
///
/// The catalog answers availability and price queries and mutates seat
/// counters in memory only; flushing to durable storage is a separate,
/// explicit step owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    shows: BTreeMap<String, Show>,
}

impl Catalog {
    /// An empty catalog with no shows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in inventory used on first run, before any state file
    /// exists.
    #[must_use]
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        catalog.insert("Show1", Show::tiered(10, 50, 100, 150));
        catalog.insert("Show2", Show::tiered(8, 60, 120, 180));
        catalog
    }

    /// Rebuild a catalog from a persisted snapshot.
    ///
    /// Records written before the capacity field existed load with
    /// `capacity = seats`, the only inference available for them.
    #[must_use]
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let shows = snapshot
            .into_iter()
            .map(|(name, record)| {
                let show = Show::with_capacity(
                    record.seats,
                    record.capacity.unwrap_or(record.seats),
                    record.ticket_prices,
                );
                (name, show)
            })
            .collect();
        Self { shows }
    }

    /// Serialize the full inventory into its wire-format snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.shows
            .iter()
            .map(|(name, show)| {
                let record = ShowRecord {
                    seats: show.seats,
                    capacity: Some(show.capacity),
                    ticket_prices: show.prices.clone(),
                };
                (name.clone(), record)
            })
            .collect()
    }

    /// Add or replace a show under `name`.
    pub fn insert(&mut self, name: impl Into<String>, show: Show) {
        self.shows.insert(name.into(), show);
    }

    /// Look up a show by name.
    #[must_use]
    pub fn get(&self, show: &str) -> Option<&Show> {
        self.shows.get(show)
    }

    /// Number of shows in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Returns `true` when the catalog holds no shows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Take one seat from `show`, returning the new remaining count.
    ///
    /// Mutates in-memory state only; persistence is the caller's explicit
    /// follow-up step.
    ///
    /// # Errors
    /// - [`BoxOfficeError::ShowNotFound`] when `show` is unknown.
    /// - [`BoxOfficeError::NoAvailability`] when no seats remain. Callers
    ///   route this to the waiting-list path rather than treating it as a
    ///   fault.
    pub fn decrement_seat(&mut self, show: &str) -> Result<u64, BoxOfficeError> {
        let entry = self
            .shows
            .get_mut(show)
            .ok_or_else(|| BoxOfficeError::ShowNotFound(show.to_string()))?;

        if entry.seats == 0 {
            return Err(BoxOfficeError::NoAvailability {
                show: show.to_string(),
            });
        }

        entry.seats -= 1;
        trace!("took one seat from {show}: {} remain", entry.seats);
        Ok(entry.seats)
    }

    /// Give one seat back to `show`, returning the new remaining count.
    ///
    /// The count saturates at the show's capacity: a restore that would
    /// exceed it is ignored with a warning, so duplicate cancellations can
    /// never inflate availability past the original seat count.
    ///
    /// # Errors
    /// Returns [`BoxOfficeError::ShowNotFound`] when `show` is unknown.
    pub fn increment_seat(&mut self, show: &str) -> Result<u64, BoxOfficeError> {
        let entry = self
            .shows
            .get_mut(show)
            .ok_or_else(|| BoxOfficeError::ShowNotFound(show.to_string()))?;

        if entry.seats == entry.capacity {
            warn!(
                "{show} already at capacity ({}); seat restore ignored",
                entry.capacity
            );
        } else {
            entry.seats += 1;
            trace!("restored one seat to {show}: {} remain", entry.seats);
        }
        Ok(entry.seats)
    }

    /// Price of `tier` on `show`.
    ///
    /// # Errors
    /// - [`BoxOfficeError::ShowNotFound`] when `show` is unknown.
    /// - [`BoxOfficeError::TierNotAvailable`] when the show's price map
    ///   does not cover `tier`.
    pub fn price_for(&self, show: &str, tier: Tier) -> Result<u64, BoxOfficeError> {
        let entry = self
            .shows
            .get(show)
            .ok_or_else(|| BoxOfficeError::ShowNotFound(show.to_string()))?;

        entry.price(tier).ok_or(BoxOfficeError::TierNotAvailable {
            show: show.to_string(),
            tier,
        })
    }

    /// Remaining seats per show.
    #[must_use]
    pub fn availability(&self) -> BTreeMap<String, u64> {
        self.shows
            .iter()
            .map(|(name, show)| (name.clone(), show.seats))
            .collect()
    }
}

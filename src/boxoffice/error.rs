//! Box office error types

use super::store::StoreError;
use super::types::Tier;
use std::fmt;

/// Errors that can occur within the box office core.
///
/// Every variant is recoverable; none should terminate the process. A
/// [`BoxOfficeError::Persistence`] raised while saving means the in-memory
/// mutation was kept and durable state lags until the next successful save.
#[derive(Debug)]
#[non_exhaustive]
pub enum BoxOfficeError {
    /// Caller-supplied input was unusable
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// No show with this name exists in the catalog
    ShowNotFound(String),

    /// The show exists but its price map does not cover the requested tier
    TierNotAvailable {
        /// Show whose price map was consulted
        show: String,
        /// Tier that is not priced for it
        tier: Tier,
    },

    /// No booking in the ledger matches this customer name
    BookingNotFound(String),

    /// The show has zero remaining seats. This is a routing branch rather
    /// than a fault: booking turns it into a waiting-list outcome
    NoAvailability {
        /// Show that is sold out
        show: String,
    },

    /// Reading or writing one of the two state files failed
    Persistence(StoreError),
}

impl fmt::Display for BoxOfficeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxOfficeError::InvalidInput { message } => write!(f, "invalid input: {message}"),
            BoxOfficeError::ShowNotFound(show) => write!(f, "show not found: {show}"),
            BoxOfficeError::TierNotAvailable { show, tier } => {
                write!(f, "tier {tier} is not offered for show {show}")
            }
            BoxOfficeError::BookingNotFound(customer) => {
                write!(f, "no booking found for {customer}")
            }
            BoxOfficeError::NoAvailability { show } => {
                write!(f, "no seats available for {show}")
            }
            BoxOfficeError::Persistence(err) => write!(f, "persistence error: {err}"),
        }
    }
}

impl std::error::Error for BoxOfficeError {}

impl From<StoreError> for BoxOfficeError {
    fn from(err: StoreError) -> Self {
        BoxOfficeError::Persistence(err)
    }
}

//! Error types for the storage subsystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the state files.
///
/// All variants are reportable, non-fatal conditions: a load failure makes
/// the caller proceed on defaults, and a save failure leaves the previous
/// good snapshot on disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Reading or writing a state file failed.
    #[error("i/o failure on {}: {message}", .path.display())]
    Io {
        /// The underlying I/O error message.
        message: String,
        /// The file involved.
        path: PathBuf,
    },

    /// A state file exists but its contents could not be decoded.
    #[error("malformed state file {}: {message}", .path.display())]
    Malformed {
        /// The underlying decode error message.
        message: String,
        /// The file involved.
        path: PathBuf,
    },

    /// A snapshot could not be serialized to JSON.
    #[error("snapshot serialization failed: {message}")]
    Serialization {
        /// The underlying serialization error message.
        message: String,
    },
}

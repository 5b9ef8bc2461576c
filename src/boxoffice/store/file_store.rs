//! Flat-file implementation of [`StateStore`].
//!
//! Two independent JSON files, fully rewritten on every save. A write goes
//! to a sibling temp file first and is then renamed over the live file, so
//! an interrupted or failed save leaves the previous good snapshot intact.

use super::{StateStore, StoreError};
use crate::boxoffice::snapshot::{CatalogSnapshot, LedgerSnapshot};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Default file name for the shows snapshot.
pub const SHOWS_FILE: &str = "shows_data.txt";

/// Default file name for the booking history snapshot.
pub const HISTORY_FILE: &str = "booking_history.txt";

/// File-backed [`StateStore`] holding one JSON document per state file.
#[derive(Debug, Clone)]
pub struct FileStore {
    shows_path: PathBuf,
    history_path: PathBuf,
}

impl FileStore {
    /// Create a store over explicit file locations.
    #[must_use]
    pub fn new(shows_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            shows_path: shows_path.into(),
            history_path: history_path.into(),
        }
    }

    /// Create a store using the default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(SHOWS_FILE), dir.join(HISTORY_FILE))
    }

    /// Location of the shows file.
    #[must_use]
    pub fn shows_path(&self) -> &Path {
        &self.shows_path
    }

    /// Location of the booking history file.
    #[must_use]
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StoreError::Io {
                    message: err.to_string(),
                    path: path.to_path_buf(),
                });
            }
        };

        let value = serde_json::from_str(&contents).map_err(|err| StoreError::Malformed {
            message: err.to_string(),
            path: path.to_path_buf(),
        })?;
        trace!("loaded snapshot from {}", path.display());
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_vec(value).map_err(|err| StoreError::Serialization {
            message: err.to_string(),
        })?;

        // Stage the whole document, then swap it over the live file. An
        // interruption between the two steps leaves the previous snapshot
        // untouched.
        let staged = path.with_extension("tmp");
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&staged)
            .map_err(|err| StoreError::Io {
                message: err.to_string(),
                path: staged.clone(),
            })?;

        file.write_all(&payload).map_err(|err| StoreError::Io {
            message: err.to_string(),
            path: staged.clone(),
        })?;

        file.sync_all().map_err(|err| StoreError::Io {
            message: err.to_string(),
            path: staged.clone(),
        })?;
        drop(file);

        fs::rename(&staged, path).map_err(|err| StoreError::Io {
            message: err.to_string(),
            path: path.to_path_buf(),
        })?;

        trace!("wrote {} bytes to {}", payload.len(), path.display());
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load_catalog(&self) -> Result<Option<CatalogSnapshot>, StoreError> {
        Self::read_json(&self.shows_path)
    }

    fn load_history(&self) -> Result<Option<LedgerSnapshot>, StoreError> {
        Self::read_json(&self.history_path)
    }

    fn save_catalog(&self, snapshot: &CatalogSnapshot) -> Result<(), StoreError> {
        Self::write_json(&self.shows_path, snapshot)
    }

    fn save_history(&self, snapshot: &LedgerSnapshot) -> Result<(), StoreError> {
        Self::write_json(&self.history_path, snapshot)
    }
}

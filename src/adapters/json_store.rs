//! File-backed named store adapter.
//!
//! Implements [`StorePort`] over one `<name>.json` object file per named
//! store under the data directory — the host-side analog of the client's
//! per-name preference files.
//!
//! Writes are read-modify-write with a temp-file + rename commit, so an
//! interrupted write never leaves a half-written store behind.  Store
//! names map straight to file names and are validated so a crafted name
//! cannot escape the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::info;

use crate::app::ports::{StorageError, StorePort};
use crate::app::records::{StoreSnapshot, StoreValue};

pub struct JsonStoreAdapter {
    data_dir: PathBuf,
}

impl JsonStoreAdapter {
    /// Open the store directory, creating it if needed.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|_| StorageError::IoError)?;
        info!("JsonStoreAdapter: using {}", data_dir.display());
        Ok(Self { data_dir })
    }

    fn store_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        if !valid_store_name(name) {
            return Err(StorageError::InvalidName);
        }
        Ok(self.data_dir.join(format!("{name}.json")))
    }
}

/// Alphanumeric plus `.`, `_`, `-`; no leading dot.
fn valid_store_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

impl StorePort for JsonStoreAdapter {
    fn read_store(&self, name: &str) -> Result<Option<StoreSnapshot>, StorageError> {
        let path = self.store_path(name)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(_) => return Err(StorageError::IoError),
        };
        let snapshot = serde_json::from_str(&raw).map_err(|_| StorageError::Corrupted)?;
        Ok(Some(snapshot))
    }

    fn write(&mut self, name: &str, key: &str, value: StoreValue) -> Result<(), StorageError> {
        let path = self.store_path(name)?;
        let mut snapshot = self.read_store(name)?.unwrap_or_default();
        snapshot.insert(key.to_owned(), value);

        let json =
            serde_json::to_string_pretty(&snapshot).map_err(|_| StorageError::Corrupted)?;

        // Commit atomically: rename within the same directory.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|_| StorageError::IoError)?;
        fs::rename(&tmp, &path).map_err(|_| StorageError::IoError)?;
        Ok(())
    }
}

//! Collection persistence over a local key-value blob store.
//!
//! Each entity collection lives as one JSON array under its own named
//! key. Reads and writes are whole-collection; there is no partial
//! write or cross-collection guarantee. The deployment is single
//! process and single writer, so last-save-wins is acceptable.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;

pub const PROPERTIES: &str = "rentals_properties";
pub const TENANTS: &str = "rentals_tenants";
pub const AGREEMENTS: &str = "rentals_agreements";
pub const INVOICES: &str = "rentals_invoices";
pub const PAYMENTS: &str = "rentals_payments";
pub const EXPENSES: &str = "rentals_expenses";
pub const MAINTENANCE: &str = "rentals_maintenance";

enum Backend {
    Dir(PathBuf),
    Memory(Mutex<HashMap<String, String>>),
}

/// Handle to the key-value blob store. Passed explicitly to every
/// repository and aggregator call; the engine holds no global state.
pub struct Store {
    backend: Backend,
}

impl Store {
    /// Open a directory-backed store, creating the directory if needed.
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            backend: Backend::Dir(data_dir.to_path_buf()),
        })
    }

    /// Volatile store for tests and previews.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Load a whole collection. A missing key, unreadable blob, or
    /// unparseable payload degrades to an empty collection; the
    /// failure is logged, never surfaced to the caller.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.read(key) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::error!(key, error = %error, "Failed to read collection");
                return Vec::new();
            }
        };
        let Some(raw) = raw else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(error) => {
                tracing::error!(key, error = %error, "Failed to parse collection");
                Vec::new()
            }
        }
    }

    /// Overwrite a whole collection. Failures are logged and swallowed.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) {
        let payload = match serde_json::to_string(records) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::error!(key, error = %error, "Failed to serialize collection");
                return;
            }
        };
        if let Err(error) = self.write(key, &payload) {
            tracing::error!(key, error = %error, "Failed to save collection");
        }
    }

    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match &self.backend {
            Backend::Dir(dir) => match fs::read_to_string(blob_path(dir, key)) {
                Ok(raw) => Ok(Some(raw)),
                Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(error) => Err(error),
            },
            Backend::Memory(map) => {
                let map = map.lock().unwrap_or_else(PoisonError::into_inner);
                Ok(map.get(key).cloned())
            }
        }
    }

    fn write(&self, key: &str, payload: &str) -> io::Result<()> {
        match &self.backend {
            Backend::Dir(dir) => fs::write(blob_path(dir, key), payload),
            Backend::Memory(map) => {
                let mut map = map.lock().unwrap_or_else(PoisonError::into_inner);
                map.insert(key.to_string(), payload.to_string());
                Ok(())
            }
        }
    }
}

fn blob_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

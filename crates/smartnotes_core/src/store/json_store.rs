//! File-backed JSON note store.
//!
//! # Responsibility
//! - Map the note text list to a JSON array of `{"text": ...}` records.
//! - Own every read and write of the backing file.
//!
//! # Invariants
//! - Missing file on load returns an empty list.
//! - Invalid JSON or wrong shape returns `StoreError::Corrupt` with the
//!   parse detail; the file content is left untouched.

use crate::store::{NoteStore, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Wire record for one persisted note.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedNote {
    text: String,
}

/// JSON-file note store. Sole writer of its path.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given backing file path.
    ///
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl NoteStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        let records: Vec<PersistedNote> =
            serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt {
                path: self.path.clone(),
                detail: err.to_string(),
            })?;

        Ok(records.into_iter().map(|record| record.text).collect())
    }

    fn save(&mut self, texts: &[&str]) -> StoreResult<()> {
        let records: Vec<PersistedNote> = texts
            .iter()
            .map(|text| PersistedNote {
                text: (*text).to_string(),
            })
            .collect();

        // Indentation is cosmetic; pretty output matches the historical file.
        let body = serde_json::to_string_pretty(&records).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            detail: err.to_string(),
        })?;

        fs::write(&self.path, body).map_err(|err| self.io_error(err))
    }
}

//! Note persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the note backing file.
//! - Keep JSON shape details inside the store boundary.
//!
//! # Invariants
//! - The persisted shape is a JSON array of `{"text": string}` objects;
//!   derived state is session-only and never written.
//! - A store is the sole writer of its backing file and rewrites it
//!   wholesale on every save.
//! - A missing file reads as an empty collection; an unreadable or
//!   malformed file is a corruption error, never silently empty.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

mod json_store;
mod memory;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for note persistence.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure while reading or writing the backing file.
    Io { path: PathBuf, source: io::Error },
    /// The backing file exists but does not hold the expected JSON shape.
    Corrupt { path: PathBuf, detail: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "note file I/O error at `{}`: {source}", path.display())
            }
            Self::Corrupt { path, detail } => {
                write!(f, "note file `{}` is corrupt: {detail}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { .. } => None,
        }
    }
}

/// Load/save contract for the ordered note text list.
///
/// Only note texts cross this boundary; ids and derived state are owned by
/// the collection and reconstructed on load.
pub trait NoteStore {
    /// Reads the full ordered list of note texts.
    fn load(&self) -> StoreResult<Vec<String>>;
    /// Replaces the persisted list wholesale.
    fn save(&mut self, texts: &[&str]) -> StoreResult<()>;
}

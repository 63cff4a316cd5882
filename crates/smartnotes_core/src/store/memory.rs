//! In-memory note store for tests and embedding hosts.

use crate::store::{NoteStore, StoreResult};

/// Note store holding texts in memory. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    texts: Vec<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing texts.
    pub fn with_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the currently saved texts.
    pub fn saved_texts(&self) -> &[String] {
        &self.texts
    }
}

impl NoteStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<String>> {
        Ok(self.texts.clone())
    }

    fn save(&mut self, texts: &[&str]) -> StoreResult<()> {
        self.texts = texts.iter().map(|text| (*text).to_string()).collect();
        Ok(())
    }
}

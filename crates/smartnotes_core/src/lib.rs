//! Core domain logic for SmartNotes.
//! This crate is the single source of truth for note-collection invariants.

pub mod export;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod session;
pub mod store;
pub mod summarize;

pub use export::{pdf_file_name, pdf_title, ExportError, ExportResult, Exporter, PdfDocument};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    Note, NoteId, SummaryState, FONT_SIZE_DEFAULT, FONT_SIZE_MIN, FONT_SIZE_STEP,
};
pub use search::text::{search_notes, SearchHit};
pub use service::collection::{CollectionError, CollectionResult, NoteCollection};
pub use session::{EditDraft, SessionState, Theme};
pub use store::{JsonFileStore, MemoryStore, NoteStore, StoreError, StoreResult};
pub use summarize::{summary_prompt, SummarizeError, SummarizeResult, Summarizer};

/// Minimal health-check API for early host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

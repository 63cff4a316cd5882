//! PDF export collaborator contract and file-name derivation.
//!
//! # Responsibility
//! - Define the boundary the collection uses to render a summary as PDF.
//! - Derive a filesystem-safe file name from the note text.
//!
//! # Invariants
//! - PDF rendering lives behind the trait, outside the core.
//! - Derived file names contain only ASCII alphanumerics and underscores,
//!   capped at [`PDF_TITLE_MAX_CHARS`] characters before the extension.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NON_ALNUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid file name regex"));

/// Maximum characters kept from the note's first line for the title.
pub const PDF_TITLE_MAX_CHARS: usize = 30;

const FALLBACK_TITLE: &str = "note";

pub type ExportResult<T> = Result<T, ExportError>;

/// Exporter failure surfaced to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportError {
    message: String,
}

impl ExportError {
    /// Wraps an exporter failure message without alteration.
    pub fn renderer(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The exporter message verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ExportError {}

/// External PDF export collaborator.
pub trait Exporter {
    /// Renders a titled body into PDF bytes.
    fn render_pdf(&self, title: &str, body: &str) -> ExportResult<Vec<u8>>;
}

/// Rendered PDF bytes paired with the derived download file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    /// File name including the `.pdf` extension.
    pub file_name: String,
    /// Raw PDF byte stream from the exporter.
    pub bytes: Vec<u8>,
}

/// Derives a title from the first line of the note text.
///
/// Non-alphanumeric runs collapse to a single underscore; leading/trailing
/// underscores are trimmed; the result is capped at 30 characters and falls
/// back to `note` when nothing usable remains.
pub fn pdf_title(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let joined = NON_ALNUM_RE.replace_all(first_line, "_");
    let trimmed = joined.trim_matches('_');
    let capped: String = trimmed.chars().take(PDF_TITLE_MAX_CHARS).collect();
    let capped = capped.trim_end_matches('_');
    if capped.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        capped.to_string()
    }
}

/// Derives the download file name for a note's summary PDF.
pub fn pdf_file_name(text: &str) -> String {
    format!("{}.pdf", pdf_title(text))
}

#[cfg(test)]
mod tests {
    use super::{pdf_file_name, pdf_title, PDF_TITLE_MAX_CHARS};

    #[test]
    fn title_uses_first_line_with_underscores() {
        assert_eq!(pdf_title("weekly plan\nrest of note"), "weekly_plan");
    }

    #[test]
    fn title_collapses_symbol_runs_and_trims_edges() {
        assert_eq!(pdf_title("-- groceries: milk & eggs!"), "groceries_milk_eggs");
    }

    #[test]
    fn title_is_capped() {
        let long = "a".repeat(80);
        assert_eq!(pdf_title(&long).chars().count(), PDF_TITLE_MAX_CHARS);
    }

    #[test]
    fn title_falls_back_when_nothing_usable() {
        assert_eq!(pdf_title("!!!\nbody"), "note");
        assert_eq!(pdf_file_name(""), "note.pdf");
    }

    #[test]
    fn file_name_gets_pdf_extension() {
        assert_eq!(pdf_file_name("standup notes"), "standup_notes.pdf");
    }
}

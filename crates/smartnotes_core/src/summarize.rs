//! Summarizer collaborator contract.
//!
//! # Responsibility
//! - Define the boundary the collection uses to request note summaries.
//! - Provide the canonical prompt so hosts wire their LLM client
//!   consistently.
//!
//! # Invariants
//! - Provider failure messages cross the boundary verbatim; the core never
//!   rewrites or swallows them.
//! - The network call itself lives behind this trait, outside the core.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Instruction line prepended to the note text when building a prompt.
pub const SUMMARY_PROMPT_PREFIX: &str = "Summarize this note clearly and concisely:";

/// Builds the full prompt for one note.
pub fn summary_prompt(text: &str) -> String {
    format!("{SUMMARY_PROMPT_PREFIX}\n\n{text}")
}

pub type SummarizeResult<T> = Result<T, SummarizeError>;

/// Provider failure surfaced to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeError {
    message: String,
}

impl SummarizeError {
    /// Wraps a provider failure message without alteration.
    pub fn provider(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The provider message verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for SummarizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SummarizeError {}

/// External summarization collaborator.
///
/// Implementations may block; the collection records `Pending` before the
/// call and the final state after it, so hosts can render progress. Hosts
/// doing real network calls should enforce their own timeout here.
pub trait Summarizer {
    /// Produces a plain-text summary of the given note text.
    fn summarize(&self, text: &str) -> SummarizeResult<String>;
}

#[cfg(test)]
mod tests {
    use super::summary_prompt;

    #[test]
    fn prompt_wraps_note_text() {
        let prompt = summary_prompt("milk, eggs");
        assert!(prompt.starts_with("Summarize this note"));
        assert!(prompt.ends_with("\n\nmilk, eggs"));
    }
}

//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its derived display state.
//! - Provide lifecycle helpers for summary and font-size transitions.
//!
//! # Invariants
//! - `id` is stable for the note's lifetime and never reused.
//! - Derived state (summary, font size, favorite) lives on the note value,
//!   so list reordering or deletion can never attach it to the wrong note.
//! - `font_size` never drops below [`FONT_SIZE_MIN`].

/// Stable identifier assigned by the collection at creation.
///
/// Monotonically increasing; deletion never frees an id for reuse.
pub type NoteId = u64;

/// Font size a note starts with.
pub const FONT_SIZE_DEFAULT: i32 = 16;
/// Smallest font size a note can be adjusted to.
pub const FONT_SIZE_MIN: i32 = 10;
/// Step applied by the host's increase/decrease controls.
pub const FONT_SIZE_STEP: i32 = 2;

/// Visible lifecycle of a note's AI summary.
///
/// Summaries are derived session state. They are never persisted and reset
/// to [`SummaryState::None`] on load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryState {
    /// No summary requested yet (or cleared).
    #[default]
    None,
    /// Summarizer call is in flight.
    Pending,
    /// Summarizer succeeded; holds the summary text.
    Ready(String),
    /// Summarizer failed; holds the provider message verbatim.
    Failed(String),
}

impl SummaryState {
    /// Returns the summary text when the state is `Ready`.
    pub fn ready_text(&self) -> Option<&str> {
        match self {
            Self::Ready(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the provider failure message when the state is `Failed`.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Returns whether a summarizer call is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A single user-authored note plus its derived display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Stable id used by every collection operation.
    pub id: NoteId,
    /// Free text as the user wrote it. Non-blank at creation.
    pub text: String,
    /// Display font size in pixels. Defaults to 16, floor 10.
    pub font_size: i32,
    /// Favorite marker.
    pub is_favorite: bool,
    /// Summary lifecycle for this note.
    pub summary: SummaryState,
}

impl Note {
    /// Creates a note with default derived state.
    ///
    /// Text validation is the collection's job; this constructor does not
    /// reject blank input.
    pub fn new(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            font_size: FONT_SIZE_DEFAULT,
            is_favorite: false,
            summary: SummaryState::None,
        }
    }

    /// Flips the favorite marker and returns the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Applies a font-size delta with the minimum-size floor.
    ///
    /// Returns the effective size. There is no upper bound; extreme deltas
    /// saturate instead of overflowing.
    pub fn adjust_font_size(&mut self, delta: i32) -> i32 {
        self.font_size = self.font_size.saturating_add(delta).max(FONT_SIZE_MIN);
        self.font_size
    }

    /// Marks a summarizer call as in flight.
    pub fn begin_summary(&mut self) {
        self.summary = SummaryState::Pending;
    }

    /// Records a successful summary.
    pub fn complete_summary(&mut self, text: impl Into<String>) {
        self.summary = SummaryState::Ready(text.into());
    }

    /// Records a summarizer failure with the provider message verbatim.
    pub fn fail_summary(&mut self, message: impl Into<String>) {
        self.summary = SummaryState::Failed(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, SummaryState, FONT_SIZE_DEFAULT, FONT_SIZE_MIN, FONT_SIZE_STEP};

    #[test]
    fn new_note_uses_default_derived_state() {
        let note = Note::new(7, "hello");
        assert_eq!(note.font_size, FONT_SIZE_DEFAULT);
        assert!(!note.is_favorite);
        assert_eq!(note.summary, SummaryState::None);
    }

    #[test]
    fn font_size_steps_down_to_floor_then_stops() {
        let mut note = Note::new(0, "x");
        for _ in 0..3 {
            note.adjust_font_size(-FONT_SIZE_STEP);
        }
        assert_eq!(note.font_size, FONT_SIZE_MIN);
        assert_eq!(note.adjust_font_size(-FONT_SIZE_STEP), FONT_SIZE_MIN);
    }

    #[test]
    fn font_size_has_no_upper_bound() {
        let mut note = Note::new(0, "x");
        assert_eq!(note.adjust_font_size(100), FONT_SIZE_DEFAULT + 100);
    }

    #[test]
    fn font_size_saturates_on_extreme_deltas() {
        let mut note = Note::new(0, "x");
        assert_eq!(note.adjust_font_size(i32::MAX), i32::MAX);
        assert_eq!(note.adjust_font_size(i32::MIN), FONT_SIZE_MIN);
    }

    #[test]
    fn summary_lifecycle_transitions() {
        let mut note = Note::new(0, "x");
        note.begin_summary();
        assert!(note.summary.is_pending());
        note.complete_summary("short");
        assert_eq!(note.summary.ready_text(), Some("short"));
        note.fail_summary("quota exceeded");
        assert_eq!(note.summary.failure_message(), Some("quota exceeded"));
        assert_eq!(note.summary.ready_text(), None);
    }
}

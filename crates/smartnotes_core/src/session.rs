//! Explicit per-session UI state.
//!
//! # Responsibility
//! - Hold the transient flags a host view needs between renders: theme
//!   choice and the single in-progress edit draft.
//!
//! # Invariants
//! - At most one note is in edit mode at a time.
//! - Session state never reaches the store; it resets with the process.

use crate::model::note::NoteId;

/// Light/dark display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// In-progress edit of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    /// Note being edited.
    pub id: NoteId,
    /// Draft text, updated as the user types.
    pub text: String,
}

/// All transient session state in one value.
///
/// Replaces ambient per-flag globals: action handlers take and return this
/// struct explicitly.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Active display theme.
    pub theme: Theme,
    /// Current edit draft, if any note is in edit mode.
    pub edit: Option<EditDraft>,
}

impl SessionState {
    /// Creates a session with defaults (light theme, no edit in progress).
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the display theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Starts editing one note, replacing any previous draft.
    pub fn begin_edit(&mut self, id: NoteId, current_text: impl Into<String>) {
        self.edit = Some(EditDraft {
            id,
            text: current_text.into(),
        });
    }

    /// Whether the given note is in edit mode.
    pub fn is_editing(&self, id: NoteId) -> bool {
        self.edit.as_ref().is_some_and(|draft| draft.id == id)
    }

    /// Mutable access to the draft text while editing.
    pub fn edit_draft_mut(&mut self) -> Option<&mut String> {
        self.edit.as_mut().map(|draft| &mut draft.text)
    }

    /// Discards the current draft without applying it.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Takes the draft out of the session for the save action.
    pub fn take_edit(&mut self) -> Option<EditDraft> {
        self.edit.take()
    }
}

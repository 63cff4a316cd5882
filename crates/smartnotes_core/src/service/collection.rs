//! Note collection manager.
//!
//! # Responsibility
//! - Own the ordered note list and all derived per-note state.
//! - Persist the text list through the store after every mutation.
//! - Drive summarizer/exporter collaborators per note.
//!
//! # Invariants
//! - Every operation addresses notes by stable id; list position is a
//!   display concern only, so deletion can never misattach derived state.
//! - Each mutation completes fully (validate, mutate, persist) before the
//!   next is accepted; there is one writer of the backing file.
//! - A summarizer failure touches only the target note's summary state.

use crate::export::{pdf_file_name, pdf_title, ExportError, Exporter, PdfDocument};
use crate::model::note::{Note, NoteId};
use crate::search::text::{search_notes, SearchHit};
use crate::store::{NoteStore, StoreError, StoreResult};
use crate::summarize::{SummarizeError, Summarizer};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Semantic error for collection operations.
#[derive(Debug)]
pub enum CollectionError {
    /// Note text was empty or whitespace-only.
    BlankNote,
    /// No note with the given id exists.
    NoteNotFound(NoteId),
    /// Export requested before a summary was ready for the note.
    SummaryNotReady(NoteId),
    /// Store-layer failure.
    Store(StoreError),
    /// Summarizer collaborator failure, message verbatim.
    Summarize(SummarizeError),
    /// Exporter collaborator failure, message verbatim.
    Export(ExportError),
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankNote => write!(f, "note text cannot be empty"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::SummaryNotReady(id) => write!(f, "no summary ready for note {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Summarize(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Summarize(err) => Some(err),
            Self::Export(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CollectionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<SummarizeError> for CollectionError {
    fn from(value: SummarizeError) -> Self {
        Self::Summarize(value)
    }
}

impl From<ExportError> for CollectionError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Ordered note collection backed by a [`NoteStore`].
#[derive(Debug)]
pub struct NoteCollection<S: NoteStore> {
    store: S,
    notes: Vec<Note>,
    next_id: NoteId,
}

impl<S: NoteStore> NoteCollection<S> {
    /// Loads the collection from the store.
    ///
    /// Texts get fresh ids in file order; derived state starts at defaults.
    /// A missing backing file yields an empty collection; a corrupt one is
    /// an error, never an empty collection.
    pub fn load(store: S) -> CollectionResult<Self> {
        let texts = store.load()?;
        let notes: Vec<Note> = texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| Note::new(position as NoteId, text))
            .collect();
        let next_id = notes.len() as NoteId;

        info!(
            "event=collection_loaded module=collection status=ok notes={}",
            notes.len()
        );

        Ok(Self {
            store,
            notes,
            next_id,
        })
    }

    /// Appends a new note and persists.
    ///
    /// Rejects blank or whitespace-only text with no state change.
    pub fn add(&mut self, text: impl Into<String>) -> CollectionResult<NoteId> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CollectionError::BlankNote);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note::new(id, text));
        self.persist()?;

        info!(
            "event=note_added module=collection status=ok id={id} total={}",
            self.notes.len()
        );
        Ok(id)
    }

    /// Replaces one note's text and persists.
    ///
    /// Derived state of the note (and of every other note) is untouched.
    pub fn edit(&mut self, id: NoteId, new_text: impl Into<String>) -> CollectionResult<()> {
        let new_text = new_text.into();
        if new_text.trim().is_empty() {
            return Err(CollectionError::BlankNote);
        }

        let position = self.position_of(id)?;
        self.notes[position].text = new_text;
        self.persist()?;

        info!("event=note_edited module=collection status=ok id={id}");
        Ok(())
    }

    /// Removes one note and persists.
    ///
    /// Derived state travels with each note value, so later notes keep
    /// their summaries, sizes and favorite flags under their stable ids.
    pub fn delete(&mut self, id: NoteId) -> CollectionResult<()> {
        let position = self.position_of(id)?;
        self.notes.remove(position);
        self.persist()?;

        info!(
            "event=note_deleted module=collection status=ok id={id} total={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Flips one note's favorite flag. Session state, not persisted.
    pub fn toggle_favorite(&mut self, id: NoteId) -> CollectionResult<bool> {
        let position = self.position_of(id)?;
        Ok(self.notes[position].toggle_favorite())
    }

    /// Adjusts one note's font size with the minimum floor applied.
    ///
    /// Returns the effective size. Session state, not persisted.
    pub fn adjust_font_size(&mut self, id: NoteId, delta: i32) -> CollectionResult<i32> {
        let position = self.position_of(id)?;
        Ok(self.notes[position].adjust_font_size(delta))
    }

    /// Requests a summary for one note from the collaborator.
    ///
    /// The note is marked `Pending` for the duration of the call, then
    /// `Ready` or `Failed`. Failure leaves the note text and every other
    /// note untouched; the provider message is both recorded on the note
    /// and returned to the caller.
    pub fn summarize(
        &mut self,
        id: NoteId,
        summarizer: &dyn Summarizer,
    ) -> CollectionResult<String> {
        let position = self.position_of(id)?;
        self.notes[position].begin_summary();

        match summarizer.summarize(self.notes[position].text.as_str()) {
            Ok(summary) => {
                self.notes[position].complete_summary(summary.clone());
                info!(
                    "event=note_summarized module=collection status=ok id={id} summary_len={}",
                    summary.len()
                );
                Ok(summary)
            }
            Err(err) => {
                self.notes[position].fail_summary(err.message());
                warn!("event=note_summarized module=collection status=error id={id}");
                Err(CollectionError::Summarize(err))
            }
        }
    }

    /// Exports one note's ready summary as a named PDF document.
    ///
    /// Requires a `Ready` summary; the title and file name derive from the
    /// note text's first line.
    pub fn export_summary(
        &self,
        id: NoteId,
        exporter: &dyn Exporter,
    ) -> CollectionResult<PdfDocument> {
        let position = self.position_of(id)?;
        let note = &self.notes[position];
        let summary = note
            .summary
            .ready_text()
            .ok_or(CollectionError::SummaryNotReady(id))?;

        let bytes = exporter.render_pdf(&pdf_title(&note.text), summary)?;
        info!(
            "event=summary_exported module=collection status=ok id={id} bytes={}",
            bytes.len()
        );

        Ok(PdfDocument {
            file_name: pdf_file_name(&note.text),
            bytes,
        })
    }

    /// Case-insensitive substring search over note text.
    ///
    /// Hit positions index the current ordered list for action dispatch.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        search_notes(&self.notes, query)
    }

    /// Ordered view of all notes.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up one note by stable id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Number of notes in the collection.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position_of(&self, id: NoteId) -> CollectionResult<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(CollectionError::NoteNotFound(id))
    }

    fn persist(&mut self) -> StoreResult<()> {
        let texts: Vec<&str> = self.notes.iter().map(|note| note.text.as_str()).collect();
        self.store.save(&texts)
    }
}

//! Case-insensitive substring search over note text.
//!
//! # Responsibility
//! - Filter the ordered note list by a user query.
//! - Return typed hits carrying both stable id and current position.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment, no tokenization.
//! - Hit positions index into the list the caller passed in, so they stay
//!   valid for action dispatch until the next mutation.
//! - Blank queries return no hits.

use crate::model::note::{Note, NoteId};

/// Single search hit returned by [`search_notes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Stable id of the matching note.
    pub id: NoteId,
    /// Current position of the note in the ordered list.
    pub position: usize,
    /// Full note text, for display without a second lookup.
    pub text: String,
}

/// Filters notes whose text contains `query`, ignoring case.
///
/// Query whitespace is part of the match. Hits keep list order. A blank or
/// whitespace-only query yields nothing.
pub fn search_notes(notes: &[Note], query: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    if needle.trim().is_empty() {
        return Vec::new();
    }

    notes
        .iter()
        .enumerate()
        .filter(|(_, note)| note.text.to_lowercase().contains(&needle))
        .map(|(position, note)| SearchHit {
            id: note.id,
            position,
            text: note.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::search_notes;
    use crate::model::note::Note;

    fn notes(texts: &[&str]) -> Vec<Note> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Note::new(i as u64, *text))
            .collect()
    }

    #[test]
    fn matches_are_case_insensitive() {
        let notes = notes(&["Buy Milk", "standup agenda", "MILKSHAKE recipe"]);
        let hits = search_notes(&notes, "milk");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].position, 0);
        assert_eq!(hits[1].position, 2);
    }

    #[test]
    fn positions_track_the_passed_list() {
        let notes = notes(&["alpha", "beta", "alphabet"]);
        let hits = search_notes(&notes, "ALPHA");
        let positions: Vec<usize> = hits.iter().map(|hit| hit.position).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn query_whitespace_is_significant() {
        let notes = notes(&["drink milk now", "milkshake recipe"]);
        let hits = search_notes(&notes, "milk ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position, 0);
    }

    #[test]
    fn blank_query_returns_nothing() {
        let notes = notes(&["anything"]);
        assert!(search_notes(&notes, "").is_empty());
        assert!(search_notes(&notes, "   ").is_empty());
    }

    #[test]
    fn no_match_returns_empty() {
        let notes = notes(&["alpha"]);
        assert!(search_notes(&notes, "omega").is_empty());
    }
}

//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep identity and derived state on one value per note.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`, never by list position.
//! - Derived state travels with the note value it belongs to.

pub mod note;

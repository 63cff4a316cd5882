//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and collaborator calls into use-case level APIs.
//! - Keep host/view layers decoupled from persistence details.

pub mod collection;

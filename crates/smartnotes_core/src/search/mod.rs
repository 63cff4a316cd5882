//! Note text search entry points.
//!
//! # Responsibility
//! - Expose substring search over the in-memory note list.
//! - Keep search result shaping inside core.

pub mod text;

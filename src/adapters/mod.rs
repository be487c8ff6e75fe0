//! External system integrations for Labnotes.
//!
//! - [`notes`] - File-backed clinical note store
//!
//! # Design Pattern
//!
//! Adapters isolate storage details behind a trait so the command layer
//! depends on [`notes::NoteRepository`] rather than on the filesystem layout.

pub mod notes;

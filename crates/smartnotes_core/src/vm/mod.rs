//! View-model layer: response wrapping and screen orchestration.
//!
//! # Responsibility
//! - Bind user edits to the editor through the undo caretaker.
//! - Translate use-case outcomes into `Response`-wrapped live streams.

pub mod note_detail;
pub mod notes;
pub mod response;

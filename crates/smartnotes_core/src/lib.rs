//! Core domain logic for SmartNotes.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod editor;
pub mod files;
pub mod live;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod repo;
pub mod scheduler;
pub mod undo;
pub mod usecase;
pub mod vm;

pub use editor::NoteEditor;
pub use files::{FileExplorer, FileError, FileExtension};
pub use live::LiveValue;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NotePriority};
pub use model::photo::{Photo, PhotoId};
pub use model::view_type::ViewType;
pub use prefs::{PreferenceSource, PrefsError};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use scheduler::{BackgroundScheduler, InlineScheduler, Scheduler};
pub use undo::{Caretaker, Memento, Originator, UndoError, DEFAULT_UNDO_CAPACITY};
pub use usecase::note_usecase::NoteUseCase;
pub use usecase::user_usecase::UserUseCase;
pub use vm::note_detail::NoteDetailViewModel;
pub use vm::notes::NotesViewModel;
pub use vm::response::{OperationError, Response};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

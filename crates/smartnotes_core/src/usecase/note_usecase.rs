//! Note use-case service.
//!
//! # Responsibility
//! - Provide save/delete/fetch/export entry points over the note
//!   repository and the file explorer.
//!
//! # Invariants
//! - `save` is an upsert: edit when the note id exists, create
//!   otherwise.
//! - Export writes the title line, a blank line, then the body; a
//!   blank title produces the body alone.
//! - The repository is shared behind a mutex so background jobs from
//!   independent operations serialize at the store.

use crate::files::{FileExplorer, FileExtension, FileResult};
use crate::model::note::Note;
use crate::repo::note_repo::{NoteRepository, RepoResult};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

const DEFAULT_EXPORT_FILE_NAME: &str = "no name";

/// Use-case facade for note persistence and export.
pub struct NoteUseCase<R: NoteRepository> {
    repo: Mutex<R>,
    files: FileExplorer,
}

impl<R: NoteRepository> NoteUseCase<R> {
    /// Creates a use case over the provided repository and explorer.
    pub fn new(repo: R, files: FileExplorer) -> Self {
        Self {
            repo: Mutex::new(repo),
            files,
        }
    }

    /// Saves the note: edits the stored revision when one exists,
    /// creates the note otherwise.
    pub fn save(&self, note: &Note) -> RepoResult<()> {
        let mut repo = self.lock_repo();
        let outcome = if repo.find_by_id(note.id)?.is_some() {
            repo.edit(note)
        } else {
            repo.create(note).map(|_| ())
        };

        match &outcome {
            Ok(()) => info!("event=note_save module=usecase status=ok note_id={}", note.id),
            Err(err) => error!(
                "event=note_save module=usecase status=error note_id={} error={err}",
                note.id
            ),
        }
        outcome
    }

    /// Deletes one note.
    pub fn delete(&self, note: &Note) -> RepoResult<()> {
        let outcome = self.lock_repo().delete(note);
        match &outcome {
            Ok(()) => info!(
                "event=note_delete module=usecase status=ok note_id={}",
                note.id
            ),
            Err(err) => error!(
                "event=note_delete module=usecase status=error note_id={} error={err}",
                note.id
            ),
        }
        outcome
    }

    /// Deletes a batch of notes in one transaction.
    pub fn delete_many(&self, notes: &[Note]) -> RepoResult<()> {
        let outcome = self.lock_repo().delete_many(notes);
        match &outcome {
            Ok(()) => info!(
                "event=note_delete_many module=usecase status=ok count={}",
                notes.len()
            ),
            Err(err) => error!(
                "event=note_delete_many module=usecase status=error count={} error={err}",
                notes.len()
            ),
        }
        outcome
    }

    /// Fetches all notes, newest first.
    pub fn fetch_all(&self) -> RepoResult<Vec<Note>> {
        self.lock_repo().fetch_all()
    }

    /// Exports the note as a plain-text file into `output_directory`
    /// and returns the created file path.
    ///
    /// The file name is the sanitized note title, `no name` when the
    /// title is blank, with a numeric suffix when the name is taken.
    pub fn export_to_file(&self, note: &Note, output_directory: &Path) -> FileResult<PathBuf> {
        let name = if note.title.trim().is_empty() {
            DEFAULT_EXPORT_FILE_NAME
        } else {
            note.title.trim()
        };

        let outcome = self
            .files
            .create_file(output_directory, name, FileExtension::Text)
            .and_then(|path| {
                self.files.write_text(&path, &note_file_contents(note))?;
                Ok(path)
            });

        match &outcome {
            Ok(path) => info!(
                "event=note_export module=usecase status=ok note_id={} path={}",
                note.id,
                path.display()
            ),
            Err(err) => error!(
                "event=note_export module=usecase status=error note_id={} error={err}",
                note.id
            ),
        }
        outcome
    }

    fn lock_repo(&self) -> MutexGuard<'_, R> {
        self.repo
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Plain-text representation of a note: title line, blank line, body.
///
/// A blank title collapses to the body alone, without a leading blank
/// block.
fn note_file_contents(note: &Note) -> String {
    if note.title.trim().is_empty() {
        note.text.clone()
    } else {
        format!("{}\n\n{}", note.title, note.text)
    }
}

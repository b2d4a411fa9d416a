//! Note detail orchestrator: editing, undo and persistence streams.
//!
//! # Responsibility
//! - Snapshot the pre-mutation editor state before every field edit so
//!   one undo rolls back exactly one logical edit.
//! - Run save/delete/export through the scheduler, publishing
//!   `Loading` synchronously and exactly one terminal response.
//!
//! # Invariants
//! - `edit_note` replaces the whole state without recording history.
//! - Save, delete and export are independent streams; concurrent
//!   operations serialize only at the shared repository mutex.
//! - The editor and caretaker are owned by this session and are not
//!   shared across sessions or threads.

use crate::editor::NoteEditor;
use crate::live::LiveValue;
use crate::model::note::{Note, NotePriority};
use crate::model::photo::Photo;
use crate::scheduler::Scheduler;
use crate::undo::{Caretaker, UndoError};
use crate::usecase::note_usecase::NoteUseCase;
use crate::usecase::user_usecase::UserUseCase;
use crate::repo::note_repo::NoteRepository;
use crate::vm::response::Response;
use log::info;
use std::path::Path;
use std::sync::Arc;

/// View model for the note create/edit screen.
pub struct NoteDetailViewModel<R: NoteRepository + Send + 'static, S: Scheduler> {
    notes: Arc<NoteUseCase<R>>,
    user: Arc<UserUseCase>,
    editor: NoteEditor,
    caretaker: Caretaker<Note>,
    scheduler: S,
    live_undo: LiveValue<Note>,
    live_has_undo: LiveValue<bool>,
    live_save: LiveValue<Response<()>>,
    live_delete: LiveValue<Response<()>>,
    live_export: LiveValue<Response<()>>,
}

impl<R: NoteRepository + Send + 'static, S: Scheduler> NoteDetailViewModel<R, S> {
    /// Creates a session editing a pristine draft.
    pub fn new(notes: Arc<NoteUseCase<R>>, user: Arc<UserUseCase>, scheduler: S) -> Self {
        Self::with_editor(notes, user, scheduler, NoteEditor::new())
    }

    /// Creates a session editing an existing note.
    pub fn open(
        notes: Arc<NoteUseCase<R>>,
        user: Arc<UserUseCase>,
        scheduler: S,
        note: Note,
    ) -> Self {
        Self::with_editor(notes, user, scheduler, NoteEditor::with_note(note))
    }

    fn with_editor(
        notes: Arc<NoteUseCase<R>>,
        user: Arc<UserUseCase>,
        scheduler: S,
        editor: NoteEditor,
    ) -> Self {
        Self {
            notes,
            user,
            editor,
            caretaker: Caretaker::new(),
            scheduler,
            live_undo: LiveValue::new(),
            live_has_undo: LiveValue::new(),
            live_save: LiveValue::new(),
            live_delete: LiveValue::new(),
            live_export: LiveValue::new(),
        }
    }

    /// Current note state.
    pub fn note(&self) -> &Note {
        self.editor.note()
    }

    /// Live stream of every editor state change.
    pub fn live_note(&self) -> LiveValue<Note> {
        self.editor.live_note()
    }

    /// Live stream publishing the restored note after each undo.
    pub fn live_undo(&self) -> LiveValue<Note> {
        self.live_undo.clone()
    }

    /// Live stream of undo availability.
    pub fn live_has_undo(&self) -> LiveValue<bool> {
        self.live_has_undo.clone()
    }

    /// Response stream of the save operation.
    pub fn live_save(&self) -> LiveValue<Response<()>> {
        self.live_save.clone()
    }

    /// Response stream of the delete operation.
    pub fn live_delete(&self) -> LiveValue<Response<()>> {
        self.live_delete.clone()
    }

    /// Response stream of the export operation.
    pub fn live_export(&self) -> LiveValue<Response<()>> {
        self.live_export.clone()
    }

    /// Replaces the note title, snapshotting the pre-mutation state.
    pub fn edit_title(&mut self, value: &str) {
        self.snapshot(|editor| editor.set_title(value));
    }

    /// Replaces the note body text, snapshotting the pre-mutation state.
    pub fn edit_text(&mut self, value: &str) {
        self.snapshot(|editor| editor.set_text(value));
    }

    /// Replaces the note priority, snapshotting the pre-mutation state.
    pub fn edit_priority(&mut self, value: NotePriority) {
        self.snapshot(|editor| editor.set_priority(value));
    }

    /// Attaches a photo, snapshotting the pre-mutation state.
    pub fn add_photo(&mut self, path: &str) {
        self.snapshot(|editor| editor.add_photo(path));
    }

    /// Detaches a photo, snapshotting the pre-mutation state.
    pub fn remove_photo(&mut self, photo: &Photo) {
        self.snapshot(|editor| editor.remove_photo(photo));
    }

    /// Replaces the whole note state without recording history.
    pub fn edit_note(&mut self, note: Note) {
        self.editor.replace(note);
    }

    /// Reverts the most recent field edit.
    ///
    /// Publishes the restored note on the undo stream and refreshed
    /// undo availability.
    pub fn undo(&mut self) -> Result<(), UndoError> {
        self.caretaker.undo(&mut self.editor)?;
        info!("event=note_undo module=vm status=ok note_id={}", self.editor.note().id);
        self.live_undo.publish(self.editor.note().clone());
        self.live_has_undo.publish(self.caretaker.has_undo());
        Ok(())
    }

    /// Whether at least one edit can be undone.
    pub fn has_undo(&self) -> bool {
        self.caretaker.has_undo()
    }

    /// Persists the current note.
    ///
    /// Emits `Loading` synchronously, then exactly one terminal
    /// response on the save stream.
    pub fn save(&self) {
        let note = self.editor.note().clone();
        let notes = Arc::clone(&self.notes);
        let live = self.live_save.clone();

        live.publish(Response::Loading);
        self.scheduler.dispatch(Box::new(move || {
            let response = match notes.save(&note) {
                Ok(()) => Response::Success(()),
                Err(err) => Response::Failure(err.into()),
            };
            live.publish(response);
        }));
    }

    /// Deletes the current note.
    ///
    /// Emits `Loading` synchronously, then exactly one terminal
    /// response on the delete stream. The editor state is untouched
    /// either way.
    pub fn delete(&self) {
        let note = self.editor.note().clone();
        let notes = Arc::clone(&self.notes);
        let live = self.live_delete.clone();

        live.publish(Response::Loading);
        self.scheduler.dispatch(Box::new(move || {
            let response = match notes.delete(&note) {
                Ok(()) => Response::Success(()),
                Err(err) => Response::Failure(err.into()),
            };
            live.publish(response);
        }));
    }

    /// Exports the current note as a text file.
    ///
    /// The target is the export directory below `desired_directory`
    /// (or the documents directory). Emits `Loading` synchronously,
    /// then exactly one terminal response on the export stream.
    pub fn export_to_file(&self, desired_directory: Option<&Path>) {
        let note = self.editor.note().clone();
        let notes = Arc::clone(&self.notes);
        let user = Arc::clone(&self.user);
        let live = self.live_export.clone();
        let desired = desired_directory.map(Path::to_path_buf);

        live.publish(Response::Loading);
        self.scheduler.dispatch(Box::new(move || {
            let response = user
                .export_directory(desired.as_deref())
                .and_then(|directory| notes.export_to_file(&note, &directory))
                .map(|_| ())
                .map_or_else(|err| Response::Failure(err.into()), Response::Success);
            live.publish(response);
        }));
    }

    fn snapshot(&mut self, mutate: impl FnOnce(&mut NoteEditor)) {
        self.caretaker.save(&self.editor);
        mutate(&mut self.editor);
        self.live_has_undo.publish(self.caretaker.has_undo());
    }
}

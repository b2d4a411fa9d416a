//! Notes overview orchestrator: live list, batch delete, view mode.
//!
//! # Responsibility
//! - Keep the overview list stream current (newest note first).
//! - Run batch deletes through the scheduler with response wrapping.
//! - Pass the view-mode preference through synchronously.

use crate::live::LiveValue;
use crate::model::note::Note;
use crate::model::view_type::ViewType;
use crate::prefs::PrefsResult;
use crate::repo::note_repo::NoteRepository;
use crate::scheduler::Scheduler;
use crate::usecase::note_usecase::NoteUseCase;
use crate::usecase::user_usecase::UserUseCase;
use crate::vm::response::Response;
use log::error;
use std::sync::Arc;

/// View model for the notes overview screen.
pub struct NotesViewModel<R: NoteRepository + Send + 'static, S: Scheduler> {
    notes: Arc<NoteUseCase<R>>,
    user: Arc<UserUseCase>,
    scheduler: S,
    live_notes: LiveValue<Vec<Note>>,
    live_delete: LiveValue<Response<()>>,
}

impl<R: NoteRepository + Send + 'static, S: Scheduler> NotesViewModel<R, S> {
    /// Creates the view model and schedules the initial list fetch.
    pub fn new(notes: Arc<NoteUseCase<R>>, user: Arc<UserUseCase>, scheduler: S) -> Self {
        let vm = Self {
            notes,
            user,
            scheduler,
            live_notes: LiveValue::new(),
            live_delete: LiveValue::new(),
        };
        vm.refresh();
        vm
    }

    /// Live stream of all notes, newest first.
    pub fn live_notes(&self) -> LiveValue<Vec<Note>> {
        self.live_notes.clone()
    }

    /// Response stream of the batch delete operation.
    pub fn live_delete(&self) -> LiveValue<Response<()>> {
        self.live_delete.clone()
    }

    /// Re-fetches the note list and publishes it.
    pub fn refresh(&self) {
        let notes = Arc::clone(&self.notes);
        let live = self.live_notes.clone();
        self.scheduler.dispatch(Box::new(move || {
            publish_all(&notes, &live);
        }));
    }

    /// Deletes a batch of notes.
    ///
    /// Emits `Loading` synchronously, then exactly one terminal
    /// response; the list stream is refreshed after a successful
    /// delete.
    pub fn delete(&self, values: Vec<Note>) {
        let notes = Arc::clone(&self.notes);
        let live = self.live_delete.clone();
        let live_notes = self.live_notes.clone();

        live.publish(Response::Loading);
        self.scheduler.dispatch(Box::new(move || {
            match notes.delete_many(&values) {
                Ok(()) => {
                    live.publish(Response::Success(()));
                    publish_all(&notes, &live_notes);
                }
                Err(err) => live.publish(Response::Failure(err.into())),
            }
        }));
    }

    /// Returns the stored view mode.
    pub fn view_type(&self) -> PrefsResult<ViewType> {
        self.user.view_type()
    }

    /// Persists the view mode.
    pub fn set_view_type(&self, value: ViewType) -> PrefsResult<()> {
        self.user.save_view_type(value)
    }
}

fn publish_all<R: NoteRepository>(notes: &NoteUseCase<R>, live: &LiveValue<Vec<Note>>) {
    match notes.fetch_all() {
        Ok(all) => live.publish(all),
        Err(err) => error!("event=notes_fetch module=vm status=error error={err}"),
    }
}

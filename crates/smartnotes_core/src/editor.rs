//! In-memory note editor, the originator of the undo history.
//!
//! # Responsibility
//! - Hold exactly one current `Note` value per editing session.
//! - Funnel every mutation through copy-with semantics and publish the
//!   new value to observers.
//!
//! # Invariants
//! - The note is mutable only through the editor's own methods.
//! - Every mutation, including restore, publishes the current value on
//!   the live channel.

use crate::live::LiveValue;
use crate::model::note::{Note, NotePriority};
use crate::model::photo::Photo;
use crate::undo::{Memento, Originator};

/// Mutable in-memory representation of a note being composed.
pub struct NoteEditor {
    note: Note,
    live: LiveValue<Note>,
}

impl Default for NoteEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteEditor {
    /// Creates an editor starting from a pristine draft.
    pub fn new() -> Self {
        Self::with_note(Note::draft())
    }

    /// Creates an editor starting from an existing note.
    pub fn with_note(note: Note) -> Self {
        let live = LiveValue::new();
        live.publish(note.clone());
        Self { note, live }
    }

    /// Borrows the current note value.
    pub fn note(&self) -> &Note {
        &self.note
    }

    /// Returns a handle to the live note stream.
    pub fn live_note(&self) -> LiveValue<Note> {
        self.live.clone()
    }

    /// Replaces the note title.
    pub fn set_title(&mut self, value: &str) {
        self.apply(self.note.with_title(value));
    }

    /// Replaces the note body text.
    pub fn set_text(&mut self, value: &str) {
        self.apply(self.note.with_text(value));
    }

    /// Replaces the note priority.
    pub fn set_priority(&mut self, value: NotePriority) {
        self.apply(self.note.with_priority(value));
    }

    /// Appends a photo with a fresh id for `path`.
    pub fn add_photo(&mut self, path: &str) {
        self.apply(self.note.with_photo(Photo::from_path(path)));
    }

    /// Removes the photo identified by `photo.id`.
    pub fn remove_photo(&mut self, photo: &Photo) {
        self.apply(self.note.without_photo(photo));
    }

    /// Replaces the whole note state, e.g. when opening an existing
    /// note for editing.
    pub fn replace(&mut self, note: Note) {
        self.apply(note);
    }

    fn apply(&mut self, next: Note) {
        self.note = next.clone();
        self.live.publish(next);
    }
}

impl Originator<Note> for NoteEditor {
    fn capture(&self) -> Memento<Note> {
        // Note values are immutable once built, so a direct capture of
        // the current value suffices.
        Memento::new(self.note.clone())
    }

    fn restore(&mut self, snapshot: Memento<Note>) {
        self.apply(snapshot.into_value());
    }
}

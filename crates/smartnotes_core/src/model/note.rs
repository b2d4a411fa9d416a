//! Note domain model.
//!
//! # Responsibility
//! - Define the note aggregate (title, text, priority, photos).
//! - Provide copy-with helpers used by the editing core.
//!
//! # Invariants
//! - `id` and `created_at` are fixed for the lifetime of a note.
//! - Field edits always build a fresh `Note` value.

use crate::model::photo::Photo;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Priority tag attached to a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotePriority {
    /// No priority assigned.
    #[default]
    #[serde(rename = "no_priority")]
    None,
    Low,
    Normal,
    High,
}

/// The core user-facing entity: a short text note with optional photos.
///
/// Equality is derived over all fields, but list-diffing identity is the
/// `id` alone; two notes with the same id are revisions of one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable note id.
    pub id: NoteId,
    /// Title line. May be empty.
    pub title: String,
    /// Body text. May be empty.
    pub text: String,
    /// Priority tag.
    pub priority: NotePriority,
    /// Creation time in epoch milliseconds. Immutable once set.
    pub created_at: i64,
    /// Attached photos in insertion order.
    pub photos: Vec<Photo>,
}

impl Note {
    /// Creates a note with a generated id and the current creation time.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            text: text.into(),
            priority: NotePriority::default(),
            created_at: now_epoch_ms(),
            photos: Vec::new(),
        }
    }

    /// Creates the pristine draft a new editing session starts from.
    pub fn draft() -> Self {
        Self::new("", "")
    }

    /// Returns a copy with a replaced title.
    pub fn with_title(&self, value: impl Into<String>) -> Self {
        Self {
            title: value.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a replaced body text.
    pub fn with_text(&self, value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a replaced priority.
    pub fn with_priority(&self, value: NotePriority) -> Self {
        Self {
            priority: value,
            ..self.clone()
        }
    }

    /// Returns a copy with `photo` appended to the photo collection.
    pub fn with_photo(&self, photo: Photo) -> Self {
        let mut next = self.clone();
        next.photos.push(photo);
        next
    }

    /// Returns a copy with the photo identified by `photo.id` removed.
    pub fn without_photo(&self, photo: &Photo) -> Self {
        let mut next = self.clone();
        next.photos.retain(|existing| existing.id != photo.id);
        next
    }

    /// Returns whether `other` is a revision of the same note.
    pub fn is_same_note(&self, other: &Note) -> bool {
        self.id == other.id
    }
}

/// Current wall-clock time in epoch milliseconds.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Note, NotePriority};
    use crate::model::photo::Photo;

    #[test]
    fn draft_starts_pristine() {
        let note = Note::draft();

        assert!(!note.id.is_nil());
        assert_eq!(note.title, "");
        assert_eq!(note.text, "");
        assert_eq!(note.priority, NotePriority::None);
        assert!(note.photos.is_empty());
        assert!(note.created_at > 0);
    }

    #[test]
    fn copy_with_helpers_keep_identity() {
        let note = Note::draft();
        let edited = note.with_title("Groceries").with_priority(NotePriority::High);

        assert!(note.is_same_note(&edited));
        assert_eq!(edited.title, "Groceries");
        assert_eq!(edited.priority, NotePriority::High);
        assert_eq!(edited.created_at, note.created_at);
    }

    #[test]
    fn photo_add_remove_is_by_id_and_keeps_order() {
        let first = Photo::from_path("photos/a.png");
        let second = Photo::from_path("photos/b.png");
        let note = Note::draft().with_photo(first.clone()).with_photo(second.clone());
        assert_eq!(note.photos, vec![first.clone(), second.clone()]);

        let removed = note.without_photo(&first);
        assert_eq!(removed.photos, vec![second]);
    }

    #[test]
    fn priority_serializes_with_stable_names() {
        let json = serde_json::to_value(NotePriority::None).unwrap();
        assert_eq!(json, "no_priority");
        let json = serde_json::to_value(NotePriority::High).unwrap();
        assert_eq!(json, "high");
    }
}

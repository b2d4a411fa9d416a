//! Photo attachment model.
//!
//! # Invariants
//! - A photo belongs to exactly one note and is removed with it.
//! - `id` identifies the attachment; `path` points at the image file.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a photo attachment.
pub type PhotoId = Uuid;

/// Reference to one image file attached to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Stable photo id.
    pub id: PhotoId,
    /// Path or content locator of the underlying image.
    pub path: String,
}

impl Photo {
    /// Creates a photo reference with a fresh id for `path`.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
        }
    }

    /// Restores a photo with a known id, used by persistence read paths.
    pub fn with_id(id: PhotoId, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }
}

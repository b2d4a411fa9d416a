//! User preference and user-directory use-case service.
//!
//! # Responsibility
//! - Expose the view-mode preference synchronously.
//! - Resolve the export directory and allocate photo file paths.
//!
//! # Invariants
//! - The export directory is always the `SmartNotesExport` folder
//!   below the desired (or documents) directory, created on demand.

use crate::files::{FileExplorer, FileExtension, FileResult};
use crate::model::view_type::ViewType;
use crate::prefs::{PreferenceSource, PrefsResult};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const EXPORT_DIRECTORY_NAME: &str = "SmartNotesExport";
const PHOTOS_DIRECTORY_NAME: &str = "photos";

/// Use-case facade for user preference state and user-facing paths.
pub struct UserUseCase {
    prefs: PreferenceSource,
    files: FileExplorer,
}

impl UserUseCase {
    /// Creates a use case over the provided stores.
    pub fn new(prefs: PreferenceSource, files: FileExplorer) -> Self {
        Self { prefs, files }
    }

    /// Returns the stored list view mode.
    pub fn view_type(&self) -> PrefsResult<ViewType> {
        self.prefs.view_type()
    }

    /// Persists the list view mode.
    pub fn save_view_type(&self, value: ViewType) -> PrefsResult<()> {
        self.prefs.set_view_type(value)
    }

    /// Resolves the export directory below `desired_directory`, or the
    /// documents directory when none is given.
    pub fn export_directory(&self, desired_directory: Option<&Path>) -> FileResult<PathBuf> {
        let parent = match desired_directory {
            Some(path) => path.to_path_buf(),
            None => self.files.documents_dir()?,
        };
        self.files.create_directory(&parent, EXPORT_DIRECTORY_NAME)
    }

    /// Allocates a fresh uuid-named photo file below the app photos
    /// directory and returns its path.
    pub fn create_photo_file(&self) -> FileResult<PathBuf> {
        let files_dir = self.files.files_dir()?;
        let photos_dir = self.files.create_directory(&files_dir, PHOTOS_DIRECTORY_NAME)?;
        self.files.create_file(
            &photos_dir,
            &Uuid::new_v4().to_string(),
            FileExtension::ImagePng,
        )
    }
}

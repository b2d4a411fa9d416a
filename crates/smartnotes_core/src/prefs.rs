//! User preference store.
//!
//! # Responsibility
//! - Persist the small amount of user preference state (list vs grid
//!   view) as a JSON document in the application base directory.
//!
//! # Invariants
//! - Reads are synchronous; a missing file yields defaults.
//! - Writes replace the whole document atomically enough for a single
//!   user process (write-then-rename is not required here).

use crate::model::view_type::ViewType;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.json";

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Preference persistence error.
#[derive(Debug)]
pub enum PrefsError {
    Io(std::io::Error),
    Malformed(serde_json::Error),
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed settings file: {err}"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PrefsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Settings {
    #[serde(default)]
    view_type: ViewType,
}

/// Synchronous store for user preference state.
pub struct PreferenceSource {
    path: PathBuf,
}

impl PreferenceSource {
    /// Creates a store writing `settings.json` under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            path: base_dir.as_ref().join(SETTINGS_FILE_NAME),
        }
    }

    /// Returns the stored view type, or the default when no settings
    /// file exists yet.
    pub fn view_type(&self) -> PrefsResult<ViewType> {
        Ok(self.load()?.view_type)
    }

    /// Persists the view type.
    pub fn set_view_type(&self, value: ViewType) -> PrefsResult<()> {
        let mut settings = self.load()?;
        settings.view_type = value;
        self.store(&settings)
    }

    fn load(&self) -> PrefsResult<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn store(&self, settings: &Settings) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PreferenceSource, PrefsError};
    use crate::model::view_type::ViewType;

    #[test]
    fn missing_settings_file_yields_default_view_type() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PreferenceSource::new(dir.path());
        assert_eq!(prefs.view_type().unwrap(), ViewType::List);
    }

    #[test]
    fn set_view_type_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PreferenceSource::new(dir.path());

        prefs.set_view_type(ViewType::Grid).unwrap();
        assert_eq!(prefs.view_type().unwrap(), ViewType::Grid);

        // A fresh instance reads the same file.
        let reopened = PreferenceSource::new(dir.path());
        assert_eq!(reopened.view_type().unwrap(), ViewType::Grid);
    }

    #[test]
    fn corrupt_settings_file_is_reported_not_masked() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();

        let prefs = PreferenceSource::new(dir.path());
        match prefs.view_type() {
            Err(PrefsError::Malformed(_)) => {}
            other => panic!("expected malformed settings error, got {other:?}"),
        }
    }
}

//! File explorer: directory layout and free-name probing for exports
//! and photo files.
//!
//! # Responsibility
//! - Own the on-disk layout below one application base directory.
//! - Pick a free file name when the preferred one is taken.
//!
//! # Invariants
//! - Returned directories exist after the call.
//! - `create_file` never overwrites an existing file; a numeric suffix
//!   is appended instead (`name.txt`, `name(1).txt`, ...).

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

const DOCUMENTS_DIRECTORY_NAME: &str = "documents";
const FILES_DIRECTORY_NAME: &str = "files";

static UNSAFE_FILE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/:*?"<>|\x00-\x1f]+"#).expect("valid file name regex"));

pub type FileResult<T> = Result<T, FileError>;

/// File-system error raised by explorer operations.
#[derive(Debug)]
pub enum FileError {
    Io(std::io::Error),
}

impl Display for FileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for FileError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Supported file extensions for explorer-created files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileExtension {
    Text,
    ImagePng,
}

impl FileExtension {
    fn suffix(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::ImagePng => "png",
        }
    }
}

/// File explorer scoped to one application base directory.
pub struct FileExplorer {
    base: PathBuf,
}

impl FileExplorer {
    /// Creates an explorer rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the documents directory, creating it on demand.
    pub fn documents_dir(&self) -> FileResult<PathBuf> {
        self.ensure_dir(self.base.join(DOCUMENTS_DIRECTORY_NAME))
    }

    /// Returns the application files directory, creating it on demand.
    pub fn files_dir(&self) -> FileResult<PathBuf> {
        self.ensure_dir(self.base.join(FILES_DIRECTORY_NAME))
    }

    /// Creates (or reuses) the directory `name` under `parent`.
    pub fn create_directory(&self, parent: &Path, name: &str) -> FileResult<PathBuf> {
        self.ensure_dir(parent.join(name))
    }

    /// Reserves a free file path in `directory` for `name` with the
    /// given extension and creates the (empty) file.
    pub fn create_file(
        &self,
        directory: &Path,
        name: &str,
        extension: FileExtension,
    ) -> FileResult<PathBuf> {
        let stem = sanitize_file_name(name);
        let path = free_file_path(directory, &stem, extension);
        fs::File::create(&path)?;
        Ok(path)
    }

    /// Writes `contents` into `path`, replacing previous contents.
    pub fn write_text(&self, path: &Path, contents: &str) -> FileResult<()> {
        fs::write(path, contents)?;
        Ok(())
    }

    fn ensure_dir(&self, path: PathBuf) -> FileResult<PathBuf> {
        fs::create_dir_all(&path)?;
        Ok(path)
    }
}

/// Strips characters that are unsafe in file names and trims the rest.
///
/// Returns a non-empty stem; callers provide their own fallback name
/// before calling when the source title is blank.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned = UNSAFE_FILE_NAME_RE.replace_all(name, " ");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "no name".to_string()
    } else {
        trimmed.to_string()
    }
}

fn free_file_path(directory: &Path, stem: &str, extension: FileExtension) -> PathBuf {
    let suffix = extension.suffix();
    let mut number = 0u32;
    loop {
        let file_name = if number == 0 {
            format!("{stem}.{suffix}")
        } else {
            format!("{stem}({number}).{suffix}")
        };
        let candidate = directory.join(file_name);
        if !candidate.exists() {
            return candidate;
        }
        number += 1;
    }
}

//! Tri-state result wrapper for asynchronous operations.
//!
//! # Invariants
//! - One operation emits `Loading` exactly once, then exactly one
//!   terminal `Success` or `Failure`.
//! - A new emission supersedes the previous one; the stream carries
//!   moments in time, not an additive log.

use crate::files::FileError;
use crate::repo::note_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Outcome of one asynchronous operation at a moment in time.
#[derive(Debug, Clone)]
pub enum Response<T> {
    /// The operation is in flight; no payload yet.
    Loading,
    /// The operation completed with `T`.
    Success(T),
    /// The operation failed; the underlying error is preserved.
    Failure(OperationError),
}

impl<T> Response<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Error payload carried by `Response::Failure`.
///
/// The source error is kept verbatim behind an `Arc` so responses stay
/// cloneable for latest-value broadcast.
#[derive(Debug, Clone)]
pub enum OperationError {
    /// Persistence error from the note repository.
    Repo(Arc<RepoError>),
    /// File-system error from export or photo-file allocation.
    File(Arc<FileError>),
}

impl Display for OperationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::File(err) => write!(f, "{err}"),
        }
    }
}

impl Error for OperationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err.as_ref()),
            Self::File(err) => Some(err.as_ref()),
        }
    }
}

impl From<RepoError> for OperationError {
    fn from(value: RepoError) -> Self {
        Self::Repo(Arc::new(value))
    }
}

impl From<FileError> for OperationError {
    fn from(value: FileError) -> Self {
        Self::File(Arc::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{OperationError, Response};
    use crate::model::note::Note;
    use crate::repo::note_repo::RepoError;
    use std::error::Error;

    #[test]
    fn state_predicates_are_exclusive() {
        let loading: Response<()> = Response::Loading;
        assert!(loading.is_loading() && !loading.is_success() && !loading.is_failure());

        let success = Response::Success(());
        assert!(success.is_success() && !success.is_loading());
    }

    #[test]
    fn failure_preserves_the_source_error() {
        let missing = Note::draft();
        let failure: Response<()> = Response::Failure(RepoError::NotFound(missing.id).into());

        match failure {
            Response::Failure(err) => {
                assert!(err.to_string().contains(&missing.id.to_string()));
                assert!(err.source().is_some());
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}

//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use study_core::model::EntryError;

/// Errors emitted by `StudyLogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyLogError {
    #[error(transparent)]
    Invalid(#[from] EntryError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("export failed: {0}")]
    Export(String),
}

impl StudyLogError {
    /// Validation failures are the user's to fix; everything else is not.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, StudyLogError::Invalid(_))
    }
}

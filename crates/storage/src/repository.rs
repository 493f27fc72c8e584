use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use study_core::model::StudyEntry;
use thiserror::Error;

use crate::csv_file::{CsvRepository, codec};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the study log.
///
/// The log is small and single-user, so adapters read and rewrite the whole
/// table rather than offering row-level operations.
#[async_trait]
pub trait StudyLogRepository: Send + Sync {
    /// Load every entry in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be read or a row is malformed.
    async fn load_all(&self) -> Result<Vec<StudyEntry>, StorageError>;

    /// Replace the persisted table with `entries`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be written.
    async fn save_all(&self, entries: &[StudyEntry]) -> Result<(), StorageError>;

    /// Comma-separated copy of the current table, header included.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the table cannot be read.
    async fn export(&self) -> Result<Vec<u8>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<Vec<StudyEntry>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl StudyLogRepository for InMemoryRepository {
    async fn load_all(&self) -> Result<Vec<StudyEntry>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_all(&self, entries: &[StudyEntry]) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = entries.to_vec();
        Ok(())
    }

    async fn export(&self) -> Result<Vec<u8>, StorageError> {
        let entries = self.load_all().await?;
        codec::encode(&entries)
    }
}

/// Holds the study log repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub study_log: Arc<dyn StudyLogRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            study_log: Arc::new(InMemoryRepository::new()),
        }
    }

    /// Build a `Storage` backed by a CSV file, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file or its parent directory cannot be created.
    pub async fn csv_file(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let repo = CsvRepository::open(path).await?;
        Ok(Self {
            study_log: Arc::new(repo),
        })
    }
}

use std::path::{Path, PathBuf};

use study_core::model::StudyEntry;

use crate::repository::{StorageError, StudyLogRepository};

pub mod codec;

fn io(e: std::io::Error) -> StorageError {
    StorageError::Io(e.to_string())
}

/// Study log persisted as a single comma-separated file.
#[derive(Debug, Clone)]
pub struct CsvRepository {
    path: PathBuf,
}

impl CsvRepository {
    /// Open the log at `path`, writing a header-only file if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file or its parent directory cannot be created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io)?;
        }

        let exists = tokio::fs::try_exists(&path).await.map_err(io)?;
        if !exists {
            tokio::fs::write(&path, codec::encode(&[])?)
                .await
                .map_err(io)?;
            tracing::info!(path = %path.display(), "created empty study log");
        }

        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            // Removed behind our back: same as a fresh log.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(io(e)),
        }
    }
}

#[async_trait::async_trait]
impl StudyLogRepository for CsvRepository {
    async fn load_all(&self) -> Result<Vec<StudyEntry>, StorageError> {
        let bytes = self.read_bytes().await?;
        let entries = codec::decode(&bytes)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded study log");
        Ok(entries)
    }

    async fn save_all(&self, entries: &[StudyEntry]) -> Result<(), StorageError> {
        let bytes = codec::encode(entries)?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, &bytes).await.map_err(io)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved study log");
        Ok(())
    }

    async fn export(&self) -> Result<Vec<u8>, StorageError> {
        let bytes = self.read_bytes().await?;
        if bytes.is_empty() {
            return codec::encode(&[]);
        }
        Ok(bytes)
    }
}

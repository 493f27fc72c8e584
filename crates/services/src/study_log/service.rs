use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use storage::repository::{InMemoryRepository, StudyLogRepository};
use study_core::model::{StudyEntry, StudyEntryDraft, ValidationRules};
use study_core::plan::{self, DomainPlan};
use tokio::sync::Mutex;

use super::summary::StudySummary;
use crate::Clock;
use crate::error::StudyLogError;

/// Presentation-facing facade over the study log.
///
/// This service owns:
/// - the time source (`Clock`)
/// - repository access
/// - the validation rule set
///
/// It does **not** own UI formatting.
#[derive(Clone)]
pub struct StudyLogService {
    clock: Clock,
    repo: Arc<dyn StudyLogRepository>,
    rules: ValidationRules,
    // Serializes read-modify-write cycles so a double submit cannot drop an entry.
    append_lock: Arc<Mutex<()>>,
}

impl StudyLogService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn StudyLogRepository>, rules: ValidationRules) -> Self {
        Self {
            clock,
            repo,
            rules,
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(
            clock,
            Arc::new(InMemoryRepository::new()),
            ValidationRules::default(),
        )
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// The calendar day new entries are validated against.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    #[must_use]
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate and append a new entry, then persist the whole log.
    ///
    /// The assigned timestamp never precedes the previous entry's, so
    /// insertion order and timestamp order agree.
    ///
    /// # Errors
    ///
    /// Returns `StudyLogError::Invalid` without writing anything if the draft
    /// fails validation, or `StudyLogError::Storage` on repository failures.
    pub async fn append(&self, draft: StudyEntryDraft) -> Result<StudyEntry, StudyLogError> {
        let _guard = self.append_lock.lock().await;
        let mut entries = self.repo.load_all().await?;

        let now = self.clock.now();
        let logged_at = entries
            .last()
            .map_or(now, |last| last.logged_at().max(now));
        let entry = match draft.validate(logged_at, self.today(), &self.rules) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "rejected study entry");
                return Err(err.into());
            }
        };

        entries.push(entry.clone());
        self.repo.save_all(&entries).await?;

        tracing::info!(
            date = %entry.date(),
            domain = %entry.domain(),
            minutes = entry.duration_minutes(),
            total = entries.len(),
            "appended study entry"
        );
        Ok(entry)
    }

    /// All entries, most recent study date first.
    ///
    /// Entries on the same date are ordered newest-logged first.
    ///
    /// # Errors
    ///
    /// Returns `StudyLogError::Storage` on repository failures.
    pub async fn list(&self) -> Result<Vec<StudyEntry>, StudyLogError> {
        let mut entries = self.repo.load_all().await?;
        entries.sort_by(|a, b| {
            b.date()
                .cmp(&a.date())
                .then_with(|| b.logged_at().cmp(&a.logged_at()))
        });
        Ok(entries)
    }

    /// Aggregate totals, per-domain time, status breakdown and streak.
    ///
    /// # Errors
    ///
    /// Returns `StudyLogError::Storage` on repository failures.
    pub async fn aggregate(&self) -> Result<StudySummary, StudyLogError> {
        let entries = self.repo.load_all().await?;
        Ok(StudySummary::from_entries(&entries))
    }

    /// Exam outline joined with the latest logged status per sub-objective.
    ///
    /// # Errors
    ///
    /// Returns `StudyLogError::Storage` on repository failures.
    pub async fn plan_overview(&self) -> Result<Vec<DomainPlan>, StudyLogError> {
        let entries = self.repo.load_all().await?;
        Ok(plan::overview(&entries))
    }

    /// The current table as CSV bytes, unchanged from what storage holds.
    ///
    /// # Errors
    ///
    /// Returns `StudyLogError::Storage` on repository failures.
    pub async fn export_csv(&self) -> Result<Vec<u8>, StudyLogError> {
        Ok(self.repo.export().await?)
    }

    /// Write the CSV export to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `StudyLogError::Export` if the copy cannot be written.
    pub async fn export_to(&self, path: &Path) -> Result<usize, StudyLogError> {
        let bytes = self.export_csv().await?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StudyLogError::Export(e.to_string()))?;
        }
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| StudyLogError::Export(e.to_string()))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "exported study log");
        Ok(bytes.len())
    }
}

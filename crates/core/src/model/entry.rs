use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::model::{Domain, StudyStatus};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Reasons a study entry is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("domain is required")]
    MissingDomain,

    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("\"{sub_objective}\" is not an objective of {domain}")]
    UnknownSubObjective {
        domain: Domain,
        sub_objective: String,
    },

    #[error("study date {date} is after today ({today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    #[error("duration must be between {min} and {max} minutes, got {minutes}")]
    DurationOutOfRange { minutes: u32, min: u32, max: u32 },

    #[error("notes are required")]
    MissingNotes,

    #[error("confidence must be between 1 and 5, got {0}")]
    InvalidConfidence(u8),

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("invalid duration bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: u32, max: u32 },
}

//
// ─── CONFIDENCE ───────────────────────────────────────────────────────────────
//

/// Self-rated confidence, 1 (lost) to 5 (exam ready).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Confidence(u8);

impl Confidence {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns `EntryError::InvalidConfidence` outside 1..=5.
    pub fn new(value: u8) -> Result<Self, EntryError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EntryError::InvalidConfidence(value))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

//
// ─── RULES ────────────────────────────────────────────────────────────────────
//

/// Inclusive bounds on minutes per logged session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBounds {
    min: u32,
    max: u32,
}

impl DurationBounds {
    pub const DEFAULT_MIN: u32 = 1;
    pub const DEFAULT_MAX: u32 = 90;

    /// # Errors
    ///
    /// Returns `EntryError::InvalidBounds` if `min > max` or `max == 0`.
    pub fn new(min: u32, max: u32) -> Result<Self, EntryError> {
        if min > max || max == 0 {
            return Err(EntryError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, minutes: u32) -> bool {
        (self.min..=self.max).contains(&minutes)
    }
}

impl Default for DurationBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// The single rule set applied to new entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    pub bounds: DurationBounds,
    pub require_notes: bool,
}

//
// ─── DRAFT ────────────────────────────────────────────────────────────────────
//

/// Unvalidated form input for a new study entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyEntryDraft {
    pub date: NaiveDate,
    pub domain: String,
    pub sub_objective: Option<String>,
    pub duration_minutes: u32,
    pub notes: String,
    pub confidence: Option<u8>,
    pub status: StudyStatus,
}

impl StudyEntryDraft {
    /// Validate the draft and stamp it with its creation instant.
    ///
    /// # Errors
    ///
    /// Returns the first `EntryError` found, checking the domain first.
    pub fn validate(
        self,
        logged_at: DateTime<Utc>,
        today: NaiveDate,
        rules: &ValidationRules,
    ) -> Result<StudyEntry, EntryError> {
        let domain = Domain::parse_label(&self.domain)?;

        if self.date > today {
            return Err(EntryError::FutureDate {
                date: self.date,
                today,
            });
        }

        if !rules.bounds.contains(self.duration_minutes) {
            return Err(EntryError::DurationOutOfRange {
                minutes: self.duration_minutes,
                min: rules.bounds.min(),
                max: rules.bounds.max(),
            });
        }

        let sub_objective = normalize_optional(self.sub_objective);
        if let Some(sub) = sub_objective.as_deref() {
            let catalog = domain.sub_objectives();
            if !catalog.is_empty() && !catalog.contains(&sub) {
                return Err(EntryError::UnknownSubObjective {
                    domain,
                    sub_objective: sub.to_string(),
                });
            }
        }

        let notes = self.notes.trim().to_string();
        if rules.require_notes && notes.is_empty() {
            return Err(EntryError::MissingNotes);
        }

        let confidence = self.confidence.map(Confidence::new).transpose()?;

        Ok(StudyEntry {
            logged_at,
            date: self.date,
            domain,
            sub_objective,
            duration_minutes: self.duration_minutes,
            notes,
            confidence,
            status: self.status,
        })
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//
// ─── ENTRY ────────────────────────────────────────────────────────────────────
//

/// One logged study session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyEntry {
    logged_at: DateTime<Utc>,
    date: NaiveDate,
    domain: Domain,
    sub_objective: Option<String>,
    duration_minutes: u32,
    notes: String,
    confidence: Option<Confidence>,
    status: StudyStatus,
}

impl StudyEntry {
    /// Rehydrate an entry from persisted storage.
    ///
    /// Entry-time rules (future dates, duration bounds) are not re-applied:
    /// they held when the row was written and the bounds may have changed since.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::InvalidConfidence` for an out-of-range rating.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        logged_at: DateTime<Utc>,
        date: NaiveDate,
        domain: Domain,
        sub_objective: Option<String>,
        duration_minutes: u32,
        notes: String,
        confidence: Option<u8>,
        status: StudyStatus,
    ) -> Result<Self, EntryError> {
        Ok(Self {
            logged_at,
            date,
            domain,
            sub_objective: normalize_optional(sub_objective),
            duration_minutes,
            notes,
            confidence: confidence.map(Confidence::new).transpose()?,
            status,
        })
    }

    #[must_use]
    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn sub_objective(&self) -> Option<&str> {
        self.sub_objective.as_deref()
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub fn confidence(&self) -> Option<Confidence> {
        self.confidence
    }

    #[must_use]
    pub fn status(&self) -> StudyStatus {
        self.status
    }
}

use chrono::NaiveDate;
use study_core::model::{Domain, EntryError, StudyEntryDraft, StudyStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_MINUTES: &str = "60";

/// Raw form values, exactly as the inputs report them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct EntryForm {
    pub(super) date: String,
    pub(super) domain: String,
    pub(super) sub_objective: String,
    pub(super) minutes: String,
    pub(super) confidence: String,
    pub(super) status: String,
    pub(super) notes: String,
}

impl EntryForm {
    pub(super) fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format(DATE_FORMAT).to_string(),
            domain: String::new(),
            sub_objective: String::new(),
            minutes: DEFAULT_MINUTES.to_string(),
            confidence: String::new(),
            status: StudyStatus::InProgress.label().to_string(),
            notes: String::new(),
        }
    }

    /// Keep date and domain for the next session of the day; clear the rest.
    pub(super) fn after_submit(&self) -> Self {
        Self {
            date: self.date.clone(),
            domain: self.domain.clone(),
            sub_objective: String::new(),
            minutes: DEFAULT_MINUTES.to_string(),
            confidence: String::new(),
            status: self.status.clone(),
            notes: String::new(),
        }
    }

    /// The chosen domain, if the select holds a recognized label.
    pub(super) fn selected_domain(&self) -> Option<Domain> {
        Domain::parse_label(&self.domain).ok()
    }

    /// Parse the inputs into a draft. Domain rules are left to the service.
    pub(super) fn to_draft(&self) -> Result<StudyEntryDraft, Box<EntryFormErrors>> {
        let mut errors = EntryFormErrors::default();

        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| errors.date = Some("Pick a valid date.".into()))
            .ok();
        let minutes = self
            .minutes
            .trim()
            .parse::<u32>()
            .map_err(|_| errors.minutes = Some("Enter whole minutes.".into()))
            .ok();
        let confidence = match self.confidence.trim() {
            "" => Some(None),
            raw => raw
                .parse::<u8>()
                .map(Some)
                .map_err(|_| errors.confidence = Some("Pick a rating from 1 to 5.".into()))
                .ok(),
        };
        let status = self
            .status
            .parse::<StudyStatus>()
            .map_err(|_| errors.general = Some("Pick a status.".into()))
            .ok();

        match (date, minutes, confidence, status) {
            (Some(date), Some(duration_minutes), Some(confidence), Some(status)) => {
                Ok(StudyEntryDraft {
                    date,
                    domain: self.domain.clone(),
                    sub_objective: Some(self.sub_objective.clone()),
                    duration_minutes,
                    notes: self.notes.clone(),
                    confidence,
                    status,
                })
            }
            _ => Err(Box::new(errors)),
        }
    }
}

/// Inline messages, one slot per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct EntryFormErrors {
    pub(super) date: Option<String>,
    pub(super) domain: Option<String>,
    pub(super) sub_objective: Option<String>,
    pub(super) minutes: Option<String>,
    pub(super) confidence: Option<String>,
    pub(super) notes: Option<String>,
    pub(super) general: Option<String>,
}

impl EntryFormErrors {
    pub(super) fn from_entry_error(err: &EntryError) -> Self {
        let message = Some(err.to_string());
        let mut errors = Self::default();
        match err {
            EntryError::MissingDomain | EntryError::UnknownDomain(_) => {
                errors.domain = Some("Choose a domain.".into());
            }
            EntryError::UnknownSubObjective { .. } => errors.sub_objective = message,
            EntryError::FutureDate { .. } => errors.date = message,
            EntryError::DurationOutOfRange { .. } => errors.minutes = message,
            EntryError::MissingNotes => errors.notes = Some("Add a few notes.".into()),
            EntryError::InvalidConfidence(_) => errors.confidence = message,
            _ => errors.general = message,
        }
        errors
    }
}

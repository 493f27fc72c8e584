use std::fmt;
use std::str::FromStr;

use crate::model::EntryError;

/// Coarse completion state attached to a studied sub-objective.
///
/// No transition rules apply; any status may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudyStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    NeedsReview,
}

impl StudyStatus {
    pub const ALL: [StudyStatus; 4] = [
        StudyStatus::NotStarted,
        StudyStatus::InProgress,
        StudyStatus::Completed,
        StudyStatus::NeedsReview,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StudyStatus::NotStarted => "Not Started",
            StudyStatus::InProgress => "In Progress",
            StudyStatus::Completed => "Completed",
            StudyStatus::NeedsReview => "Needs Review",
        }
    }
}

impl fmt::Display for StudyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StudyStatus {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        StudyStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EntryError::UnknownStatus(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for status in StudyStatus::ALL {
            assert_eq!(status.label().parse::<StudyStatus>().unwrap(), status);
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(
            "needs review".parse::<StudyStatus>().unwrap(),
            StudyStatus::NeedsReview
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(matches!(
            "Abandoned".parse::<StudyStatus>(),
            Err(EntryError::UnknownStatus(_))
        ));
    }
}

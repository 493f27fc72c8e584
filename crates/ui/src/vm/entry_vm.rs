use study_core::model::{StudyEntry, StudyStatus};

use crate::vm::time_fmt::{format_date, format_minutes};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryRowVm {
    pub key: String,
    pub date_str: String,
    pub domain: &'static str,
    pub sub_objective: String,
    pub duration_str: String,
    pub confidence_str: String,
    pub status: &'static str,
    pub status_class: &'static str,
    pub notes: String,
}

impl EntryRowVm {
    /// `index` is the row's position in the listing; `logged_at` alone can repeat.
    #[must_use]
    pub fn new(index: usize, entry: &StudyEntry) -> Self {
        Self {
            key: format!("{index}-{}", entry.logged_at().to_rfc3339()),
            date_str: format_date(entry.date()),
            domain: entry.domain().label(),
            sub_objective: entry.sub_objective().unwrap_or("\u{2014}").to_string(),
            duration_str: format_minutes(entry.duration_minutes()),
            confidence_str: entry
                .confidence()
                .map_or_else(|| "\u{2014}".to_string(), |c| format!("{}/5", c.value())),
            status: entry.status().label(),
            status_class: status_class(entry.status()),
            notes: entry.notes().to_string(),
        }
    }
}

/// CSS modifier for a status badge.
#[must_use]
pub fn status_class(status: StudyStatus) -> &'static str {
    match status {
        StudyStatus::NotStarted => "status status--not-started",
        StudyStatus::InProgress => "status status--in-progress",
        StudyStatus::Completed => "status status--completed",
        StudyStatus::NeedsReview => "status status--needs-review",
    }
}

#[must_use]
pub fn map_entry_rows(entries: &[StudyEntry]) -> Vec<EntryRowVm> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| EntryRowVm::new(index, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::Domain;
    use study_core::time::fixed_now;

    #[test]
    fn optional_fields_render_as_dash() {
        let entry = StudyEntry::from_persisted(
            fixed_now(),
            fixed_now().date_naive(),
            Domain::Other,
            None,
            75,
            String::new(),
            None,
            StudyStatus::NeedsReview,
        )
        .unwrap();
        let row = EntryRowVm::new(0, &entry);
        assert_eq!(row.sub_objective, "\u{2014}");
        assert_eq!(row.confidence_str, "\u{2014}");
        assert_eq!(row.duration_str, "1h 15m");
        assert_eq!(row.status, "Needs Review");
        assert_eq!(row.date_str, "2023-11-14");
    }

    #[test]
    fn rows_logged_at_the_same_instant_get_distinct_keys() {
        let entry = |domain| {
            StudyEntry::from_persisted(
                fixed_now(),
                fixed_now().date_naive(),
                domain,
                None,
                30,
                String::new(),
                None,
                StudyStatus::InProgress,
            )
            .unwrap()
        };
        let rows = map_entry_rows(&[entry(Domain::CloudConcepts), entry(Domain::Other)]);
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].key, rows[1].key);
    }
}

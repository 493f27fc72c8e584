use std::collections::BTreeMap;

use chrono::NaiveDate;
use study_core::model::{Domain, StudyEntry, StudyStatus};
use study_core::plan::latest_status_by_sub_objective;
use study_core::streak::streak_days;

/// Minutes logged against one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainMinutes {
    pub domain: Domain,
    pub minutes: u32,
}

/// Number of entries carrying one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: StudyStatus,
    pub count: u32,
}

/// Presentation-agnostic aggregate over the whole study log.
///
/// No pre-formatted strings; the UI decides how to render hours and averages.
#[derive(Debug, Clone, PartialEq)]
pub struct StudySummary {
    pub entry_count: u32,
    pub total_minutes: u32,
    /// Only domains with at least one entry, in outline order.
    pub domain_minutes: Vec<DomainMinutes>,
    /// Every status, in declaration order, including zero counts.
    pub status_counts: Vec<StatusCount>,
    /// Mean over entries that recorded a confidence rating.
    pub mean_confidence: Option<f64>,
    pub latest_status_by_sub_objective: BTreeMap<String, StudyStatus>,
    pub streak_days: u32,
    pub last_studied: Option<NaiveDate>,
}

impl StudySummary {
    #[must_use]
    pub fn from_entries(entries: &[StudyEntry]) -> Self {
        let mut total_minutes = 0_u32;
        let mut per_domain: BTreeMap<Domain, u32> = BTreeMap::new();
        let mut per_status: BTreeMap<StudyStatus, u32> = BTreeMap::new();
        let mut confidence_sum = 0_u32;
        let mut confidence_count = 0_u32;

        for entry in entries {
            let minutes = entry.duration_minutes();
            total_minutes = total_minutes.saturating_add(minutes);

            let slot = per_domain.entry(entry.domain()).or_default();
            *slot = slot.saturating_add(minutes);

            let count = per_status.entry(entry.status()).or_default();
            *count = count.saturating_add(1);

            if let Some(confidence) = entry.confidence() {
                confidence_sum += u32::from(confidence.value());
                confidence_count += 1;
            }
        }

        let mean_confidence = (confidence_count > 0)
            .then(|| f64::from(confidence_sum) / f64::from(confidence_count));

        Self {
            entry_count: u32::try_from(entries.len()).unwrap_or(u32::MAX),
            total_minutes,
            domain_minutes: per_domain
                .into_iter()
                .map(|(domain, minutes)| DomainMinutes { domain, minutes })
                .collect(),
            status_counts: StudyStatus::ALL
                .into_iter()
                .map(|status| StatusCount {
                    status,
                    count: per_status.get(&status).copied().unwrap_or(0),
                })
                .collect(),
            mean_confidence,
            latest_status_by_sub_objective: latest_status_by_sub_objective(entries),
            streak_days: streak_days(entries.iter().map(StudyEntry::date)),
            last_studied: entries.iter().map(StudyEntry::date).max(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Total study time in hours.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        f64::from(self.total_minutes) / 60.0
    }
}

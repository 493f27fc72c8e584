//! Study plan overview: exam outline joined with logged progress.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Domain, StudyEntry, StudyStatus};

/// Progress on one outline sub-objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubObjectiveProgress {
    pub name: &'static str,
    pub status: StudyStatus,
    pub minutes: u32,
    pub last_studied: Option<NaiveDate>,
}

/// Progress on one exam domain and its sub-objectives, in outline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPlan {
    pub domain: Domain,
    pub minutes: u32,
    pub objectives: Vec<SubObjectiveProgress>,
}

impl DomainPlan {
    /// Number of objectives whose latest status is `Completed`.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.objectives
            .iter()
            .filter(|o| o.status == StudyStatus::Completed)
            .count()
    }
}

/// Latest status per distinct sub-objective, by `logged_at`.
///
/// Entries with equal timestamps resolve to the one appended last.
#[must_use]
pub fn latest_status_by_sub_objective(entries: &[StudyEntry]) -> BTreeMap<String, StudyStatus> {
    latest_statuses(entries)
        .into_iter()
        .map(|(key, status)| (key.to_string(), status))
        .collect()
}

fn latest_statuses<'a>(
    entries: impl IntoIterator<Item = &'a StudyEntry>,
) -> HashMap<&'a str, StudyStatus> {
    let mut latest: HashMap<&str, (DateTime<Utc>, StudyStatus)> = HashMap::new();
    for entry in entries {
        let Some(key) = entry.sub_objective() else {
            continue;
        };
        match latest.get(key) {
            Some((at, _)) if *at > entry.logged_at() => {}
            _ => {
                latest.insert(key, (entry.logged_at(), entry.status()));
            }
        }
    }
    latest
        .into_iter()
        .map(|(key, (_, status))| (key, status))
        .collect()
}

/// Build the per-domain plan for every scored exam domain.
///
/// Only entries logged under a domain count toward its objectives.
#[must_use]
pub fn overview(entries: &[StudyEntry]) -> Vec<DomainPlan> {
    Domain::ALL
        .into_iter()
        .filter(|d| d.outline_number().is_some())
        .map(|domain| {
            let domain_entries: Vec<&StudyEntry> =
                entries.iter().filter(|e| e.domain() == domain).collect();
            let statuses = latest_statuses(domain_entries.iter().copied());
            let objectives = domain
                .sub_objectives()
                .iter()
                .map(|&name| {
                    let logged = domain_entries
                        .iter()
                        .filter(|e| e.sub_objective() == Some(name));
                    let mut minutes = 0_u32;
                    let mut last_studied = None;
                    for entry in logged {
                        minutes = minutes.saturating_add(entry.duration_minutes());
                        last_studied = last_studied.max(Some(entry.date()));
                    }
                    SubObjectiveProgress {
                        name,
                        status: statuses.get(name).copied().unwrap_or_default(),
                        minutes,
                        last_studied,
                    }
                })
                .collect();
            DomainPlan {
                domain,
                minutes: domain_entries
                    .iter()
                    .fold(0_u32, |acc, e| acc.saturating_add(e.duration_minutes())),
                objectives,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn entry(
        minutes_after: i64,
        domain: Domain,
        sub: Option<&str>,
        status: StudyStatus,
    ) -> StudyEntry {
        let at = fixed_now() + Duration::minutes(minutes_after);
        StudyEntry::from_persisted(
            at,
            at.date_naive(),
            domain,
            sub.map(str::to_string),
            30,
            String::new(),
            None,
            status,
        )
        .unwrap()
    }

    #[test]
    fn latest_status_follows_timestamp_not_position() {
        let sub = "2.4 Implement data discovery";
        let entries = vec![
            entry(10, Domain::CloudDataSecurity, Some(sub), StudyStatus::Completed),
            entry(0, Domain::CloudDataSecurity, Some(sub), StudyStatus::InProgress),
        ];
        let latest = latest_status_by_sub_objective(&entries);
        assert_eq!(latest.get(sub), Some(&StudyStatus::Completed));
    }

    #[test]
    fn equal_timestamps_prefer_later_append() {
        let sub = "Practice exam";
        let entries = vec![
            entry(0, Domain::ReviewPractice, Some(sub), StudyStatus::InProgress),
            entry(0, Domain::ReviewPractice, Some(sub), StudyStatus::NeedsReview),
        ];
        let latest = latest_status_by_sub_objective(&entries);
        assert_eq!(latest.get(sub), Some(&StudyStatus::NeedsReview));
    }

    #[test]
    fn overview_covers_scored_domains_in_order() {
        let plan = overview(&[]);
        let domains: Vec<Domain> = plan.iter().map(|p| p.domain).collect();
        assert_eq!(domains, Domain::ALL[..6].to_vec());
        assert!(
            plan.iter()
                .flat_map(|p| &p.objectives)
                .all(|o| o.status == StudyStatus::NotStarted && o.minutes == 0)
        );
    }

    #[test]
    fn overview_rolls_up_minutes_and_status() {
        let sub = "1.2 Describe cloud reference architecture";
        let entries = vec![
            entry(0, Domain::CloudConcepts, Some(sub), StudyStatus::InProgress),
            entry(5, Domain::CloudConcepts, Some(sub), StudyStatus::Completed),
            entry(9, Domain::CloudConcepts, None, StudyStatus::InProgress),
        ];
        let plan = overview(&entries);
        let d1 = &plan[0];
        assert_eq!(d1.minutes, 90);
        assert_eq!(d1.completed(), 1);
        let objective = d1.objectives.iter().find(|o| o.name == sub).unwrap();
        assert_eq!(objective.minutes, 60);
        assert_eq!(objective.status, StudyStatus::Completed);
        assert_eq!(objective.last_studied, Some(fixed_now().date_naive()));
    }

    #[test]
    fn outline_name_logged_under_other_domain_is_not_counted() {
        let sub = "2.4 Implement data discovery";
        let entries = vec![entry(0, Domain::Other, Some(sub), StudyStatus::Completed)];
        let plan = overview(&entries);
        let d2 = plan
            .iter()
            .find(|p| p.domain == Domain::CloudDataSecurity)
            .unwrap();
        let objective = d2.objectives.iter().find(|o| o.name == sub).unwrap();
        assert_eq!(objective.status, StudyStatus::NotStarted);
        assert_eq!(objective.minutes, 0);
        assert_eq!(objective.last_studied, None);
        assert_eq!(d2.completed(), 0);
    }
}

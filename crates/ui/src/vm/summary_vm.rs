use services::StudySummary;

use crate::vm::entry_vm::status_class;
use crate::vm::time_fmt::{format_date, format_hours, format_minutes};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainBarVm {
    pub label: &'static str,
    pub minutes_str: String,
    /// Width relative to the busiest domain, 0-100.
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusRowVm {
    pub label: &'static str,
    pub class: &'static str,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub entry_count: u32,
    pub total_hours_str: String,
    pub mean_confidence_str: String,
    pub streak_str: String,
    pub last_studied_str: String,
    pub domain_bars: Vec<DomainBarVm>,
    pub status_rows: Vec<StatusRowVm>,
}

#[must_use]
pub fn map_summary(summary: &StudySummary) -> SummaryVm {
    let busiest = summary
        .domain_minutes
        .iter()
        .map(|d| d.minutes)
        .max()
        .unwrap_or(0);

    SummaryVm {
        entry_count: summary.entry_count,
        total_hours_str: format_hours(summary.total_minutes),
        mean_confidence_str: summary
            .mean_confidence
            .map_or_else(|| "\u{2014}".to_string(), |c| format!("{c:.1} / 5")),
        streak_str: match summary.streak_days {
            1 => "1 day".to_string(),
            n => format!("{n} days"),
        },
        last_studied_str: summary
            .last_studied
            .map_or_else(|| "never".to_string(), format_date),
        domain_bars: summary
            .domain_minutes
            .iter()
            .map(|d| DomainBarVm {
                label: d.domain.label(),
                minutes_str: format_minutes(d.minutes),
                percent: if busiest == 0 {
                    0
                } else {
                    d.minutes.saturating_mul(100) / busiest
                },
            })
            .collect(),
        status_rows: summary
            .status_counts
            .iter()
            .map(|s| StatusRowVm {
                label: s.status.label(),
                class: status_class(s.status),
                count: s.count,
            })
            .collect(),
    }
}

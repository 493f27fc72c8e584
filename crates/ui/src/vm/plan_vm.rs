use study_core::plan::DomainPlan;

use crate::vm::entry_vm::status_class;
use crate::vm::time_fmt::{format_date, format_minutes};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectiveVm {
    pub name: &'static str,
    pub status: &'static str,
    pub status_class: &'static str,
    pub minutes_str: String,
    pub last_studied_str: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainPlanVm {
    pub title: &'static str,
    pub minutes_str: String,
    pub progress_str: String,
    pub objectives: Vec<ObjectiveVm>,
}

impl From<&DomainPlan> for DomainPlanVm {
    fn from(plan: &DomainPlan) -> Self {
        Self {
            title: plan.domain.label(),
            minutes_str: format_minutes(plan.minutes),
            progress_str: format!(
                "{} / {} completed",
                plan.completed(),
                plan.objectives.len()
            ),
            objectives: plan
                .objectives
                .iter()
                .map(|o| ObjectiveVm {
                    name: o.name,
                    status: o.status.label(),
                    status_class: status_class(o.status),
                    minutes_str: format_minutes(o.minutes),
                    last_studied_str: o
                        .last_studied
                        .map_or_else(|| "\u{2014}".to_string(), format_date),
                })
                .collect(),
        }
    }
}

#[must_use]
pub fn map_domain_plans(plans: &[DomainPlan]) -> Vec<DomainPlanVm> {
    plans.iter().map(DomainPlanVm::from).collect()
}

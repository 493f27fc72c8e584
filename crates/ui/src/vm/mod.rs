mod entry_vm;
mod plan_vm;
mod summary_vm;
mod time_fmt;

pub use entry_vm::{EntryRowVm, map_entry_rows, status_class};
pub use plan_vm::{DomainPlanVm, ObjectiveVm, map_domain_plans};
pub use summary_vm::{DomainBarVm, StatusRowVm, SummaryVm, map_summary};
pub use time_fmt::{format_date, format_hours, format_minutes};

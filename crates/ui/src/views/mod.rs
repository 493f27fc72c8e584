mod add_entry;
mod plan_overview;
mod progress_log;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use add_entry::AddEntryView;
pub use plan_overview::PlanOverviewView;
pub use progress_log::ProgressLogView;
pub use state::{ViewError, ViewState, view_state_from_resource};

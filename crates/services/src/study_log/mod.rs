mod service;
mod summary;

pub use service::StudyLogService;
pub use summary::{DomainMinutes, StatusCount, StudySummary};

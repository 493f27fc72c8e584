#![forbid(unsafe_code)]

pub mod error;
pub mod study_log;

pub use study_core::Clock;

pub use error::StudyLogError;
pub use study_log::{DomainMinutes, StatusCount, StudyLogService, StudySummary};

mod domain;
mod entry;
mod status;

pub use domain::Domain;
pub use entry::{
    Confidence, DurationBounds, EntryError, StudyEntry, StudyEntryDraft, ValidationRules,
};
pub use status::StudyStatus;

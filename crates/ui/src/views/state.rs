use dioxus::prelude::*;
use services::StudyLogError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The study log could not be read or written.
    Storage,
    /// The export copy could not be written.
    Export,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_service(err: &StudyLogError) -> Self {
        tracing::error!(error = %err, "study log request failed");
        match err {
            StudyLogError::Storage(_) => ViewError::Storage,
            StudyLogError::Export(_) => ViewError::Export,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Storage => {
                "Something went wrong reading the study log. Check the file and try again."
            }
            ViewError::Export => {
                "Couldn't write the export file. Check the export path and try again."
            }
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

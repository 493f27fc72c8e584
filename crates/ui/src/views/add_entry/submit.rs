use std::sync::Arc;

use dioxus::prelude::*;
use services::{StudyLogError, StudyLogService};

use super::form::{EntryForm, EntryFormErrors};
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SubmitState {
    Idle,
    Saving,
    Saved,
    Error(ViewError),
}

#[derive(Debug, PartialEq)]
pub(super) enum SubmitOutcome {
    /// The entry was appended; holds the form to show next.
    Saved(EntryForm),
    Rejected(EntryFormErrors),
    Failed(ViewError),
}

/// Parse the form, append it to the study log and report what to show.
pub(super) async fn submit_entry(study_log: &StudyLogService, form: &EntryForm) -> SubmitOutcome {
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(errors) => return SubmitOutcome::Rejected(*errors),
    };
    match study_log.append(draft).await {
        Ok(_) => SubmitOutcome::Saved(form.after_submit()),
        Err(StudyLogError::Invalid(err)) => {
            SubmitOutcome::Rejected(EntryFormErrors::from_entry_error(&err))
        }
        Err(err) => SubmitOutcome::Failed(ViewError::from_service(&err)),
    }
}

#[derive(Clone, Copy, PartialEq)]
pub(super) struct EntryFormState {
    pub(super) form: Signal<EntryForm>,
    pub(super) errors: Signal<EntryFormErrors>,
    pub(super) submit_state: Signal<SubmitState>,
    pub(super) submit: Callback<()>,
}

pub(super) fn use_entry_form(study_log: Arc<StudyLogService>) -> EntryFormState {
    let today = study_log.today();
    let form = use_signal(|| EntryForm::new(today));
    let errors = use_signal(EntryFormErrors::default);
    let submit_state = use_signal(|| SubmitState::Idle);

    let submit = use_callback(move |()| {
        if submit_state() == SubmitState::Saving {
            return;
        }
        let study_log = Arc::clone(&study_log);
        let mut form = form;
        let mut errors = errors;
        let mut submit_state = submit_state;
        spawn(async move {
            submit_state.set(SubmitState::Saving);
            let submitted = form();
            match submit_entry(&study_log, &submitted).await {
                SubmitOutcome::Saved(next) => {
                    form.set(next);
                    errors.set(EntryFormErrors::default());
                    submit_state.set(SubmitState::Saved);
                }
                SubmitOutcome::Rejected(next) => {
                    errors.set(next);
                    submit_state.set(SubmitState::Idle);
                }
                SubmitOutcome::Failed(err) => {
                    errors.set(EntryFormErrors::default());
                    submit_state.set(SubmitState::Error(err));
                }
            }
        });
    });

    EntryFormState {
        form,
        errors,
        submit_state,
        submit,
    }
}

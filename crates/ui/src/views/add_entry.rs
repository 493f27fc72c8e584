use chrono::NaiveDate;
use dioxus::prelude::*;
use study_core::model::{Domain, StudyStatus, ValidationRules};

use crate::context::AppContext;

mod form;
mod submit;
#[cfg(test)]
mod submit_smoke;

use form::EntryForm;
use submit::{EntryFormState, SubmitState, use_entry_form};

fn edit(
    mut form: Signal<EntryForm>,
    mut submit_state: Signal<SubmitState>,
    apply: impl FnOnce(&mut EntryForm),
) {
    form.with_mut(apply);
    if submit_state() != SubmitState::Saving {
        submit_state.set(SubmitState::Idle);
    }
}

#[component]
pub fn AddEntryView() -> Element {
    let ctx = use_context::<AppContext>();
    let study_log = ctx.study_log();
    let rules = *study_log.rules();
    let today = study_log.today();
    let state = use_entry_form(study_log);

    rsx! {
        EntryFormBody { state, rules, today }
    }
}

#[component]
fn EntryFormBody(state: EntryFormState, rules: ValidationRules, today: NaiveDate) -> Element {
    let EntryFormState {
        form,
        errors,
        submit_state,
        submit,
    } = state;

    let form_value = form();
    let errors_value = errors();
    let selected_domain = form_value.selected_domain();
    let catalog = selected_domain
        .map(Domain::sub_objectives)
        .unwrap_or_default();
    let bounds = rules.bounds;
    let notes_label = if rules.require_notes {
        "Notes"
    } else {
        "Notes (optional)"
    };
    let max_date = today.format("%Y-%m-%d").to_string();
    let is_saving = submit_state() == SubmitState::Saving;

    rsx! {
        div { class: "page add-entry-page",
            h2 { "Add Study Entry" }

            div { class: "form-field",
                label { r#for: "entry-date", "Date" }
                input {
                    id: "entry-date",
                    r#type: "date",
                    max: "{max_date}",
                    value: "{form_value.date}",
                    oninput: move |evt| edit(form, submit_state, |f| f.date = evt.value()),
                }
                if let Some(message) = errors_value.date {
                    p { class: "form-error", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "entry-domain", "Domain" }
                select {
                    id: "entry-domain",
                    value: "{form_value.domain}",
                    onchange: move |evt| {
                        edit(form, submit_state, |f| {
                            f.domain = evt.value();
                            f.sub_objective.clear();
                        });
                    },
                    option { value: "", selected: selected_domain.is_none(), "Select a domain" }
                    for domain in Domain::ALL {
                        option {
                            value: domain.label(),
                            selected: selected_domain == Some(domain),
                            "{domain.label()}"
                        }
                    }
                }
                if let Some(message) = errors_value.domain {
                    p { class: "form-error", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "entry-sub-objective", "Sub-Objective" }
                if catalog.is_empty() {
                    input {
                        id: "entry-sub-objective",
                        r#type: "text",
                        placeholder: "Optional topic",
                        value: "{form_value.sub_objective}",
                        oninput: move |evt| edit(form, submit_state, |f| f.sub_objective = evt.value()),
                    }
                } else {
                    select {
                        id: "entry-sub-objective",
                        value: "{form_value.sub_objective}",
                        onchange: move |evt| edit(form, submit_state, |f| f.sub_objective = evt.value()),
                        option { value: "", "Whole domain" }
                        for name in catalog.iter().copied() {
                            option {
                                value: name,
                                selected: form_value.sub_objective == name,
                                "{name}"
                            }
                        }
                    }
                }
                if let Some(message) = errors_value.sub_objective {
                    p { class: "form-error", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "entry-minutes", "Duration (minutes)" }
                input {
                    id: "entry-minutes",
                    r#type: "number",
                    min: "{bounds.min()}",
                    max: "{bounds.max()}",
                    inputmode: "numeric",
                    value: "{form_value.minutes}",
                    oninput: move |evt| edit(form, submit_state, |f| f.minutes = evt.value()),
                }
                if let Some(message) = errors_value.minutes {
                    p { class: "form-error", "{message}" }
                }
            }

            div { class: "form-row",
                div { class: "form-field",
                    label { r#for: "entry-confidence", "Confidence" }
                    select {
                        id: "entry-confidence",
                        value: "{form_value.confidence}",
                        onchange: move |evt| edit(form, submit_state, |f| f.confidence = evt.value()),
                        option { value: "", "Not rated" }
                        for level in 1..=5_u8 {
                            option {
                                value: "{level}",
                                selected: form_value.confidence == level.to_string(),
                                "{level} / 5"
                            }
                        }
                    }
                    if let Some(message) = errors_value.confidence {
                        p { class: "form-error", "{message}" }
                    }
                }

                div { class: "form-field",
                    label { r#for: "entry-status", "Status" }
                    select {
                        id: "entry-status",
                        value: "{form_value.status}",
                        onchange: move |evt| edit(form, submit_state, |f| f.status = evt.value()),
                        for status in StudyStatus::ALL {
                            option {
                                value: status.label(),
                                selected: form_value.status == status.label(),
                                "{status.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "form-field",
                label { r#for: "entry-notes", "{notes_label}" }
                textarea {
                    id: "entry-notes",
                    rows: "4",
                    value: "{form_value.notes}",
                    oninput: move |evt| edit(form, submit_state, |f| f.notes = evt.value()),
                }
                if let Some(message) = errors_value.notes {
                    p { class: "form-error", "{message}" }
                }
            }

            if let Some(message) = errors_value.general {
                p { class: "form-error", "{message}" }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: is_saving,
                    onclick: move |_| submit.call(()),
                    if is_saving { "Saving..." } else { "Submit" }
                }
                match submit_state() {
                    SubmitState::Saved => rsx! {
                        p { class: "form-success", "Study log entry added!" }
                    },
                    SubmitState::Error(err) => rsx! {
                        p { class: "form-error", "{err.message()}" }
                    },
                    SubmitState::Idle | SubmitState::Saving => rsx! {},
                }
            }
        }
    }
}

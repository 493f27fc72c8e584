use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DomainBarVm, EntryRowVm, StatusRowVm, SummaryVm, map_entry_rows, map_summary};

#[derive(Clone, Debug, PartialEq)]
struct ProgressData {
    rows: Vec<EntryRowVm>,
    summary: SummaryVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ExportState {
    Idle,
    Exporting,
    Exported(String),
    Error(ViewError),
}

#[component]
pub fn ProgressLogView() -> Element {
    let ctx = use_context::<AppContext>();
    let study_log = ctx.study_log();
    let study_log_for_resource = study_log.clone();
    let export_path = ctx.export_path().to_path_buf();
    let export_state = use_signal(|| ExportState::Idle);

    let resource = use_resource(move || {
        let study_log = study_log_for_resource.clone();
        async move {
            let entries = study_log
                .list()
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            let summary = study_log
                .aggregate()
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok(ProgressData {
                rows: map_entry_rows(&entries),
                summary: map_summary(&summary),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    let on_export = use_callback(move |()| {
        let study_log = study_log.clone();
        let export_path = export_path.clone();
        let mut export_state = export_state;
        spawn(async move {
            export_state.set(ExportState::Exporting);
            match study_log.export_to(&export_path).await {
                Ok(_) => {
                    export_state.set(ExportState::Exported(export_path.display().to_string()));
                }
                Err(err) => export_state.set(ExportState::Error(ViewError::from_service(&err))),
            }
        });
    });

    rsx! {
        div { class: "page progress-page",
            h2 { "Progress Log" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) if data.rows.is_empty() => rsx! {
                    p { class: "empty-state", "No study logs yet. Start by logging today's progress." }
                },
                ViewState::Ready(data) => rsx! {
                    SummaryPanel { summary: data.summary }
                    EntryTable { rows: data.rows }
                    div { class: "export-bar",
                        button {
                            class: "btn",
                            r#type: "button",
                            disabled: export_state() == ExportState::Exporting,
                            onclick: move |_| on_export.call(()),
                            "Export CSV"
                        }
                        match export_state() {
                            ExportState::Exported(path) => rsx! {
                                p { class: "form-success", "Exported to {path}" }
                            },
                            ExportState::Error(err) => rsx! {
                                p { class: "form-error", "{err.message()}" }
                            },
                            ExportState::Idle | ExportState::Exporting => rsx! {},
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.message()}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn SummaryPanel(summary: SummaryVm) -> Element {
    rsx! {
        section { class: "summary-panel",
            div { class: "summary-stats",
                div { class: "stat",
                    span { class: "stat-label", "Total Hours Studied" }
                    span { class: "stat-value", "{summary.total_hours_str}" }
                }
                div { class: "stat",
                    span { class: "stat-label", "Entries" }
                    span { class: "stat-value", "{summary.entry_count}" }
                }
                div { class: "stat",
                    span { class: "stat-label", "Average Confidence" }
                    span { class: "stat-value", "{summary.mean_confidence_str}" }
                }
                div { class: "stat",
                    span { class: "stat-label", "Study Streak" }
                    span { class: "stat-value", "{summary.streak_str}" }
                }
                div { class: "stat",
                    span { class: "stat-label", "Last Studied" }
                    span { class: "stat-value", "{summary.last_studied_str}" }
                }
            }

            h3 { "Time by Domain" }
            ul { class: "domain-bars",
                for bar in summary.domain_bars {
                    DomainBar { bar }
                }
            }

            h3 { "Status Breakdown" }
            ul { class: "status-breakdown",
                for row in summary.status_rows {
                    StatusRow { row }
                }
            }
        }
    }
}

#[component]
fn DomainBar(bar: DomainBarVm) -> Element {
    rsx! {
        li { class: "domain-bar",
            span { class: "domain-bar-label", "{bar.label}" }
            span { class: "domain-bar-track",
                span { class: "domain-bar-fill", style: "width: {bar.percent}%" }
            }
            span { class: "domain-bar-value", "{bar.minutes_str}" }
        }
    }
}

#[component]
fn StatusRow(row: StatusRowVm) -> Element {
    rsx! {
        li {
            span { class: row.class, "{row.label}" }
            span { class: "status-count", "{row.count}" }
        }
    }
}

#[component]
fn EntryTable(rows: Vec<EntryRowVm>) -> Element {
    rsx! {
        table { class: "entry-table",
            thead {
                tr {
                    th { "Date" }
                    th { "Domain" }
                    th { "Sub-Objective" }
                    th { "Duration" }
                    th { "Confidence" }
                    th { "Status" }
                    th { "Notes" }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.key}",
                        td { "{row.date_str}" }
                        td { "{row.domain}" }
                        td { "{row.sub_objective}" }
                        td { "{row.duration_str}" }
                        td { "{row.confidence_str}" }
                        td {
                            span { class: row.status_class, "{row.status}" }
                        }
                        td { class: "entry-notes", "{row.notes}" }
                    }
                }
            }
        }
    }
}

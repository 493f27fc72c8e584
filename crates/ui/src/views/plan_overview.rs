use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{DomainPlanVm, map_domain_plans};

#[component]
pub fn PlanOverviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let study_log = ctx.study_log();

    let resource = use_resource(move || {
        let study_log = study_log.clone();
        async move {
            let plans = study_log
                .plan_overview()
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok(map_domain_plans(&plans))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page plan-page",
            h2 { "Study Plan Overview" }
            p { class: "page-hint",
                "Each objective shows the status from its most recent log entry."
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(plans) => rsx! {
                    for plan in plans {
                        DomainSection { plan }
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
fn DomainSection(plan: DomainPlanVm) -> Element {
    rsx! {
        details { class: "plan-domain", open: true,
            summary {
                span { class: "plan-domain-title", "{plan.title}" }
                span { class: "plan-domain-meta", "{plan.progress_str} \u{b7} {plan.minutes_str}" }
            }
            table { class: "plan-table",
                thead {
                    tr {
                        th { "Sub-Objective" }
                        th { "Status" }
                        th { "Time" }
                        th { "Last Studied" }
                    }
                }
                tbody {
                    for objective in plan.objectives {
                        tr { key: "{objective.name}",
                            td { "{objective.name}" }
                            td {
                                span { class: objective.status_class, "{objective.status}" }
                            }
                            td { "{objective.minutes_str}" }
                            td { "{objective.last_studied_str}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AddEntryView, PlanOverviewView, ProgressLogView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AddEntryView)] AddEntry {},
        #[route("/log", ProgressLogView)] ProgressLog {},
        #[route("/plan", PlanOverviewView)] PlanOverview {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "CCSP Study Tracker" }
            ul {
                li { Link { to: Route::AddEntry {}, active_class: "active", "Add Study Entry" } }
                li { Link { to: Route::ProgressLog {}, active_class: "active", "View Progress Log" } }
                li { Link { to: Route::PlanOverview {}, active_class: "active", "Study Plan Overview" } }
            }
        }
    }
}

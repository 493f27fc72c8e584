use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, StudyLogService};
use storage::repository::{InMemoryRepository, StudyLogRepository};
use study_core::model::ValidationRules;
use study_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::{AddEntryView, PlanOverviewView, ProgressLogView};

#[derive(Clone)]
struct TestApp {
    study_log: Arc<StudyLogService>,
    export_path: PathBuf,
}

impl UiApp for TestApp {
    fn study_log(&self) -> Arc<StudyLogService> {
        Arc::clone(&self.study_log)
    }

    fn export_path(&self) -> PathBuf {
        self.export_path.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    AddEntry,
    ProgressLog,
    PlanOverview,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::AddEntry => rsx! { AddEntryView {} },
        ViewKind::ProgressLog => rsx! { ProgressLogView {} },
        ViewKind::PlanOverview => rsx! { PlanOverviewView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub study_log: Arc<StudyLogService>,
    pub export_path: PathBuf,
    _export_dir: tempfile::TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn settle(&mut self) {
        settle_dom(&mut self.dom).await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Let pending resources and spawned tasks resolve, then flush the resulting renders.
pub async fn settle_dom(dom: &mut VirtualDom) {
    for _ in 0..4 {
        let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work())
            .await;
        drive_dom(dom);
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_repo(view, Arc::new(InMemoryRepository::new()))
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: Arc<dyn StudyLogRepository>,
) -> ViewHarness {
    let study_log = Arc::new(StudyLogService::new(
        Clock::fixed(fixed_now()),
        repo,
        ValidationRules::default(),
    ));
    let export_dir = tempfile::tempdir().expect("temp dir");
    let export_path = export_dir.path().join("study_log_export.csv");

    let app = Arc::new(TestApp {
        study_log: Arc::clone(&study_log),
        export_path: export_path.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        study_log,
        export_path,
        _export_dir: export_dir,
    }
}

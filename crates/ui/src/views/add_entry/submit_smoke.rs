use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use services::{Clock, StudyLogService};
use storage::repository::{InMemoryRepository, StorageError, StudyLogRepository};
use study_core::model::{Domain, StudyEntry, ValidationRules};
use study_core::time::fixed_now;

use super::EntryFormBody;
use super::form::EntryForm;
use super::submit::{EntryFormState, use_entry_form};
use crate::views::test_harness::{drive_dom, settle_dom};

struct FailingRepo;

#[async_trait::async_trait]
impl StudyLogRepository for FailingRepo {
    async fn load_all(&self) -> Result<Vec<StudyEntry>, StorageError> {
        Err(StorageError::Io("disk gone".into()))
    }

    async fn save_all(&self, _entries: &[StudyEntry]) -> Result<(), StorageError> {
        Err(StorageError::Io("disk gone".into()))
    }

    async fn export(&self) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::Io("disk gone".into()))
    }
}

type StateHandle = Rc<RefCell<Option<EntryFormState>>>;

#[derive(Props, Clone)]
struct HarnessProps {
    study_log: Arc<StudyLogService>,
    handle: StateHandle,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn EntryFormHarness(props: HarnessProps) -> Element {
    let rules = *props.study_log.rules();
    let today = props.study_log.today();
    let state = use_entry_form(Arc::clone(&props.study_log));
    *props.handle.borrow_mut() = Some(state);
    rsx! {
        EntryFormBody { state, rules, today }
    }
}

struct SubmitHarness {
    dom: VirtualDom,
    study_log: Arc<StudyLogService>,
    handle: StateHandle,
}

impl SubmitHarness {
    fn new(repo: Arc<dyn StudyLogRepository>) -> Self {
        let study_log = Arc::new(StudyLogService::new(
            Clock::fixed(fixed_now()),
            repo,
            ValidationRules::default(),
        ));
        let handle = StateHandle::default();
        let mut dom = VirtualDom::new_with_props(
            EntryFormHarness,
            HarnessProps {
                study_log: Arc::clone(&study_log),
                handle: Rc::clone(&handle),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self {
            dom,
            study_log,
            handle,
        }
    }

    fn state(&self) -> EntryFormState {
        (*self.handle.borrow()).expect("form state registered")
    }

    fn fill(&mut self, apply: impl FnOnce(&mut EntryForm)) {
        let mut form = self.state().form;
        self.dom.in_runtime(|| form.with_mut(apply));
        drive_dom(&mut self.dom);
    }

    async fn submit(&mut self) {
        let submit = self.state().submit;
        self.dom.in_runtime(|| submit.call(()));
        settle_dom(&mut self.dom).await;
    }

    fn form(&self) -> EntryForm {
        let form = self.state().form;
        self.dom.in_runtime(|| form.peek().clone())
    }

    fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn missing_domain_is_reported_inline() {
    let mut harness = SubmitHarness::new(Arc::new(InMemoryRepository::new()));
    harness.fill(|form| form.notes = "skimmed the outline".into());
    harness.submit().await;

    let html = harness.render();
    assert!(html.contains("Choose a domain."), "missing domain error in {html}");
    assert!(!html.contains("Study log entry added!"), "unexpected success in {html}");
    assert!(harness.study_log.list().await.unwrap().is_empty());
    assert_eq!(harness.form().notes, "skimmed the outline");
}

#[tokio::test(flavor = "current_thread")]
async fn valid_form_is_logged_and_notes_are_cleared() {
    let mut harness = SubmitHarness::new(Arc::new(InMemoryRepository::new()));
    harness.fill(|form| {
        form.domain = Domain::CloudDataSecurity.label().to_string();
        form.sub_objective = "2.4 Implement data discovery".into();
        form.minutes = "45".into();
        form.confidence = "4".into();
        form.notes = "covered tokenization".into();
    });
    harness.submit().await;

    let html = harness.render();
    assert!(html.contains("Study log entry added!"), "missing success in {html}");
    assert!(!html.contains("form-error"), "unexpected error in {html}");

    let entries = harness.study_log.list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].domain(), Domain::CloudDataSecurity);
    assert_eq!(entries[0].duration_minutes(), 45);
    assert_eq!(entries[0].notes(), "covered tokenization");

    let form = harness.form();
    assert!(form.notes.is_empty());
    assert_eq!(form.domain, Domain::CloudDataSecurity.label());
    assert_eq!(form.date, "2023-11-14");
}

#[tokio::test(flavor = "current_thread")]
async fn storage_failure_is_shown_and_form_is_kept() {
    let mut harness = SubmitHarness::new(Arc::new(FailingRepo));
    harness.fill(|form| {
        form.domain = Domain::SecurityOperations.label().to_string();
        form.notes = "incident response drill".into();
    });
    harness.submit().await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong reading the study log"),
        "missing storage error in {html}"
    );
    assert!(!html.contains("Study log entry added!"), "unexpected success in {html}");
    assert_eq!(harness.form().notes, "incident response drill");
}

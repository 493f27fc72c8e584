use std::sync::Arc;

use chrono::Duration;
use storage::repository::{StorageError, StudyLogRepository};
use study_core::model::{Domain, StudyEntry, StudyEntryDraft, StudyStatus};
use study_core::time::fixed_now;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo};

fn draft(days_ago: i64, domain: Domain, minutes: u32, status: StudyStatus) -> StudyEntryDraft {
    StudyEntryDraft {
        date: (fixed_now() - Duration::days(days_ago)).date_naive(),
        domain: domain.label().to_string(),
        sub_objective: domain.sub_objectives().first().map(|s| (*s).to_string()),
        duration_minutes: minutes,
        notes: "chapter review".into(),
        confidence: Some(4),
        status,
    }
}

struct FailingRepo;

#[async_trait::async_trait]
impl StudyLogRepository for FailingRepo {
    async fn load_all(&self) -> Result<Vec<StudyEntry>, StorageError> {
        Err(StorageError::Io("unreadable".into()))
    }

    async fn save_all(&self, _entries: &[StudyEntry]) -> Result<(), StorageError> {
        Err(StorageError::Io("unreadable".into()))
    }

    async fn export(&self) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::Io("unreadable".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn add_entry_view_renders_form_with_defaults() {
    let mut harness = setup_view_harness(ViewKind::AddEntry);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Add Study Entry"), "missing title in {html}");
    assert!(html.contains("2023-11-14"), "missing default date in {html}");
    assert!(
        html.contains("Domain 3: Cloud Platform"),
        "missing domain options in {html}"
    );
    assert!(html.contains("Notes (optional)"), "missing notes label in {html}");
    assert!(html.contains("Submit"), "missing submit button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_log_view_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::ProgressLog);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("No study logs yet. Start by logging today"),
        "missing empty state in {html}"
    );
    assert!(!html.contains("Export CSV"), "export shown for empty log: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_log_view_lists_entries_and_totals() {
    let mut harness = setup_view_harness(ViewKind::ProgressLog);
    for (days_ago, domain, minutes) in [
        (1, Domain::CloudDataSecurity, 60),
        (0, Domain::SecurityOperations, 30),
    ] {
        harness
            .study_log
            .append(draft(days_ago, domain, minutes, StudyStatus::InProgress))
            .await
            .expect("append");
    }

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Total Hours Studied"), "missing total in {html}");
    assert!(html.contains("1.50"), "missing hours value in {html}");
    assert!(html.contains("2 days"), "missing streak in {html}");
    assert!(html.contains("4.0 / 5"), "missing confidence mean in {html}");
    assert!(
        html.contains("Domain 2: Cloud Data Security"),
        "missing domain row in {html}"
    );
    assert!(html.contains("chapter review"), "missing notes in {html}");
    assert!(html.contains("Export CSV"), "missing export in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn plan_overview_view_shows_latest_status() {
    let mut harness = setup_view_harness(ViewKind::PlanOverview);
    harness
        .study_log
        .append(draft(0, Domain::CloudConcepts, 45, StudyStatus::Completed))
        .await
        .expect("append");

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Study Plan Overview"), "missing title in {html}");
    assert!(html.contains("1 / 5 completed"), "missing progress in {html}");
    assert!(html.contains("status--completed"), "missing status badge in {html}");
    assert!(
        html.contains("Domain 6: Legal, Risk, and Compliance"),
        "missing outline domain in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn progress_log_view_reports_storage_errors() {
    let mut harness = setup_view_harness_with_repo(ViewKind::ProgressLog, Arc::new(FailingRepo));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong reading the study log"),
        "missing error message in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

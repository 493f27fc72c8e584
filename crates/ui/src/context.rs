use std::path::{Path, PathBuf};
use std::sync::Arc;

use services::StudyLogService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn study_log(&self) -> Arc<StudyLogService>;

    /// Where the "Export" action writes its CSV copy.
    fn export_path(&self) -> PathBuf;
}

#[derive(Clone)]
pub struct AppContext {
    study_log: Arc<StudyLogService>,
    export_path: PathBuf,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            study_log: app.study_log(),
            export_path: app.export_path(),
        }
    }

    #[must_use]
    pub fn study_log(&self) -> Arc<StudyLogService> {
        Arc::clone(&self.study_log)
    }

    #[must_use]
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

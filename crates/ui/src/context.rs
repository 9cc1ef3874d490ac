use std::sync::Arc;

use course_core::model::{Course, SectionId};
use services::ContentRegistry;

/// What the composition root must supply for the views to run.
pub trait UiApp: Send + Sync {
    fn course(&self) -> Arc<Course>;
    fn registry(&self) -> Arc<ContentRegistry>;
    fn start_section(&self) -> SectionId;
}

/// Explicit per-app context passed to views, built once at startup.
///
/// Lifecycle: created at launch, torn down never (single-window lifetime).
#[derive(Clone)]
pub struct AppContext {
    course: Arc<Course>,
    registry: Arc<ContentRegistry>,
    start_section: SectionId,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course: app.course(),
            registry: app.registry(),
            start_section: app.start_section(),
        }
    }

    #[must_use]
    pub fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    #[must_use]
    pub fn registry(&self) -> Arc<ContentRegistry> {
        Arc::clone(&self.registry)
    }

    #[must_use]
    pub fn start_section(&self) -> SectionId {
        self.start_section.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

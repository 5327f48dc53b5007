use std::sync::Arc;

use services::{Clock, QuestionSource, SessionController};

pub trait UiApp: Send + Sync {
    fn question_source(&self) -> Arc<dyn QuestionSource>;
    fn clock(&self) -> Clock;
    fn question_count(&self) -> usize;
}

#[derive(Clone)]
pub struct AppContext {
    question_source: Arc<dyn QuestionSource>,
    clock: Clock,
    question_count: usize,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_source: app.question_source(),
            clock: app.clock(),
            question_count: app.question_count(),
        }
    }

    #[must_use]
    pub fn question_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.question_source)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Fresh controller on the welcome screen, wired to this context's source.
    #[must_use]
    pub fn session_controller(&self) -> SessionController {
        SessionController::new(self.question_source(), self.clock)
            .with_question_count(self.question_count)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

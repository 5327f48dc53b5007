use std::sync::Arc;

use quiz_core::model::{
    AnswerState, AttemptError, AttemptSummary, Difficulty, ProgressTracker, Question,
    QuizAttempt, SchoolLevel, Screen, SectionType, Subject, User,
};

use super::notice::SessionNotice;
use crate::Clock;
use crate::error::{QuestionSourceError, SessionError};
use crate::generation::{DEFAULT_QUESTION_COUNT, GenerationRequest, QuestionSource};
use crate::quiz::{
    QuizRunner, RunnerStep, TimerEvent, TimerEvents, TimerSink, shuffle_options, timer_channel,
};

/// Ticket for an in-flight question generation started from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    token: u64,
    generation: GenerationRequest,
}

impl StartRequest {
    #[must_use]
    pub fn generation(&self) -> &GenerationRequest {
        &self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingStart {
    token: u64,
    section: SectionType,
    difficulty: Difficulty,
}

/// Screen state machine for one desktop session.
///
/// Owns the logged-in user, the progress tracker and the running attempt. Starting
/// an attempt is split in two (`prepare_start` / `complete_start`) so the UI can
/// await the question source without holding the controller.
pub struct SessionController {
    source: Arc<dyn QuestionSource>,
    clock: Clock,
    question_count: usize,
    timer_sink: TimerSink,
    timer_events: Option<TimerEvents>,

    screen: Screen,
    user: Option<User>,
    progress: ProgressTracker,
    selected_subject: Option<Subject>,
    pending: Option<PendingStart>,
    next_token: u64,
    notice: Option<SessionNotice>,
    runner: Option<QuizRunner>,
    last_result: Option<AttemptSummary>,
}

impl SessionController {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, clock: Clock) -> Self {
        let (timer_sink, timer_events) = timer_channel();
        Self {
            source,
            clock,
            question_count: DEFAULT_QUESTION_COUNT,
            timer_sink,
            timer_events: Some(timer_events),
            screen: Screen::Welcome,
            user: None,
            progress: ProgressTracker::new(),
            selected_subject: None,
            pending: None,
            next_token: 0,
            notice: None,
            runner: None,
            last_result: None,
        }
    }

    /// Questions per attempt, clamped so a perfect attempt scores exactly 100.
    #[must_use]
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count.clamp(1, DEFAULT_QUESTION_COUNT);
        self
    }

    /// Receiver for countdown and feedback events. Can be taken once; every event
    /// must be fed back through `handle_timer`.
    pub fn take_timer_events(&mut self) -> Option<TimerEvents> {
        self.timer_events.take()
    }

    #[must_use]
    pub fn question_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.source)
    }

    //
    // ─── WELCOME ──────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `SessionError::WrongScreen` outside the welcome screen and
    /// `SessionError::User` for an empty name.
    pub fn login(&mut self, name: &str, level: SchoolLevel) -> Result<(), SessionError> {
        if self.screen != Screen::Welcome {
            return Err(SessionError::WrongScreen(self.screen));
        }
        let user = User::new(name, level)?;
        tracing::info!(level = level.key(), "candidate logged in");
        self.user = Some(user);
        self.screen.transition(Screen::Menu);
        Ok(())
    }

    //
    // ─── MENU ─────────────────────────────────────────────────────────────────
    //

    pub fn select_subject(&mut self, subject: Subject) {
        if self.screen != Screen::Menu {
            return;
        }
        self.selected_subject = Some(subject);
        if self.notice == Some(SessionNotice::MissingSubject) {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Back to the welcome screen. Progress is kept for the rest of the process.
    pub fn logout(&mut self) -> bool {
        if self.screen != Screen::Menu || self.pending.is_some() {
            return false;
        }
        self.user = None;
        self.selected_subject = None;
        self.notice = None;
        self.last_result = None;
        self.screen.transition(Screen::Welcome)
    }

    /// Validate a start from the menu and mark generation as in flight.
    ///
    /// `subject` overrides the subject picked with `select_subject`; it is ignored
    /// outside didactics.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LockedDifficulty` when the gate is not met and
    /// `SessionError::MissingSubject` when didactics has no subject; both also set
    /// an inline notice. Returns `WrongScreen`, `Busy` or `NotLoggedIn` for starts
    /// the menu should not have offered.
    pub fn prepare_start(
        &mut self,
        section: SectionType,
        difficulty: Difficulty,
        subject: Option<Subject>,
    ) -> Result<StartRequest, SessionError> {
        if self.screen != Screen::Menu {
            return Err(SessionError::WrongScreen(self.screen));
        }
        if self.pending.is_some() {
            return Err(SessionError::Busy);
        }
        let level = self
            .user
            .as_ref()
            .map(User::school_level)
            .ok_or(SessionError::NotLoggedIn)?;

        let subject = if section.requires_subject() {
            let Some(subject) = subject.or(self.selected_subject) else {
                self.notice = Some(SessionNotice::MissingSubject);
                return Err(SessionError::MissingSubject);
            };
            self.selected_subject = Some(subject);
            Some(subject)
        } else {
            None
        };

        if let Err(locked) = self.progress.ensure_unlocked(section, difficulty) {
            tracing::warn!(section = section.key(), "rejected start of a locked difficulty");
            self.notice = Some(SessionNotice::Locked { section });
            return Err(locked.into());
        }

        self.next_token += 1;
        let token = self.next_token;
        self.pending = Some(PendingStart {
            token,
            section,
            difficulty,
        });
        self.notice = None;

        Ok(StartRequest {
            token,
            generation: GenerationRequest {
                section,
                level,
                difficulty,
                subject,
                count: self.question_count,
            },
        })
    }

    /// Apply the outcome of a generation started with `prepare_start`.
    ///
    /// Outcomes for a request that is no longer in flight are dropped.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::GenerationFailure` when the source failed or returned
    /// nothing; the screen stays on the menu with a retryable notice.
    pub fn complete_start(
        &mut self,
        request: StartRequest,
        result: Result<Vec<Question>, QuestionSourceError>,
    ) -> Result<(), SessionError> {
        let in_flight = self
            .pending
            .is_some_and(|pending| pending.token == request.token);
        if !in_flight || self.screen != Screen::Menu {
            tracing::debug!("dropping outcome of a superseded generation request");
            return Ok(());
        }
        self.pending = None;

        let generation = request.generation;
        let mut questions = match result {
            Ok(questions) => questions,
            Err(err) => return Err(self.fail_generation(&generation, err)),
        };
        questions.truncate(generation.count);

        let mut rng = rand::rng();
        let questions = questions
            .into_iter()
            .map(|question| shuffle_options(question, &mut rng))
            .collect();

        let attempt = match QuizAttempt::new(
            generation.section,
            generation.difficulty,
            generation.subject,
            questions,
            self.clock.now(),
        ) {
            Ok(attempt) => attempt,
            Err(AttemptError::NoQuestions) => {
                return Err(self.fail_generation(&generation, QuestionSourceError::NoQuestions));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            section = generation.section.key(),
            difficulty = generation.difficulty.key(),
            questions = attempt.questions().len(),
            "attempt started"
        );
        self.runner = Some(QuizRunner::start(
            attempt,
            self.timer_sink.clone(),
            self.clock,
        ));
        self.last_result = None;
        self.screen.transition(Screen::Quiz);
        Ok(())
    }

    /// Validate, generate and start an attempt in one call.
    ///
    /// # Errors
    ///
    /// See `prepare_start` and `complete_start`.
    pub async fn start_quiz(
        &mut self,
        section: SectionType,
        difficulty: Difficulty,
        subject: Option<Subject>,
    ) -> Result<(), SessionError> {
        let request = self.prepare_start(section, difficulty, subject)?;
        let source = Arc::clone(&self.source);
        let result = source.generate(request.generation()).await;
        self.complete_start(request, result)
    }

    fn fail_generation(
        &mut self,
        generation: &GenerationRequest,
        err: QuestionSourceError,
    ) -> SessionError {
        tracing::warn!(
            section = generation.section.key(),
            difficulty = generation.difficulty.key(),
            error = %err,
            "question generation failed"
        );
        self.notice = Some(SessionNotice::GenerationFailed {
            section: generation.section,
            difficulty: generation.difficulty,
            subject: generation.subject,
        });
        SessionError::GenerationFailure(err)
    }

    //
    // ─── QUIZ ─────────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `SessionError::WrongScreen` outside the quiz and
    /// `SessionError::Attempt` if the question was already answered.
    pub fn submit_answer(&mut self, option: &str) -> Result<AnswerState, SessionError> {
        if self.screen != Screen::Quiz {
            return Err(SessionError::WrongScreen(self.screen));
        }
        let runner = self.runner.as_mut().ok_or(SessionError::NoAttempt)?;
        Ok(runner.submit_answer(option)?)
    }

    /// Feed a countdown or feedback event from the timer channel.
    pub fn handle_timer(&mut self, event: TimerEvent) {
        let Some(runner) = self.runner.as_mut() else {
            tracing::debug!(epoch = event.epoch, "timer event with no running attempt");
            return;
        };
        match runner.on_timer(event) {
            Ok(RunnerStep::Finished(summary)) => self.finish_attempt(summary),
            Ok(RunnerStep::Stale) => {
                tracing::debug!(epoch = event.epoch, "ignoring stale timer event");
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "timer event rejected by attempt");
                if runner.attempt().is_finished() {
                    runner.cancel();
                    self.runner = None;
                    self.screen.transition(Screen::Menu);
                }
            }
        }
    }

    fn finish_attempt(&mut self, summary: AttemptSummary) {
        self.runner = None;
        let best = self
            .progress
            .record(summary.section(), summary.difficulty(), summary.score());
        tracing::info!(
            section = summary.section().key(),
            difficulty = summary.difficulty().key(),
            score = summary.score(),
            best,
            "attempt finished"
        );
        self.last_result = Some(summary);
        self.screen.transition(Screen::Result);
    }

    /// Abandon the running attempt without recording progress.
    pub fn exit_quiz(&mut self) -> bool {
        if self.screen != Screen::Quiz {
            return false;
        }
        if let Some(mut runner) = self.runner.take() {
            runner.cancel();
            tracing::info!("attempt abandoned");
        }
        self.screen.transition(Screen::Menu)
    }

    //
    // ─── RESULT ───────────────────────────────────────────────────────────────
    //

    pub fn return_to_menu(&mut self) -> bool {
        if self.screen != Screen::Result {
            return false;
        }
        self.screen.transition(Screen::Menu)
    }

    //
    // ─── ACCESSORS ────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn selected_subject(&self) -> Option<Subject> {
        self.selected_subject
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Section and difficulty currently being generated.
    #[must_use]
    pub fn loading_selection(&self) -> Option<(SectionType, Difficulty)> {
        self.pending
            .map(|pending| (pending.section, pending.difficulty))
    }

    #[must_use]
    pub fn notice(&self) -> Option<SessionNotice> {
        self.notice
    }

    #[must_use]
    pub fn runner(&self) -> Option<&QuizRunner> {
        self.runner.as_ref()
    }

    #[must_use]
    pub fn attempt(&self) -> Option<&QuizAttempt> {
        self.runner.as_ref().map(QuizRunner::attempt)
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&AttemptSummary> {
        self.last_result.as_ref()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }
}

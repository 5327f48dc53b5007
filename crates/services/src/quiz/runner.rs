use quiz_core::model::{
    AdvanceOutcome, AnswerState, AttemptError, AttemptSummary, FEEDBACK_DELAY, QuizAttempt,
    TickOutcome,
};
use rand::seq::IndexedRandom;

use super::timer::{QuizTimer, TimerEvent, TimerKind, TimerSink};
use crate::Clock;

const PRAISE: [&str; 4] = ["Brilliant", "Excellent", "Great", "Keep going"];

/// What a runner did in response to an input.
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerStep {
    Ticked { time_left: u32 },
    Expired,
    NextQuestion { index: usize },
    Finished(AttemptSummary),
    /// The event belonged to a cancelled or replaced timer.
    Stale,
    Ignored,
}

/// Drives one `QuizAttempt` in real time.
///
/// Owns the attempt's only timer: a countdown while a question is pending, then a
/// one-shot feedback delay after it is answered or expires.
#[derive(Debug)]
pub struct QuizRunner {
    attempt: QuizAttempt,
    timer: QuizTimer,
    clock: Clock,
    praise: Option<&'static str>,
}

impl QuizRunner {
    /// Take ownership of `attempt` and start the countdown for its first question.
    #[must_use]
    pub fn start(attempt: QuizAttempt, sink: TimerSink, clock: Clock) -> Self {
        let mut timer = QuizTimer::new(sink);
        timer.start_countdown();
        Self {
            attempt,
            timer,
            clock,
            praise: None,
        }
    }

    /// Answer the current question and schedule the move to the next one.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` if the question was already answered or the attempt is over.
    pub fn submit_answer(&mut self, option: &str) -> Result<AnswerState, AttemptError> {
        let state = self.attempt.submit_answer(option)?;
        if state == AnswerState::Correct {
            self.praise = PRAISE.choose(&mut rand::rng()).copied();
        }
        self.timer.schedule_feedback(FEEDBACK_DELAY);
        Ok(state)
    }

    /// Apply a timer event.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` if advancing or summarizing the attempt fails.
    pub fn on_timer(&mut self, event: TimerEvent) -> Result<RunnerStep, AttemptError> {
        if !self.timer.is_current(&event) {
            return Ok(RunnerStep::Stale);
        }
        match event.kind {
            TimerKind::Tick => Ok(match self.attempt.tick() {
                TickOutcome::Running { time_left } => RunnerStep::Ticked { time_left },
                TickOutcome::Expired => {
                    self.timer.schedule_feedback(FEEDBACK_DELAY);
                    RunnerStep::Expired
                }
                TickOutcome::Ignored => RunnerStep::Ignored,
            }),
            TimerKind::FeedbackElapsed => self.advance(),
        }
    }

    fn advance(&mut self) -> Result<RunnerStep, AttemptError> {
        self.praise = None;
        match self.attempt.advance()? {
            AdvanceOutcome::Next { index } => {
                self.timer.start_countdown();
                Ok(RunnerStep::NextQuestion { index })
            }
            AdvanceOutcome::Finished => {
                self.timer.cancel();
                let summary = self.attempt.finish(self.clock.now())?;
                Ok(RunnerStep::Finished(summary))
            }
        }
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    #[must_use]
    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    /// Praise word shown with a correct answer, until the attempt moves on.
    #[must_use]
    pub fn praise(&self) -> Option<&'static str> {
        self.praise
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }
}

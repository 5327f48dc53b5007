use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AttemptSummary, Difficulty, Question, SectionType, Subject, SummaryError};

/// Points awarded for each correctly answered question.
pub const POINTS_PER_QUESTION: u32 = 10;

/// Denominator shown next to every score.
pub const MAX_SCORE: u32 = 100;

/// How long answer feedback stays on screen before the attempt moves on.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// Countdown granularity.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("an attempt needs at least one question")]
    NoQuestions,

    #[error("the current question was already answered")]
    AlreadyAnswered,

    #[error("the current question has not been answered yet")]
    NotAnswered,

    #[error("the attempt is already finished")]
    Finished,

    #[error("the attempt is still in progress")]
    InProgress,

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

//
// ─── ANSWERS ──────────────────────────────────────────────────────────────────
//

/// Feedback state of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    Pending,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { chosen: String },
    /// The countdown reached zero before an option was chosen.
    TimedOut,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// One entry of the per-question correctness log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub outcome: AnswerOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { time_left: u32 },
    Expired,
    /// The question was already answered or the attempt is over.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next { index: usize },
    Finished,
}

//
// ─── ATTEMPT ──────────────────────────────────────────────────────────────────
//

/// One run through a generated question list.
///
/// Timer-free: the caller feeds one `tick` per elapsed second. The score is
/// always derived from the answer log, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAttempt {
    section: SectionType,
    difficulty: Difficulty,
    subject: Option<Subject>,
    questions: Vec<Question>,
    current: usize,
    time_left: u32,
    answer_state: AnswerState,
    log: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    finished: bool,
}

impl QuizAttempt {
    /// # Errors
    ///
    /// Returns `AttemptError::NoQuestions` if `questions` is empty.
    pub fn new(
        section: SectionType,
        difficulty: Difficulty,
        subject: Option<Subject>,
        questions: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, AttemptError> {
        if questions.is_empty() {
            return Err(AttemptError::NoQuestions);
        }
        Ok(Self {
            section,
            difficulty,
            subject,
            questions,
            current: 0,
            time_left: difficulty.seconds_per_question(),
            answer_state: AnswerState::Pending,
            log: Vec::new(),
            started_at,
            finished: false,
        })
    }

    /// Answer the current question.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::AlreadyAnswered` unless the question is pending,
    /// and `AttemptError::Finished` once the attempt is over.
    pub fn submit_answer(&mut self, option: &str) -> Result<AnswerState, AttemptError> {
        self.ensure_pending()?;
        let question = &self.questions[self.current];
        let outcome = if question.is_correct(option) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                chosen: option.to_owned(),
            }
        };
        Ok(self.resolve(outcome))
    }

    /// Count down one second. Expiry counts as an incorrect answer.
    pub fn tick(&mut self) -> TickOutcome {
        if self.finished || self.answer_state != AnswerState::Pending {
            return TickOutcome::Ignored;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return TickOutcome::Running {
                time_left: self.time_left,
            };
        }
        self.resolve(AnswerOutcome::TimedOut);
        TickOutcome::Expired
    }

    /// Move past an answered question.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::NotAnswered` while the current question is pending,
    /// and `AttemptError::Finished` once the attempt is over.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, AttemptError> {
        if self.finished {
            return Err(AttemptError::Finished);
        }
        if self.answer_state == AnswerState::Pending {
            return Err(AttemptError::NotAnswered);
        }
        if self.current + 1 >= self.questions.len() {
            self.finished = true;
            return Ok(AdvanceOutcome::Finished);
        }
        self.current += 1;
        self.answer_state = AnswerState::Pending;
        self.time_left = self.difficulty.seconds_per_question();
        Ok(AdvanceOutcome::Next {
            index: self.current,
        })
    }

    /// Summarize a finished attempt.
    ///
    /// A `completed_at` earlier than the start (wall clock stepped back) is
    /// clamped to the start time.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::InProgress` if the last question has not been advanced past,
    /// or `AttemptError::Summary` if the answer log is inconsistent.
    pub fn finish(&self, completed_at: DateTime<Utc>) -> Result<AttemptSummary, AttemptError> {
        if !self.finished {
            return Err(AttemptError::InProgress);
        }
        let completed_at = completed_at.max(self.started_at);
        let summary = AttemptSummary::from_log(
            self.section,
            self.difficulty,
            self.subject,
            self.questions.len(),
            &self.log,
            self.started_at,
            completed_at,
        )?;
        Ok(summary)
    }

    fn ensure_pending(&self) -> Result<(), AttemptError> {
        if self.finished {
            return Err(AttemptError::Finished);
        }
        if self.answer_state != AnswerState::Pending {
            return Err(AttemptError::AlreadyAnswered);
        }
        Ok(())
    }

    fn resolve(&mut self, outcome: AnswerOutcome) -> AnswerState {
        self.answer_state = if outcome.is_correct() {
            AnswerState::Correct
        } else {
            AnswerState::Incorrect
        };
        self.log.push(AnswerRecord {
            question_index: self.current,
            outcome,
        });
        self.answer_state
    }

    #[must_use]
    pub fn section(&self) -> SectionType {
        self.section
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn answer_state(&self) -> AnswerState {
        self.answer_state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn log(&self) -> &[AnswerRecord] {
        &self.log
    }

    /// The outcome recorded for the current question, if it has been answered.
    #[must_use]
    pub fn current_outcome(&self) -> Option<&AnswerOutcome> {
        self.log
            .last()
            .filter(|record| record.question_index == self.current)
            .map(|record| &record.outcome)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        let correct = self.log.iter().filter(|r| r.outcome.is_correct()).count();
        u32::try_from(correct).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct_count().saturating_mul(POINTS_PER_QUESTION)
    }
}

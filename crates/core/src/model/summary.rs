use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::attempt::{AnswerRecord, POINTS_PER_QUESTION};
use crate::model::progress::UNLOCK_SCORE;
use crate::model::{Difficulty, SectionType, Subject};

/// Minimum score that counts as a pass.
pub const PASS_SCORE: u32 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many questions for a single attempt: {len}")]
    TooManyQuestions { len: usize },

    #[error("answer log has {answered} entries for {total} questions")]
    IncompleteLog { answered: usize, total: usize },
}

/// How the final score reads to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Failed,
    Passed,
    Excellent,
}

impl Verdict {
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        if score >= UNLOCK_SCORE {
            Self::Excellent
        } else if score >= PASS_SCORE {
            Self::Passed
        } else {
            Self::Failed
        }
    }
}

/// Aggregate of a completed attempt, built from its answer log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptSummary {
    section: SectionType,
    difficulty: Difficulty,
    subject: Option<Subject>,
    correct: u32,
    total: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl AttemptSummary {
    /// Build a summary from the per-question log of a finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before `started_at`,
    /// `SummaryError::IncompleteLog` if not every question has exactly one entry,
    /// and `SummaryError::TooManyQuestions` if the count cannot fit in `u32`.
    pub fn from_log(
        section: SectionType,
        difficulty: Difficulty,
        subject: Option<Subject>,
        question_count: usize,
        log: &[AnswerRecord],
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if log.len() != question_count {
            return Err(SummaryError::IncompleteLog {
                answered: log.len(),
                total: question_count,
            });
        }
        let total = u32::try_from(question_count)
            .map_err(|_| SummaryError::TooManyQuestions {
                len: question_count,
            })?;

        let mut correct = 0_u32;
        for record in log {
            if record.outcome.is_correct() {
                correct = correct.saturating_add(1);
            }
        }

        Ok(Self {
            section,
            difficulty,
            subject,
            correct,
            total,
            started_at,
            completed_at,
        })
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
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.correct.saturating_mul(POINTS_PER_QUESTION)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::for_score(self.score())
    }

    /// An excellent score on hard earns the qualification certificate.
    #[must_use]
    pub fn earns_certificate(&self) -> bool {
        self.verdict() == Verdict::Excellent && self.difficulty == Difficulty::Hard
    }
}

pub mod attempt;
mod catalog;
pub mod progress;
mod question;
mod screen;
mod summary;
mod user;

pub use attempt::{
    AdvanceOutcome, AnswerOutcome, AnswerRecord, AnswerState, AttemptError, FEEDBACK_DELAY,
    MAX_SCORE, POINTS_PER_QUESTION, QuizAttempt, TICK_INTERVAL, TickOutcome,
};
pub use catalog::{Difficulty, QuestionKind, SchoolLevel, SectionType, Subject};
pub use progress::{LockedDifficulty, ProgressTracker, UNLOCK_SCORE};
pub use question::{Question, QuestionError};
pub use screen::Screen;
pub use summary::{AttemptSummary, PASS_SCORE, SummaryError, Verdict};
pub use user::{User, UserError};

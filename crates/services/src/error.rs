//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{AttemptError, LockedDifficulty, QuestionError, Screen, UserError};

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question generation is not configured")]
    Disabled,
    #[error("question generator returned an empty response")]
    EmptyResponse,
    #[error("question generator request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question generator returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("question generator returned no questions")]
    NoQuestions,
    #[error("generated question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("question source unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted by `SessionController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no user is logged in")]
    NotLoggedIn,
    #[error(transparent)]
    User(#[from] UserError),
    #[error("pick a subject before starting a didactics quiz")]
    MissingSubject,
    #[error(transparent)]
    LockedDifficulty(#[from] LockedDifficulty),
    #[error("questions are already being generated")]
    Busy,
    #[error("action is not available on the {0:?} screen")]
    WrongScreen(Screen),
    #[error("no attempt is running")]
    NoAttempt,
    #[error("question generation failed: {0}")]
    GenerationFailure(#[from] QuestionSourceError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
}

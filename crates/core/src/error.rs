use thiserror::Error;

use crate::model::{AttemptError, LockedDifficulty, QuestionError, SummaryError, UserError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Locked(#[from] LockedDifficulty),
}

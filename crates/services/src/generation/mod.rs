//! Question generation seam and its adapters.

mod chat;
mod fixed;
mod parse;
mod prompt;

use async_trait::async_trait;
use quiz_core::model::{Difficulty, Question, SchoolLevel, SectionType, Subject};

use crate::error::QuestionSourceError;

pub use chat::{ChatQuestionSource, GeneratorConfig};
pub use fixed::FixedQuestionSource;
pub use parse::parse_questions;
pub use prompt::build_prompt;

/// Number of questions requested per attempt; ten correct answers make 100 points.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// What to generate for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub section: SectionType,
    pub level: SchoolLevel,
    pub difficulty: Difficulty,
    pub subject: Option<Subject>,
    pub count: usize,
}

/// Produces the question list for an attempt.
///
/// Implementations must return a non-empty list of validated questions or an error;
/// callers never see a partial list.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Question>, QuestionSourceError>;
}

use thiserror::Error;

use crate::model::QuestionKind;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Validation failures for generated question records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text must not be empty")]
    EmptyText,

    #[error("a question needs at least {min} options, got {len}")]
    TooFewOptions { min: usize, len: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct answer is not one of the options")]
    CorrectAnswerMissing,

    #[error("replacement options are not a permutation of the original options")]
    OptionsMismatch,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question whose correct answer is one of its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    kind: QuestionKind,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    pub const MIN_OPTIONS: usize = 2;

    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, there are fewer than two options,
    /// an option is blank, or `correct_answer` is not among the options.
    pub fn new(
        text: impl Into<String>,
        kind: QuestionKind,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        let correct_answer = correct_answer.into();

        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < Self::MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                min: Self::MIN_OPTIONS,
                len: options.len(),
            });
        }
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if !options.contains(&correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing);
        }

        Ok(Self {
            text,
            kind,
            options,
            correct_answer,
        })
    }

    /// Replace the option order, keeping the same multiset of options.
    ///
    /// The question is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::OptionsMismatch` if `options` is not a permutation
    /// of the current options.
    pub fn reorder_options(&mut self, options: Vec<String>) -> Result<(), QuestionError> {
        let mut current: Vec<&String> = self.options.iter().collect();
        let mut proposed: Vec<&String> = options.iter().collect();
        current.sort();
        proposed.sort();
        if current != proposed {
            return Err(QuestionError::OptionsMismatch);
        }
        self.options = options;
        Ok(())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

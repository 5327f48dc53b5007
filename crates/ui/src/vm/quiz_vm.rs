use quiz_core::model::{AnswerOutcome, AnswerState, MAX_SCORE};
use services::QuizRunner;

use crate::vm::time_fmt::format_countdown;

/// Seconds left at which the countdown switches to its urgent style.
pub const URGENT_SECONDS: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStyle {
    Idle,
    /// Shown on the correct option once the question is answered.
    Correct,
    /// The wrong option the user picked.
    Wrong,
    Disabled,
}

impl OptionStyle {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "quiz-option",
            Self::Correct => "quiz-option quiz-option--correct",
            Self::Wrong => "quiz-option quiz-option--wrong",
            Self::Disabled => "quiz-option quiz-option--disabled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub style: OptionStyle,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackVm {
    Praise(&'static str),
    Wrong { correct_answer: String },
    TimeUp { correct_answer: String },
}

impl FeedbackVm {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Praise(word) => format!("{word}!"),
            Self::Wrong { correct_answer } => {
                format!("Wrong answer. The correct answer is: {correct_answer}")
            }
            Self::TimeUp { correct_answer } => {
                format!("Time's up! The correct answer is: {correct_answer}")
            }
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Praise(_) => "quiz-feedback quiz-feedback--correct",
            Self::Wrong { .. } | Self::TimeUp { .. } => "quiz-feedback quiz-feedback--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub heading: String,
    pub score_label: String,
    pub countdown: String,
    pub urgent: bool,
    pub progress_label: String,
    pub kind_label: &'static str,
    pub question: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
}

#[must_use]
pub fn map_quiz(runner: &QuizRunner) -> QuizVm {
    let attempt = runner.attempt();
    let question = attempt.current_question();
    let answered = attempt.answer_state() != AnswerState::Pending;
    let outcome = attempt.current_outcome();
    let chosen = match outcome {
        Some(AnswerOutcome::Incorrect { chosen }) => Some(chosen.as_str()),
        _ => None,
    };

    let options = question
        .options()
        .iter()
        .map(|option| {
            let style = if !answered {
                OptionStyle::Idle
            } else if question.is_correct(option) {
                OptionStyle::Correct
            } else if chosen == Some(option.as_str()) {
                OptionStyle::Wrong
            } else {
                OptionStyle::Disabled
            };
            OptionVm {
                text: option.clone(),
                style,
                disabled: answered,
            }
        })
        .collect();

    let correct_answer = question.correct_answer().to_string();
    let feedback = outcome.map(|outcome| match outcome {
        AnswerOutcome::Correct => FeedbackVm::Praise(runner.praise().unwrap_or("Correct")),
        AnswerOutcome::Incorrect { .. } => FeedbackVm::Wrong { correct_answer },
        AnswerOutcome::TimedOut => FeedbackVm::TimeUp { correct_answer },
    });

    let heading = match attempt.subject() {
        Some(subject) => format!("{} · {subject}", attempt.section()),
        None => attempt.section().to_string(),
    };

    QuizVm {
        heading: format!("{heading} · {}", attempt.difficulty()),
        score_label: format!("Score: {} / {MAX_SCORE}", attempt.score()),
        countdown: format_countdown(attempt.time_left()),
        urgent: attempt.time_left() < URGENT_SECONDS,
        progress_label: format!(
            "Question {} of {}",
            attempt.current_index() + 1,
            attempt.questions().len()
        ),
        kind_label: question.kind().label(),
        question: question.text().to_string(),
        options,
        feedback,
    }
}

#![forbid(unsafe_code)]

pub mod error;
pub mod generation;
pub mod quiz;
pub mod session;

pub use quiz_core::Clock;

pub use error::{QuestionSourceError, SessionError};
pub use generation::{
    ChatQuestionSource, FixedQuestionSource, GenerationRequest, GeneratorConfig, QuestionSource,
};
pub use quiz::{
    QuizRunner, QuizTimer, RunnerStep, TimerEvent, TimerEvents, TimerKind, TimerSink,
    shuffle_options, timer_channel,
};
pub use session::{SessionController, SessionNotice, StartRequest};

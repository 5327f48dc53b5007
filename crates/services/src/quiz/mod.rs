mod runner;
mod shuffle;
mod timer;

pub use runner::{QuizRunner, RunnerStep};
pub use shuffle::shuffle_options;
pub use timer::{QuizTimer, TimerEvent, TimerEvents, TimerKind, TimerSink, timer_channel};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::logger::tracing::{self, Level};
use services::generation::DEFAULT_QUESTION_COUNT;
use services::{ChatQuestionSource, Clock, FixedQuestionSource, GeneratorConfig, QuestionSource};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionCount { raw: String },
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionCount { raw } => {
                write!(f, "invalid --questions value: {raw} (expected 1-10)")
            }
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    source: Arc<dyn QuestionSource>,
    clock: Clock,
    question_count: usize,
}

impl UiApp for DesktopApp {
    fn question_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.source)
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn question_count(&self) -> usize {
        self.question_count
    }
}

/// Environment fallbacks, read once at startup. Flags win over these.
#[derive(Debug, Default)]
struct EnvDefaults {
    question_count: Option<String>,
    log_level: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            question_count: std::env::var("QUIZ_QUESTION_COUNT").ok(),
            log_level: std::env::var("QUIZ_LOG").ok(),
        }
    }
}

#[derive(Debug)]
struct Args {
    question_count: usize,
    model: Option<String>,
    offline: bool,
    log_level: Level,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <n>] [--model <id>] [--offline]");
    eprintln!("                      [--log-level <trace|debug|info|warn|error>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTION_COUNT}");
    eprintln!("  --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_AI_API_KEY, QUIZ_AI_BASE_URL, QUIZ_AI_MODEL  # question generator");
    eprintln!("  QUIZ_QUESTION_COUNT, QUIZ_LOG");
    eprintln!();
    eprintln!("Without QUIZ_AI_API_KEY (or with --offline) a built-in question set is used.");
}

fn parse_question_count(raw: String) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(count) if (1..=DEFAULT_QUESTION_COUNT).contains(&count) => Ok(count),
        _ => Err(ArgsError::InvalidQuestionCount { raw }),
    }
}

fn parse_log_level(raw: String) -> Result<Level, ArgsError> {
    Level::from_str(raw.trim()).map_err(|_| ArgsError::InvalidLogLevel { raw })
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Self, ArgsError> {
        let mut question_count = match env.question_count {
            Some(value) => parse_question_count(value)?,
            None => DEFAULT_QUESTION_COUNT,
        };
        let mut log_level = match env.log_level {
            Some(value) => parse_log_level(value)?,
            None => Level::INFO,
        };
        let mut model = None;
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    question_count = parse_question_count(require_value(args, "--questions")?)?;
                }
                "--model" => {
                    let value = require_value(args, "--model")?;
                    if !value.trim().is_empty() {
                        model = Some(value.trim().to_string());
                    }
                }
                "--offline" => offline = true,
                "--log-level" => {
                    log_level = parse_log_level(require_value(args, "--log-level")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            question_count,
            model,
            offline,
            log_level,
        })
    }
}

fn question_source(args: &Args) -> Arc<dyn QuestionSource> {
    if args.offline {
        tracing::info!("offline mode: using the built-in question set");
        return Arc::new(FixedQuestionSource::demo());
    }
    let Some(config) = GeneratorConfig::from_env() else {
        tracing::warn!("QUIZ_AI_API_KEY is not set: using the built-in question set");
        return Arc::new(FixedQuestionSource::demo());
    };
    let config = match args.model.as_deref() {
        Some(model) => config.with_model(model),
        None => config,
    };
    tracing::info!(model = %config.model, "using the question generator");
    Arc::new(ChatQuestionSource::new(Some(config)))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    dioxus::logger::init(args.log_level)?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        source: question_source(&args),
        clock: Clock::system(),
        question_count: args.question_count,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Teacher exam prep")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

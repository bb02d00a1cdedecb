// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use estcheck::app_config::{self, Config};
use estcheck::linguistics::estonian_tables;
use estcheck::protocol::{self, Response, SuggestFixResponse};
use estcheck::validation::{ErrorValidator, Quiz, QuizRunner};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer one JSON request (default command)
    Request {
        /// Read the request from this file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Validate a single exercise sentence
    Validate {
        /// The exercise sentence
        #[arg(short, long)]
        sentence: String,

        /// The word the exercise marks as wrong
        #[arg(short, long)]
        error_word: String,

        /// The explanation shown to the learner
        #[arg(short = 'x', long, default_value = "")]
        explanation: String,
    },

    /// Suggest a corrected verb form
    Suggest {
        /// The exercise sentence
        #[arg(short, long)]
        sentence: String,

        /// The word to correct
        #[arg(short, long)]
        error_word: String,
    },

    /// Validate every question of a quiz file
    Quiz {
        /// Quiz JSON, either the quiz object or a request wrapping it in "quiz"
        #[arg(value_name = "QUIZ_FILE")]
        path: PathBuf,
    },

    /// List the cases whose endings match a word
    Cases {
        #[arg(value_name = "WORD")]
        word: String,
    },

    /// Generate shell completions for estcheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// estcheck - Estonian error-detection quiz validator
///
/// Checks that each exercise sentence contains exactly one detectable
/// grammatical error and proposes corrected verb forms.
#[derive(Parser, Debug)]
#[command(name = "estcheck")]
#[command(version)]
#[command(about = "Validates Estonian error-detection exercises")]
#[command(long_about = "estcheck audits language-learning exercises that contain exactly one marked error.

EXAMPLES:
    echo '{\"action\":\"validate_single\",\"sentence\":\"ma loed raamatut\",\"error_word\":\"loed\"}' | estcheck
    estcheck validate -s 'ma loed raamatut' -e loed
    estcheck suggest -s 'ma loe raamatut' -e loe
    estcheck quiz quiz.json --pretty
    estcheck cases majast
    estcheck completions bash > estcheck.bash

REQUEST ACTIONS:
    validate_single - {sentence, error_word, explanation}
    validate_quiz   - {quiz: {questions: [{question, correctAnswer, explanation}]}}
    suggest_fix     - {sentence, error_word}")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long = "config", global = true, value_name = "PATH", default_value = "estcheck.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

// @struct: Logger writing to stderr so stdout carries only responses
struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        StderrLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                color, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "estcheck", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    StderrLogger::init(config.log_level.into())?;
    debug!("Using configuration: {:?}", config);

    let validator = ErrorValidator::new(estonian_tables());

    match cli.command {
        None => run_request(None, &validator, &config),
        Some(Commands::Request { input }) => run_request(input, &validator, &config),
        Some(Commands::Validate { sentence, error_word, explanation }) => {
            let verdict = validator.validate(&sentence, &error_word, &explanation);
            info!("{}", verdict.summary);
            print_response(&Response::Verdict(verdict), &config)
        }
        Some(Commands::Suggest { sentence, error_word }) => {
            let suggested_fix = validator.suggest_fix(&sentence, &error_word);
            print_response(&Response::Fix(SuggestFixResponse { suggested_fix }), &config)
        }
        Some(Commands::Quiz { path }) => run_quiz(&path, &validator, &config),
        Some(Commands::Cases { word }) => {
            let cases = estonian_tables().candidate_cases(&word);
            if cases.is_empty() {
                println!("{}: no matching case endings", word);
            } else {
                let names: Vec<String> = cases.iter().map(|c| c.to_string()).collect();
                println!("{}: {}", word, names.join(", "));
            }
            Ok(())
        }
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

// Load the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load(&cli.config_path)
        .context("Configuration loading failed")?;

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone().into();
    }
    if cli.pretty {
        config.output.pretty = true;
    }

    Ok(config)
}

fn run_request(input: Option<PathBuf>, validator: &ErrorValidator<'_>, config: &Config) -> Result<()> {
    let response = match &input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open request file: {}", path.display()))?;
            protocol::process(BufReader::new(file), validator)
        }
        None => protocol::process(std::io::stdin().lock(), validator),
    }
    .context("Failed to handle request")?;

    match response {
        Some(response) => print_response(&response, config),
        None => Ok(()),
    }
}

fn run_quiz(path: &Path, validator: &ErrorValidator<'_>, config: &Config) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open quiz file: {}", path.display()))?;
    let mut value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse quiz file: {}", path.display()))?;

    if let Some(inner) = value.get_mut("quiz") {
        value = inner.take();
    }
    let quiz: Quiz = serde_json::from_value(value)
        .with_context(|| format!("Malformed quiz in {}", path.display()))?;

    let report = QuizRunner::new(validator).run(&quiz);
    let all_valid = report.all_valid;
    let invalid = report.invalid_questions;
    let total = report.total_questions;

    print_response(&Response::Quiz(report), config)?;

    if config.quiz.strict && !all_valid {
        return Err(anyhow!("{} of {} quiz questions are invalid", invalid, total));
    }
    Ok(())
}

fn print_response(response: &Response, config: &Config) -> Result<()> {
    let rendered = protocol::render(response, &config.output)?;
    println!("{}", rendered);
    Ok(())
}

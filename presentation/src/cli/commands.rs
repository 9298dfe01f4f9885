//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use trivia_application::TriviaConfig;
use trivia_domain::{QuestionCategory, QuestionDifficulty, QuestionType};

/// Output format for `--fetch`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable question list
    Text,
    /// JSON array of questions
    Json,
}

/// CLI arguments for trivia-notify
#[derive(Parser, Debug)]
#[command(name = "trivia-notify")]
#[command(author, version, about = "Periodic trivia questions from the Open Trivia Database")]
#[command(long_about = r#"
trivia-notify asks you a trivia question every so often and tells you
whether you got it right. Questions you answered or dismissed are not
asked again during the session.

Answer by typing the number of your choice. Press Enter (or type "s")
to dismiss the current question.

Configuration files are loaded from (in priority order):
1. TRIVIA_* environment variables
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-notify/config.toml   Global config

Example:
  trivia-notify --interval-minutes 1
  trivia-notify --category "Science: Computers" --difficulty easy
  trivia-notify --fetch --amount 5 -o json
"#)]
pub struct Cli {
    /// Minutes between questions
    #[arg(short, long, value_name = "MINUTES")]
    pub interval_minutes: Option<u64>,

    /// How often the scheduler checks whether a question is due
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_seconds: Option<u64>,

    /// Questions fetched per batch (1-50)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=50))]
    pub amount: Option<u32>,

    /// Only ask questions from this category (provider label or code)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<QuestionCategory>,

    /// Only ask questions of this difficulty (easy, medium, hard)
    #[arg(short, long, value_name = "DIFFICULTY")]
    pub difficulty: Option<QuestionDifficulty>,

    /// Only ask questions of this type (multiple, boolean)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub question_type: Option<QuestionType>,

    /// Fetch one batch, print it and exit
    #[arg(long)]
    pub fetch: bool,

    /// Output format for --fetch
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment variables
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_to(&self, mut config: TriviaConfig) -> TriviaConfig {
        if let Some(minutes) = self.interval_minutes {
            config = config.with_interval_minutes(minutes);
        }
        if let Some(seconds) = self.tick_seconds {
            config = config.with_tick_seconds(seconds);
        }
        if let Some(amount) = self.amount {
            config.query = config.query.with_amount(amount);
        }
        if let Some(category) = self.category {
            config.query = config.query.with_category(category);
        }
        if let Some(difficulty) = self.difficulty {
            config.query = config.query.with_difficulty(difficulty);
        }
        if let Some(question_type) = self.question_type {
            config.query = config.query.with_type(question_type);
        }
        config
    }
}

//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Justinianus CLI - Score evidence graphs and triage deadlines of a case.
#[derive(Debug, Parser)]
#[command(name = "justinianus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "JUSTINIANUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score the claims of a case
    Score(ScoreArgs),

    /// Classify the deadlines of a case
    Deadlines(DeadlinesArgs),

    /// Full case report: claims, case score and deadlines
    Report(ReportArgs),

    /// Classify a days-remaining count
    Classify(ClassifyArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Case file (.json or .toml)
    pub case_file: PathBuf,

    /// Only score this claim node
    #[arg(long)]
    pub claim: Option<String>,
}

/// Arguments for the deadlines command.
#[derive(Debug, Parser)]
pub struct DeadlinesArgs {
    /// Case file (.json or .toml)
    pub case_file: PathBuf,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Case file (.json or .toml)
    pub case_file: PathBuf,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Days remaining until the deadline (negative when overdue)
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set the risk dampening factor (0.0-1.0)
    SetDampening {
        /// New dampening factor
        value: f64,
    },
}

impl Cli {
    /// Whether the command needs the existing configuration file.
    ///
    /// `config init` replaces the file, so it must run even when the file
    /// no longer parses.
    pub fn reads_config(&self) -> bool {
        !matches!(
            self.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { .. }
            })
        )
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

//! Justinianus CLI - evidence-graph scoring and deadline triage for legal cases.

use clap::Parser;
use justinianus_cli::commands;
use justinianus_cli::logging::init_tracing;
use justinianus_cli::{Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        let formatter = Formatter::new(justinianus_cli::config::OutputFormat::Table, true);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> justinianus_cli::Result<()> {
    // Load config, from --config if given
    let mut config = if !cli.reads_config() {
        Config::default()
    } else {
        match &cli.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        }
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    tracing::debug!(?format, color_enabled, "Starting command");

    match cli.command {
        Command::Score(args) => commands::execute_score(args, &config.scoring, &formatter),
        Command::Deadlines(args) => commands::execute_deadlines(args, &formatter),
        Command::Report(args) => commands::execute_report(args, &config.scoring, &formatter),
        Command::Classify(args) => commands::execute_classify(args, &formatter),
        Command::Config(args) => {
            commands::execute_config(args, &mut config, cli.config.as_deref(), &formatter)
        }
    }
}

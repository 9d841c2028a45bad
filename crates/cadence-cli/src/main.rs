use cadence_core::error::CoreError;
use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

/// Environment variable holding the log filter, e.g. `CADENCE_LOG=debug`.
const LOG_ENV: &str = "CADENCE_LOG";

fn main() {
    let cli = cli::Cli::parse();

    let config = config::Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!(
            "{} Could not load {}: {}. Using defaults.",
            "Warning:".yellow().bold(),
            cli.config.display(),
            e
        );
        config::Config::default()
    });
    init_tracing(&config);

    let today = util::today();

    let result = match cli.command {
        cli::Commands::Describe(command) => commands::describe::describe_rule(command, today),
        cli::Commands::Preview(command) => {
            commands::preview::preview_rule(command, &config, today)
        }
        cli::Commands::Calendar(command) => {
            commands::calendar::show_calendar(command, &config, today)
        }
        cli::Commands::Next(command) => commands::next::next_occurrence(command, &config, today),
        cli::Commands::Check(command) => commands::check::check_date(command, today),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::InvalidRule(s)) => {
            eprintln!("{} Invalid rule: {}", "Error:".style(error_style), s);
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}

// Labnotes - Lab trend viewer and clinical note keeper
// Copyright (c) 2025 Labnotes Contributors
// Licensed under the MIT License

use labnotes::cli::commands::EXIT_FATAL;
use labnotes::cli::{Cli, Commands};
use labnotes::config::{load_config_or_default, LoggingConfig};
use labnotes::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the config when it loads; commands report
    // a broken config themselves.
    let (config_level, logging_config) = match load_config_or_default(&cli.config) {
        Ok(config) => (Some(config.application.log_level), config.logging),
        Err(_) => (None, LoggingConfig::default()),
    };
    let log_level = cli
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Labnotes starting");

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Patients(args) => args.execute(&cli.config),
        Commands::View(args) => args.execute(&cli.config),
        Commands::Note(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
    }
}

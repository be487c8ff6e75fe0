//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Labnotes using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Labnotes - lab trend viewer and clinical note keeper
#[derive(Parser, Debug)]
#[command(name = "labnotes")]
#[command(version, about, long_about = None)]
#[command(author = "Labnotes Contributors")]
pub struct Cli {
    /// Path to configuration file (optional, defaults apply when missing)
    #[arg(short, long, default_value = "labnotes.toml", env = "LABNOTES_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LABNOTES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the patients and date range of a lab table
    Patients(commands::patients::PatientsArgs),

    /// Show one patient's filtered labs, alerts and trends
    View(commands::view::ViewArgs),

    /// Add or list clinical notes
    Note(commands::note::NoteArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::note::NoteCommand;
    use crate::cli::commands::view::{ChartKind, OutputFormat};
    use chrono::NaiveDate;

    #[test]
    fn test_cli_parse_patients() {
        let cli = Cli::parse_from(["labnotes", "patients", "--file", "labs.csv"]);
        assert_eq!(cli.config, "labnotes.toml");
        match cli.command {
            Commands::Patients(args) => assert_eq!(args.file.to_str(), Some("labs.csv")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["labnotes", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["labnotes", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_view() {
        let cli = Cli::parse_from([
            "labnotes",
            "view",
            "--file",
            "labs.csv",
            "--patient",
            "Jane Doe",
            "--from",
            "2024-01-01",
            "--to",
            "01/05/2024",
            "--chart",
            "bar",
            "--format",
            "json",
        ]);
        let Commands::View(args) = cli.command else {
            panic!("expected view");
        };
        assert_eq!(args.patient, "Jane Doe");
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.to, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(args.chart, ChartKind::Bar);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.export.is_none());
    }

    #[test]
    fn test_cli_parse_view_defaults() {
        let cli = Cli::parse_from(["labnotes", "view", "-f", "labs.csv", "-p", "A"]);
        let Commands::View(args) = cli.command else {
            panic!("expected view");
        };
        assert_eq!(args.from, None);
        assert_eq!(args.to, None);
        assert_eq!(args.chart, ChartKind::Line);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "labnotes", "view", "-f", "labs.csv", "-p", "A", "--from", "yesterday",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_note_add() {
        let cli = Cli::parse_from([
            "labnotes",
            "note",
            "add",
            "--patient",
            "Jane Doe",
            "--text",
            "Iron started",
        ]);
        let Commands::Note(args) = cli.command else {
            panic!("expected note");
        };
        match args.command {
            NoteCommand::Add(add) => {
                assert_eq!(add.patient, "Jane Doe");
                assert_eq!(add.text, "Iron started");
                assert_eq!(add.date, None);
            }
            NoteCommand::List(_) => panic!("expected add"),
        }
    }

    #[test]
    fn test_cli_parse_note_list() {
        let cli = Cli::parse_from(["labnotes", "note", "list", "--patient", "Jane Doe"]);
        let Commands::Note(args) = cli.command else {
            panic!("expected note");
        };
        assert!(matches!(args.command, NoteCommand::List(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["labnotes", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref a) if a.force));
    }
}

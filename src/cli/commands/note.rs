//! Note command implementation
//!
//! `note add` saves a new clinical note, `note list` prints a patient's
//! notes newest first.

use super::view::render_notes;
use super::{load_settings, parse_date_arg, report_error, EXIT_INPUT, EXIT_OK};
use crate::adapters::notes::{FileNoteStore, NoteRepository};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

/// Arguments for the note command
#[derive(Args, Debug)]
pub struct NoteArgs {
    /// Note operation
    #[command(subcommand)]
    pub command: NoteCommand,
}

/// Note operations
#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Save a new note for a patient
    Add(AddArgs),

    /// List a patient's notes, newest first
    List(ListArgs),
}

/// Arguments for `note add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Patient identifier
    #[arg(short, long)]
    pub patient: String,

    /// Clinically relevant date (defaults to today)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Note text
    #[arg(short, long)]
    pub text: String,
}

/// Arguments for `note list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Patient identifier
    #[arg(short, long)]
    pub patient: String,

    /// Print notes as JSON
    #[arg(long)]
    pub json: bool,
}

impl NoteArgs {
    /// Execute the note command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_settings(config_path) {
            Ok(config) => config,
            Err(code) => return Ok(code),
        };
        let store = FileNoteStore::new(&config.notes.directory);

        match &self.command {
            NoteCommand::Add(args) => args.execute(&store),
            NoteCommand::List(args) => args.execute(&store),
        }
    }
}

impl AddArgs {
    fn execute(&self, store: &impl NoteRepository) -> anyhow::Result<i32> {
        if self.text.trim().is_empty() {
            eprintln!("❌ Note text is empty, nothing saved");
            return Ok(EXIT_INPUT);
        }

        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        match store.save(&self.patient, date, &self.text) {
            Ok(id) => {
                println!("📝 Note saved for {} on {}", self.patient, date);
                println!("   {}", id.file_name());
                Ok(EXIT_OK)
            }
            Err(e) => Ok(report_error("Failed to save note", &e)),
        }
    }
}

impl ListArgs {
    fn execute(&self, store: &impl NoteRepository) -> anyhow::Result<i32> {
        let notes = match store.list(&self.patient) {
            Ok(notes) => notes,
            Err(e) => return Ok(report_error("Failed to read saved notes", &e)),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        } else {
            for line in render_notes(&notes) {
                println!("{line}");
            }
        }
        Ok(EXIT_OK)
    }
}

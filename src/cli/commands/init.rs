//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_FATAL, EXIT_INPUT, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "labnotes.toml")]
    pub output: String,

    /// Include explanatory comments for every setting
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Labnotes configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_INPUT);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: labnotes validate-config");
                println!("  3. View labs: labnotes view --file labs.csv --patient \"Jane Doe\"");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Labnotes Configuration File

[application]
log_level = "info"

[lab]
delimiter = ","

[notes]
directory = "patient_notes"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with comments
    fn generate_config_with_examples() -> String {
        r#"# Labnotes Configuration File
#
# Every setting is optional; the values below are the defaults.
# ${VAR_NAME} placeholders are replaced with environment variables and
# LABNOTES_<SECTION>_<KEY> variables override any value, for example
# LABNOTES_NOTES_DIRECTORY=/srv/notes.

[application]
# Log level: trace | debug | info | warn | error
log_level = "info"

[lab]
# Field delimiter of lab tables, read and exported (single character)
delimiter = ","

[notes]
# Directory holding one text file per clinical note
# directory = "${HOME}/patient_notes"
directory = "patient_notes"

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "logs"
# Rotation: daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}

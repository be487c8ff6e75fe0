//! Configuration management for Labnotes.
//!
//! # Overview
//!
//! Labnotes reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LABNOTES_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use labnotes::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("labnotes.toml")?;
//! println!("Notes directory: {}", config.notes.directory);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [lab]
//! delimiter = ","
//!
//! [notes]
//! directory = "${HOME}/patient_notes"
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LabConfig, LabNotesConfig, LoggingConfig, NotesConfig};

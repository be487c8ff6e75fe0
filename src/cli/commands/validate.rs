//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Labnotes configuration file.

use super::{EXIT_INPUT, EXIT_OK};
use crate::config::load_config;
use crate::domain::MeasurementRegistry;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Unlike the other commands, a missing file is an error here.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_INPUT);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Lab Delimiter: {:?}", config.lab.delimiter);
        println!("  Notes Directory: {}", config.notes.directory);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }

        println!("  Measurements:");
        for spec in MeasurementRegistry::clinical().iter() {
            match spec.threshold {
                Some(threshold) => {
                    println!("    {} ({}), alert {} {}", spec.name, spec.label, spec.name, threshold)
                }
                None => println!("    {} ({}), trend only", spec.name, spec.label),
            }
        }
        println!();
        Ok(EXIT_OK)
    }
}

//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::LoadOptions;
use crate::errors::AppError;

/// Config Reporter - layered configuration with a startup report
#[derive(Parser, Debug)]
#[command(name = "config-reporter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Properties file path (defaults to ./application.properties when present)
    #[arg(short, long, global = true, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Override a property, highest precedence (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", global = true, value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Options for building the configuration environment
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            config_path: self.config.clone(),
            overrides: self.overrides.clone(),
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve and log the startup values
    Report,

    /// Show one resolved property and the layer that supplied it
    Get(GetArgs),
}

/// Arguments for the get command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct GetArgs {
    /// Property key (e.g., "spring.datasource.url")
    pub key: String,
}

/// Parse a `KEY=VALUE` override
fn parse_key_value(raw: &str) -> Result<(String, String), AppError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::invalid_argument(format!("expected KEY=VALUE, got '{}'", raw)))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::invalid_argument(format!("empty key in '{}'", raw)));
    }

    Ok((key.to_string(), value.to_string()))
}

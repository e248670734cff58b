//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `report` - Resolve and log the startup values (default)
//! - `get` - Show one resolved property and its source layer

pub mod args;

pub use args::{Cli, Commands};

//! Config Reporter - layered configuration loading with a startup report
//!
//! Builds an [`Environment`] from command-line overrides, environment
//! variables and an `application.properties` file, then logs a handful of
//! resolved values once at startup.
//!
//! # Modules
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Property sources, layered environment and constants
//! - **reporter**: The startup report
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Log the startup report
//! cargo run
//!
//! # Override a property and inspect where a key resolves from
//! cargo run -- --set greeting-message=Hi get greeting-message
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod reporter;

// Re-export commonly used types at crate root
pub use config::Environment;
pub use errors::{AppError, AppResult};
pub use reporter::StartupReport;

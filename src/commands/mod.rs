//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod get;
pub mod report;

use crate::cli::Commands;
use crate::config::Environment;
use crate::errors::AppResult;

/// Run the startup report, then the selected command.
///
/// The report runs exactly once per process whatever the command, so a
/// missing required setting aborts every command.
pub fn run(command: Option<Commands>, env: &Environment) -> AppResult<()> {
    report::execute(env)?;

    match command {
        None | Some(Commands::Report) => Ok(()),
        Some(Commands::Get(args)) => get::execute(args, env),
    }
}

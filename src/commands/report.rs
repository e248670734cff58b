//! Report command - Logs the resolved startup values.

use crate::config::Environment;
use crate::errors::AppResult;
use crate::reporter;

/// Execute the report command
pub fn execute(env: &Environment) -> AppResult<()> {
    tracing::debug!("Running startup report");
    reporter::run(env)?;
    Ok(())
}

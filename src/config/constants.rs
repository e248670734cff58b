//! Application-wide constants
//!
//! Centralized location for property keys, labels and defaults.

// =============================================================================
// Property Keys
// =============================================================================

/// Message defined in the properties file
pub const KEY_MESSAGE: &str = "message-from-application-properties";

/// Datasource URL defined in the properties file
pub const KEY_DATASOURCE_URL: &str = "spring.datasource.url";

/// Explicit greeting; falls back to the message when absent
pub const KEY_GREETING: &str = "greeting-message";

/// User home directory (required)
pub const KEY_HOME: &str = "HOME";

// =============================================================================
// Defaults
// =============================================================================

/// Greeting used when `greeting-message` is absent.
///
/// The placeholder is substituted once with the value of [`KEY_MESSAGE`].
/// If that key is absent too, this text is used verbatim.
pub const DEFAULT_GREETING_TEMPLATE: &str =
    "Default Hello: ${message-from-application-properties}";

/// Properties file looked up in the working directory when `--config` is not given
pub const DEFAULT_PROPERTIES_FILE: &str = "application.properties";

// =============================================================================
// Source Names
// =============================================================================

pub const SOURCE_COMMAND_LINE: &str = "commandLineArgs";

pub const SOURCE_SYSTEM_ENVIRONMENT: &str = "systemEnvironment";

pub const SOURCE_PROPERTIES_FILE: &str = "applicationProperties";

// =============================================================================
// Report Labels
// =============================================================================

pub const LABEL_MESSAGE: &str = "message from application.properties: ";

pub const LABEL_DATASOURCE_URL: &str = "datasource url from application.properties: ";

pub const LABEL_GREETING: &str = "default value from application.properties: ";

pub const LABEL_HOME: &str = "user home from the environment variables: ";

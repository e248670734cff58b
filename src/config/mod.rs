//! Application configuration module
//!
//! Property sources, the layered environment built from them, and
//! application-wide constants.

mod constants;
mod environment;
mod properties;
mod sources;

pub use constants::*;
pub use environment::{Environment, EnvironmentBuilder, LoadOptions};
pub use properties::PropertiesFile;
pub use sources::{MapPropertySource, PropertySource, SystemEnvironment};

#[cfg(any(test, feature = "test-utils"))]
pub use sources::MockPropertySource;

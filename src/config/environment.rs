//! Layered configuration access.
//!
//! An [`Environment`] is an ordered list of property sources. Lookups walk
//! the layers from highest to lowest precedence and the first hit wins.

use std::fmt;
use std::path::PathBuf;

use super::constants::{DEFAULT_PROPERTIES_FILE, SOURCE_COMMAND_LINE};
use super::properties::PropertiesFile;
use super::sources::{MapPropertySource, PropertySource, SystemEnvironment};
use crate::errors::{AppResult, OptionExt};

/// Inputs for [`Environment::load`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit properties file; must exist when set
    pub config_path: Option<PathBuf>,
    /// `key=value` pairs that override every other layer
    pub overrides: Vec<(String, String)>,
}

/// Read-only, layered configuration.
pub struct Environment {
    sources: Vec<Box<dyn PropertySource>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may hold secrets (datasource URLs), only list layer names
        f.debug_struct("Environment")
            .field("sources", &self.source_names())
            .finish()
    }
}

impl Environment {
    /// Build the standard layering for the current process.
    ///
    /// Precedence: command-line overrides, system environment, properties file.
    pub fn load(options: &LoadOptions) -> AppResult<Self> {
        Self::load_with(options, SystemEnvironment::capture())
    }

    /// Same as [`Environment::load`] with an explicit environment snapshot.
    pub fn load_with(options: &LoadOptions, system: SystemEnvironment) -> AppResult<Self> {
        let mut builder = Self::builder();

        if !options.overrides.is_empty() {
            builder = builder.with_source(MapPropertySource::from_pairs(
                SOURCE_COMMAND_LINE,
                options.overrides.iter().cloned(),
            ));
        }

        builder = builder.with_source(system);

        match &options.config_path {
            Some(path) => {
                builder = builder.with_source(PropertiesFile::load(path)?);
            }
            None => {
                let path = PathBuf::from(DEFAULT_PROPERTIES_FILE);
                if path.is_file() {
                    builder = builder.with_source(PropertiesFile::load(&path)?);
                } else {
                    tracing::debug!(
                        "No {} in working directory, skipping",
                        DEFAULT_PROPERTIES_FILE
                    );
                }
            }
        }

        let env = builder.build();
        tracing::debug!("Configuration layers: {:?}", env.source_names());
        Ok(env)
    }

    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// Layer names, highest precedence first.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn get_property(&self, key: &str) -> Option<String> {
        self.find_property(key).map(|(_, value)| value)
    }

    pub fn get_property_or(&self, key: &str, default: &str) -> String {
        self.get_property(key).unwrap_or_else(|| default.to_string())
    }

    /// Value of `key` together with the name of the layer that supplied it.
    pub fn find_property(&self, key: &str) -> Option<(&'static str, String)> {
        self.sources
            .iter()
            .find_map(|source| source.get_property(key).map(|value| (source.name(), value)))
    }

    /// Value of a required key.
    pub fn require(&self, key: &str) -> AppResult<String> {
        self.get_property(key).ok_or_missing(key)
    }

    /// `key` if present, else `template` with `${fallback_key}` substituted
    /// once by the value of `fallback_key`, else `template` as written.
    ///
    /// The substituted value is not scanned for further placeholders.
    pub fn resolve_with_fallback(&self, key: &str, fallback_key: &str, template: &str) -> String {
        if let Some(value) = self.get_property(key) {
            return value;
        }

        match self.get_property(fallback_key) {
            Some(fallback) => {
                let placeholder = format!("${{{}}}", fallback_key);
                template.replacen(&placeholder, &fallback, 1)
            }
            None => template.to_string(),
        }
    }
}

/// Assembles an [`Environment`] layer by layer, highest precedence first.
#[derive(Default)]
pub struct EnvironmentBuilder {
    sources: Vec<Box<dyn PropertySource>>,
}

impl EnvironmentBuilder {
    pub fn with_source(mut self, source: impl PropertySource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn build(self) -> Environment {
        Environment {
            sources: self.sources,
        }
    }
}

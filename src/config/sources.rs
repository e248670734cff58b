//! Property sources - the layers an [`Environment`](super::Environment) is built from.

use std::collections::HashMap;

use super::constants::SOURCE_SYSTEM_ENVIRONMENT;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A single named layer of key/value settings.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PropertySource: Send + Sync {
    /// Layer name, reported by `get` lookups
    fn name(&self) -> &'static str;

    /// Look up a key in this layer only
    fn get_property(&self, key: &str) -> Option<String>;
}

/// In-memory property source.
#[derive(Debug, Clone, Default)]
pub struct MapPropertySource {
    name: &'static str,
    properties: HashMap<String, String>,
}

impl MapPropertySource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            properties: HashMap::new(),
        }
    }

    pub fn from_pairs<I, K, V>(name: &'static str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name,
            properties: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertySource for MapPropertySource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn get_property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

/// Snapshot of environment variables with relaxed key binding.
///
/// `spring.datasource.url` matches `spring.datasource.url`,
/// `spring_datasource_url` and `SPRING_DATASOURCE_URL`, tried in that order.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment {
    vars: HashMap<String, String>,
}

impl SystemEnvironment {
    /// Snapshot the current process environment.
    ///
    /// Variables that are not valid unicode are skipped.
    pub fn capture() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Candidate variable names for a property key, in lookup order.
fn relaxed_names(key: &str) -> Vec<String> {
    let underscored = key.replace(['.', '-'], "_");
    let upper = underscored.to_uppercase();

    let mut names = vec![key.to_string()];
    for candidate in [underscored, upper] {
        if !names.contains(&candidate) {
            names.push(candidate);
        }
    }
    names
}

impl PropertySource for SystemEnvironment {
    fn name(&self) -> &'static str {
        SOURCE_SYSTEM_ENVIRONMENT
    }

    fn get_property(&self, key: &str) -> Option<String> {
        relaxed_names(key)
            .iter()
            .find_map(|name| self.vars.get(name).cloned())
    }
}

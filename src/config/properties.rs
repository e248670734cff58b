//! `.properties` file source.
//!
//! Reads the line-oriented `key=value` subset: comments, blank lines and the
//! `=`, `:` or whitespace separators. Escapes and continuation lines are not
//! interpreted.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::constants::SOURCE_PROPERTIES_FILE;
use super::sources::PropertySource;
use crate::errors::{AppError, AppResult};

/// Properties loaded from a file.
#[derive(Debug, Clone, Default)]
pub struct PropertiesFile {
    properties: HashMap<String, String>,
}

impl PropertiesFile {
    /// Read and parse a properties file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|e| AppError::config_file(path, e))?;

        let file = Self::parse(&contents);
        tracing::debug!(
            "Loaded {} properties from {}",
            file.properties.len(),
            path.display()
        );
        Ok(file)
    }

    /// Parse properties text. Later duplicates replace earlier keys.
    pub fn parse(contents: &str) -> Self {
        let properties = contents.lines().filter_map(parse_line).collect();
        Self { properties }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    let key_end = line
        .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
        .unwrap_or(line.len());
    let (key, rest) = line.split_at(key_end);

    // Whitespace, then at most one explicit separator, then whitespace
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);
    let value = rest.trim();

    Some((key.to_string(), value.to_string()))
}

impl PropertySource for PropertiesFile {
    fn name(&self) -> &'static str {
        SOURCE_PROPERTIES_FILE
    }

    fn get_property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        let file = PropertiesFile::parse(
            "a=1\n\
             b : 2\n\
             c 3\n\
             d=\n\
             e\n",
        );

        assert_eq!(file.get_property("a"), Some("1".to_string()));
        assert_eq!(file.get_property("b"), Some("2".to_string()));
        assert_eq!(file.get_property("c"), Some("3".to_string()));
        assert_eq!(file.get_property("d"), Some(String::new()));
        assert_eq!(file.get_property("e"), Some(String::new()));
        assert_eq!(file.len(), 5);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let file = PropertiesFile::parse(
            "# comment\n\
             ! also a comment\n\
             \n\
             \x20\x20\x20\n\
             message-from-application-properties=Hello from properties\n",
        );

        assert_eq!(file.len(), 1);
        assert_eq!(
            file.get_property("message-from-application-properties"),
            Some("Hello from properties".to_string())
        );
    }

    #[test]
    fn test_parse_keeps_separators_inside_value() {
        let file = PropertiesFile::parse(
            "spring.datasource.url=jdbc:postgresql://localhost:5432/app?ssl=true\n",
        );

        assert_eq!(
            file.get_property("spring.datasource.url"),
            Some("jdbc:postgresql://localhost:5432/app?ssl=true".to_string())
        );
    }

    #[test]
    fn test_parse_later_duplicate_wins() {
        let file = PropertiesFile::parse("k=first\nk=second\n");

        assert_eq!(file.len(), 1);
        assert_eq!(file.get_property("k"), Some("second".to_string()));
    }

    #[test]
    fn test_parse_leading_indentation() {
        let file = PropertiesFile::parse("    greeting-message =   Hi there  \n");

        assert_eq!(
            file.get_property("greeting-message"),
            Some("Hi there".to_string())
        );
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = PropertiesFile::load("/nonexistent/dir/application.properties");

        assert!(matches!(result, Err(AppError::ConfigFile { .. })));
    }
}

//! Startup report - resolves the showcased settings and logs them once.
//!
//! Every value is resolved before the first line is written, so a missing
//! required setting aborts startup without partial output.

use crate::config::{
    Environment, DEFAULT_GREETING_TEMPLATE, KEY_DATASOURCE_URL, KEY_GREETING, KEY_HOME,
    KEY_MESSAGE, LABEL_DATASOURCE_URL, LABEL_GREETING, LABEL_HOME, LABEL_MESSAGE,
};
use crate::errors::AppResult;

/// Destination for report lines.
pub trait ReportSink {
    fn write_line(&mut self, line: &str);
}

/// Writes report lines as `info` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn write_line(&mut self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// Collects lines in memory.
impl ReportSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Resolved startup values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    pub message: Option<String>,
    pub datasource_url: Option<String>,
    pub greeting: String,
    pub user_home: String,
}

/// Greeting from `greeting-message`, falling back to the default template
/// with the properties-file message substituted in.
pub fn resolve_greeting(env: &Environment) -> String {
    env.resolve_with_fallback(KEY_GREETING, KEY_MESSAGE, DEFAULT_GREETING_TEMPLATE)
}

/// User home directory. Required.
pub fn resolve_home(env: &Environment) -> AppResult<String> {
    env.require(KEY_HOME)
}

impl StartupReport {
    pub fn resolve(env: &Environment) -> AppResult<Self> {
        let user_home = resolve_home(env)?;

        Ok(Self {
            message: env.get_property(KEY_MESSAGE),
            datasource_url: env.get_property(KEY_DATASOURCE_URL),
            greeting: resolve_greeting(env),
            user_home,
        })
    }

    /// The four report lines, in output order.
    pub fn lines(&self) -> [String; 4] {
        [
            format!("{}{}", LABEL_MESSAGE, self.message.as_deref().unwrap_or_default()),
            format!(
                "{}{}",
                LABEL_DATASOURCE_URL,
                self.datasource_url.as_deref().unwrap_or_default()
            ),
            format!("{}{}", LABEL_GREETING, self.greeting),
            format!("{}{}", LABEL_HOME, self.user_home),
        ]
    }

    pub fn emit(&self, sink: &mut dyn ReportSink) {
        for line in self.lines() {
            sink.write_line(&line);
        }
    }
}

/// Resolve the report and log it. Runs once, right after configuration is loaded.
pub fn run(env: &Environment) -> AppResult<StartupReport> {
    let report = StartupReport::resolve(env)?;
    report.emit(&mut TracingSink);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapPropertySource;
    use crate::errors::AppError;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        Environment::builder()
            .with_source(MapPropertySource::from_pairs("test", pairs.iter().copied()))
            .build()
    }

    #[test]
    fn test_greeting_falls_back_to_message() {
        let env = env(&[(KEY_MESSAGE, "hi")]);

        let greeting = resolve_greeting(&env);
        assert!(greeting.contains("hi"));
        assert_eq!(greeting, "Default Hello: hi");
    }

    #[test]
    fn test_greeting_explicit_value() {
        let env = env(&[(KEY_GREETING, "custom"), (KEY_MESSAGE, "hi")]);

        assert_eq!(resolve_greeting(&env), "custom");
    }

    #[test]
    fn test_greeting_literal_default_when_unresolved() {
        let env = env(&[]);

        assert_eq!(resolve_greeting(&env), DEFAULT_GREETING_TEMPLATE);
    }

    #[test]
    fn test_missing_home_is_fatal() {
        let env = env(&[(KEY_MESSAGE, "hi")]);

        assert!(matches!(
            StartupReport::resolve(&env),
            Err(AppError::MissingRequiredConfiguration { .. })
        ));
    }

    #[test]
    fn test_emit_writes_four_lines_in_order() {
        let env = env(&[
            (KEY_MESSAGE, "hi"),
            (KEY_DATASOURCE_URL, "jdbc:h2:mem:test"),
            (KEY_HOME, "/home/alice"),
        ]);
        let report = StartupReport::resolve(&env).unwrap();

        let mut lines: Vec<String> = Vec::new();
        report.emit(&mut lines);

        assert_eq!(
            lines,
            vec![
                "message from application.properties: hi",
                "datasource url from application.properties: jdbc:h2:mem:test",
                "default value from application.properties: Default Hello: hi",
                "user home from the environment variables: /home/alice",
            ]
        );
    }

    #[test]
    fn test_absent_optional_values_render_empty() {
        let env = env(&[(KEY_HOME, "/root")]);
        let report = StartupReport::resolve(&env).unwrap();

        assert_eq!(report.message, None);
        assert_eq!(report.datasource_url, None);
        assert_eq!(report.lines()[0], LABEL_MESSAGE);
        assert_eq!(report.lines()[1], LABEL_DATASOURCE_URL);
    }
}

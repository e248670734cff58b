//! Get command - Shows where a single property resolves from.

use crate::cli::args::GetArgs;
use crate::config::Environment;
use crate::errors::AppResult;

/// Execute the get command
pub fn execute(args: GetArgs, env: &Environment) -> AppResult<()> {
    println!("{}", render(&args.key, env));
    Ok(())
}

/// Value of `key` and its source layer, or a notice listing the layers searched
pub fn render(key: &str, env: &Environment) -> String {
    match env.find_property(key) {
        Some((source, value)) => {
            tracing::debug!("{} resolved from {}", key, source);
            format!("{}={}\n  source: {}", key, value, source)
        }
        None => format!("{} is not set in any of: {}", key, env.source_names().join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MapPropertySource, SystemEnvironment};

    fn env() -> Environment {
        Environment::builder()
            .with_source(MapPropertySource::from_pairs(
                "commandLineArgs",
                [("greeting-message", "from cli")],
            ))
            .with_source(SystemEnvironment::from_vars([
                ("GREETING_MESSAGE", "from env"),
                ("SPRING_DATASOURCE_URL", "jdbc:h2:mem:db"),
            ]))
            .build()
    }

    #[test]
    fn test_render_found_value_and_source() {
        assert_eq!(
            render("spring.datasource.url", &env()),
            "spring.datasource.url=jdbc:h2:mem:db\n  source: systemEnvironment"
        );
    }

    #[test]
    fn test_render_names_highest_layer() {
        assert_eq!(
            render("greeting-message", &env()),
            "greeting-message=from cli\n  source: commandLineArgs"
        );
    }

    #[test]
    fn test_render_missing_key_lists_layers() {
        assert_eq!(
            render("missing", &env()),
            "missing is not set in any of: commandLineArgs, systemEnvironment"
        );
    }

    #[test]
    fn test_execute_missing_key_succeeds() {
        let args = GetArgs {
            key: "missing".to_string(),
        };

        assert!(execute(args, &env()).is_ok());
    }
}

// RUNTIME PREFERENCES (User Experience)

use super::constants::naming::DEFAULT_CASE_PREFIX;
use super::ConfigError;
use crate::log_error;
use crate::logging::{codes, LogLevel};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;

/// How each input line is framed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Plain `go test -bench` output
    Text,
    /// `go test -bench -json` event stream
    Json,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Text => "text",
            InputFormat::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse input format from string (used for environment variables)
fn parse_input_format(format: &str) -> Option<InputFormat> {
    match format.to_lowercase().as_str() {
        "text" | "plain" => Some(InputFormat::Text),
        "json" => Some(InputFormat::Json),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserPreferences {
    /// Prefix a top-level case name must start with
    pub case_prefix: String,

    /// Framing of input lines
    pub input_format: InputFormat,
}

impl Default for ParserPreferences {
    fn default() -> Self {
        Self {
            case_prefix: env::var(env_vars::CASE_PREFIX)
                .ok()
                .unwrap_or_else(|| DEFAULT_CASE_PREFIX.to_string()),
            input_format: env::var(env_vars::INPUT_FORMAT)
                .ok()
                .and_then(|v| parse_input_format(&v))
                .unwrap_or(InputFormat::Text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOG_JSON)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOG_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub parser: ParserPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Load configuration from a TOML file. Missing sections and keys fall
    /// back to the environment-aware defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.parser.case_prefix;
        let reason = if prefix.is_empty() {
            "case_prefix must not be empty".to_string()
        } else if prefix.contains(char::is_whitespace) {
            format!("case_prefix '{}' must not contain whitespace", prefix)
        } else {
            return Ok(());
        };

        log_error!(codes::configuration::INVALID_CONFIGURATION, "Invalid configuration",
            "reason" => &reason
        );
        Err(ConfigError::Invalid { reason })
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const CASE_PREFIX: &str = "BENCHPARSE_CASE_PREFIX";
    pub const INPUT_FORMAT: &str = "BENCHPARSE_INPUT_FORMAT";
    pub const LOG_LEVEL: &str = "BENCHPARSE_LOG_LEVEL";
    pub const LOG_JSON: &str = "BENCHPARSE_LOG_JSON";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_parse_input_format() {
        assert_eq!(parse_input_format("JSON"), Some(InputFormat::Json));
        assert_eq!(parse_input_format("plain"), Some(InputFormat::Text));
        assert_eq!(parse_input_format("xml"), None);
    }

    #[test]
    fn test_toml_overrides() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [parser]
            case_prefix = "Bench"
            input_format = "json"

            [logging]
            min_log_level = "Debug"
            use_structured_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.parser.case_prefix, "Bench");
        assert_eq!(config.parser.input_format, InputFormat::Json);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(config.logging.use_structured_logging);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let result = RuntimeConfig::from_toml_str("[parser]\ncase_prefix = \"\"\n");
        assert_matches!(result, Err(ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_invalid_prefix_is_logged() {
        let memory = crate::logging::tests::captured();
        let result = RuntimeConfig::from_toml_str("[parser]\ncase_prefix = \"Bench mark\"\n");
        assert_matches!(result, Err(ConfigError::Invalid { .. }));

        let logged = memory.events().into_iter().any(|event| {
            event.code == codes::configuration::INVALID_CONFIGURATION
                && event
                    .context
                    .get("reason")
                    .is_some_and(|reason| reason.contains("'Bench mark'"))
        });
        assert!(logged);
    }

    #[test]
    fn test_malformed_toml() {
        let result = RuntimeConfig::from_toml_str("[parser\ncase_prefix = 1");
        assert_matches!(result, Err(ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[parser]\ncase_prefix = \"Fuzz\"").unwrap();

        let config = RuntimeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.parser.case_prefix, "Fuzz");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuntimeConfig::load_from_file(&dir.path().join("absent.toml"));
        assert_matches!(result, Err(ConfigError::Read { .. }));
    }
}

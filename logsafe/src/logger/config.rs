//! Logger configuration: output keys, static fields, level, backend.

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Default severity threshold when the configured level is empty.
pub const DEFAULT_LEVEL: &str = "debug";

/// Errors produced when building a [`Logger`](super::Logger).
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// The configured severity threshold is not a known level name.
    #[error("invalid logger configuration: unknown level `{0}`")]
    InvalidLevel(String),
}

/// Names of the structural keys emitted on every line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Keys {
    /// Key holding the log message.
    pub msg_key: String,
    /// Key holding the severity label.
    pub level_key: String,
    /// Key holding the RFC 3339 timestamp.
    pub time_key: String,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            msg_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: "ts".to_string(),
        }
    }
}

/// Output backend selected by the factory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Backend {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable single-line text.
    Text,
}

/// Logger settings.
///
/// `fields` are attached to every emitted line. `level` is parsed
/// case-insensitively; the empty string selects [`DEFAULT_LEVEL`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Static fields merged into every line.
    pub fields: HashMap<String, JsonValue>,
    /// Structural key names.
    pub keys: Keys,
    /// Severity threshold (`"trace"` … `"critical"`).
    pub level: String,
    /// Output backend.
    pub backend: Backend,
}

/// Parses a severity threshold name.
///
/// Matching is case-insensitive and accepts the common aliases `warning`
/// and `crit`. An empty string selects [`DEFAULT_LEVEL`].
pub(crate) fn parse_level(level: &str) -> Result<slog::Level, ConfigError> {
    let name = if level.is_empty() {
        DEFAULT_LEVEL.to_string()
    } else {
        level.to_ascii_lowercase()
    };
    match name.as_str() {
        "trace" => Ok(slog::Level::Trace),
        "debug" => Ok(slog::Level::Debug),
        "info" => Ok(slog::Level::Info),
        "warn" | "warning" => Ok(slog::Level::Warning),
        "error" => Ok(slog::Level::Error),
        "critical" | "crit" => Ok(slog::Level::Critical),
        _ => Err(ConfigError::InvalidLevel(level.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_level, Backend, Config, ConfigError, Keys};

    #[test]
    fn default_keys_match_wire_names() {
        let keys = Keys::default();
        assert_eq!(keys.msg_key, "msg");
        assert_eq!(keys.level_key, "level");
        assert_eq!(keys.time_key, "ts");
    }

    #[test]
    fn default_backend_is_json() {
        assert_eq!(Config::default().backend, Backend::Json);
    }

    #[test]
    fn empty_level_defaults_to_debug() {
        assert_eq!(parse_level("").unwrap(), slog::Level::Debug);
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(parse_level("INFO").unwrap(), slog::Level::Info);
        assert_eq!(parse_level("Warning").unwrap(), slog::Level::Warning);
        assert_eq!(parse_level("crit").unwrap(), slog::Level::Critical);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert_eq!(
            parse_level("loud"),
            Err(ConfigError::InvalidLevel("loud".to_string()))
        );
    }
}

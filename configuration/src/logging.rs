//! Logging configuration types

/// Env var selecting the log level
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
/// Env var selecting the log style
pub const LOG_STYLE_VAR: &str = "LOG_STYLE";

/// Basic tracing configuration
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum LogStyle {
    /// Pretty print
    Pretty,
    /// JSON
    Json,
    /// Compact
    Compact,
    /// Default style
    #[serde(other)]
    Full,
}

impl Default for LogStyle {
    fn default() -> Self {
        LogStyle::Full
    }
}

/// Logging level
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    /// Off
    Off,
    /// Error
    Error,
    /// Debug
    Debug,
    /// Trace
    Trace,
    /// Info
    Info,
    /// Warn
    #[serde(other)]
    Warn,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

/// Logger configuration
#[derive(Debug, Default, Copy, Clone, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogConfig {
    /// fmt specifier
    pub fmt: LogStyle,
    /// level specifier
    pub level: LogLevel,
}

impl LogConfig {
    /// Read `LOG_STYLE` and `LOG_LEVEL`. Unrecognized values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        Self {
            fmt: from_env_string(LOG_STYLE_VAR).unwrap_or_default(),
            level: from_env_string(LOG_LEVEL_VAR).unwrap_or_default(),
        }
    }
}

fn from_env_string<T: serde::de::DeserializeOwned>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase())).ok()
}

//! Error types for the fallible edges of the game.
//!
//! The simulation itself is total; only configuration loading can fail.

use std::fmt;

/// Failure to load or validate a [`crate::Tuning`]
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io(std::io::Error),

    /// The configuration file is not valid JSON for `Tuning`
    Parse(serde_json::Error),

    /// A tuning value is outside the range the simulation can run with
    UnsafeValue {
        /// Name of the field
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable description of the accepted range
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read tuning file: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse tuning file: {e}"),
            ConfigError::UnsafeValue {
                name,
                value,
                expected,
            } => write!(f, "tuning value `{name}` = {value} is out of range ({expected})"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::UnsafeValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

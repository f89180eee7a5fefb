//! Error types for the life engine and its configuration.

use thiserror::Error;

/// Errors raised while constructing a simulation.
///
/// Per-tick operations are total, so nothing here is produced once a grid
/// has been built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A dimension, probability or timing value is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;

impl LifeError {
    #[must_use]
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LifeError::invalid_argument("width must be positive");
        assert_eq!(err.to_string(), "Invalid argument: width must be positive");
    }

    #[test]
    fn test_config_error_display() {
        let err = LifeError::config("bad toml");
        assert!(err.to_string().starts_with("Config error"));
    }
}

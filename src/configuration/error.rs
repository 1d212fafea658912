//! Error types for loading and validating scenarios.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("body {index}: `{field}` needs 2 or 3 components, got {len}")]
    Dimension {
        index: usize,
        field: &'static str,
        len: usize,
    },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn body(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidBody {
            index,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

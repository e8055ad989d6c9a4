use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack overflow: capacity of {capacity} items reached")]
    Overflow { capacity: usize },

    #[error("There is no item in stack")]
    Underflow,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Anything a demo `run` function can fail with.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),
}

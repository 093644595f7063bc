//! Error types for view composition

use std::path::PathBuf;

use athenuru_model::ModelError;
use thiserror::Error;

/// Errors loading or applying a [`DashboardConfig`](crate::DashboardConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}", path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// TOML did not match the config schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range
    #[error("invalid config value: {0}")]
    Invalid(#[from] ModelError),

    /// A preview size of zero would hide the table entirely
    #[error("preview size for {table} must be at least 1")]
    EmptyPreview {
        /// Table whose preview size is zero
        table: &'static str,
    },
}

/// Errors from profile form transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Field edits are only accepted while editing
    #[error("profile is not being edited")]
    NotEditing,
}

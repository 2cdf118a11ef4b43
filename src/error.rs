//! Error types for the envmerge pipeline.
//!
//! Provider failures carry the provider's stderr verbatim so the CLI can surface
//! it unchanged. Every variant maps to exit status 1.

use thiserror::Error;

/// Errors raised while fetching, merging, or submitting an environment set.
#[derive(Debug, Error)]
pub enum EnvMergeError {
    /// The read-configuration call exited non-zero.
    #[error("Error fetching current configuration: {stderr}")]
    FetchFailed { stderr: String },

    /// The update-configuration call exited non-zero.
    #[error("Error updating configuration: {stderr}")]
    SubmitFailed { stderr: String },

    /// Provider output was not the JSON we expected.
    #[error("Failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The provider command could not be started at all.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnvMergeError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<config::ConfigError> for EnvMergeError {
    fn from(err: config::ConfigError) -> Self {
        EnvMergeError::ConfigError(err.to_string())
    }
}

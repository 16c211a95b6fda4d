// Rust guideline compliant 2026-10-18

//! Error types for the hookkit core library.

use thiserror::Error;

/// Result type alias for hookkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hookkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The delegated executable could not be resolved on the search path.
    #[error("{tool} is not installed or not found on PATH")]
    ToolNotFound {
        /// Executable name that was looked up.
        tool: String,
        /// Where to get the tool from.
        install_url: String,
    },

    /// The delegated executable was found but could not be started.
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        /// Executable name.
        tool: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Unknown log level name.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// A commit-message pattern could not be compiled.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(String),
}

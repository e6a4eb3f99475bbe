//! Error types for the demonstration program.

use std::io;

/// Errors that can occur while running the demonstration.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value for {key}: {message}")]
    Config {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/*!
 * Error types for the feedlog application.
 *
 * This module contains custom error types for the changelog parser and the
 * application layer, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while parsing a bilingual changelog
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChangelogError {
    /// The input did not split into a Chinese and an English section
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error while loading or validating configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error from changelog parsing
    #[error("Changelog error: {0}")]
    Changelog(#[from] ChangelogError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

/*!
 * Error types for the langpick application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors produced while resolving language tags
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LangError {
    /// A user-declared preference token has an unknown primary code
    #[error("An invalid language code was passed: '{code}' (in '{token}')")]
    InvalidLanguageToken {
        /// The primary code that failed the directory lookup
        code: String,
        /// The full token as supplied
        token: String,
    },

    /// No language tag could be inferred from a file name
    #[error("No language could be identified in '{filename}'")]
    NoTagFound {
        /// File name that was inspected
        filename: String,
    },
}

/// Errors raised by the configuration layer
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A language setting could not be parsed
    #[error("Invalid language setting '{field}': {source}")]
    Language {
        /// Name of the offending configuration field
        field: &'static str,
        /// Underlying parse failure
        #[source]
        source: LangError,
    },

    /// A required list is empty
    #[error("Configuration field '{0}' must not be empty")]
    Empty(&'static str),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from language resolution
    #[error("Language error: {0}")]
    Language(#[from] LangError),

    /// Error from the configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

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

impl From<walkdir::Error> for AppError {
    fn from(error: walkdir::Error) -> Self {
        Self::File(error.to_string())
    }
}

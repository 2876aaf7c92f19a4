/*!
 * Error types for the voxlate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors raised at the speech capture boundary
///
/// The `Display` output of these variants is shown to the user verbatim,
/// so the messages are phrased for the error banner rather than for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No speech-recognition capability was injected into the session
    #[error("Speech recognition is not supported in this environment.")]
    CapabilityUnavailable,

    /// Recognition failed mid-session; carries the backend's description
    #[error("Voice recognition error: {0}")]
    Recognition(String),
}

/// Input validation failures reported before a translation is dispatched
///
/// Variants are ordered the way the checks run; the `Display` strings are
/// the exact user-facing messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input text is empty after trimming
    #[error("Please enter text to translate.")]
    EmptyInput,

    /// No source language selected
    #[error("Please select a source language.")]
    MissingSource,

    /// No target language selected
    #[error("Please select a target language.")]
    MissingTarget,

    /// Source and target languages are identical
    #[error("Source and target languages cannot be the same.")]
    SameLanguage,
}

/// Errors that can occur during a translation exchange
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the translation provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a translation exchange
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from voice capture
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

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

/*!
 * Provider implementations for the external translation service.
 *
 * This module contains the narrow interface the rest of the application
 * talks to, plus the concrete clients:
 * - RapidGoogle: Google Translate via the RapidAPI gateway
 * - MockProvider: deterministic behaviors for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// One translation exchange, as handed to a provider
///
/// Constructed transiently per invocation and never retained. The fixed
/// output-format indicator is not part of this type; each client adds it
/// when building its wire request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Source language code
    pub source: String,
    /// Target language code
    pub target: String,
}

impl TranslationRequest {
    /// Create a new translation request
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A single translation candidate returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCandidate {
    /// The translated text
    pub translated_text: String,
}

/// Ordered translation candidates from one exchange
///
/// Providers may return zero candidates; deciding what that means is the
/// caller's job, not a provider error.
#[derive(Debug, Clone, Default)]
pub struct TranslationResponse {
    /// Candidates in provider order
    pub candidates: Vec<TranslationCandidate>,
}

impl TranslationResponse {
    /// The first candidate's text, if any
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .map(|candidate| candidate.translated_text.as_str())
    }
}

/// Common trait for translation providers
///
/// This trait defines the interface every provider implementation must
/// follow, allowing the translation client to hold any of them behind a
/// trait object and tests to substitute the mock.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Perform exactly one request/response exchange with the provider
    ///
    /// # Arguments
    /// * `request` - The translation request to send
    ///
    /// # Returns
    /// * `Result<TranslationResponse, ProviderError>` - The candidates from the provider or an error
    async fn translate(&self, request: &TranslationRequest)
        -> Result<TranslationResponse, ProviderError>;

    /// Provider name used in diagnostics
    fn name(&self) -> &str;
}

pub mod mock;
pub mod rapid_google;

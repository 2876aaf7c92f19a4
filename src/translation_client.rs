use log::{debug, error};
use std::sync::Arc;

use crate::errors::TranslationError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Translation client: one request/response exchange per call
///
/// Thin seam between the session controller and whichever provider is
/// configured. Input validation is the caller's responsibility; this
/// client assumes non-empty text and two distinct language codes.
/// Result text used when the provider returns no candidate
pub const NO_TRANSLATION_FOUND: &str = "No translation found";

/// Client over a translation provider
#[derive(Debug, Clone)]
pub struct TranslationClient {
    /// Provider implementation
    provider: Arc<dyn TranslationProvider>,
}

impl TranslationClient {
    /// Create a new client over the given provider
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self { provider }
    }

    /// Translate text from the source language to the target language
    ///
    /// Issues exactly one provider exchange. A response without any
    /// candidate is treated as success and yields the
    /// "No translation found" sentinel. Transport failures surface as a
    /// [`TranslationError`] carrying only a generic description; the raw
    /// cause is logged here for diagnostics and never shown to the user.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let request = TranslationRequest::new(text, source, target);

        let response = self.provider.translate(&request).await.map_err(|e| {
            error!("{} request failed: {}", self.provider.name(), e);
            TranslationError::from(e)
        })?;

        match response.first_text() {
            Some(translated) => {
                debug!(
                    "{} returned {} candidate(s)",
                    self.provider.name(),
                    response.candidates.len()
                );
                Ok(translated.to_string())
            }
            None => {
                debug!("{} returned no candidate", self.provider.name());
                Ok(NO_TRANSLATION_FOUND.to_string())
            }
        }
    }
}

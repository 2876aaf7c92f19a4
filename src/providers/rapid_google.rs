use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{
    TranslationCandidate, TranslationProvider, TranslationRequest, TranslationResponse,
};

/// Default endpoint of the RapidAPI Google Translate gateway
pub const DEFAULT_ENDPOINT: &str = "https://google-translator9.p.rapidapi.com/v2";

/// Default host identifier sent alongside the API key
pub const DEFAULT_HOST: &str = "google-translator9.p.rapidapi.com";

/// Google Translate client going through the RapidAPI gateway
///
/// Issues exactly one POST per call. No retry, no streaming, and no
/// timeout beyond the HTTP library default.
#[derive(Debug)]
pub struct RapidGoogle {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Host identifier required by the gateway
    host: String,
    /// Endpoint URL
    endpoint: String,
}

/// Wire request body
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    /// The text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Output format indicator, always plain text
    format: &'a str,
}

/// Wire response envelope
#[derive(Debug, Deserialize)]
struct WireResponse {
    data: WireData,
}

#[derive(Debug, Deserialize)]
struct WireData {
    /// Candidates in provider order; absent means none
    #[serde(default)]
    translations: Vec<WireTranslation>,
}

#[derive(Debug, Deserialize)]
struct WireTranslation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl RapidGoogle {
    /// Create a new client
    ///
    /// Empty `endpoint` or `host` fall back to the gateway defaults. The
    /// API key is always caller-supplied; there is no embedded default.
    pub fn new(api_key: impl Into<String>, host: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let host = host.into();
        let endpoint = endpoint.into();
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            host: if host.is_empty() { DEFAULT_HOST.to_string() } else { host },
            endpoint: if endpoint.is_empty() { DEFAULT_ENDPOINT.to_string() } else { endpoint },
        }
    }

    /// Parse a success body into translation candidates
    ///
    /// A body with an empty (or missing) candidate list parses cleanly;
    /// a body without the expected envelope is a parse error.
    pub fn parse_response(body: &str) -> Result<TranslationResponse, ProviderError> {
        let wire: WireResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(TranslationResponse {
            candidates: wire
                .data
                .translations
                .into_iter()
                .map(|translation| TranslationCandidate {
                    translated_text: translation.translated_text,
                })
                .collect(),
        })
    }
}

#[async_trait]
impl TranslationProvider for RapidGoogle {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, ProviderError> {
        let body = WireRequest {
            q: &request.text,
            source: &request.source,
            target: &request.target,
            format: "text",
        };

        debug!(
            "translation request: {} chars, {} -> {}",
            request.text.len(),
            request.source,
            request.target
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("translation API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        Self::parse_response(&body)
    }

    fn name(&self) -> &str {
        "google-translator"
    }
}

/*!
 * Tests for the translation client seam
 */

use std::sync::Arc;

use voxlate::errors::TranslationError;
use voxlate::providers::mock::MockProvider;
use voxlate::translation_client::{TranslationClient, NO_TRANSLATION_FOUND};

fn client_over(provider: &MockProvider) -> TranslationClient {
    TranslationClient::new(Arc::new(provider.clone()))
}

#[tokio::test]
async fn test_translate_withWorkingProvider_shouldReturnFirstCandidate() {
    let provider = MockProvider::working();
    let client = client_over(&provider);

    let translated = client.translate("Hello", "en", "fr").await.unwrap();
    assert_eq!(translated, "[fr] Hello");
}

#[tokio::test]
async fn test_translate_shouldIssueExactlyOneExchange() {
    let provider = MockProvider::working();
    let client = client_over(&provider);

    client.translate("Hello", "en", "fr").await.unwrap();

    assert_eq!(provider.request_count(), 1);
    let requests = provider.requests();
    assert_eq!(requests[0].text, "Hello");
    assert_eq!(requests[0].source, "en");
    assert_eq!(requests[0].target, "fr");
}

#[tokio::test]
async fn test_translate_withNoCandidates_shouldReturnSentinelAsSuccess() {
    let provider = MockProvider::empty();
    let client = client_over(&provider);

    let translated = client.translate("Hello", "en", "fr").await.unwrap();
    assert_eq!(translated, NO_TRANSLATION_FOUND);
}

#[tokio::test]
async fn test_translate_withFailingProvider_shouldReturnProviderError() {
    let provider = MockProvider::failing();
    let client = client_over(&provider);

    let result = client.translate("Hello", "en", "fr").await;
    assert!(matches!(result, Err(TranslationError::Provider(_))));
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_translate_withCustomResponder_shouldUseIt() {
    let provider =
        MockProvider::working().with_custom_response(|req| format!("<{}>", req.text));
    let client = client_over(&provider);

    let translated = client.translate("Hi", "en", "de").await.unwrap();
    assert_eq!(translated, "<Hi>");
}

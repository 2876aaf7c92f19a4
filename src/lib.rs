/*!
 * # voxlate - Text & Voice Translation
 *
 * A Rust library and CLI for translating typed or spoken text between
 * languages via an external translation API.
 *
 * ## Features
 *
 * - Translate text between any two catalog languages
 * - Voice input through an injectable speech-recognition capability
 * - Fixed validation order with user-facing messages
 * - Single request per submission, no retry, no caching
 * - Mockable provider and speech boundaries for deterministic tests
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_catalog`: Static language table for the selection controls
 * - `providers`: Clients for the external translation service:
 *   - `providers::rapid_google`: Google Translate via the RapidAPI gateway
 *   - `providers::mock`: Deterministic provider for tests
 * - `translation_client`: Single-exchange translation seam
 * - `speech`: Voice capture boundary and listening state machine
 * - `session_controller`: Session state owner and orchestrator
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_catalog;
pub mod providers;
pub mod session_controller;
pub mod speech;
pub mod translation_client;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, CaptureError, ProviderError, TranslationError, ValidationError};
pub use language_catalog::LanguageEntry;
pub use session_controller::{SessionController, SessionState, TRANSLATION_FAILED_MESSAGE};
pub use speech::{SpeechBackend, SpeechCaptureController};
pub use translation_client::{TranslationClient, NO_TRANSLATION_FOUND};

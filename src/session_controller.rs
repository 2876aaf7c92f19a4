use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::errors::{CaptureError, ValidationError};
use crate::speech::{ActiveCapture, RecognitionEvent, SpeechCaptureController, ToggleAction};
use crate::translation_client::TranslationClient;

/// Session controller: owns the interaction state and mediates every
/// transition between user input, voice capture, and translation.

/// User-facing message for any failed translation exchange
pub const TRANSLATION_FAILED_MESSAGE: &str = "Failed to translate text. Please try again.";

/// Interaction state of one translation session
///
/// Owned exclusively by the controller and discarded when the session
/// ends; renderers work from snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Text to translate
    pub input_text: String,
    /// Selected source language code; `None` is the placeholder
    pub source_language: Option<String>,
    /// Selected target language code; `None` is the placeholder
    pub target_language: Option<String>,
    /// Last successful translation
    pub result_text: String,
    /// Whether a translation request is in flight
    pub is_loading: bool,
    /// Message for the error banner; `None` hides the banner
    pub error_message: Option<String>,
    /// Whether a voice capture session is active
    pub is_listening: bool,
}

/// Owns [`SessionState`] and coordinates the capture controller and the
/// translation client
pub struct SessionController {
    /// The session state; locked briefly, never across an await
    state: Arc<Mutex<SessionState>>,
    /// Translation seam
    translator: TranslationClient,
    /// Voice capture state machine
    capture: Arc<SpeechCaptureController>,
}

impl SessionController {
    /// Create a controller over a translation client and a capture controller
    pub fn new(translator: TranslationClient, capture: SpeechCaptureController) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            translator,
            capture: Arc::new(capture),
        }
    }

    /// Snapshot of the current session state
    pub fn snapshot(&self) -> SessionState {
        self.state.lock().clone()
    }

    /// Replace the input text; clears nothing else
    pub fn set_input_text(&self, text: impl Into<String>) {
        self.state.lock().input_text = text.into();
    }

    /// Select the source language; the empty code is the placeholder
    pub fn set_source_language(&self, code: impl Into<String>) {
        let code = code.into();
        self.state.lock().source_language = if code.is_empty() { None } else { Some(code) };
    }

    /// Select the target language; the empty code is the placeholder
    pub fn set_target_language(&self, code: impl Into<String>) {
        let code = code.into();
        self.state.lock().target_language = if code.is_empty() { None } else { Some(code) };
    }

    /// Start voice capture when idle, stop it when listening
    ///
    /// Starting clears the error banner and marks the session listening;
    /// the returned join handle drains the capture session in the
    /// background and resolves once it reached a terminal event. `None`
    /// means no session was started (stopped, or capability missing with
    /// the error banner set).
    pub fn toggle_voice_capture(&self) -> Option<JoinHandle<()>> {
        match self.capture.toggle() {
            Ok(ToggleAction::Started(capture)) => {
                {
                    let mut state = self.state.lock();
                    state.error_message = None;
                    state.is_listening = true;
                }
                Some(self.spawn_capture_drain(capture))
            }
            Ok(ToggleAction::Stopped) => {
                self.state.lock().is_listening = false;
                None
            }
            Err(err) => {
                let mut state = self.state.lock();
                state.error_message = Some(err.to_string());
                state.is_listening = false;
                None
            }
        }
    }

    /// Drain one capture session: the first event decides the outcome
    fn spawn_capture_drain(&self, mut capture: ActiveCapture) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let capture_controller = Arc::clone(&self.capture);

        tokio::spawn(async move {
            while let Some(event) = capture.events.recv().await {
                match event {
                    RecognitionEvent::Result(transcript) => {
                        debug!("capture transcript: {} chars", transcript.len());
                        let mut st = state.lock();
                        // Replaces the input wholesale; never appends.
                        st.input_text = transcript;
                        st.is_listening = false;
                        break;
                    }
                    RecognitionEvent::Error(description) => {
                        let err = CaptureError::Recognition(description);
                        let mut st = state.lock();
                        st.error_message = Some(err.to_string());
                        st.is_listening = false;
                        break;
                    }
                    RecognitionEvent::End => break,
                }
            }

            capture_controller.finish();
            state.lock().is_listening = false;
        })
    }

    /// Validate the session and dispatch one translation request
    ///
    /// Clears the error banner, then checks input text, source selection,
    /// target selection, and distinctness, in that order, stopping at the
    /// first violation without touching `result_text` or `is_loading`.
    /// Re-submission while a request is in flight is prevented by the
    /// interface (the submit action is disabled), not by this method.
    pub async fn request_translation(&self) {
        let (text, source, target) = {
            let mut state = self.state.lock();
            state.error_message = None;

            match Self::validate(&state) {
                Ok(fields) => {
                    state.is_loading = true;
                    fields
                }
                Err(err) => {
                    state.error_message = Some(err.to_string());
                    return;
                }
            }
        };

        debug!("translating {} chars, {} -> {}", text.len(), source, target);
        match self.translator.translate(&text, &source, &target).await {
            Ok(translated) => {
                let mut state = self.state.lock();
                state.result_text = translated;
                state.is_loading = false;
            }
            Err(_) => {
                // Detail is already logged at the client; the user only
                // sees the generic message.
                let mut state = self.state.lock();
                state.error_message = Some(TRANSLATION_FAILED_MESSAGE.to_string());
                state.is_loading = false;
            }
        }
    }

    /// Check the session fields in submission order
    fn validate(state: &SessionState) -> Result<(String, String, String), ValidationError> {
        if state.input_text.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let source = state
            .source_language
            .clone()
            .ok_or(ValidationError::MissingSource)?;

        let target = state
            .target_language
            .clone()
            .ok_or(ValidationError::MissingTarget)?;

        if source == target {
            return Err(ValidationError::SameLanguage);
        }

        Ok((state.input_text.clone(), source, target))
    }
}

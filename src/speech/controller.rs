use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::errors::CaptureError;
use super::{ActiveCapture, CaptureHandle, SpeechBackend};

/// The current state of voice capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Not listening
    Idle,
    /// A capture session is active
    Listening,
}

/// Outcome of a toggle call
pub enum ToggleAction {
    /// A capture session began; the caller must drain its events
    Started(ActiveCapture),
    /// The active session was asked to stop
    Stopped,
}

/// Idle/Listening state machine over an optional recognition backend
///
/// At most one capture session is active at a time. The public operation
/// is `toggle`: it stops the active session when Listening and starts a
/// new one when Idle. Without an injected backend every toggle fails with
/// `CaptureError::CapabilityUnavailable` and the state stays Idle.
pub struct SpeechCaptureController {
    /// Injected capability, absent when the environment has none
    backend: Option<Arc<dyn SpeechBackend>>,
    /// Recognition locale, fixed for the lifetime of the controller
    locale: String,
    /// Current state
    state: Mutex<CaptureState>,
    /// Stop handle of the active session
    active: Mutex<Option<Arc<dyn CaptureHandle>>>,
}

impl SpeechCaptureController {
    /// Create a controller over an optional backend
    pub fn new(backend: Option<Arc<dyn SpeechBackend>>, locale: impl Into<String>) -> Self {
        Self {
            backend,
            locale: locale.into(),
            state: Mutex::new(CaptureState::Idle),
            active: Mutex::new(None),
        }
    }

    /// Whether a recognition backend was injected
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Current capture state
    pub fn state(&self) -> CaptureState {
        *self.state.lock()
    }

    /// Whether a capture session is active
    pub fn is_listening(&self) -> bool {
        self.state() == CaptureState::Listening
    }

    /// Stop when Listening, start when Idle
    ///
    /// Fails with `CapabilityUnavailable` before touching any state when
    /// no backend was injected.
    pub fn toggle(&self) -> Result<ToggleAction, CaptureError> {
        let backend = self
            .backend
            .as_ref()
            .ok_or(CaptureError::CapabilityUnavailable)?;

        if self.is_listening() {
            self.stop();
            return Ok(ToggleAction::Stopped);
        }

        let capture = backend.start(&self.locale)?;
        debug!("capture session started (locale {})", self.locale);
        *self.state.lock() = CaptureState::Listening;
        *self.active.lock() = Some(Arc::clone(&capture.handle));
        Ok(ToggleAction::Started(capture))
    }

    /// Explicitly stop the active session; no-op when Idle
    ///
    /// The session still delivers its terminal event, after which the
    /// drain calls `finish`.
    pub fn stop(&self) {
        if let Some(handle) = self.active.lock().take() {
            debug!("capture session stopped");
            handle.stop();
        }
        *self.state.lock() = CaptureState::Idle;
    }

    /// Mark the session finished after its terminal event was observed
    ///
    /// Idempotent; also safe to call after `stop`.
    pub fn finish(&self) {
        self.active.lock().take();
        *self.state.lock() = CaptureState::Idle;
    }
}

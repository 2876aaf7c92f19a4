/*!
 * Speech capture: the capability boundary and the listening state machine.
 *
 * The recognition capability is an injected dependency, not an ambient
 * lookup, so it may be absent at runtime and tests can substitute the
 * scripted backend:
 * - `SpeechBackend`: single-utterance recognition sessions
 * - `SpeechCaptureController`: Idle/Listening state machine with toggle semantics
 * - `scripted`: deterministic backend for tests and demos
 */

use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::errors::CaptureError;

pub mod controller;
pub mod scripted;

pub use controller::{CaptureState, SpeechCaptureController, ToggleAction};

/// Events emitted by a capture session
///
/// A session delivers at most one `Result` and always terminates with a
/// terminal event (`Error`, `End`, or channel close). Interim transcripts
/// are never delivered; backends only emit final results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Final transcript for the utterance
    Result(String),
    /// Recognition failed; carries the backend's description
    Error(String),
    /// The session ended without further results
    End,
}

/// Stop handle for an active capture session
pub trait CaptureHandle: Send + Sync {
    /// Ask the backend to stop listening
    ///
    /// The session still terminates through its event channel; stopping
    /// twice is a no-op.
    fn stop(&self);
}

/// One activation of the capability
pub struct ActiveCapture {
    /// Session events, single consumer
    pub events: mpsc::Receiver<RecognitionEvent>,
    /// Handle for explicit cancellation
    pub handle: Arc<dyn CaptureHandle>,
}

/// Platform speech-recognition capability
///
/// One utterance per activation; only final transcripts are delivered.
/// The locale is whatever the caller configured, independent of any
/// translation language selection.
pub trait SpeechBackend: Send + Sync + Debug {
    /// Begin a capture session
    fn start(&self, locale: &str) -> Result<ActiveCapture, CaptureError>;
}

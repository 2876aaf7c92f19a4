/*!
 * Scripted speech backend for tests and demos.
 *
 * Each started session plays the next queued outcome:
 * - `ScriptedSpeech::transcript(..)` - deliver a final transcript, then end
 * - `ScriptedSpeech::error(..)` - fail with a recognition error
 * - `ScriptedSpeech::silence()` - end without any result
 * - `ScriptedSpeech::manual()` - emit nothing until explicitly stopped
 */

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::errors::CaptureError;
use super::{ActiveCapture, CaptureHandle, RecognitionEvent, SpeechBackend};

/// What a scripted session should produce
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// Deliver a final transcript, then end
    Transcript(String),
    /// Fail with a recognition error
    Error(String),
    /// End without any result
    Silence,
    /// Emit nothing until the session is stopped
    Manual,
}

/// Deterministic recognition backend
///
/// Sessions consume outcomes front to back; once the queue is empty every
/// further session is silent.
#[derive(Debug)]
pub struct ScriptedSpeech {
    /// Outcomes for upcoming sessions
    outcomes: Mutex<VecDeque<ScriptedOutcome>>,
    /// Number of sessions started
    sessions: AtomicUsize,
}

impl ScriptedSpeech {
    /// Create a backend playing the given outcomes in order
    pub fn new(outcomes: impl IntoIterator<Item = ScriptedOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            sessions: AtomicUsize::new(0),
        }
    }

    /// Backend whose next session yields the given transcript
    pub fn transcript(text: impl Into<String>) -> Self {
        Self::new([ScriptedOutcome::Transcript(text.into())])
    }

    /// Backend whose next session fails with the given description
    pub fn error(description: impl Into<String>) -> Self {
        Self::new([ScriptedOutcome::Error(description.into())])
    }

    /// Backend whose next session ends without a result
    pub fn silence() -> Self {
        Self::new([ScriptedOutcome::Silence])
    }

    /// Backend whose next session stays open until stopped
    pub fn manual() -> Self {
        Self::new([ScriptedOutcome::Manual])
    }

    /// Number of sessions started so far
    pub fn sessions_started(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }
}

/// Stop handle feeding the session's own event channel
struct ScriptedHandle {
    events: mpsc::Sender<RecognitionEvent>,
}

impl CaptureHandle for ScriptedHandle {
    fn stop(&self) {
        // Channel may already hold the terminal event; a full or closed
        // channel means the session is over anyway.
        let _ = self.events.try_send(RecognitionEvent::End);
    }
}

impl SpeechBackend for ScriptedSpeech {
    fn start(&self, _locale: &str) -> Result<ActiveCapture, CaptureError> {
        self.sessions.fetch_add(1, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel(4);
        let outcome = self
            .outcomes
            .lock()
            .pop_front()
            .unwrap_or(ScriptedOutcome::Silence);

        match outcome {
            ScriptedOutcome::Transcript(text) => {
                let _ = tx.try_send(RecognitionEvent::Result(text));
                let _ = tx.try_send(RecognitionEvent::End);
            }
            ScriptedOutcome::Error(description) => {
                let _ = tx.try_send(RecognitionEvent::Error(description));
            }
            ScriptedOutcome::Silence => {
                let _ = tx.try_send(RecognitionEvent::End);
            }
            ScriptedOutcome::Manual => {}
        }

        Ok(ActiveCapture {
            events: rx,
            handle: Arc::new(ScriptedHandle { events: tx }),
        })
    }
}

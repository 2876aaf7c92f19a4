/*!
 * Tests for the voice capture state machine
 */

use std::sync::Arc;

use voxlate::errors::CaptureError;
use voxlate::speech::scripted::ScriptedSpeech;
use voxlate::speech::{
    CaptureState, RecognitionEvent, SpeechBackend, SpeechCaptureController, ToggleAction,
};

fn controller_over(backend: Arc<ScriptedSpeech>) -> SpeechCaptureController {
    SpeechCaptureController::new(Some(backend as Arc<dyn SpeechBackend>), "en-US")
}

#[test]
fn test_toggle_withoutBackend_shouldFailAndStayIdle() {
    let controller = SpeechCaptureController::new(None, "en-US");

    assert!(!controller.is_available());
    let result = controller.toggle();
    assert!(matches!(result, Err(CaptureError::CapabilityUnavailable)));
    assert_eq!(controller.state(), CaptureState::Idle);
}

#[tokio::test]
async fn test_toggle_fromIdle_shouldStartListening() {
    let backend = Arc::new(ScriptedSpeech::manual());
    let controller = controller_over(Arc::clone(&backend));

    let action = controller.toggle().unwrap();
    assert!(matches!(action, ToggleAction::Started(_)));
    assert!(controller.is_listening());
    assert_eq!(backend.sessions_started(), 1);
}

#[tokio::test]
async fn test_toggle_whileListening_shouldStopWithoutNewSession() {
    let backend = Arc::new(ScriptedSpeech::manual());
    let controller = controller_over(Arc::clone(&backend));

    let started = controller.toggle().unwrap();
    let ToggleAction::Started(mut capture) = started else {
        panic!("expected a started session");
    };

    let action = controller.toggle().unwrap();
    assert!(matches!(action, ToggleAction::Stopped));
    assert_eq!(controller.state(), CaptureState::Idle);
    assert_eq!(backend.sessions_started(), 1);

    // The stopped session still terminates through its event channel
    assert_eq!(capture.events.recv().await, Some(RecognitionEvent::End));
}

#[tokio::test]
async fn test_errorSession_shouldDeliverErrorEvent() {
    let backend = Arc::new(ScriptedSpeech::error("audio-capture"));
    let controller = controller_over(backend);

    let ToggleAction::Started(mut capture) = controller.toggle().unwrap() else {
        panic!("expected a started session");
    };

    assert_eq!(
        capture.events.recv().await,
        Some(RecognitionEvent::Error("audio-capture".to_string()))
    );
}

#[test]
fn test_stop_whenIdle_shouldBeNoOp() {
    let controller = SpeechCaptureController::new(None, "en-US");
    controller.stop();
    assert_eq!(controller.state(), CaptureState::Idle);
}

#[tokio::test]
async fn test_finish_shouldReturnToIdleAndAllowRestart() {
    let backend = Arc::new(ScriptedSpeech::new([
        voxlate::speech::scripted::ScriptedOutcome::Transcript("first".to_string()),
        voxlate::speech::scripted::ScriptedOutcome::Transcript("second".to_string()),
    ]));
    let controller = controller_over(Arc::clone(&backend));

    let ToggleAction::Started(_) = controller.toggle().unwrap() else {
        panic!("expected a started session");
    };
    controller.finish();
    assert_eq!(controller.state(), CaptureState::Idle);

    let ToggleAction::Started(mut capture) = controller.toggle().unwrap() else {
        panic!("expected a second session");
    };
    assert_eq!(
        capture.events.recv().await,
        Some(RecognitionEvent::Result("second".to_string()))
    );
    assert_eq!(backend.sessions_started(), 2);
}

//! Integration tests for scholarship-chat
//!
//! These drive the terminal app with scripted input against a real backend
//! thread and an in-memory service, covering the whole submit-then-chat flow.

use crossbeam_channel::unbounded;
use std::io::Cursor;
use std::thread;

use crate::app::ChatApp;
use crate::backend::api::fake::FakeApi;
use crate::backend::api::ChatResponse;
use crate::backend::handlers::{OUT_OF_SCOPE_HINT, SUBMITTED_MESSAGE};
use crate::backend::run_backend_with;
use crate::buffer::Role;
use crate::logging::{transcript_file_name, TranscriptLogger};
use crate::protocol::{BackendAction, GuiEvent};

const FORM_ANSWERS: &str = "Asha Verma\n19\nUndergraduate\nB.Sc Physics\n250000\nOBC\nKerala\n86.5\n1234 5678 9012\nasha@example.com\n";

/// Run the app over `script` with a backend borrowing `api`.
/// Returns what was printed and the app's final state.
fn run_script(api: &FakeApi, script: &str) -> (String, crate::state::ClientState) {
    run_script_with(api, script, None)
}

fn run_script_with(
    api: &FakeApi,
    script: &str,
    logger: Option<TranscriptLogger>,
) -> (String, crate::state::ClientState) {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();

    thread::scope(|s| {
        s.spawn(move || run_backend_with(api, action_rx, event_tx));

        let mut app = ChatApp::new(
            action_tx,
            event_rx,
            Cursor::new(script.to_string()),
            Vec::<u8>::new(),
        );
        if let Some(logger) = logger {
            app = app.with_logger(logger);
        }
        app.run().unwrap();

        let state = std::mem::take(&mut app.state);
        (String::from_utf8(app.into_output()).unwrap(), state)
    })
}

#[test]
fn test_submit_then_chat() {
    let api = FakeApi::new();
    let script = format!("/submit\n{}which scholarships?\n/quit\n", FORM_ANSWERS);
    let (printed, state) = run_script(&api, &script);

    assert!(printed.contains("Submitted Information"));
    assert!(printed.contains("Annual Family Income: ₹250000"));
    assert!(printed.contains(&format!("[system] {}", SUBMITTED_MESSAGE)));
    assert!(printed.contains("[user] which scholarships?"));
    assert!(printed.contains(
        "[assistant] <h2 class=\"text-2xl font-bold mt-6 mb-4 text-indigo-700\">Scholarships</h2>"
    ));
    assert!(!printed.contains("## Scholarships"));

    assert!(state.visibility().summary);
    assert_eq!(state.record().map(|r| r.age), Some(19));
    assert_eq!(state.transcript.last().map(|m| m.role), Some(Role::Assistant));
    assert_eq!(api.submit_calls(), 1);
    assert_eq!(api.chat_calls(), 1);
}

#[test]
fn test_chat_before_submit_is_refused_without_network() {
    let api = FakeApi::new();
    let (printed, state) = run_script(&api, "hello?\n");

    assert!(printed.contains("[error] Please submit your information first."));
    assert!(state.visibility().form);
    assert_eq!(api.chat_calls(), 0);
}

#[test]
fn test_missing_field_blocks_submission() {
    let api = FakeApi::new();
    // Blank full name, everything else filled in
    let script = format!("/submit\n\n{}", FORM_ANSWERS.split_once('\n').unwrap().1);
    let (printed, state) = run_script(&api, &script);

    assert!(printed.contains("[error] Please fill in the full name"));
    assert!(state.record().is_none());
    assert_eq!(api.submit_calls(), 0);
}

#[test]
fn test_second_submit_is_not_offered() {
    let api = FakeApi::new();
    let script = format!("/submit\n{}/submit\n/summary\n", FORM_ANSWERS);
    let (printed, _) = run_script(&api, &script);

    assert!(printed.contains("Your information has already been submitted."));
    assert_eq!(printed.matches("Submitted Information").count(), 2);
    assert_eq!(api.submit_calls(), 1);
}

#[test]
fn test_out_of_scope_reply_adds_hint() {
    let api = FakeApi::new().with_chat_reply(Ok(ChatResponse {
        status: "error".into(),
        response: "I can only assist with questions related to education and scholarships.".into(),
    }));
    let script = format!("/submit\n{}tell me a joke\n", FORM_ANSWERS);
    let (printed, _) = run_script(&api, &script);

    assert!(printed.contains("[error] I can only assist with questions related to education"));
    assert!(printed.contains(&format!("[system] {}", OUT_OF_SCOPE_HINT)));
}

#[test]
fn test_commands_without_backend_round_trip() {
    let api = FakeApi::new();
    let (printed, state) = run_script(&api, "/help\n/summary\n/dance\n\n/exit\nnever sent\n");

    assert!(printed.contains("/submit"));
    assert!(printed.contains("Please submit your information first."));
    assert!(printed.contains("Unknown command: /dance"));
    assert!(!printed.contains("never sent"));
    assert!(state.transcript.is_empty());
}

#[test]
fn test_transcript_receives_markup() {
    let dir = std::env::temp_dir().join(format!(
        "scholarship-chat-integration-{}",
        std::process::id()
    ));
    let logger = TranscriptLogger::with_dir(dir.clone()).unwrap();
    let api = FakeApi::new();
    let script = format!("/submit\n{}which scholarships?\n", FORM_ANSWERS);
    run_script_with(&api, &script, Some(logger));

    // The logger thread drains after the app (and its sender) is dropped
    let file = dir.join(transcript_file_name());
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
    let mut content = String::new();
    while std::time::Instant::now() < deadline {
        content = std::fs::read_to_string(&file).unwrap_or_default();
        if content.contains("<h2") {
            break;
        }
        thread::sleep(std::time::Duration::from_millis(20));
    }
    assert!(content.contains("Submitted Information"));
    assert!(content.contains("message assistant"));
    assert!(content.contains("<h2 class=\"text-2xl font-bold mt-6 mb-4 text-indigo-700\">Scholarships</h2>"));
    let _ = std::fs::remove_dir_all(&dir);
}

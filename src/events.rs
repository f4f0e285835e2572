//! Backend event processing (messages, session activation, idle).

use std::io::{self, Write};

use crate::logging::TranscriptLogger;
use crate::protocol::GuiEvent;
use crate::state::ClientState;
use crate::ui;

/// Apply one backend event to the client state and echo it to `out`.
pub fn process_single_event<W: Write>(
    state: &mut ClientState,
    event: GuiEvent,
    out: &mut W,
    logger: Option<&TranscriptLogger>,
) -> io::Result<()> {
    match event {
        GuiEvent::Message(msg) => {
            writeln!(out, "{}", ui::message_line(&msg))?;
            if let Some(logger) = logger {
                logger.log(ui::message_markup(&msg));
            }
            state.push_message(msg);
        }

        GuiEvent::Submitted(record) => {
            for line in ui::summary_lines(&record) {
                writeln!(out, "{}", line)?;
            }
            if let Some(logger) = logger {
                logger.log(ui::summary_markup(&record));
            }
            state.activate(record);
        }

        GuiEvent::Fatal(reason) => {
            writeln!(out, "Fatal: {}", reason)?;
            state.fatal = Some(reason);
            state.pending = false;
        }

        GuiEvent::Idle => {
            state.pending = false;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{ChatMessage, Role};
    use crate::record::sample_form;
    use crate::validation::validate_form;

    #[test]
    fn test_message_event_is_printed_and_kept() {
        let mut state = ClientState::new();
        let mut out: Vec<u8> = Vec::new();
        process_single_event(
            &mut state,
            GuiEvent::Message(ChatMessage::error("Please submit your information first.")),
            &mut out,
            None,
        )
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[error] Please submit your information first."));
        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript.messages[0].role, Role::Error);
    }

    #[test]
    fn test_submitted_event_switches_view() {
        let mut state = ClientState::new();
        let mut out: Vec<u8> = Vec::new();
        let record = validate_form(&sample_form()).unwrap();
        process_single_event(&mut state, GuiEvent::Submitted(record), &mut out, None).unwrap();

        assert!(state.visibility().summary);
        assert!(!state.visibility().form);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Submitted Information\n"));
        assert!(printed.contains("Email Address: asha@example.com"));
    }

    #[test]
    fn test_idle_clears_pending() {
        let mut state = ClientState::new();
        state.pending = true;
        process_single_event(&mut state, GuiEvent::Idle, &mut Vec::<u8>::new(), None).unwrap();
        assert!(!state.pending);
    }
}

//! UI-side application state, separated from presentation.
//!
//! `ClientState` mirrors what the backend has reported: the session phase
//! (with the submitted record once active) and the chat transcript. What is
//! on screen is derived from it through [`Visibility`], never stored.

use crate::buffer::{ChatMessage, Transcript};
use crate::record::ApplicantRecord;
use crate::session::SessionState;

/// Which parts of the chat widget are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// The intake form is offered
    pub form: bool,
    /// The read-only summary of the submitted record is shown
    pub summary: bool,
    /// Chat input is accepted without the gate error
    pub chat_enabled: bool,
}

impl Visibility {
    pub fn of(state: &SessionState) -> Self {
        let active = state.is_active();
        Self {
            form: !active,
            summary: active,
            chat_enabled: active,
        }
    }
}

#[derive(Default)]
pub struct ClientState {
    /// Session phase as last reported by the backend.
    pub session: SessionState,

    /// Messages in the chat container.
    pub transcript: Transcript,

    /// Whether an action has been sent and its `Idle` not yet received.
    pub pending: bool,

    /// Set when the backend reported it cannot continue.
    pub fatal: Option<String>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::of(&self.session)
    }

    pub fn record(&self) -> Option<&ApplicantRecord> {
        self.session.record()
    }

    pub fn activate(&mut self, record: ApplicantRecord) {
        self.session = SessionState::Active(record);
    }

    pub fn push_message(&mut self, msg: ChatMessage) {
        self.transcript.push(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_form;
    use crate::validation::validate_form;

    #[test]
    fn test_client_state_new() {
        let state = ClientState::new();
        assert!(state.transcript.is_empty());
        assert!(state.record().is_none());
        assert!(!state.pending);
    }

    #[test]
    fn test_visibility_follows_session() {
        let mut state = ClientState::new();
        assert_eq!(
            state.visibility(),
            Visibility {
                form: true,
                summary: false,
                chat_enabled: false
            }
        );

        state.activate(validate_form(&sample_form()).unwrap());
        assert_eq!(
            state.visibility(),
            Visibility {
                form: false,
                summary: true,
                chat_enabled: true
            }
        );
    }
}

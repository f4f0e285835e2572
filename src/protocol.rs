use crate::buffer::ChatMessage;
use crate::record::{ApplicantForm, ApplicantRecord};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Validate the intake form and submit it to the service
    Submit(ApplicantForm),
    /// Send a chat message along with the stored record
    SendMessage(String),
    /// Stop the backend loop
    Quit,
}

impl BackendAction {
    /// Short name for diagnostics. The payloads carry personal data and are
    /// never logged.
    pub fn name(&self) -> &'static str {
        match self {
            BackendAction::Submit(_) => "submit",
            BackendAction::SendMessage(_) => "send_message",
            BackendAction::Quit => "quit",
        }
    }
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A message to append to the chat container
    Message(ChatMessage),
    /// The session became active with this record
    Submitted(ApplicantRecord),
    /// The backend cannot continue (e.g. runtime or client setup failed)
    Fatal(String),
    /// The last action has been fully handled
    Idle,
}

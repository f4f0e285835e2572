//! Action handling for the backend loop.
//!
//! Each UI action runs to completion here: submissions are validated,
//! posted and (on success) move the session to `Active`; chat sends are
//! gated on the session, posted with the stored record, and their replies
//! turned into chat messages for the UI.

use crossbeam_channel::Sender;
use tracing::{debug, error, info, warn};

use super::api::{ChatResponse, ScholarshipApi, SubmitResponse};
use crate::buffer::ChatMessage;
use crate::error::{ApiError, SessionError};
use crate::protocol::{BackendAction, GuiEvent};
use crate::record::ApplicantForm;
use crate::session::Session;
use crate::validation::{normalize_chat_input, validate_form};

pub const SUBMITTED_MESSAGE: &str =
    "Information submitted successfully! You can now ask questions about scholarships and opportunities.";
pub const SUBMIT_REJECTED_PREFIX: &str = "Error submitting information: ";
pub const SUBMIT_TRANSPORT_MESSAGE: &str = "Error submitting information. Please try again.";
pub const CHAT_TRANSPORT_MESSAGE: &str = "Error communicating with the server. Please try again.";

/// Phrase the service uses when a question is outside its scope.
pub const OUT_OF_SCOPE_PHRASE: &str = "I can only assist with questions related to education";
pub const OUT_OF_SCOPE_HINT: &str = "Try asking about scholarships, educational opportunities, or admission requirements that match your profile.";

/// Dispatch one UI action. Returns `false` when the loop should stop.
pub async fn handle_backend_action<A: ScholarshipApi>(
    action: BackendAction,
    api: &A,
    session: &mut Session,
    event_tx: &Sender<GuiEvent>,
) -> bool {
    match action {
        BackendAction::Submit(form) => {
            handle_submit(api, session, &form, event_tx).await;
            true
        }
        BackendAction::SendMessage(text) => {
            handle_chat(api, session, &text, event_tx).await;
            true
        }
        BackendAction::Quit => false,
    }
}

/// Validate and submit the intake form.
pub async fn handle_submit<A: ScholarshipApi>(
    api: &A,
    session: &mut Session,
    form: &ApplicantForm,
    event_tx: &Sender<GuiEvent>,
) {
    if session.is_active() {
        emit(event_tx, ChatMessage::error(SessionError::AlreadySubmitted.to_string()));
        return;
    }

    let record = match validate_form(form) {
        Ok(record) => record,
        Err(e) => {
            debug!(field = e.field().key(), "form validation failed");
            emit(event_tx, ChatMessage::error(e.to_string()));
            return;
        }
    };

    info!("submitting applicant information");
    match api
        .submit_info(&record)
        .await
        .and_then(SubmitResponse::into_result)
    {
        Ok(doc_id) => {
            info!(doc_id = doc_id.as_deref().unwrap_or("-"), "submission accepted");
            match session.activate(record) {
                Ok(stored) => {
                    let _ = event_tx.send(GuiEvent::Submitted(stored.clone()));
                    emit(event_tx, ChatMessage::system(SUBMITTED_MESSAGE));
                }
                Err(e) => emit(event_tx, ChatMessage::error(e.to_string())),
            }
        }
        Err(ApiError::Rejected { status, message }) => {
            warn!(%status, %message, "submission rejected");
            emit(
                event_tx,
                ChatMessage::error(format!("{}{}", SUBMIT_REJECTED_PREFIX, message)),
            );
        }
        Err(ApiError::Transport(e)) => {
            error!(error = %e, "submission failed");
            emit(event_tx, ChatMessage::error(SUBMIT_TRANSPORT_MESSAGE));
        }
    }
}

/// Send a chat message with the stored record and surface the reply.
pub async fn handle_chat<A: ScholarshipApi>(
    api: &A,
    session: &Session,
    text: &str,
    event_tx: &Sender<GuiEvent>,
) {
    let record = match session.require_record() {
        Ok(record) => record,
        Err(e) => {
            emit(event_tx, ChatMessage::error(e.to_string()));
            return;
        }
    };

    let Some(message) = normalize_chat_input(text) else {
        return;
    };

    emit(event_tx, ChatMessage::user(message));

    debug!(len = message.len(), "sending chat message");
    match api
        .chat(message, record)
        .await
        .and_then(ChatResponse::into_result)
    {
        Ok(reply) => emit(event_tx, ChatMessage::assistant(reply)),
        Err(ApiError::Rejected { status, message }) => {
            warn!(%status, "chat message rejected");
            let out_of_scope = message.contains(OUT_OF_SCOPE_PHRASE);
            emit(event_tx, ChatMessage::error(message));
            if out_of_scope {
                emit(event_tx, ChatMessage::system(OUT_OF_SCOPE_HINT));
            }
        }
        Err(ApiError::Transport(e)) => {
            error!(error = %e, "chat request failed");
            emit(event_tx, ChatMessage::error(CHAT_TRANSPORT_MESSAGE));
        }
    }
}

fn emit(event_tx: &Sender<GuiEvent>, msg: ChatMessage) {
    // If send fails, the UI has gone away - nothing left to report to
    let _ = event_tx.send(GuiEvent::Message(msg));
}

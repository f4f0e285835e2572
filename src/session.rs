//! The submission state machine.
//!
//! A session starts out waiting for the intake form. A successful submission
//! moves it to `Active`, which holds the record for the rest of the session.
//! There is no way back.

use crate::error::SessionError;
use crate::record::ApplicantRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    AwaitingSubmission,
    Active(ApplicantRecord),
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }

    pub fn record(&self) -> Option<&ApplicantRecord> {
        match self {
            SessionState::Active(record) => Some(record),
            SessionState::AwaitingSubmission => None,
        }
    }
}

/// Session owned by the backend loop and lent to the action handlers.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// The stored record, or the gate error chat sends must surface.
    pub fn require_record(&self) -> Result<&ApplicantRecord, SessionError> {
        self.state.record().ok_or(SessionError::NotSubmitted)
    }

    /// AwaitingSubmission → Active. Only valid once per session.
    pub fn activate(&mut self, record: ApplicantRecord) -> Result<&ApplicantRecord, SessionError> {
        if self.state.is_active() {
            return Err(SessionError::AlreadySubmitted);
        }
        self.state = SessionState::Active(record);
        self.require_record()
    }
}

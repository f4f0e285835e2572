//! Error taxonomy for the client.
//!
//! Every error is terminal for the action that raised it only; none of them
//! change the session state.

use thiserror::Error;

use crate::record::Field;

/// A required form field was missing. Raised locally before any request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {}", .0.error_name())]
    MissingField(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) => *field,
        }
    }
}

/// Failures talking to the scholarship service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: String, message: String },

    /// The request never completed, or the body could not be decoded.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Violations of the submission state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please submit your information first.")]
    NotSubmitted,

    #[error("Your information has already been submitted.")]
    AlreadySubmitted,
}

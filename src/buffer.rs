use chrono::Local;

use crate::ui::markdown;

/// Maximum messages to keep in the transcript before trimming
const MAX_TRANSCRIPT_MESSAGES: usize = 2000;
/// Number of oldest messages to remove when trimming
const TRANSCRIPT_TRIM_COUNT: usize = 500;

/// Who a chat message is attributed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
    Error,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Error => "error",
        }
    }
}

/// A single chat message. Created per send/receive event, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Role::Error, text)
    }

    /// Body markup: assistant replies go through the markdown renderer,
    /// everything else is shown as plain text.
    pub fn body_markup(&self) -> String {
        match self.role {
            Role::Assistant => markdown::render(&self.text),
            _ => escape_html(&self.text),
        }
    }
}

/// The chat container: messages in display order.
#[derive(Default, Clone, Debug)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
        // Trim old messages if the transcript gets too large
        if self.messages.len() > MAX_TRANSCRIPT_MESSAGES {
            self.messages.drain(0..TRANSCRIPT_TRIM_COUNT);
        }
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

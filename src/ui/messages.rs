//! Message rendering for the chat container.

use crate::buffer::{ChatMessage, Role};
use crate::ui::markdown;

/// Container classes for a message, keyed by role.
pub fn message_classes(role: Role) -> String {
    let style = match role {
        Role::User => "bg-blue-100",
        Role::Assistant => {
            "bg-white shadow-sm border border-gray-100 scholarship-response prose max-w-none"
        }
        Role::Error => "bg-red-50 border border-red-100",
        Role::System => "bg-gray-50",
    };
    format!("message {} mb-4 p-4 rounded-lg {}", role.as_str(), style)
}

/// Full markup for one message as it appears in the chat container.
pub fn message_markup(msg: &ChatMessage) -> String {
    format!(
        "<div class=\"{}\">{}</div>",
        message_classes(msg.role),
        msg.body_markup()
    )
}

/// Terminal rendering: `[HH:MM:SS] [role] text`. Assistant replies are
/// shown as rendered markup, everything else as typed.
pub fn message_line(msg: &ChatMessage) -> String {
    let body = match msg.role {
        Role::Assistant => markdown::render(&msg.text),
        _ => msg.text.clone(),
    };
    format!("[{}] [{}] {}", msg.timestamp, msg.role.as_str(), body)
}

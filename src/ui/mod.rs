//! Presentation code for the chat client.
//!
//! - `markdown`: assistant reply renderer
//! - `messages`: per-message markup and terminal lines
//! - `summary`: read-only view of the submitted record

pub mod markdown;
pub mod messages;
pub mod summary;

pub use messages::{message_line, message_markup};
pub use summary::{summary_lines, summary_markup};

//! Chat message types.
//!
//! Provides:
//! - [`Message`] with its three content shapes ([`MessageContent`])
//! - [`get_message_text`] for flattening any shape to plain text

mod types;

pub use types::*;

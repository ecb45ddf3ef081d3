//! Structured log messages
//!
//! Raw PrintJSON parts are resolved into [`MessagePart`]s and wrapped in an
//! immutable [`LogMessage`].

mod json_part;
mod log_message;
mod parts;

pub use json_part::{JsonMessagePart, JsonMessagePartType};
pub use log_message::{LogMessage, LogMessageKind, PlayerContext};
pub use parts::{MessagePart, PartResolver};

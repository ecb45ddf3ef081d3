//! Connection session state
//!
//! Tracks this client's identity, team/slot assignment, tags, and items
//! handling flags for the lifetime of one connection.

mod info;
mod record;

pub use info::ConnectionInfo;
pub use record::{generate_uuid, SessionRecord};

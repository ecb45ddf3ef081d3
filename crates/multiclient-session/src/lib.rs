//! # multiclient-session
//!
//! Client-side session layer: the connection session state manager, the
//! transport seam it listens on, and the structured message log.

pub mod connection;
pub mod message_log;
pub mod socket;

// Re-export commonly used types at crate root
pub use connection::{generate_uuid, ConnectionInfo, SessionRecord};
pub use message_log::{MessageContext, MessageLog};
pub use multiclient_core::ConnectionInfoProvider;
pub use socket::{
    ChannelSocket, ListenerRegistry, PacketListener, PacketTransport, SocketError, SocketEvent,
    SocketResult, Subscription,
};

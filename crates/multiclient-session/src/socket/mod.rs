//! Transport seam
//!
//! The session layer never touches sockets or framing directly. It talks to
//! a [`PacketTransport`], which delivers decoded server packets to
//! registered listeners and accepts client packets for sending.

mod channel;
mod error;
mod event;
mod subscription;


pub use channel::ChannelSocket;
pub use error::{SocketError, SocketResult};
pub use event::SocketEvent;
pub use subscription::{ListenerRegistry, PacketListener, Subscription};

use multiclient_core::ClientPacket;

/// Capability set the session layer needs from a transport
pub trait PacketTransport: Send + Sync {
    /// Register a listener for inbound events
    ///
    /// The listener is called for every event until the returned handle is dropped.
    fn subscribe(&self, listener: PacketListener) -> Subscription;

    /// Hand a packet over for encoding and transmission
    ///
    /// Returns as soon as the packet is queued; never waits for the server.
    fn send_packet(&self, packet: ClientPacket) -> SocketResult<()>;
}

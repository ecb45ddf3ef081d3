//! Events delivered by the transport to its listeners

use multiclient_core::ServerPacket;

/// Something the transport observed
#[derive(Debug, Clone, PartialEq)]
pub enum SocketEvent {
    /// A decoded packet arrived from the server
    PacketReceived(ServerPacket),
    /// The connection ended; no further packets follow
    Closed { reason: String },
}

impl SocketEvent {
    /// The packet carried by this event, if any
    pub fn packet(&self) -> Option<&ServerPacket> {
        match self {
            Self::PacketReceived(packet) => Some(packet),
            Self::Closed { .. } => None,
        }
    }
}

impl From<ServerPacket> for SocketEvent {
    fn from(packet: ServerPacket) -> Self {
        Self::PacketReceived(packet)
    }
}

//! Transport errors

use multiclient_core::ClientPacket;
use tokio::sync::mpsc::error::TrySendError;

/// Errors handing a packet to the transport
#[derive(Debug, thiserror::Error)]
pub enum SocketError {
    #[error("Socket closed")]
    ChannelClosed,

    #[error("Outbound buffer full, dropped {0} packet")]
    BufferFull(&'static str),
}

impl From<TrySendError<ClientPacket>> for SocketError {
    fn from(err: TrySendError<ClientPacket>) -> Self {
        match err {
            TrySendError::Full(packet) => Self::BufferFull(packet.command()),
            TrySendError::Closed(_) => Self::ChannelClosed,
        }
    }
}

/// Result type for transport operations
pub type SocketResult<T> = Result<T, SocketError>;

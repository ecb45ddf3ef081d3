//! Channel-backed transport
//!
//! Outbound packets are queued on an mpsc channel for whatever owns the
//! real connection; inbound packets are fed in by that owner and fanned
//! out to listeners.

use multiclient_core::{decode_batch, ClientPacket, ProtocolError, ServerPacket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::{
    ListenerRegistry, PacketListener, PacketTransport, SocketError, SocketEvent, SocketResult,
    Subscription,
};

/// Transport backed by tokio channels
pub struct ChannelSocket {
    registry: ListenerRegistry,
    outbound: mpsc::Sender<ClientPacket>,
    closed: AtomicBool,
}

impl ChannelSocket {
    /// Create a socket and the receiver its outbound packets arrive on
    ///
    /// A zero buffer is raised to one packet.
    pub fn new(outbound_buffer: usize) -> (Arc<Self>, mpsc::Receiver<ClientPacket>) {
        let (outbound, rx) = mpsc::channel(outbound_buffer.max(1));
        let socket = Arc::new(Self {
            registry: ListenerRegistry::new(),
            outbound,
            closed: AtomicBool::new(false),
        });
        (socket, rx)
    }

    /// Deliver a decoded packet to all listeners
    pub fn receive(&self, packet: ServerPacket) {
        if self.is_closed() {
            tracing::debug!(cmd = packet.command(), "Packet after close ignored");
            return;
        }
        tracing::trace!(cmd = packet.command(), "Packet received");
        self.registry.dispatch(&SocketEvent::PacketReceived(packet));
    }

    /// Decode a raw frame and deliver its packets in order
    pub fn receive_frame(&self, frame: &str) -> Result<usize, ProtocolError> {
        let packets = decode_batch(frame)?;
        let count = packets.len();
        for packet in packets {
            self.receive(packet);
        }
        Ok(count)
    }

    /// Mark the socket closed and notify listeners once
    pub fn close(&self, reason: impl Into<String>) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let reason = reason.into();
        tracing::info!(reason = %reason, "Socket closed");
        self.registry.dispatch(&SocketEvent::Closed { reason });
    }

    /// Pump decoded packets from `inbound` until the stream ends, then close
    pub async fn run(self: Arc<Self>, mut inbound: mpsc::Receiver<ServerPacket>) {
        while let Some(packet) = inbound.recv().await {
            self.receive(packet);
        }
        self.close("inbound stream ended");
    }

    /// Pump raw frames from `inbound`; malformed frames are logged and skipped
    pub async fn run_frames(self: Arc<Self>, mut inbound: mpsc::Receiver<String>) {
        while let Some(frame) = inbound.recv().await {
            if let Err(e) = self.receive_frame(&frame) {
                tracing::warn!(error = %e, code = e.code(), "Dropping malformed frame");
            }
        }
        self.close("inbound stream ended");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }
}

impl PacketTransport for ChannelSocket {
    fn subscribe(&self, listener: PacketListener) -> Subscription {
        self.registry.register(listener)
    }

    fn send_packet(&self, packet: ClientPacket) -> SocketResult<()> {
        if self.is_closed() {
            return Err(SocketError::ChannelClosed);
        }
        tracing::trace!(cmd = packet.command(), "Packet queued");
        self.outbound.try_send(packet).map_err(SocketError::from)
    }
}

impl std::fmt::Debug for ChannelSocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelSocket")
            .field("listeners", &self.registry.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}

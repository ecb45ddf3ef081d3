//! Message log
//!
//! Turns PrintJSON packets into structured [`LogMessage`]s and broadcasts
//! them to every interested consumer (UI, console, file logger).

use multiclient_core::{
    ConnectionInfoProvider, DataLookup, LogMessage, LogMessageKind, PartResolver, PlayerLookup,
    PrintJsonPacket, ServerPacket, NOT_CONNECTED,
};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::socket::{PacketTransport, SocketEvent, Subscription};

/// Shared tables a message is built against
#[derive(Clone)]
pub struct MessageContext {
    pub players: Arc<dyn PlayerLookup>,
    pub data: Arc<dyn DataLookup>,
    pub connection: Arc<dyn ConnectionInfoProvider>,
}

impl MessageContext {
    /// Build the log message for one PrintJSON packet
    ///
    /// Player context is resolved against the session as it is right now
    /// and copied into the message.
    pub fn build(&self, packet: &PrintJsonPacket) -> LogMessage {
        let resolver = PartResolver {
            players: self.players.as_ref(),
            data: self.data.as_ref(),
            connection: self.connection.as_ref(),
        };
        let parts = resolver.resolve_all(&packet.data);

        let kind = match packet.message_type.as_deref() {
            Some("Join") => LogMessageKind::Join {
                tags: packet.tags.clone().unwrap_or_default(),
            },
            Some("Part") => LogMessageKind::Leave,
            Some("TagsChanged") => LogMessageKind::TagsChanged {
                tags: packet.tags.clone().unwrap_or_default(),
            },
            Some("Chat") => LogMessageKind::Chat {
                message: packet.message.clone().unwrap_or_default(),
            },
            _ => LogMessageKind::Plain,
        };

        if !kind.is_player_specific() {
            return LogMessage::plain(parts);
        }

        LogMessage::player_specific(
            parts,
            self.players.as_ref(),
            self.connection.as_ref(),
            packet.team.unwrap_or(NOT_CONNECTED),
            packet.slot.unwrap_or(NOT_CONNECTED),
            kind,
        )
    }
}

/// Broadcasts a log message for every PrintJSON packet the transport delivers
pub struct MessageLog {
    sender: broadcast::Sender<LogMessage>,
    subscription: Subscription,
}

impl MessageLog {
    /// Start listening to `transport`
    ///
    /// `buffer` is how many messages a slow receiver may lag behind; zero
    /// is raised to one.
    pub fn new(transport: &dyn PacketTransport, context: MessageContext, buffer: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer.max(1));

        let listener_sender = sender.clone();
        let subscription = transport.subscribe(Arc::new(move |event: &SocketEvent| {
            let Some(ServerPacket::PrintJson(packet)) = event.packet() else {
                return;
            };
            let message = context.build(packet);
            tracing::debug!(
                kind = message.kind().name(),
                team = message.team(),
                slot = message.slot(),
                "Log message built"
            );
            if listener_sender.send(message).is_err() {
                tracing::trace!("No log message subscribers");
            }
        }));

        Self {
            sender,
            subscription,
        }
    }

    /// Receive every message built from now on
    pub fn subscribe(&self) -> broadcast::Receiver<LogMessage> {
        self.sender.subscribe()
    }

    /// Number of active receivers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl std::fmt::Debug for MessageLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageLog")
            .field("receivers", &self.receiver_count())
            .field("subscription", &self.subscription.id())
            .finish()
    }
}

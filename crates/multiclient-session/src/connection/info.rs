//! Connection session state manager
//!
//! Owns the session record of one connection and keeps it in step with the
//! server: inbound packets update or reset it, outbound option changes are
//! applied locally first and then announced with a `ConnectUpdate`.

use multiclient_common::ConnectionSettings;
use multiclient_core::{
    ConnectUpdatePacket, ConnectionInfoProvider, ItemsHandlingFlags, ServerPacket, SlotAssignment,
};
use parking_lot::RwLock;
use std::sync::Arc;

use super::SessionRecord;
use crate::socket::{PacketTransport, SocketEvent, SocketResult, Subscription};

/// Authoritative session state of one connection
///
/// Reads take a shared lock, mutations hold the write lock for their whole
/// duration, so no reader sees a record half way through a packet.
pub struct ConnectionInfo {
    record: Arc<RwLock<SessionRecord>>,
    transport: Arc<dyn PacketTransport>,
    /// Keeps the packet listener registered while this manager lives
    subscription: Subscription,
}

impl ConnectionInfo {
    /// Create a manager in the reset state and start listening to `transport`
    pub fn new(transport: Arc<dyn PacketTransport>) -> Self {
        let record = Arc::new(RwLock::new(SessionRecord::default()));

        let listener_record = Arc::clone(&record);
        let subscription = transport.subscribe(Arc::new(move |event: &SocketEvent| {
            handle_event(&listener_record, event);
        }));

        Self {
            record,
            transport,
            subscription,
        }
    }

    /// Create a shared manager
    pub fn new_shared(transport: Arc<dyn PacketTransport>) -> Arc<Self> {
        Arc::new(Self::new(transport))
    }

    /// Record the parameters a connect attempt is about to claim
    ///
    /// Called by the connect workflow before the Connect packet goes out.
    /// `None` tags become an empty list and a `None` uuid is generated.
    /// The team/slot assignment is not touched.
    pub fn set_connection_parameters(
        &self,
        game: impl Into<String>,
        tags: Option<Vec<String>>,
        items_handling: ItemsHandlingFlags,
        uuid: Option<String>,
    ) {
        let game = game.into();
        let mut record = self.record.write();
        record.set_connection_parameters(Some(game), tags, items_handling, uuid);

        tracing::debug!(
            game = record.game_ref().unwrap_or_default(),
            tags = ?record.tags_ref(),
            items_handling = %record.items_handling(),
            uuid = record.uuid_ref().unwrap_or_default(),
            "Connection parameters set"
        );
    }

    /// Record the parameters from loaded configuration
    pub fn apply_settings(&self, settings: &ConnectionSettings) {
        self.set_connection_parameters(
            settings.game.clone(),
            Some(settings.tags.clone()),
            settings.items_handling,
            settings.uuid.clone(),
        );
    }

    /// Replace the tags, keep the current flags, and notify the server
    pub fn update_tags(&self, tags: Vec<String>) -> SocketResult<()> {
        self.update_with(|record| (tags, record.items_handling()))
    }

    /// Replace the flags, keep the current tags, and notify the server
    pub fn update_items_handling(&self, items_handling: ItemsHandlingFlags) -> SocketResult<()> {
        self.update_with(|record| (record.tags(), items_handling))
    }

    /// Replace tags and flags, then send exactly one `ConnectUpdate`
    ///
    /// The record is updated before the packet is handed to the transport
    /// and the packet carries the record's values after the update. Game
    /// and identity are kept; an identity is generated if none exists yet.
    pub fn update_connection_options(
        &self,
        tags: Vec<String>,
        items_handling: ItemsHandlingFlags,
    ) -> SocketResult<()> {
        self.update_with(|_| (tags, items_handling))
    }

    /// Pick the new options from the record and apply them under one write lock
    fn update_with<F>(&self, options: F) -> SocketResult<()>
    where
        F: FnOnce(&SessionRecord) -> (Vec<String>, ItemsHandlingFlags),
    {
        let packet = {
            let mut record = self.record.write();
            let (tags, items_handling) = options(&*record);
            let game = record.game();
            let uuid = record.uuid();
            record.set_connection_parameters(game, Some(tags), items_handling, uuid);
            ConnectUpdatePacket::new(record.tags(), record.items_handling())
        };

        tracing::debug!(
            tags = ?packet.tags,
            items_handling = %packet.items_handling,
            "Sending connection options update"
        );

        self.transport.send_packet(packet.into()).inspect_err(|e| {
            tracing::warn!(error = %e, "Connection options update not sent");
        })
    }

    /// Consistent copy of the whole record
    pub fn snapshot(&self) -> SessionRecord {
        self.record.read().clone()
    }
}

fn handle_event(record: &RwLock<SessionRecord>, event: &SocketEvent) {
    match event {
        SocketEvent::PacketReceived(ServerPacket::Connected(packet)) => {
            record.write().assign(packet.assignment());
            tracing::info!(
                team = packet.team,
                slot = packet.slot,
                "Connection accepted"
            );
        }
        SocketEvent::PacketReceived(ServerPacket::ConnectionRefused(packet)) => {
            record.write().reset();
            tracing::warn!(errors = ?packet.errors, "Connection refused, session reset");
        }
        SocketEvent::PacketReceived(packet) => {
            tracing::trace!(cmd = packet.command(), "Packet ignored by session state");
        }
        SocketEvent::Closed { reason } => {
            record.write().reset();
            tracing::debug!(reason = %reason, "Transport closed, session reset");
        }
    }
}

impl ConnectionInfoProvider for ConnectionInfo {
    fn game(&self) -> Option<String> {
        self.record.read().game()
    }

    fn team(&self) -> i32 {
        self.record.read().team()
    }

    fn slot(&self) -> i32 {
        self.record.read().slot()
    }

    fn tags(&self) -> Vec<String> {
        self.record.read().tags()
    }

    fn items_handling(&self) -> ItemsHandlingFlags {
        self.record.read().items_handling()
    }

    fn uuid(&self) -> Option<String> {
        self.record.read().uuid()
    }

    fn slot_assignment(&self) -> Option<SlotAssignment> {
        self.record.read().slot_assignment()
    }
}

impl std::fmt::Debug for ConnectionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionInfo")
            .field("record", &*self.record.read())
            .field("subscription", &self.subscription.id())
            .finish()
    }
}

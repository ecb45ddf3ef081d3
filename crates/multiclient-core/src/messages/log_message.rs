//! Log messages - immutable, structured log entries
//!
//! A message owns its resolved parts and a copy of the session context it
//! was built against. Nothing here references live session state, so a
//! later reset of the connection never changes a message already built.

use std::fmt;

use super::parts::MessagePart;
use crate::entities::PlayerInfo;
use crate::traits::{ConnectionInfoProvider, PlayerLookup};
use crate::value_objects::NOT_CONNECTED;

/// Kind-specific payload of a log message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMessageKind {
    /// Server text with no player context
    Plain,
    /// A client joined, with the tags it connected under
    Join { tags: Vec<String> },
    /// A client left
    Leave,
    /// A client changed its tags
    TagsChanged { tags: Vec<String> },
    /// A player sent a chat message
    Chat { message: String },
}

impl LogMessageKind {
    /// Get the kind name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::Join { .. } => "Join",
            Self::Leave => "Leave",
            Self::TagsChanged { .. } => "TagsChanged",
            Self::Chat { .. } => "Chat",
        }
    }

    /// Whether this kind concerns a specific player
    pub fn is_player_specific(&self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Player context captured when the message was built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerContext {
    pub team: i32,
    pub slot: i32,
    /// The player, if the lookup knew it at build time
    pub player: Option<PlayerInfo>,
    pub is_active_player: bool,
    /// Active player, or a group the active player is part of
    pub is_related_to_active_player: bool,
}

impl PlayerContext {
    /// Resolve the context of `team`/`slot` against the lookup and the
    /// connection as they are right now
    pub fn capture(
        players: &dyn PlayerLookup,
        connection: &dyn ConnectionInfoProvider,
        team: i32,
        slot: i32,
    ) -> Self {
        let active = connection.slot_assignment();

        let player = players.player(team, slot);
        let is_active_player = active.is_some_and(|a| a.team == team && a.slot == slot);
        let is_related_to_active_player = is_active_player
            || active.is_some_and(|a| {
                player
                    .as_ref()
                    .is_some_and(|p| p.is_sharing_group_with(a.team, a.slot))
            });

        Self {
            team,
            slot,
            player,
            is_active_player,
            is_related_to_active_player,
        }
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    parts: Vec<MessagePart>,
    context: Option<PlayerContext>,
    kind: LogMessageKind,
}

impl LogMessage {
    /// Create a message with no player context
    pub fn plain(parts: Vec<MessagePart>) -> Self {
        Self {
            parts,
            context: None,
            kind: LogMessageKind::Plain,
        }
    }

    /// Create a message about the player at `team`/`slot`
    ///
    /// The lookup and connection are only read here; everything the message
    /// needs later is copied into it.
    pub fn player_specific(
        parts: Vec<MessagePart>,
        players: &dyn PlayerLookup,
        connection: &dyn ConnectionInfoProvider,
        team: i32,
        slot: i32,
        kind: LogMessageKind,
    ) -> Self {
        Self {
            parts,
            context: Some(PlayerContext::capture(players, connection, team, slot)),
            kind,
        }
    }

    /// Create a join message carrying the tags the player joined with
    pub fn join(
        parts: Vec<MessagePart>,
        players: &dyn PlayerLookup,
        connection: &dyn ConnectionInfoProvider,
        team: i32,
        slot: i32,
        tags: Vec<String>,
    ) -> Self {
        Self::player_specific(
            parts,
            players,
            connection,
            team,
            slot,
            LogMessageKind::Join { tags },
        )
    }

    pub fn parts(&self) -> &[MessagePart] {
        &self.parts
    }

    pub fn kind(&self) -> &LogMessageKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&PlayerContext> {
        self.context.as_ref()
    }

    /// Team the message concerns, or `-1`
    pub fn team(&self) -> i32 {
        self.context.as_ref().map_or(NOT_CONNECTED, |c| c.team)
    }

    /// Slot the message concerns, or `-1`
    pub fn slot(&self) -> i32 {
        self.context.as_ref().map_or(NOT_CONNECTED, |c| c.slot)
    }

    pub fn player(&self) -> Option<&PlayerInfo> {
        self.context.as_ref().and_then(|c| c.player.as_ref())
    }

    pub fn is_active_player(&self) -> bool {
        self.context.as_ref().is_some_and(|c| c.is_active_player)
    }

    pub fn is_related_to_active_player(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(|c| c.is_related_to_active_player)
    }

    /// Tags carried by join and tags-changed messages
    pub fn tags(&self) -> Option<&[String]> {
        match &self.kind {
            LogMessageKind::Join { tags } | LogMessageKind::TagsChanged { tags } => Some(tags),
            _ => None,
        }
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            f.write_str(part.as_str())?;
        }
        Ok(())
    }
}

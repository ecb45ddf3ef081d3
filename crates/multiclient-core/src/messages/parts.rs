//! Resolved message parts - the atomic renderable units of a log message

use std::fmt;

use super::json_part::{JsonMessagePart, JsonMessagePartType};
use crate::traits::{ConnectionInfoProvider, DataLookup, PlayerLookup};
use crate::value_objects::{ItemFlags, SlotAssignment, NOT_CONNECTED};

/// One resolved piece of a log message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart {
    Text {
        text: String,
    },
    Player {
        team: i32,
        slot: i32,
        text: String,
        /// Whether the slot is the one this client is connected as
        is_active_player: bool,
    },
    Item {
        item_id: i64,
        /// Slot whose world the item belongs to
        player: i32,
        flags: ItemFlags,
        text: String,
    },
    Location {
        location_id: i64,
        player: i32,
        text: String,
    },
    Entrance {
        text: String,
    },
}

/// Shared tables a part is resolved against
#[derive(Clone, Copy)]
pub struct PartResolver<'a> {
    pub players: &'a dyn PlayerLookup,
    pub data: &'a dyn DataLookup,
    pub connection: &'a dyn ConnectionInfoProvider,
}

impl MessagePart {
    /// Plain text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Display text of this part
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text { text }
            | Self::Player { text, .. }
            | Self::Item { text, .. }
            | Self::Location { text, .. }
            | Self::Entrance { text } => text,
        }
    }

    /// Check if this part refers to the active player
    pub fn is_active_player(&self) -> bool {
        matches!(
            self,
            Self::Player {
                is_active_player: true,
                ..
            }
        )
    }
}

impl PartResolver<'_> {
    /// Resolve a raw part into its display form
    ///
    /// Players are looked up on the connection's team (team 0 while not
    /// connected). Ids that cannot be resolved render as placeholders.
    pub fn resolve(&self, part: &JsonMessagePart) -> MessagePart {
        let active = self.connection.slot_assignment();
        let team = active.map_or(0, |a| a.team);
        let raw = part.raw_text();

        match part.kind() {
            JsonMessagePartType::PlayerId => match raw.parse::<i32>() {
                Ok(slot) => Self::player_part(self.players, active, team, slot),
                Err(_) => MessagePart::text(raw),
            },
            JsonMessagePartType::PlayerName => {
                match self.players.find_by_name(team, raw) {
                    Some(player) => {
                        Self::player_part(self.players, active, player.team, player.slot)
                    }
                    None => MessagePart::Player {
                        team,
                        slot: NOT_CONNECTED,
                        text: raw.to_string(),
                        is_active_player: false,
                    },
                }
            }
            JsonMessagePartType::ItemId => {
                let player = part.player.unwrap_or(NOT_CONNECTED);
                let flags = part.flags.unwrap_or_default();
                match raw.parse::<i64>() {
                    Ok(item_id) => {
                        let text = self
                            .game_of(team, player)
                            .and_then(|game| self.data.item_name(&game, item_id))
                            .unwrap_or_else(|| format!("Unknown item ({item_id})"));
                        MessagePart::Item {
                            item_id,
                            player,
                            flags,
                            text,
                        }
                    }
                    Err(_) => MessagePart::text(raw),
                }
            }
            JsonMessagePartType::ItemName => MessagePart::Item {
                item_id: 0,
                player: part.player.unwrap_or(NOT_CONNECTED),
                flags: part.flags.unwrap_or_default(),
                text: raw.to_string(),
            },
            JsonMessagePartType::LocationId => {
                let player = part.player.unwrap_or(NOT_CONNECTED);
                match raw.parse::<i64>() {
                    Ok(location_id) => {
                        let text = self
                            .game_of(team, player)
                            .and_then(|game| self.data.location_name(&game, location_id))
                            .unwrap_or_else(|| format!("Unknown location ({location_id})"));
                        MessagePart::Location {
                            location_id,
                            player,
                            text,
                        }
                    }
                    Err(_) => MessagePart::text(raw),
                }
            }
            JsonMessagePartType::LocationName => MessagePart::Location {
                location_id: 0,
                player: part.player.unwrap_or(NOT_CONNECTED),
                text: raw.to_string(),
            },
            JsonMessagePartType::EntranceName => MessagePart::Entrance {
                text: raw.to_string(),
            },
            JsonMessagePartType::Text
            | JsonMessagePartType::Color
            | JsonMessagePartType::Unknown => MessagePart::text(raw),
        }
    }

    /// Resolve every part in order
    pub fn resolve_all(&self, parts: &[JsonMessagePart]) -> Vec<MessagePart> {
        parts.iter().map(|p| self.resolve(p)).collect()
    }

    fn player_part(
        players: &dyn PlayerLookup,
        active: Option<SlotAssignment>,
        team: i32,
        slot: i32,
    ) -> MessagePart {
        let text = players
            .alias(team, slot)
            .unwrap_or_else(|| format!("Unknown player ({slot})"));
        MessagePart::Player {
            team,
            slot,
            text,
            is_active_player: active == Some(SlotAssignment::new(team, slot)),
        }
    }

    fn game_of(&self, team: i32, slot: i32) -> Option<String> {
        self.players.player(team, slot).map(|p| p.game)
    }
}

impl fmt::Display for MessagePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

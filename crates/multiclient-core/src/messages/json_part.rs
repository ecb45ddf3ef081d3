//! Raw message parts as sent in PrintJSON packets

use serde::{Deserialize, Serialize};

use crate::value_objects::ItemFlags;

/// Kind of a raw message part
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonMessagePartType {
    #[default]
    Text,
    PlayerId,
    PlayerName,
    ItemId,
    ItemName,
    LocationId,
    LocationName,
    EntranceName,
    Color,
    #[serde(other)]
    Unknown,
}

/// One raw part of a PrintJSON message
///
/// For id-typed parts `text` carries the numeric id and `player` the slot
/// owning the item or location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonMessagePart {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub part_type: Option<JsonMessagePartType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<ItemFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<i32>,
}

impl JsonMessagePart {
    /// Plain text part
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Part referencing a player slot
    pub fn player_id(slot: i32) -> Self {
        Self {
            part_type: Some(JsonMessagePartType::PlayerId),
            text: Some(slot.to_string()),
            ..Self::default()
        }
    }

    /// Part referencing an item owned by `player`
    pub fn item_id(item: i64, player: i32, flags: ItemFlags) -> Self {
        Self {
            part_type: Some(JsonMessagePartType::ItemId),
            text: Some(item.to_string()),
            flags: Some(flags),
            player: Some(player),
            ..Self::default()
        }
    }

    /// Part referencing a location owned by `player`
    pub fn location_id(location: i64, player: i32) -> Self {
        Self {
            part_type: Some(JsonMessagePartType::LocationId),
            text: Some(location.to_string()),
            player: Some(player),
            ..Self::default()
        }
    }

    /// Effective part type; absent means text
    #[inline]
    pub fn kind(&self) -> JsonMessagePartType {
        self.part_type.unwrap_or_default()
    }

    /// Raw text, empty when absent
    #[inline]
    pub fn raw_text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

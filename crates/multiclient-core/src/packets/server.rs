//! Server packets - everything the server pushes to the client
//!
//! Only the packets the session layer reacts to are modelled; any other
//! command decodes into [`ServerPacket::Unknown`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::messages::JsonMessagePart;
use crate::value_objects::{ItemFlags, SlotAssignment};

/// All server packets the client understands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum ServerPacket {
    Connected(ConnectedPacket),
    ConnectionRefused(ConnectionRefusedPacket),
    #[serde(rename = "PrintJSON")]
    PrintJson(PrintJsonPacket),
    #[serde(other)]
    Unknown,
}

impl ServerPacket {
    /// Get the wire command name
    pub fn command(&self) -> &'static str {
        match self {
            Self::Connected(_) => "Connected",
            Self::ConnectionRefused(_) => "ConnectionRefused",
            Self::PrintJson(_) => "PrintJSON",
            Self::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Connected
// ============================================================================

/// Sent when the server accepts the connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedPacket {
    pub team: i32,
    pub slot: i32,
    #[serde(default)]
    pub players: Vec<NetworkPlayer>,
    #[serde(default)]
    pub missing_locations: Vec<i64>,
    #[serde(default)]
    pub checked_locations: Vec<i64>,
    /// Slot info keyed by slot number (JSON object keys are strings)
    #[serde(default)]
    pub slot_info: HashMap<String, NetworkSlot>,
    #[serde(default)]
    pub hint_points: i32,
}

impl ConnectedPacket {
    /// Create a packet carrying only an assignment
    pub fn new(team: i32, slot: i32) -> Self {
        Self {
            team,
            slot,
            players: Vec::new(),
            missing_locations: Vec::new(),
            checked_locations: Vec::new(),
            slot_info: HashMap::new(),
            hint_points: 0,
        }
    }

    /// The team/slot assignment this packet grants
    #[inline]
    pub fn assignment(&self) -> SlotAssignment {
        SlotAssignment::new(self.team, self.slot)
    }
}

/// Player entry of a Connected packet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPlayer {
    pub team: i32,
    pub slot: i32,
    pub alias: String,
    pub name: String,
}

/// Static slot information of a Connected packet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSlot {
    pub name: String,
    pub game: String,
    #[serde(default)]
    pub group_members: Vec<i32>,
}

// ============================================================================
// ConnectionRefused
// ============================================================================

/// Sent when the server rejects the connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRefusedPacket {
    #[serde(default)]
    pub errors: Vec<ConnectionRefusedReason>,
}

/// Why a connection was refused
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionRefusedReason {
    InvalidSlot,
    InvalidGame,
    IncompatibleVersion,
    InvalidPassword,
    InvalidItemsHandling,
    Other(String),
}

impl ConnectionRefusedReason {
    /// Wire name of this reason
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidSlot => "InvalidSlot",
            Self::InvalidGame => "InvalidGame",
            Self::IncompatibleVersion => "IncompatibleVersion",
            Self::InvalidPassword => "InvalidPassword",
            Self::InvalidItemsHandling => "InvalidItemsHandling",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ConnectionRefusedReason {
    fn from(s: String) -> Self {
        match s.as_str() {
            "InvalidSlot" => Self::InvalidSlot,
            "InvalidGame" => Self::InvalidGame,
            "IncompatibleVersion" => Self::IncompatibleVersion,
            "InvalidPassword" => Self::InvalidPassword,
            "InvalidItemsHandling" => Self::InvalidItemsHandling,
            _ => Self::Other(s),
        }
    }
}

impl From<ConnectionRefusedReason> for String {
    fn from(reason: ConnectionRefusedReason) -> Self {
        match reason {
            ConnectionRefusedReason::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ConnectionRefusedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PrintJSON
// ============================================================================

/// A server log line made of typed parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJsonPacket {
    pub data: Vec<JsonMessagePart>,
    /// Message kind, e.g. "Join", "Part", "Chat"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Raw chat text for "Chat" and "ServerChat"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<NetworkItem>,
}

/// Item reference inside a PrintJSON packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkItem {
    pub item: i64,
    pub location: i64,
    pub player: i32,
    #[serde(default)]
    pub flags: ItemFlags,
}

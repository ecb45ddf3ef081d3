//! Client packets - requests sent to the server

use serde::{Deserialize, Serialize};

use crate::value_objects::ItemsHandlingFlags;

/// All client packets the session layer sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum ClientPacket {
    ConnectUpdate(ConnectUpdatePacket),
}

impl ClientPacket {
    /// Get the wire command name
    pub fn command(&self) -> &'static str {
        match self {
            Self::ConnectUpdate(_) => "ConnectUpdate",
        }
    }
}

/// Informs the server of new tags and items handling flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectUpdatePacket {
    pub tags: Vec<String>,
    pub items_handling: ItemsHandlingFlags,
}

impl ConnectUpdatePacket {
    pub fn new(tags: Vec<String>, items_handling: ItemsHandlingFlags) -> Self {
        Self {
            tags,
            items_handling,
        }
    }
}

impl From<ConnectUpdatePacket> for ClientPacket {
    fn from(packet: ConnectUpdatePacket) -> Self {
        Self::ConnectUpdate(packet)
    }
}

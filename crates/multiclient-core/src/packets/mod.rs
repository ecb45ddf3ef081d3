//! Protocol packets
//!
//! Packets travel as JSON arrays; each element is an object tagged by `cmd`.

mod client;
mod server;

pub use client::{ClientPacket, ConnectUpdatePacket};
pub use server::{
    ConnectedPacket, ConnectionRefusedPacket, ConnectionRefusedReason, NetworkItem,
    NetworkPlayer, NetworkSlot, PrintJsonPacket, ServerPacket,
};

use crate::error::ProtocolError;

/// Decode one inbound frame into its packets
pub fn decode_batch(frame: &str) -> Result<Vec<ServerPacket>, ProtocolError> {
    let value: serde_json::Value = serde_json::from_str(frame)?;
    let serde_json::Value::Array(items) = value else {
        return Err(ProtocolError::NotABatch);
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ProtocolError::from))
        .collect()
}

/// Encode outbound packets into one frame
pub fn encode_batch(packets: &[ClientPacket]) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(packets)?)
}

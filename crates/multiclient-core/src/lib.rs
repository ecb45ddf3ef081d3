//! # multiclient-core
//!
//! Domain layer containing protocol packets, value objects, lookup traits, and log messages.
//! This crate has no async runtime and performs no I/O.

pub mod entities;
pub mod error;
pub mod messages;
pub mod packets;
pub mod tables;
pub mod traits;
pub mod value_objects;

#[cfg(test)]
mod testing;

// Re-export commonly used types at crate root
pub use entities::PlayerInfo;
pub use error::ProtocolError;
pub use messages::{
    JsonMessagePart, JsonMessagePartType, LogMessage, LogMessageKind, MessagePart, PartResolver,
    PlayerContext,
};
pub use packets::{
    decode_batch, encode_batch, ClientPacket, ConnectUpdatePacket, ConnectedPacket,
    ConnectionRefusedPacket, ConnectionRefusedReason, NetworkItem, NetworkPlayer, NetworkSlot,
    PrintJsonPacket, ServerPacket,
};
pub use tables::{DataPackage, PlayerTable};
pub use traits::{ConnectionInfoProvider, DataLookup, PlayerLookup};
pub use value_objects::{ItemFlags, ItemsHandlingFlags, SlotAssignment, NOT_CONNECTED};

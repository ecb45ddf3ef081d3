//! Items handling flags
//!
//! Tells the server which categories of received items should be sent to this client.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Item categories the server delivers to the client
    ///
    /// Sent on the wire as the raw integer bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ItemsHandlingFlags: u8 {
        /// Items found in other worlds
        const REMOTE_ITEMS       = 1 << 0;
        /// Items found in this client's own world
        const OWN_WORLD_ITEMS    = 1 << 1;
        /// The starting inventory
        const STARTING_INVENTORY = 1 << 2;

        /// Remote items plus items from the own world
        const INCLUDE_OWN_ITEMS = Self::REMOTE_ITEMS.bits() | Self::OWN_WORLD_ITEMS.bits();

        /// Remote items plus the starting inventory
        const INCLUDE_STARTING_INVENTORY =
            Self::REMOTE_ITEMS.bits() | Self::STARTING_INVENTORY.bits();

        /// Every item category
        const ALL_ITEMS = Self::REMOTE_ITEMS.bits()
            | Self::OWN_WORLD_ITEMS.bits()
            | Self::STARTING_INVENTORY.bits();
    }
}

impl ItemsHandlingFlags {
    /// No items are delivered (the reset default)
    pub const NO_ITEMS: Self = Self::empty();

    /// Check whether the server sends items to this client
    ///
    /// `OWN_WORLD_ITEMS` and `STARTING_INVENTORY` only widen remote item
    /// delivery; without `REMOTE_ITEMS` nothing is sent.
    #[inline]
    pub fn receives_items(&self) -> bool {
        self.contains(Self::REMOTE_ITEMS)
    }

    /// Create from raw wire bits, dropping unknown bits
    #[inline]
    pub fn from_wire(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }

    /// Parse from a decimal string (config values)
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        s.trim().parse::<u8>().map(Self::from_bits_truncate)
    }

    /// Names of the individual categories that are set
    pub fn list(&self) -> Vec<&'static str> {
        let mut result = Vec::new();
        if self.contains(Self::REMOTE_ITEMS) {
            result.push("REMOTE_ITEMS");
        }
        if self.contains(Self::OWN_WORLD_ITEMS) {
            result.push("OWN_WORLD_ITEMS");
        }
        if self.contains(Self::STARTING_INVENTORY) {
            result.push("STARTING_INVENTORY");
        }
        result
    }
}

impl Default for ItemsHandlingFlags {
    fn default() -> Self {
        Self::NO_ITEMS
    }
}

impl fmt::Display for ItemsHandlingFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NO_ITEMS");
        }
        f.write_str(&self.list().join(" | "))
    }
}

impl Serialize for ItemsHandlingFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for ItemsHandlingFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_wire(bits))
    }
}

impl From<u8> for ItemsHandlingFlags {
    fn from(bits: u8) -> Self {
        Self::from_wire(bits)
    }
}

impl From<ItemsHandlingFlags> for u8 {
    fn from(flags: ItemsHandlingFlags) -> Self {
        flags.bits()
    }
}

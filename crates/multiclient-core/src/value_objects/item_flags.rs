//! Item classification flags carried by item message parts

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Classification of a network item
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u8 {
        /// Required to progress
        const ADVANCEMENT   = 1 << 0;
        /// Useful, never placed on excluded locations
        const NEVER_EXCLUDE = 1 << 1;
        /// Negative effect on pickup
        const TRAP          = 1 << 2;
    }
}

impl ItemFlags {
    /// Item with no special classification
    pub const FILLER: Self = Self::empty();

    /// Check if the item is progression
    #[inline]
    pub fn is_advancement(&self) -> bool {
        self.contains(Self::ADVANCEMENT)
    }

    /// Check if the item is a trap
    #[inline]
    pub fn is_trap(&self) -> bool {
        self.contains(Self::TRAP)
    }
}

impl Serialize for ItemFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for ItemFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(Self::from_bits_truncate)
    }
}

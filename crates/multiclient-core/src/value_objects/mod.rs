//! Value objects - immutable types that represent protocol concepts

mod item_flags;
mod items_handling;
mod slot;

pub use item_flags::ItemFlags;
pub use items_handling::ItemsHandlingFlags;
pub use slot::{SlotAssignment, NOT_CONNECTED};

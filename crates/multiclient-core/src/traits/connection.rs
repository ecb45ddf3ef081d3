//! Read-only view of the connection session record

use crate::value_objects::{ItemsHandlingFlags, SlotAssignment, NOT_CONNECTED};

/// Read-only access to the current connection's session state
///
/// Accessors never block on I/O and never fail.
pub trait ConnectionInfoProvider: Send + Sync {
    /// Game claimed for this connection, `None` when not connected
    fn game(&self) -> Option<String>;

    /// Assigned team, or `-1` when not connected
    fn team(&self) -> i32;

    /// Assigned slot, or `-1` when not connected
    fn slot(&self) -> i32;

    /// Tags of this connection, empty when not connected
    fn tags(&self) -> Vec<String>;

    /// Items handling flags, `NO_ITEMS` when not connected
    fn items_handling(&self) -> ItemsHandlingFlags;

    /// Client identity, `None` when not connected
    fn uuid(&self) -> Option<String>;

    /// Typed team/slot assignment
    fn slot_assignment(&self) -> Option<SlotAssignment> {
        let (team, slot) = (self.team(), self.slot());
        if team == NOT_CONNECTED || slot == NOT_CONNECTED {
            None
        } else {
            Some(SlotAssignment::new(team, slot))
        }
    }
}

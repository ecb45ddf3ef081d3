//! Session record
//!
//! The state of one connection attempt, from connect parameters through
//! server acknowledgment to reset.

use multiclient_core::{ConnectionInfoProvider, ItemsHandlingFlags, SlotAssignment};

/// Generate a fresh client identity
#[must_use]
pub fn generate_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Snapshot of the connection's session attributes
///
/// The default value is the reset state: no game, no assignment, no tags,
/// `NO_ITEMS`, no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRecord {
    game: Option<String>,
    assignment: Option<SlotAssignment>,
    tags: Vec<String>,
    items_handling: ItemsHandlingFlags,
    uuid: Option<String>,
}

impl SessionRecord {
    /// Check if the record is in its reset state
    pub fn is_reset(&self) -> bool {
        *self == Self::default()
    }

    /// Check if the server has assigned a team and slot
    pub fn is_connected(&self) -> bool {
        self.assignment.is_some()
    }

    /// Overwrite the client-asserted connection parameters
    ///
    /// Absent tags become an empty list, an absent identity is generated.
    /// The team/slot assignment is left alone.
    pub(crate) fn set_connection_parameters(
        &mut self,
        game: Option<String>,
        tags: Option<Vec<String>>,
        items_handling: ItemsHandlingFlags,
        uuid: Option<String>,
    ) {
        self.game = game;
        self.tags = tags.unwrap_or_default();
        self.items_handling = items_handling;
        self.uuid = Some(uuid.unwrap_or_else(generate_uuid));
    }

    pub(crate) fn assign(&mut self, assignment: SlotAssignment) {
        self.assignment = Some(assignment);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn game_ref(&self) -> Option<&str> {
        self.game.as_deref()
    }

    pub fn tags_ref(&self) -> &[String] {
        &self.tags
    }

    pub fn uuid_ref(&self) -> Option<&str> {
        self.uuid.as_deref()
    }
}

impl ConnectionInfoProvider for SessionRecord {
    fn game(&self) -> Option<String> {
        self.game.clone()
    }

    fn team(&self) -> i32 {
        SlotAssignment::team_or_sentinel(self.assignment)
    }

    fn slot(&self) -> i32 {
        SlotAssignment::slot_or_sentinel(self.assignment)
    }

    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn items_handling(&self) -> ItemsHandlingFlags {
        self.items_handling
    }

    fn uuid(&self) -> Option<String> {
        self.uuid.clone()
    }

    fn slot_assignment(&self) -> Option<SlotAssignment> {
        self.assignment
    }
}

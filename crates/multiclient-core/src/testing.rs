//! Shared fixtures for unit tests

use crate::entities::PlayerInfo;
use crate::tables::{DataPackage, PlayerTable};
use crate::traits::ConnectionInfoProvider;
use crate::value_objects::{ItemsHandlingFlags, SlotAssignment, NOT_CONNECTED};

/// Fixed connection state
#[derive(Debug, Clone)]
pub struct StaticConnection {
    pub team: i32,
    pub slot: i32,
    pub tags: Vec<String>,
}

impl StaticConnection {
    pub fn connected(team: i32, slot: i32) -> Self {
        Self {
            team,
            slot,
            tags: Vec::new(),
        }
    }

    pub fn reset() -> Self {
        Self::connected(NOT_CONNECTED, NOT_CONNECTED)
    }
}

impl ConnectionInfoProvider for StaticConnection {
    fn game(&self) -> Option<String> {
        None
    }

    fn team(&self) -> i32 {
        self.team
    }

    fn slot(&self) -> i32 {
        self.slot
    }

    fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn items_handling(&self) -> ItemsHandlingFlags {
        ItemsHandlingFlags::NO_ITEMS
    }

    fn uuid(&self) -> Option<String> {
        None
    }
}

/// Connection that only answers through `slot_assignment`
///
/// Reading team and slot separately could pair values from two different
/// assignments, so those accessors fail the test.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentOnlyConnection(pub Option<SlotAssignment>);

impl ConnectionInfoProvider for AssignmentOnlyConnection {
    fn game(&self) -> Option<String> {
        None
    }

    fn team(&self) -> i32 {
        panic!("team read separately from slot")
    }

    fn slot(&self) -> i32 {
        panic!("slot read separately from team")
    }

    fn tags(&self) -> Vec<String> {
        Vec::new()
    }

    fn items_handling(&self) -> ItemsHandlingFlags {
        ItemsHandlingFlags::NO_ITEMS
    }

    fn uuid(&self) -> Option<String> {
        None
    }

    fn slot_assignment(&self) -> Option<SlotAssignment> {
        self.0
    }
}

pub fn sample_players() -> PlayerTable {
    [
        PlayerInfo::new(0, 1, "Link", "A Link to the Past").with_alias("Hero"),
        PlayerInfo::new(0, 2, "Zelda", "Ocarina of Time"),
        PlayerInfo::new(0, 10, "Triforce", "A Link to the Past").with_group_members(vec![1, 2]),
    ]
    .into_iter()
    .collect()
}

pub fn sample_data() -> DataPackage {
    DataPackage::new()
        .with_item("A Link to the Past", 1000, "Master Sword")
        .with_location("A Link to the Past", 2000, "Link's House")
}

//! Player entity - one slot in a multiworld session

use serde::{Deserialize, Serialize};

/// Player as announced by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub team: i32,
    pub slot: i32,
    /// Current display alias
    pub alias: String,
    /// Slot name as configured
    pub name: String,
    #[serde(default)]
    pub game: String,
    /// Slots belonging to this player when it is an item link group
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_members: Vec<i32>,
}

impl PlayerInfo {
    /// Create a new PlayerInfo whose alias equals its name
    pub fn new(team: i32, slot: i32, name: impl Into<String>, game: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            team,
            slot,
            alias: name.clone(),
            name,
            game: game.into(),
            group_members: Vec::new(),
        }
    }

    /// Builder-style alias override
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Builder-style group membership
    pub fn with_group_members(mut self, members: Vec<i32>) -> Self {
        self.group_members = members;
        self
    }

    /// Check if this is an item link group rather than a single slot
    #[inline]
    pub fn is_group(&self) -> bool {
        !self.group_members.is_empty()
    }

    /// Check if this player and the given team/slot share a group
    ///
    /// True when the other slot is this player, or a member of this group.
    pub fn is_sharing_group_with(&self, team: i32, slot: i32) -> bool {
        if self.team != team {
            return false;
        }
        self.slot == slot || self.group_members.contains(&slot)
    }

    /// Display name, preferring the alias
    pub fn display_name(&self) -> &str {
        if self.alias.is_empty() {
            &self.name
        } else {
            &self.alias
        }
    }
}

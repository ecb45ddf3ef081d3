//! Team and slot assignment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel reported for team and slot while no assignment exists
pub const NOT_CONNECTED: i32 = -1;

/// Team and slot handed out by the server on a successful connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub team: i32,
    pub slot: i32,
}

impl SlotAssignment {
    /// Create a new assignment
    #[inline]
    pub const fn new(team: i32, slot: i32) -> Self {
        Self { team, slot }
    }

    /// Team of an optional assignment, or the sentinel
    #[inline]
    pub fn team_or_sentinel(assignment: Option<Self>) -> i32 {
        assignment.map_or(NOT_CONNECTED, |a| a.team)
    }

    /// Slot of an optional assignment, or the sentinel
    #[inline]
    pub fn slot_or_sentinel(assignment: Option<Self>) -> i32 {
        assignment.map_or(NOT_CONNECTED, |a| a.slot)
    }
}

impl fmt::Display for SlotAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {} slot {}", self.team, self.slot)
    }
}

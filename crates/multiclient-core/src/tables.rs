//! In-memory lookup tables
//!
//! Simple implementations of the lookup traits, filled from a Connected
//! packet and the game data the application already holds.

use std::collections::HashMap;

use crate::entities::PlayerInfo;
use crate::packets::ConnectedPacket;
use crate::traits::{DataLookup, PlayerLookup};

/// Players keyed by team and slot
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    players: HashMap<(i32, i32), PlayerInfo>,
}

impl PlayerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from the players and slot info of a Connected packet
    pub fn from_connected(packet: &ConnectedPacket) -> Self {
        let mut table = Self::new();
        for player in &packet.players {
            let slot_info = packet.slot_info.get(&player.slot.to_string());
            let game = slot_info.map(|s| s.game.clone()).unwrap_or_default();
            let info = PlayerInfo::new(player.team, player.slot, player.name.clone(), game)
                .with_alias(player.alias.clone())
                .with_group_members(
                    slot_info.map(|s| s.group_members.clone()).unwrap_or_default(),
                );
            table.insert(info);
        }
        table
    }

    /// Insert or replace a player
    pub fn insert(&mut self, player: PlayerInfo) {
        self.players.insert((player.team, player.slot), player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<PlayerInfo> for PlayerTable {
    fn from_iter<I: IntoIterator<Item = PlayerInfo>>(iter: I) -> Self {
        let mut table = Self::new();
        for player in iter {
            table.insert(player);
        }
        table
    }
}

impl PlayerLookup for PlayerTable {
    fn player(&self, team: i32, slot: i32) -> Option<PlayerInfo> {
        self.players.get(&(team, slot)).cloned()
    }

    fn find_by_name(&self, team: i32, name: &str) -> Option<PlayerInfo> {
        self.players
            .values()
            .find(|p| p.team == team && (p.alias == name || p.name == name))
            .cloned()
    }
}

/// Item and location names per game
#[derive(Debug, Clone, Default)]
pub struct DataPackage {
    items: HashMap<String, HashMap<i64, String>>,
    locations: HashMap<String, HashMap<i64, String>>,
}

impl DataPackage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item name
    pub fn with_item(mut self, game: &str, id: i64, name: impl Into<String>) -> Self {
        self.items
            .entry(game.to_string())
            .or_default()
            .insert(id, name.into());
        self
    }

    /// Register a location name
    pub fn with_location(mut self, game: &str, id: i64, name: impl Into<String>) -> Self {
        self.locations
            .entry(game.to_string())
            .or_default()
            .insert(id, name.into());
        self
    }
}

impl DataLookup for DataPackage {
    fn item_name(&self, game: &str, item: i64) -> Option<String> {
        self.items.get(game)?.get(&item).cloned()
    }

    fn location_name(&self, game: &str, location: i64) -> Option<String> {
        self.locations.get(game)?.get(&location).cloned()
    }
}

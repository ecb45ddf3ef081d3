//! Lookup traits (ports) - read access to shared session tables
//!
//! The domain layer defines what it needs to resolve log message parts;
//! the session layer or the embedding application provides the data.

use crate::entities::PlayerInfo;

/// Read access to the players of the current multiworld
pub trait PlayerLookup: Send + Sync {
    /// Find a player by team and slot
    fn player(&self, team: i32, slot: i32) -> Option<PlayerInfo>;

    /// Display alias of a player
    fn alias(&self, team: i32, slot: i32) -> Option<String> {
        self.player(team, slot).map(|p| p.display_name().to_string())
    }

    /// Find a player on a team by alias or slot name
    fn find_by_name(&self, team: i32, name: &str) -> Option<PlayerInfo>;
}

/// Read access to item and location names per game
pub trait DataLookup: Send + Sync {
    /// Name of an item id within a game
    fn item_name(&self, game: &str, item: i64) -> Option<String>;

    /// Name of a location id within a game
    fn location_name(&self, game: &str, location: i64) -> Option<String>;
}

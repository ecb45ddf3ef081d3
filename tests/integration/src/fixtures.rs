//! Test data fixtures
//!
//! Raw JSON frames as the server sends them, plus the tables the message
//! log resolves against.

use multiclient_core::{DataPackage, PlayerInfo, PlayerTable};
use serde_json::{json, Value};

pub const GAME: &str = "A Link to the Past";
pub const OTHER_GAME: &str = "Ocarina of Time";

pub const MASTER_SWORD: i64 = 1000;
pub const LINKS_HOUSE: i64 = 2000;

/// Players of the test multiworld: two real slots and one group
pub fn players() -> PlayerTable {
    [
        PlayerInfo::new(0, 1, "Link", GAME).with_alias("Hero"),
        PlayerInfo::new(0, 2, "Zelda", OTHER_GAME),
        PlayerInfo::new(0, 10, "Triforce", GAME).with_group_members(vec![1, 2]),
    ]
    .into_iter()
    .collect()
}

/// Item and location names of the test games
pub fn data_package() -> DataPackage {
    DataPackage::new()
        .with_item(GAME, MASTER_SWORD, "Master Sword")
        .with_location(GAME, LINKS_HOUSE, "Link's House")
}

/// Wrap packets into one frame
pub fn frame(packets: &[Value]) -> String {
    Value::Array(packets.to_vec()).to_string()
}

pub fn connected(team: i32, slot: i32) -> Value {
    json!({
        "cmd": "Connected",
        "team": team,
        "slot": slot,
        "players": [
            { "team": 0, "slot": 1, "alias": "Hero", "name": "Link" },
            { "team": 0, "slot": 2, "alias": "Zelda", "name": "Zelda" }
        ],
        "missing_locations": [LINKS_HOUSE],
        "checked_locations": [],
        "slot_info": {
            "1": { "name": "Link", "game": GAME, "type": 1, "group_members": [] },
            "2": { "name": "Zelda", "game": OTHER_GAME, "type": 1, "group_members": [] }
        },
        "hint_points": 0
    })
}

pub fn connection_refused(errors: &[&str]) -> Value {
    json!({ "cmd": "ConnectionRefused", "errors": errors })
}

pub fn join(slot: i32, tags: &[&str]) -> Value {
    json!({
        "cmd": "PrintJSON",
        "type": "Join",
        "team": 0,
        "slot": slot,
        "tags": tags,
        "data": [
            { "type": "player_id", "text": slot.to_string() },
            { "text": " has joined." }
        ]
    })
}

pub fn item_send(item: i64, owner: i32) -> Value {
    json!({
        "cmd": "PrintJSON",
        "type": "ItemSend",
        "receiving": owner,
        "item": { "item": item, "location": LINKS_HOUSE, "player": owner, "flags": 1 },
        "data": [
            { "type": "player_id", "text": owner.to_string() },
            { "text": " found their " },
            { "type": "item_id", "text": item.to_string(), "player": owner, "flags": 1 },
            { "text": " at " },
            { "type": "location_id", "text": LINKS_HOUSE.to_string(), "player": owner }
        ]
    })
}

/// A packet this client does not model
pub fn room_update() -> Value {
    json!({ "cmd": "RoomUpdate", "hint_points": 5 })
}

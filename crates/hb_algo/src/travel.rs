//! Travel-time model between two rooms.
//!
//! Walking one room slot along a corridor costs 1 minute; changing one floor
//! costs 2. The model is symmetric and a room is at distance 0 from itself.

use hb_core::Room;

/// Minutes per floor changed.
pub const VERTICAL_COST_PER_FLOOR: u32 = 2;
/// Minutes per room slot walked along a floor.
pub const HORIZONTAL_COST_PER_ROOM: u32 = 1;

/// `|Δfloor| * 2 + |Δposition| * 1`; 0 for the same room.
#[inline]
pub fn travel_time(a: &Room, b: &Room) -> u32 {
    if a.id == b.id {
        return 0;
    }
    let vertical = u32::from(a.floor.abs_diff(b.floor)) * VERTICAL_COST_PER_FLOOR;
    let horizontal = u32::from(a.position().abs_diff(b.position())) * HORIZONTAL_COST_PER_ROOM;
    vertical + horizontal
}

//! crates/hb_pipeline/src/inventory.rs
//! Hotel layout seeding.

use hb_core::entities::{ROOMS_PER_FLOOR, TOP_FLOOR, TOP_FLOOR_ROOMS};
use hb_core::{HotelLedger, Room, RoomId, RoomNumber};
use tracing::info;

/// The full inventory: floors 1–9 with `F01..F10`, floor 10 with `1001..1007`.
/// Ids run 1..=97 in that order; every room starts available.
pub fn seed_inventory() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(hb_core::entities::TOTAL_ROOMS);
    let mut next_id = 1u32;
    for floor in 1..TOP_FLOOR {
        for seq in 1..=ROOMS_PER_FLOOR {
            rooms.push(Room::new(RoomId::new(next_id), floor, RoomNumber::compose(floor, seq)));
            next_id += 1;
        }
    }
    for seq in 1..=u16::from(TOP_FLOOR_ROOMS) {
        rooms.push(Room::new(RoomId::new(next_id), TOP_FLOOR, RoomNumber::new(1000 + seq)));
        next_id += 1;
    }
    rooms
}

/// Replace the inventory with a fresh seed and drop every booking.
pub fn initialize(ledger: &mut HotelLedger) {
    ledger.rooms = seed_inventory();
    ledger.bookings.clear();
    ledger.next_booking_id = 1;
    info!(rooms = ledger.rooms.len(), "seeded hotel inventory");
}

/// Seed only when the ledger has no rooms yet. Returns whether it seeded.
pub fn ensure_initialized(ledger: &mut HotelLedger) -> bool {
    if ledger.rooms.is_empty() {
        initialize(ledger);
        true
    } else {
        false
    }
}

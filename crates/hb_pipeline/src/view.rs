//! Read-only views over a ledger for display.

use std::collections::BTreeMap;

use hb_core::{Booking, HotelLedger, Room};

/// Totals shown above the floor map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OccupancySummary {
    pub total_rooms: usize,
    pub available: usize,
    pub occupied: usize,
    pub bookings: usize,
}

/// Rooms grouped by floor (ascending), each floor ordered by room number.
pub fn floor_map(ledger: &HotelLedger) -> BTreeMap<u8, Vec<&Room>> {
    let mut out: BTreeMap<u8, Vec<&Room>> = BTreeMap::new();
    for r in &ledger.rooms {
        out.entry(r.floor).or_default().push(r);
    }
    for rooms in out.values_mut() {
        rooms.sort_by_key(|r| (r.number, r.id));
    }
    out
}

pub fn occupancy_summary(ledger: &HotelLedger) -> OccupancySummary {
    let available = ledger.rooms.iter().filter(|r| r.available).count();
    OccupancySummary {
        total_rooms: ledger.rooms.len(),
        available,
        occupied: ledger.rooms.len() - available,
        bookings: ledger.bookings.len(),
    }
}

/// Bookings, most recent first (higher id = later).
pub fn bookings_newest_first(ledger: &HotelLedger) -> Vec<&Booking> {
    let mut out: Vec<&Booking> = ledger.bookings.iter().collect();
    out.sort_by(|a, b| b.id.cmp(&a.id));
    out
}

// crates/hb_io/tests/ledger_file.rs
// On-disk ledger shape and digest stability.

use assert_json_diff::assert_json_eq;
use hb_core::{Booking, BookingId, HotelLedger, Room, RoomId, RoomNumber};
use hb_io::hasher::{ledger_digest, sha256_file};
use hb_io::loader::{load_ledger, save_ledger};
use serde_json::json;

fn ledger() -> HotelLedger {
    let mut l = HotelLedger::new();
    l.rooms.push(Room::new(RoomId::new(2), 1, RoomNumber::new(102)).with_availability(false));
    l.rooms.push(Room::new(RoomId::new(1), 1, RoomNumber::new(101)));
    l.bookings.push(Booking {
        id: BookingId::new(1),
        guest_name: "Grace".into(),
        room_ids: vec![RoomId::new(2)],
        booked_utc: "2026-10-16T09:30:00Z".into(),
        total_travel_time: 0,
    });
    l.next_booking_id = 2;
    l
}

#[test]
fn file_layout_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("hotel.json");
    save_ledger(&p, &ledger()).unwrap();

    let on_disk: serde_json::Value = serde_json::from_slice(&std::fs::read(&p).unwrap()).unwrap();
    assert_json_eq!(
        on_disk,
        json!({
            "bookings": [{
                "booked_utc": "2026-10-16T09:30:00Z",
                "guest_name": "Grace",
                "id": 1,
                "room_ids": [2],
                "total_travel_time": 0
            }],
            "next_booking_id": 2,
            "rooms": [
                {"available": true, "floor": 1, "id": 1, "number": 101},
                {"available": false, "floor": 1, "id": 2, "number": 102}
            ]
        })
    );
}

#[test]
fn digest_matches_written_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("hotel.json");
    let l = ledger();
    save_ledger(&p, &l).unwrap();

    let reloaded = load_ledger(&p).unwrap();
    assert_eq!(ledger_digest(&reloaded).unwrap(), sha256_file(&p).unwrap());
}

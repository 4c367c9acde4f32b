//! Inventory and booking entities.
//!
//! Hotel layout: floors 1–9 carry ten rooms each (`F01`..`F10`), the top floor
//! carries seven (`1001`..`1007`). A room's position-on-floor is derived from
//! its number and is what the travel-time model measures horizontally.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::{BookingId, RoomId, RoomNumber};

pub const MIN_FLOOR: u8 = 1;
pub const TOP_FLOOR: u8 = 10;
pub const ROOMS_PER_FLOOR: u8 = 10;
pub const TOP_FLOOR_ROOMS: u8 = 7;
/// 9 × 10 + 7.
pub const TOTAL_ROOMS: usize = 97;

/// Highest valid position on `floor`, or `None` when the floor does not exist.
#[inline]
pub const fn max_position(floor: u8) -> Option<u8> {
    match floor {
        TOP_FLOOR => Some(TOP_FLOOR_ROOMS),
        MIN_FLOOR..=9 => Some(ROOMS_PER_FLOOR),
        _ => None,
    }
}

/// One room of the inventory snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    pub id: RoomId,
    pub floor: u8,
    pub number: RoomNumber,
    pub available: bool,
}

impl Room {
    /// New available room.
    pub const fn new(id: RoomId, floor: u8, number: RoomNumber) -> Self {
        Self { id, floor, number, available: true }
    }

    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Horizontal rank on the floor, left to right.
    ///
    /// `number - 1000` on the top floor, `number % 100` elsewhere. Returns 0 when
    /// the number cannot encode a position (see [`Room::check_position`]).
    #[inline]
    pub const fn position(&self) -> u8 {
        let n = self.number.get();
        let p = if self.floor == TOP_FLOOR { n.saturating_sub(1000) } else { n % 100 };
        if p > u8::MAX as u16 { 0 } else { p as u8 }
    }

    /// Floor in range and position within `1..=max_position(floor)`.
    pub fn check_position(&self) -> Result<u8, CoreError> {
        let max = max_position(self.floor).ok_or(CoreError::FloorOutOfRange(self.floor))?;
        let p = self.position();
        if p == 0 || p > max {
            return Err(CoreError::PositionOutOfRange { floor: self.floor, number: self.number.get() });
        }
        Ok(p)
    }
}

/// A persisted booking. `room_ids` keep the order the engine returned them in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Booking {
    pub id: BookingId,
    pub guest_name: String,
    pub room_ids: Vec<RoomId>,
    /// RFC 3339 UTC, seconds precision (`YYYY-MM-DDTHH:MM:SSZ`).
    pub booked_utc: String,
    pub total_travel_time: u32,
}

/// Whole-hotel state: the inventory plus the bookings held against it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HotelLedger {
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    #[cfg_attr(feature = "serde", serde(default = "first_booking_id"))]
    pub next_booking_id: u64,
}

#[cfg(feature = "serde")]
fn first_booking_id() -> u64 { 1 }

impl HotelLedger {
    pub fn new() -> Self {
        Self { rooms: Vec::new(), bookings: Vec::new(), next_booking_id: 1 }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Rooms currently flagged available, in ledger order.
    pub fn available_rooms(&self) -> Vec<Room> {
        self.rooms.iter().filter(|r| r.available).copied().collect()
    }

    /// Hand out the next booking id and advance the counter.
    pub fn allocate_booking_id(&mut self) -> BookingId {
        let next = self.next_booking_id.max(1);
        self.next_booking_id = next + 1;
        BookingId::new(next)
    }
}

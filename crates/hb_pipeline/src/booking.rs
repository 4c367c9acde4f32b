//! crates/hb_pipeline/src/booking.rs
//! Book, cancel, and reset against a ledger.
//!
//! `book` is the only caller of the allocation engine. It hands the engine
//! the rooms currently flagged available, then records the booking and flips
//! the chosen rooms to unavailable. Nothing is written on failure.

use hb_algo::{allocate, score, Strategy};
use hb_core::{Booking, BookingId, HotelLedger, Room};
use hb_io::hasher::ledger_digest;
use tracing::{debug, info, warn};

use crate::{PipelineError, MSG_INVALID_COUNT};

/// What the guest asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingRequest {
    pub guest_name: String,
    pub room_count: usize,
}

/// Outcome of a successful `book`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingReceipt {
    pub booking: Booking,
    /// Booked rooms in candidate order, as they were before being marked taken.
    pub rooms: Vec<Room>,
    pub strategy: Strategy,
    /// Digest of the ledger the allocation was computed from.
    pub snapshot_sha256: String,
}

/// Allocate and record a booking.
pub fn book(
    ledger: &mut HotelLedger,
    req: &BookingRequest,
    booked_utc: &str,
) -> Result<BookingReceipt, PipelineError> {
    let guest_name = req.guest_name.trim();
    if guest_name.is_empty() {
        return Err(PipelineError::InvalidRequest("Guest name can't be blank".into()));
    }
    if !(hb_algo::MIN_ROOMS_PER_REQUEST..=hb_algo::MAX_ROOMS_PER_REQUEST).contains(&req.room_count) {
        return Err(PipelineError::InvalidRequest(MSG_INVALID_COUNT.into()));
    }

    let snapshot_sha256 = ledger_digest(ledger)?;
    let pool = ledger.available_rooms();
    debug!(pool = pool.len(), requested = req.room_count, "allocating");

    let candidate = allocate(&pool, req.room_count).map_err(|e| {
        warn!(guest = guest_name, requested = req.room_count, available = pool.len(), "allocation failed: {e}");
        PipelineError::from(e)
    })?;

    let booking = Booking {
        id: ledger.allocate_booking_id(),
        guest_name: guest_name.to_string(),
        room_ids: candidate.room_ids(),
        booked_utc: booked_utc.to_string(),
        total_travel_time: score(&candidate.rooms),
    };

    for rid in &booking.room_ids {
        if let Some(room) = ledger.room_mut(*rid) {
            room.available = false;
        }
    }
    ledger.bookings.push(booking.clone());

    info!(
        booking_id = %booking.id,
        guest = %booking.guest_name,
        rooms = ?candidate.rooms.iter().map(|r| r.number.get()).collect::<Vec<_>>(),
        travel_time = booking.total_travel_time,
        "booked"
    );

    Ok(BookingReceipt {
        booking,
        rooms: candidate.rooms,
        strategy: candidate.strategy,
        snapshot_sha256,
    })
}

/// Free a booking's rooms and remove it.
pub fn cancel(ledger: &mut HotelLedger, id: BookingId) -> Result<Booking, PipelineError> {
    let idx = ledger
        .bookings
        .iter()
        .position(|b| b.id == id)
        .ok_or_else(|| PipelineError::NotFound(format!("booking {id}")))?;
    let booking = ledger.bookings.remove(idx);

    for rid in &booking.room_ids {
        match ledger.room_mut(*rid) {
            Some(room) => room.available = true,
            None => warn!(booking_id = %id, room_id = %rid, "cancelled booking names a missing room"),
        }
    }
    info!(booking_id = %id, rooms = booking.room_ids.len(), "cancelled");
    Ok(booking)
}

/// Every room available, every booking gone. Returns how many bookings were dropped.
pub fn reset_all(ledger: &mut HotelLedger) -> usize {
    for room in &mut ledger.rooms {
        room.available = true;
    }
    let dropped = ledger.bookings.len();
    ledger.bookings.clear();
    info!(dropped, "all bookings reset");
    dropped
}

/// Recompute a booking's travel time from the ledger's current rooms.
/// Rooms the ledger no longer knows are skipped.
pub fn total_travel_time(ledger: &HotelLedger, booking: &Booking) -> u32 {
    let rooms: Vec<Room> = booking.room_ids.iter().filter_map(|id| ledger.room(*id).copied()).collect();
    score(&rooms)
}

//! Allocation orchestrator.
//!
//! Contract:
//! - `count` must be in `1..=5`, checked before the pool is looked at.
//! - The snapshot is trusted: rooms flagged unavailable are skipped, nothing
//!   else is re-checked against any store.
//! - Floors are visited in ascending order; the first floor holding at least
//!   `count` free rooms decides the result, even if a later floor would be
//!   cheaper.
//! - With no qualifying floor, the greedy cross-floor search runs over the
//!   whole pool.
//!
//! Determinism:
//! - The pool is normalized into `(floor, number)` order before any search, so
//!   the caller's slice order never changes the outcome.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use hb_core::determinism::{group_by_floor, sort_rooms_canonical, sort_rooms_spatial};
use hb_core::{Room, RoomId};

use crate::cross_floor::best_across_floors;
use crate::floor::best_on_floor;
use crate::{AllocError, CandidateSet, Strategy};

pub const MIN_ROOMS_PER_REQUEST: usize = 1;
pub const MAX_ROOMS_PER_REQUEST: usize = 5;

/// Select `count` rooms from `pool` minimizing travel time.
pub fn allocate(pool: &[Room], count: usize) -> Result<CandidateSet, AllocError> {
    if !(MIN_ROOMS_PER_REQUEST..=MAX_ROOMS_PER_REQUEST).contains(&count) {
        return Err(AllocError::InvalidCount { requested: count });
    }

    let snapshot = normalize_pool(pool)?;
    if snapshot.len() < count {
        return Err(AllocError::Infeasible { requested: count, available: snapshot.len() });
    }

    for (floor, rooms) in group_by_floor(&snapshot) {
        if rooms.len() < count {
            continue;
        }
        if let Some((rooms, travel_time)) = best_on_floor(&rooms, count) {
            return Ok(CandidateSet { rooms, travel_time, strategy: Strategy::SameFloor { floor } });
        }
    }

    match best_across_floors(&snapshot, count) {
        Some((mut rooms, travel_time)) => {
            sort_rooms_spatial(&mut rooms);
            Ok(CandidateSet { rooms, travel_time, strategy: Strategy::CrossFloor })
        }
        None => Err(AllocError::Infeasible { requested: count, available: snapshot.len() }),
    }
}

/// Ordered room ids of the selection, or an empty list for any failure.
pub fn allocate_room_ids(pool: &[Room], count: usize) -> Vec<RoomId> {
    allocate(pool, count).map(|c| c.room_ids()).unwrap_or_default()
}

/// Available rooms only, positions checked, canonical order, first of each id kept.
fn normalize_pool(pool: &[Room]) -> Result<Vec<Room>, AllocError> {
    let mut out: Vec<Room> = Vec::with_capacity(pool.len());
    for room in pool.iter().filter(|r| r.available) {
        room.check_position()
            .map_err(|_| AllocError::MalformedRoom { room_id: room.id })?;
        out.push(*room);
    }
    sort_rooms_canonical(&mut out);

    let mut seen: BTreeSet<RoomId> = BTreeSet::new();
    out.retain(|r| seen.insert(r.id));
    Ok(out)
}

// crates/hb_algo/src/lib.rs
//! Room allocation engine.
//!
//! Pure functions over an inventory snapshot: no I/O, no shared state, no RNG.
//! `allocate` tries each floor in ascending order and returns the cheapest
//! window of the **first** floor with enough free rooms; only when no floor
//! qualifies does it fall back to the greedy cross-floor search.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

pub use hb_core::{Room, RoomId};

pub mod allocate;
pub mod cross_floor;
pub mod floor;
pub mod score;
pub mod travel;

pub use allocate::{allocate, allocate_room_ids, MAX_ROOMS_PER_REQUEST, MIN_ROOMS_PER_REQUEST};
pub use cross_floor::best_across_floors;
pub use floor::best_on_floor;
pub use score::score;
pub use travel::{travel_time, HORIZONTAL_COST_PER_ROOM, VERTICAL_COST_PER_FLOOR};

/// Which search produced a candidate set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    SameFloor { floor: u8 },
    CrossFloor,
}

/// A complete selection: exactly the requested number of rooms, sorted by
/// `(floor, position)`, together with its path travel time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    pub rooms: Vec<Room>,
    pub travel_time: u32,
    pub strategy: Strategy,
}

impl CandidateSet {
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|r| r.id).collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Why no candidate set was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// Requested count outside `1..=5`.
    InvalidCount { requested: usize },
    /// A pool room has no valid floor/position.
    MalformedRoom { room_id: RoomId },
    /// Request is well-formed but the pool cannot satisfy it.
    Infeasible { requested: usize, available: usize },
}

impl AllocError {
    /// Caller error (bad count or bad snapshot) as opposed to lack of capacity.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, AllocError::InvalidCount { .. } | AllocError::MalformedRoom { .. })
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, AllocError::Infeasible { .. })
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::InvalidCount { requested } => write!(
                f,
                "room count {requested} outside {MIN_ROOMS_PER_REQUEST}..={MAX_ROOMS_PER_REQUEST}"
            ),
            AllocError::MalformedRoom { room_id } => {
                write!(f, "room {room_id} has no valid floor/position")
            }
            AllocError::Infeasible { requested, available } => write!(
                f,
                "not enough rooms available: requested {requested}, available {available}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}

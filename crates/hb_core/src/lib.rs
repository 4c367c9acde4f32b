//! hb_core: core types, canonical ordering helpers, params, and seeded RNG.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`hb_algo`, `hb_io`, `hb_pipeline`, `hb_cli`).
//!
//! - Identifiers: `RoomId`, `BookingId`, `RoomNumber`
//! - Entities: `Room` (with derived position-on-floor), `Booking`, `HotelLedger`
//! - Canonical ordering helpers (floor, room number)
//! - `Params` for occupancy generation with domain validation
//! - Seedable RNG (ChaCha20) for demo occupancy only
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation & parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidId,
        InvalidRoomNumber,
        FloorOutOfRange(u8),
        PositionOutOfRange { floor: u8, number: u16 },
        DomainOutOfRange(&'static str),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidId => write!(f, "invalid id"),
                CoreError::InvalidRoomNumber => write!(f, "invalid room number"),
                CoreError::FloorOutOfRange(fl) => write!(f, "floor out of range: {fl}"),
                CoreError::PositionOutOfRange { floor, number } => {
                    write!(f, "room {number} has no valid position on floor {floor}")
                }
                CoreError::DomainOutOfRange(k) => write!(f, "domain out of range: {k}"),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for CoreError {}
}

pub mod determinism;
pub mod entities;
pub mod ids;
pub mod rng;
pub mod variables;

pub use entities::{Booking, HotelLedger, Room};
pub use errors::CoreError;
pub use ids::{BookingId, RoomId, RoomNumber};

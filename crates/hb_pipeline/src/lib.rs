//! hb_pipeline: booking lifecycle over a `HotelLedger`.
//!
//! Every operation mutates an in-memory ledger; loading and saving stay with
//! the caller (`hb_io::loader`). Room selection is delegated to `hb_algo`.
//!
//! Steps:
//! - `inventory`: seed the 97-room layout
//! - `validate`: structural checks on an inventory
//! - `booking`: book / cancel / reset
//! - `occupancy`: seeded random occupancy for demos
//! - `view`: floor map, summaries, booking listings

#![forbid(unsafe_code)]

use thiserror::Error;

use hb_algo::AllocError;
use hb_io::IoError;

pub mod booking;
pub mod inventory;
pub mod occupancy;
pub mod validate;
pub mod view;

pub use booking::{book, cancel, reset_all, total_travel_time, BookingReceipt, BookingRequest};
pub use inventory::{ensure_initialized, initialize, seed_inventory};
pub use occupancy::random_occupancy;
pub use validate::{validate_inventory, validate_ledger, EntityRef, Severity, ValidationIssue, ValidationReport};
pub use view::{bookings_newest_first, floor_map, occupancy_summary, OccupancySummary};

pub const MSG_INVALID_COUNT: &str = "Please enter a valid number of rooms (1-5)";
pub const MSG_INFEASIBLE: &str = "Sorry, not enough rooms available for your request";

/// Single error surface for the booking lifecycle.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("io: {0}")]
    Io(String),
    #[error("validation: {0}")]
    Validate(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Infeasible(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<IoError> for PipelineError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Path(m) => PipelineError::Io(format!("path: {m}")),
            IoError::Limit { path, size, limit } => {
                PipelineError::Io(format!("limit: {path} is {size} bytes (max {limit})"))
            }
            IoError::Hash(m) => PipelineError::Io(format!("hash: {m}")),
            IoError::Json { pointer, msg } => PipelineError::Validate(format!("json {pointer}: {msg}")),
            IoError::Invalid(m) => PipelineError::Validate(m),
        }
    }
}

impl From<AllocError> for PipelineError {
    fn from(e: AllocError) -> Self {
        match e {
            AllocError::InvalidCount { .. } => PipelineError::InvalidRequest(MSG_INVALID_COUNT.into()),
            AllocError::MalformedRoom { .. } => PipelineError::InvalidRequest(e.to_string()),
            AllocError::Infeasible { .. } => PipelineError::Infeasible(MSG_INFEASIBLE.into()),
        }
    }
}

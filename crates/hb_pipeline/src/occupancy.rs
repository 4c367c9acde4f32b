//! crates/hb_pipeline/src/occupancy.rs
//! Random occupancy for demos.
//!
//! Resets every room to available, draws a percentage in
//! `[occupancy_min_pct, occupancy_max_pct]`, and marks `pct * total / 100`
//! rooms unavailable. Bookings are left as they are, so a booked room may end
//! up flagged available afterwards.

use hb_core::rng::OccupancyRng;
use hb_core::variables::{self, Params};
use hb_core::HotelLedger;
use tracing::info;

use crate::PipelineError;

/// Apply random occupancy; returns the number of rooms marked unavailable.
pub fn random_occupancy(
    ledger: &mut HotelLedger,
    params: &Params,
    rng: &mut OccupancyRng,
) -> Result<usize, PipelineError> {
    variables::validate_domains(params).map_err(|e| PipelineError::Validate(e.to_string()))?;

    for room in &mut ledger.rooms {
        room.available = true;
    }

    let total = ledger.rooms.len();
    let pct = rng
        .gen_range_inclusive(u64::from(params.occupancy_min_pct), u64::from(params.occupancy_max_pct))
        .ok_or_else(|| PipelineError::Validate("empty occupancy range".into()))?;
    let occupied = (pct as usize * total) / 100;

    let mut order: Vec<usize> = (0..total).collect();
    rng.shuffle_in_place(&mut order);
    for &i in order.iter().take(occupied) {
        ledger.rooms[i].available = false;
    }

    info!(pct, occupied, total, words = rng.words_consumed() as u64, "random occupancy applied");
    Ok(occupied)
}

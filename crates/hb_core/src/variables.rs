//! Tunable parameters with safe defaults.
//!
//! Only the demo occupancy generator is configurable. The engine's cost model
//! and request bounds are fixed constants in `hb_algo`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_OCCUPANCY_MIN_PCT: u8 = 30;
pub const DEFAULT_OCCUPANCY_MAX_PCT: u8 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    /// Lower bound (inclusive) of the share of rooms marked occupied.
    pub occupancy_min_pct: u8,
    /// Upper bound (inclusive).
    pub occupancy_max_pct: u8,
    /// Fixed seed for reproducible occupancy; clock-derived when absent.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub occupancy_seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            occupancy_min_pct: DEFAULT_OCCUPANCY_MIN_PCT,
            occupancy_max_pct: DEFAULT_OCCUPANCY_MAX_PCT,
            occupancy_seed: None,
        }
    }
}

/// Check every parameter domain; first violation wins.
pub fn validate_domains(p: &Params) -> Result<(), CoreError> {
    if p.occupancy_max_pct > 100 {
        return Err(CoreError::DomainOutOfRange("occupancy_max_pct"));
    }
    if p.occupancy_min_pct > p.occupancy_max_pct {
        return Err(CoreError::DomainOutOfRange("occupancy_min_pct"));
    }
    Ok(())
}

//! Loader: read and write the local hotel ledger and occupancy params.
//! Normalizes ordering on load so every later step sees rooms in
//! `(floor, number)` order and bookings in id order. No network I/O.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use hb_core::determinism::sort_rooms_canonical;
use hb_core::variables::{self, Params};
use hb_core::HotelLedger;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::canonical_json::write_canonical_file;
use crate::{IoError, IoResult};

/// Upper bound on any JSON file we agree to read.
pub const MAX_JSON_BYTES: u64 = 16 * 1024 * 1024;

/// Load and normalize a ledger. A missing file is an error.
pub fn load_ledger(path: &Path) -> IoResult<HotelLedger> {
    let mut ledger: HotelLedger = read_typed(path)?;
    normalize_ledger(&mut ledger);
    Ok(ledger)
}

/// Like [`load_ledger`], but a missing file yields an empty ledger.
pub fn load_ledger_or_default(path: &Path) -> IoResult<HotelLedger> {
    if !path.exists() {
        return Ok(HotelLedger::new());
    }
    load_ledger(path)
}

/// Persist `ledger` as canonical JSON (atomic replace).
pub fn save_ledger(path: &Path, ledger: &HotelLedger) -> IoResult<()> {
    let mut normalized = ledger.clone();
    normalize_ledger(&mut normalized);
    write_canonical_file(path, &normalized)
}

/// Load occupancy params and check their domains.
pub fn load_params(path: &Path) -> IoResult<Params> {
    let params: Params = read_typed(path)?;
    variables::validate_domains(&params)
        .map_err(|e| IoError::Invalid(format!("parameter domain error: {e}")))?;
    Ok(params)
}

/// Rooms ↑ (floor, number, id); bookings ↑ id; counter never behind the
/// highest booking id.
pub fn normalize_ledger(ledger: &mut HotelLedger) {
    sort_rooms_canonical(&mut ledger.rooms);
    ledger.bookings.sort_by_key(|b| b.id);
    let floor = ledger.bookings.iter().map(|b| b.id.get() + 1).max().unwrap_or(1);
    ledger.next_booking_id = ledger.next_booking_id.max(floor);
}

fn read_typed<T: DeserializeOwned>(path: &Path) -> IoResult<T> {
    let v = read_json_value_with_limits(path)?;
    Ok(serde_json::from_value(v)?)
}

fn read_json_value_with_limits(path: &Path) -> IoResult<Value> {
    let f = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::Path(format!("not found: {}", path.display())),
        _ => IoError::Path(format!("{}: {e}", path.display())),
    })?;
    let size = f.metadata()?.len();
    if size > MAX_JSON_BYTES {
        return Err(IoError::Limit {
            path: path.display().to_string(),
            size,
            limit: MAX_JSON_BYTES,
        });
    }
    let mut buf = Vec::with_capacity(size as usize);
    f.take(MAX_JSON_BYTES).read_to_end(&mut buf)?;
    Ok(serde_json::from_slice(&buf)?)
}

//! crates/hb_io/src/lib.rs
//! Persistence for the booking engine: the hotel ledger and occupancy params.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - Ledger files are canonical JSON written atomically.
//! - Digests are lowercase SHA-256 hex over canonical bytes.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for hb_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, create_dir_all, rename, fsync).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors with a pointer-ish location.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// File larger than the read limit.
    #[error("file too large: {path} ({size} bytes, limit {limit})")]
    Limit { path: String, size: u64, limit: u64 },

    /// Hashing unavailable or failed.
    #[error("hash error: {0}")]
    Hash(String),

    /// Parsed fine but fails a domain check.
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports line/column, not a pointer.
        IoError::Json {
            pointer: format!("line {} column {}", e.line(), e.column()),
            msg: e.to_string(),
        }
    }
}

pub mod canonical_json;
#[cfg(feature = "hash")]
pub mod hasher;
pub mod loader;

//! crates/hb_io/src/hasher.rs
//!
//! SHA-256 digests, lowercase hex.
//! - `sha256_canonical(..)` for serializable values (goes through canonical_json).
//! - `sha256_hex(..)` / `sha256_file(..)` for raw bytes.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use hb_core::HotelLedger;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::canonical_json::to_canonical_bytes;
use crate::IoResult;

/// SHA-256 over raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 over the canonical JSON bytes of any serializable value.
pub fn sha256_canonical<T: Serialize>(value: &T) -> IoResult<String> {
    let bytes = to_canonical_bytes(value)?;
    Ok(sha256_hex(&bytes))
}

/// SHA-256 over a file's raw bytes.
pub fn sha256_file(path: &Path) -> IoResult<String> {
    let mut r = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let n = r.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Digest of the ledger exactly as `save_ledger` would write it.
pub fn ledger_digest(ledger: &HotelLedger) -> IoResult<String> {
    sha256_canonical(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_core::{Room, RoomId, RoomNumber};
    use serde_json::json;

    #[test]
    fn hex_encoding_is_lowercase() {
        let h = sha256_hex(b"abc");
        assert_eq!(h, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn canonical_hashing_ignores_key_order() {
        #[derive(Serialize)]
        struct T {
            b: u32,
            a: u32,
        }
        let h1 = sha256_canonical(&T { b: 2, a: 1 }).unwrap();
        let h2 = sha256_canonical(&json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn ledger_digest_tracks_availability() {
        let mut ledger = HotelLedger::new();
        ledger.rooms.push(Room::new(RoomId::new(1), 1, RoomNumber::new(101)));
        let before = ledger_digest(&ledger).unwrap();
        ledger.rooms[0].available = false;
        let after = ledger_digest(&ledger).unwrap();
        assert_ne!(before, after);
        assert_eq!(before.len(), 64);
    }

    #[test]
    fn file_digest_matches_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("x.bin");
        std::fs::write(&p, b"abc").unwrap();
        assert_eq!(sha256_file(&p).unwrap(), sha256_hex(b"abc"));
    }
}

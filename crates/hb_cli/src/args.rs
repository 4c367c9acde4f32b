// crates/hb_cli/src/args.rs
//
// CLI argument surface for `hb`.
//
// Rules:
// - State lives in one local JSON file (--state / HB_STATE); no networked paths.
// - Occupancy seed accepts decimal u64 or 0x-hex up to 16 nybbles.
// - Global flags may appear before or after the subcommand.

use clap::{ArgAction, Parser, Subcommand};
use hb_core::BookingId;
use std::path::{Path, PathBuf};

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hb",
    version,
    disable_help_subcommand = true,
    about = "Hotel room booking engine: travel-time-minimizing allocation over a local ledger"
)]
pub struct Args {
    /// Ledger file (created on first write).
    #[arg(long, env = "HB_STATE", default_value = "hotel.json", global = true)]
    pub state: PathBuf,

    /// Occupancy params JSON (occupancy_min_pct, occupancy_max_pct, occupancy_seed).
    #[arg(long, global = true)]
    pub params: Option<PathBuf>,

    /// Print machine-readable JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Seed the 97-room inventory, dropping all bookings.
    Init,
    /// Show the floor map.
    Rooms,
    /// Book rooms for a guest.
    Book {
        #[arg(long)]
        guest: String,
        /// Number of rooms (1-5).
        #[arg(long)]
        rooms: usize,
    },
    /// Cancel a booking and free its rooms.
    Cancel {
        #[arg(long)]
        booking: BookingId,
    },
    /// List bookings, newest first.
    Bookings,
    /// Randomly mark 30-60% of rooms occupied.
    Occupy {
        /// Seed override (decimal u64 or 0x-hex).
        #[arg(long, value_parser = parse_seed)]
        seed: Option<u64>,
    },
    /// Free every room and remove every booking.
    Reset,
    /// Check the ledger's inventory and booking references.
    Validate,
}

/// Errors surfaced by argument checks after clap parsing.
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
            CliError::NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Seed parser: decimal u64 or 0x-hex (1..=16 nybbles).
pub fn parse_seed(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty seed".into());
    }
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("hex seed must be 1..16 hex digits".into());
        }
        u64::from_str_radix(rest, 16).map_err(|_| "hex seed out of range".into())
    } else {
        s.parse::<u64>().map_err(|_| "decimal seed must be a valid u64".into())
    }
}

#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    match p.to_str() {
        Some(s) if has_scheme(s) => Err(CliError::NonLocalPath(s.to_string())),
        _ => Ok(()),
    }
}

/// Post-parse checks: local paths only; a given --params file must exist.
pub fn validate(args: &Args) -> Result<(), CliError> {
    ensure_local_path(&args.state)?;
    if let Some(p) = &args.params {
        ensure_local_path(p)?;
        if !p.is_file() {
            return Err(CliError::NotFound(p.display().to_string()));
        }
    }
    Ok(())
}

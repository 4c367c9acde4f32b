// crates/hb_cli/src/main.rs
//
// Wires up exit codes, typed error mapping, logging, and one handler per
// subcommand. Every mutating command follows load → change → save; read-only
// commands never write unless the ledger had to be seeded.

mod args;

mod exitcodes {
    pub const OK: u8 = 0;
    /// Bad flags, invalid request, or a failed validation.
    pub const VALIDATION: u8 = 2;
    /// Well-formed request the hotel cannot satisfy.
    pub const INFEASIBLE: u8 = 3;
    pub const IO: u8 = 4;
    pub const NOT_FOUND: u8 = 5;
}

use std::path::Path;
use std::process::ExitCode;

use chrono::{SecondsFormat, Utc};
use clap::Parser;
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::{Args, Command};
use hb_core::rng::OccupancyRng;
use hb_core::variables::Params;
use hb_core::{BookingId, HotelLedger};
use hb_io::hasher::ledger_digest;
use hb_io::loader;
use hb_pipeline::{BookingReceipt, BookingRequest, PipelineError, Severity};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    InvalidRequest(String),
    Infeasible(String),
    Io(String),
    NotFound(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "validation: {m}"),
            MainError::InvalidRequest(m) | MainError::Infeasible(m) => f.write_str(m),
            MainError::Io(m) => write!(f, "io: {m}"),
            MainError::NotFound(m) => write!(f, "not found: {m}"),
        }
    }
}

impl From<PipelineError> for MainError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Io(m) => MainError::Io(m),
            PipelineError::Validate(m) => MainError::Validation(m),
            PipelineError::InvalidRequest(m) => MainError::InvalidRequest(m),
            PipelineError::Infeasible(m) => MainError::Infeasible(m),
            PipelineError::NotFound(m) => MainError::NotFound(m),
        }
    }
}

impl From<hb_io::IoError> for MainError {
    fn from(e: hb_io::IoError) -> Self {
        PipelineError::from(e).into()
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { exitcodes::VALIDATION } else { exitcodes::OK });
        }
    };
    init_tracing(args.verbose);

    if let Err(e) = args::validate(&args) {
        eprintln!("hb: error: {e}");
        return ExitCode::from(match e {
            args::CliError::NotFound(_) => exitcodes::IO,
            args::CliError::NonLocalPath(_) => exitcodes::VALIDATION,
        });
    }

    match run(&args) {
        Ok(()) => ExitCode::from(exitcodes::OK),
        Err(e) => {
            eprintln!("hb: error: {e}");
            ExitCode::from(map_error(&e))
        }
    }
}

/// `RUST_LOG` wins when set and no `-v` is given; default is `warn`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn map_error(e: &MainError) -> u8 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) | MainError::InvalidRequest(_) => VALIDATION,
        MainError::Infeasible(_) => INFEASIBLE,
        MainError::Io(_) => IO,
        MainError::NotFound(_) => NOT_FOUND,
    }
}

fn run(args: &Args) -> Result<(), MainError> {
    debug!(state = %args.state.display(), command = ?args.command, "start");
    match &args.command {
        Command::Init => cmd_init(args),
        Command::Rooms => cmd_rooms(args),
        Command::Book { guest, rooms } => cmd_book(args, guest, *rooms),
        Command::Cancel { booking } => cmd_cancel(args, *booking),
        Command::Bookings => cmd_bookings(args),
        Command::Occupy { seed } => cmd_occupy(args, *seed),
        Command::Reset => cmd_reset(args),
        Command::Validate => cmd_validate(args),
    }
}

/// Load the ledger, seeding it when empty. Returns whether it was seeded.
fn load_seeded(state: &Path) -> Result<(HotelLedger, bool), MainError> {
    let mut ledger = loader::load_ledger_or_default(state)?;
    let seeded = hb_pipeline::ensure_initialized(&mut ledger);
    Ok((ledger, seeded))
}

fn save(state: &Path, ledger: &HotelLedger) -> Result<(), MainError> {
    loader::save_ledger(state, ledger)?;
    info!(path = %state.display(), "ledger saved");
    Ok(())
}

fn emit(args: &Args, value: Value, text: impl FnOnce() -> String) {
    if args.json {
        println!("{value}");
    } else {
        println!("{}", text());
    }
}

fn cmd_init(args: &Args) -> Result<(), MainError> {
    let mut ledger = loader::load_ledger_or_default(&args.state)?;
    hb_pipeline::initialize(&mut ledger);
    save(&args.state, &ledger)?;
    let n = ledger.rooms.len();
    emit(args, json!({ "rooms": n }), || format!("Initialized {n} rooms"));
    Ok(())
}

fn cmd_rooms(args: &Args) -> Result<(), MainError> {
    let (ledger, seeded) = load_seeded(&args.state)?;
    if seeded {
        save(&args.state, &ledger)?;
    }
    let map = hb_pipeline::floor_map(&ledger);
    let summary = hb_pipeline::occupancy_summary(&ledger);

    if args.json {
        let floors: Vec<Value> = map
            .iter()
            .map(|(floor, rooms)| {
                json!({
                    "floor": floor,
                    "rooms": rooms.iter().map(|r| json!({
                        "id": r.id.get(),
                        "number": r.number.get(),
                        "available": r.available,
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();
        let out = json!({
            "floors": floors,
            "summary": {
                "total_rooms": summary.total_rooms,
                "available": summary.available,
                "occupied": summary.occupied,
                "bookings": summary.bookings,
            },
            "snapshot_sha256": ledger_digest(&ledger)?,
        });
        println!("{out}");
        return Ok(());
    }

    // Top floor first, like looking at the building.
    for (floor, rooms) in map.iter().rev() {
        let cells: Vec<String> = rooms
            .iter()
            .map(|r| if r.available { format!(" {:>4} ", r.number.get()) } else { format!("[{:>4}]", r.number.get()) })
            .collect();
        println!("Floor {floor:>2} | {}", cells.join(""));
    }
    println!(
        "{} rooms: {} available, {} occupied ([nnn]), {} bookings",
        summary.total_rooms, summary.available, summary.occupied, summary.bookings
    );
    Ok(())
}

fn receipt_json(r: &BookingReceipt) -> Value {
    json!({
        "booking_id": r.booking.id.get(),
        "guest_name": r.booking.guest_name,
        "room_ids": r.booking.room_ids.iter().map(|id| id.get()).collect::<Vec<_>>(),
        "room_numbers": r.rooms.iter().map(|x| x.number.get()).collect::<Vec<_>>(),
        "total_travel_time": r.booking.total_travel_time,
        "booked_utc": r.booking.booked_utc,
        "strategy": match r.strategy {
            hb_algo::Strategy::SameFloor { .. } => "same_floor",
            hb_algo::Strategy::CrossFloor => "cross_floor",
        },
        "snapshot_sha256": r.snapshot_sha256,
    })
}

fn cmd_book(args: &Args, guest: &str, rooms: usize) -> Result<(), MainError> {
    let (mut ledger, _) = load_seeded(&args.state)?;
    let booked_utc = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let req = BookingRequest { guest_name: guest.to_string(), room_count: rooms };
    let receipt = hb_pipeline::book(&mut ledger, &req, &booked_utc)?;
    save(&args.state, &ledger)?;

    emit(args, receipt_json(&receipt), || {
        let numbers: Vec<String> = receipt.rooms.iter().map(|r| r.number.to_string()).collect();
        format!(
            "Successfully booked {} rooms for {}. Total travel time: {} minutes\nRooms: {}\nBooking id: {}",
            receipt.rooms.len(),
            receipt.booking.guest_name,
            receipt.booking.total_travel_time,
            numbers.join(", "),
            receipt.booking.id,
        )
    });
    Ok(())
}

fn cmd_cancel(args: &Args, id: BookingId) -> Result<(), MainError> {
    let mut ledger = loader::load_ledger_or_default(&args.state)?;
    let removed = hb_pipeline::cancel(&mut ledger, id)?;
    save(&args.state, &ledger)?;
    emit(
        args,
        json!({ "cancelled": removed.id.get(), "freed": removed.room_ids.len() }),
        || "Booking cancelled successfully".to_string(),
    );
    Ok(())
}

fn cmd_bookings(args: &Args) -> Result<(), MainError> {
    let ledger = loader::load_ledger_or_default(&args.state)?;
    let list = hb_pipeline::bookings_newest_first(&ledger);

    if args.json {
        let out: Vec<Value> = list
            .iter()
            .map(|b| {
                let numbers: Vec<u16> =
                    b.room_ids.iter().filter_map(|id| ledger.room(*id)).map(|r| r.number.get()).collect();
                json!({
                    "id": b.id.get(),
                    "guest_name": b.guest_name,
                    "room_numbers": numbers,
                    "total_travel_time": b.total_travel_time,
                    "booked_utc": b.booked_utc,
                })
            })
            .collect();
        println!("{}", Value::Array(out));
        return Ok(());
    }

    if list.is_empty() {
        println!("No bookings");
        return Ok(());
    }
    for b in list {
        let numbers: Vec<String> =
            b.room_ids.iter().filter_map(|id| ledger.room(*id)).map(|r| r.number.to_string()).collect();
        println!(
            "#{:<4} {:<20} rooms {:<28} travel {:>3} min  {}",
            b.id.get(),
            b.guest_name,
            numbers.join(","),
            b.total_travel_time,
            b.booked_utc
        );
    }
    Ok(())
}

fn cmd_occupy(args: &Args, seed_flag: Option<u64>) -> Result<(), MainError> {
    let params = match &args.params {
        Some(p) => loader::load_params(p)?,
        None => Params::default(),
    };
    // Flag beats file; the clock is only a last resort.
    let seed = seed_flag
        .or(params.occupancy_seed)
        .unwrap_or_else(|| Utc::now().timestamp_micros() as u64);
    info!(seed, "occupancy seed");

    let (mut ledger, _) = load_seeded(&args.state)?;
    let mut rng = OccupancyRng::from_seed_u64(seed);
    let occupied = hb_pipeline::random_occupancy(&mut ledger, &params, &mut rng)?;
    save(&args.state, &ledger)?;

    emit(args, json!({ "occupied": occupied, "seed": seed }), || {
        format!("Generated random occupancy for {occupied} rooms")
    });
    Ok(())
}

fn cmd_reset(args: &Args) -> Result<(), MainError> {
    let (mut ledger, _) = load_seeded(&args.state)?;
    let dropped = hb_pipeline::reset_all(&mut ledger);
    save(&args.state, &ledger)?;
    emit(args, json!({ "bookings_removed": dropped }), || "All bookings have been reset".to_string());
    Ok(())
}

fn cmd_validate(args: &Args) -> Result<(), MainError> {
    let ledger = loader::load_ledger_or_default(&args.state)?;
    let report = hb_pipeline::validate_ledger(&ledger);

    if args.json {
        let issues: Vec<Value> = report
            .issues
            .iter()
            .map(|i| {
                json!({
                    "severity": if i.severity == Severity::Error { "error" } else { "warning" },
                    "code": i.code,
                    "message": i.message,
                })
            })
            .collect();
        println!("{}", json!({ "pass": report.pass, "issues": issues }));
    } else {
        for i in &report.issues {
            let tag = if i.severity == Severity::Error { "error" } else { "warning" };
            println!("{tag}: {} {}", i.code, i.message);
        }
        if report.pass {
            println!("validate: OK ({} rooms, {} bookings)", ledger.rooms.len(), ledger.bookings.len());
        }
    }

    if report.pass {
        Ok(())
    } else {
        let n = report.errors().count();
        Err(MainError::Validation(format!("{n} error(s) in {}", args.state.display())))
    }
}

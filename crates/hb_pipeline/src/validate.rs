//! crates/hb_pipeline/src/validate.rs
//! Structural checks on an inventory before any booking runs against it.
//! Deterministic outputs; no RNG; pure integer reasoning.

use std::collections::BTreeMap;

use hb_core::entities::max_position;
use hb_core::{HotelLedger, Room, RoomId};

/// Issue severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

/// Where the issue occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntityRef {
    Root,
    Floor(u8),
    Room(RoomId),
}

/// One validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub message: String,
    pub where_: EntityRef,
}

/// pass = no Error; issue order is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub pass: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }
}

/// Top-level inventory check.
///
/// Errors:
/// - "Room.FloorOutOfRange", "Room.PositionOutOfRange", "Room.NumberFloorMismatch"
/// - "Room.DuplicateId", "Room.DuplicateNumber"
/// Warnings:
/// - "Inventory.Empty", "Inventory.OutOfOrder"
pub fn validate_inventory(rooms: &[Room]) -> ValidationReport {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    if rooms.is_empty() {
        issues.push(ValidationIssue {
            severity: Severity::Warning,
            code: "Inventory.Empty",
            message: "inventory has no rooms".into(),
            where_: EntityRef::Root,
        });
    }

    issues.extend(rooms.iter().flat_map(check_room));
    issues.extend(check_uniqueness(rooms));
    issues.extend(check_order(rooms));

    sort_issues_stably(&mut issues);
    ValidationReport {
        pass: !issues.iter().any(|i| i.severity == Severity::Error),
        issues,
    }
}

/// Inventory check plus booking cross-references.
///
/// Errors:
/// - "Booking.UnknownRoom" when a booking names a room id the inventory lacks
/// Warnings:
/// - "Booking.RoomAvailable" when a booked room is flagged available, which
///   random occupancy leaves behind since it redraws every room
pub fn validate_ledger(ledger: &HotelLedger) -> ValidationReport {
    let mut report = validate_inventory(&ledger.rooms);
    for b in &ledger.bookings {
        for rid in &b.room_ids {
            match ledger.room(*rid) {
                None => report.issues.push(ValidationIssue {
                    severity: Severity::Error,
                    code: "Booking.UnknownRoom",
                    message: format!("booking {} names unknown room {rid}", b.id),
                    where_: EntityRef::Room(*rid),
                }),
                Some(r) if r.available => report.issues.push(ValidationIssue {
                    severity: Severity::Warning,
                    code: "Booking.RoomAvailable",
                    message: format!("room {} is booked by {} but flagged available", r.number, b.id),
                    where_: EntityRef::Room(*rid),
                }),
                Some(_) => {}
            }
        }
    }
    sort_issues_stably(&mut report.issues);
    let pass = report.errors().next().is_none();
    report.pass = pass;
    report
}

fn check_room(r: &Room) -> Vec<ValidationIssue> {
    let mut out = Vec::new();
    let Some(max) = max_position(r.floor) else {
        out.push(ValidationIssue {
            severity: Severity::Error,
            code: "Room.FloorOutOfRange",
            message: format!("room {} is on floor {} (expected 1..=10)", r.number, r.floor),
            where_: EntityRef::Room(r.id),
        });
        return out;
    };

    if r.number.encoded_floor() != u16::from(r.floor) {
        out.push(ValidationIssue {
            severity: Severity::Error,
            code: "Room.NumberFloorMismatch",
            message: format!("room {} does not encode floor {}", r.number, r.floor),
            where_: EntityRef::Room(r.id),
        });
    }

    let p = r.position();
    if p == 0 || p > max {
        out.push(ValidationIssue {
            severity: Severity::Error,
            code: "Room.PositionOutOfRange",
            message: format!("room {} has position {p} (expected 1..={max})", r.number),
            where_: EntityRef::Room(r.id),
        });
    }
    out
}

fn check_uniqueness(rooms: &[Room]) -> Vec<ValidationIssue> {
    let mut out = Vec::new();
    let mut ids: BTreeMap<RoomId, usize> = BTreeMap::new();
    let mut numbers: BTreeMap<u16, RoomId> = BTreeMap::new();
    for r in rooms {
        *ids.entry(r.id).or_default() += 1;
        if let Some(first) = numbers.insert(r.number.get(), r.id) {
            out.push(ValidationIssue {
                severity: Severity::Error,
                code: "Room.DuplicateNumber",
                message: format!("room number {} used by {first} and {}", r.number, r.id),
                where_: EntityRef::Room(r.id),
            });
        }
    }
    for (id, n) in ids.into_iter().filter(|&(_, n)| n > 1) {
        out.push(ValidationIssue {
            severity: Severity::Error,
            code: "Room.DuplicateId",
            message: format!("room id {id} appears {n} times"),
            where_: EntityRef::Room(id),
        });
    }
    out
}

fn check_order(rooms: &[Room]) -> Option<ValidationIssue> {
    let out_of_order = rooms
        .windows(2)
        .find(|w| (w[0].floor, w[0].number) > (w[1].floor, w[1].number))?;
    Some(ValidationIssue {
        severity: Severity::Warning,
        code: "Inventory.OutOfOrder",
        message: format!(
            "rooms are not in (floor, number) order at {} -> {}",
            out_of_order[0].number, out_of_order[1].number
        ),
        where_: EntityRef::Floor(out_of_order[1].floor),
    })
}

fn sort_issues_stably(issues: &mut [ValidationIssue]) {
    issues.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| a.code.cmp(b.code))
            .then_with(|| a.where_.cmp(&b.where_))
            .then_with(|| a.message.cmp(&b.message))
    });
}

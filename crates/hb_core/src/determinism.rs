//! Determinism utilities: stable room ordering.
//!
//! This module is **I/O-free**. Every search in the engine walks rooms in one
//! of two total orders:
//! - canonical: `(floor, room number, id)`, the order a pool is iterated in;
//! - spatial: `(floor, position, id)`, the order a path is scored in.
//!
//! Both end in the room id so duplicates still sort deterministically.

use core::cmp::Ordering;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::entities::Room;

/// Provide a **total**, stable order for values that must sort canonically.
pub trait StableOrd {
    fn stable_cmp(&self, other: &Self) -> Ordering;
}

impl StableOrd for Room {
    /// Canonical room order is **always** `(floor, number, id)`.
    #[inline]
    fn stable_cmp(&self, other: &Self) -> Ordering {
        self.floor
            .cmp(&other.floor)
            .then_with(|| self.number.cmp(&other.number))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Compare two rooms by `(floor, position, id)`.
#[inline]
pub fn cmp_rooms_spatial(a: &Room, b: &Room) -> Ordering {
    a.floor
        .cmp(&b.floor)
        .then_with(|| a.position().cmp(&b.position()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort rooms **in place** into canonical `(floor, number)` order.
#[inline]
pub fn sort_rooms_canonical(xs: &mut [Room]) {
    xs.sort_by(|a, b| a.stable_cmp(b));
}

/// Sort rooms **in place** into spatial `(floor, position)` order.
#[inline]
pub fn sort_rooms_spatial(xs: &mut [Room]) {
    xs.sort_by(cmp_rooms_spatial);
}

/// Group rooms by floor; each bucket keeps the input order.
pub fn group_by_floor<'a, I>(rooms: I) -> BTreeMap<u8, Vec<Room>>
where
    I: IntoIterator<Item = &'a Room>,
{
    let mut out: BTreeMap<u8, Vec<Room>> = BTreeMap::new();
    for r in rooms {
        out.entry(r.floor).or_default().push(*r);
    }
    out
}

//! Cross-floor search: greedy nearest-aggregate growth from every start room.
//!
//! Used only when no single floor has enough free rooms. For each start room
//! (pool order), the set grows one room at a time by picking the remaining room
//! with the smallest summed travel time to every room already chosen. Ties pick
//! the first such room in pool order. Each complete set is scored as a path and
//! the cheapest one wins, again first-found on ties.
//!
//! This is a heuristic: it does not enumerate every combination and is not
//! guaranteed to find the global minimum. Cost is O(pool² × count).

use alloc::vec::Vec;

use hb_core::Room;

use crate::score::score;
use crate::travel::travel_time;

/// Best greedily grown set of `count` rooms from `pool`, with its cost.
///
/// `pool` must already be in canonical `(floor, number)` order; that order is
/// both the start-room order and the tie-break order. `None` when the pool is
/// smaller than `count` or `count == 0`.
pub fn best_across_floors(pool: &[Room], count: usize) -> Option<(Vec<Room>, u32)> {
    if count == 0 || pool.len() < count {
        return None;
    }

    let mut best: Option<(Vec<Room>, u32)> = None;
    for start in 0..pool.len() {
        let Some(grown) = grow_from(pool, start, count) else {
            continue;
        };
        let cost = score(&grown);
        match &best {
            Some((_, best_cost)) if cost >= *best_cost => {}
            _ => best = Some((grown, cost)),
        }
    }
    best
}

/// Greedy growth from `pool[start]`; `None` if the pool runs dry first.
fn grow_from(pool: &[Room], start: usize, count: usize) -> Option<Vec<Room>> {
    let mut chosen: Vec<Room> = Vec::with_capacity(count);
    chosen.push(pool[start]);

    let mut remaining: Vec<Room> = pool
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != start)
        .map(|(_, r)| *r)
        .collect();

    while chosen.len() < count && !remaining.is_empty() {
        let idx = nearest_to_all(&chosen, &remaining)?;
        chosen.push(remaining.remove(idx));
    }

    (chosen.len() == count).then_some(chosen)
}

/// Index in `remaining` minimizing Σ travel_time(c, r) over `chosen`; first wins.
fn nearest_to_all(chosen: &[Room], remaining: &[Room]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, r) in remaining.iter().enumerate() {
        let total: u32 = chosen.iter().map(|c| travel_time(c, r)).sum();
        match best {
            Some((_, t)) if total >= t => {}
            _ => best = Some((i, total)),
        }
    }
    best.map(|(i, _)| i)
}

//! Floor-local search: cheapest window of consecutive rooms on one floor.
//!
//! Rooms are ordered by position and a window of exactly `count` rooms slides
//! across them. "Consecutive" means consecutive in the sorted free list, not
//! necessarily adjacent door numbers: on a floor where 102 is taken, the window
//! `{101, 103}` is a candidate.
//!
//! Ties keep the earliest window (strict `<`), so the lowest starting position
//! wins.

use alloc::vec::Vec;

use hb_core::determinism::sort_rooms_spatial;
use hb_core::Room;

use crate::score::path_cost;

/// Best window of `count` rooms among `floor_rooms`, with its cost.
///
/// `None` when `count == 0` or the floor holds fewer than `count` rooms.
/// `floor_rooms` are expected to share one floor; the caller groups them.
pub fn best_on_floor(floor_rooms: &[Room], count: usize) -> Option<(Vec<Room>, u32)> {
    if count == 0 || floor_rooms.len() < count {
        return None;
    }

    let mut sorted: Vec<Room> = floor_rooms.to_vec();
    sort_rooms_spatial(&mut sorted);

    let mut best: Option<(usize, u32)> = None;
    for (start, window) in sorted.windows(count).enumerate() {
        let cost = path_cost(window);
        match best {
            Some((_, best_cost)) if cost >= best_cost => {}
            _ => best = Some((start, cost)),
        }
    }

    best.map(|(start, cost)| (sorted[start..start + count].to_vec(), cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_core::{RoomId, RoomNumber};

    fn floor_rooms(floor: u8, positions: &[u8]) -> Vec<Room> {
        positions
            .iter()
            .map(|&p| {
                Room::new(
                    RoomId::new(u32::from(floor) * 100 + u32::from(p)),
                    floor,
                    RoomNumber::compose(floor, p),
                )
            })
            .collect()
    }

    fn positions(rooms: &[Room]) -> Vec<u8> {
        rooms.iter().map(|r| r.position()).collect()
    }

    #[test]
    fn too_few_rooms_is_none() {
        assert!(best_on_floor(&floor_rooms(2, &[1, 2]), 3).is_none());
        assert!(best_on_floor(&floor_rooms(2, &[1, 2]), 0).is_none());
    }

    #[test]
    fn full_floor_prefers_first_window() {
        let rooms = floor_rooms(1, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let (best, cost) = best_on_floor(&rooms, 3).unwrap();
        assert_eq!(positions(&best), vec![1, 2, 3]);
        assert_eq!(cost, 2);
    }

    #[test]
    fn skips_gaps_for_tighter_window() {
        // windows: {1,4}=3, {4,5}=1, {5,9}=4
        let rooms = floor_rooms(4, &[9, 1, 5, 4]);
        let (best, cost) = best_on_floor(&rooms, 2).unwrap();
        assert_eq!(positions(&best), vec![4, 5]);
        assert_eq!(cost, 1);
    }

    #[test]
    fn tie_keeps_lowest_start() {
        // windows {2,4}=2 and {4,6}=2; first wins
        let rooms = floor_rooms(6, &[6, 4, 2]);
        let (best, _) = best_on_floor(&rooms, 2).unwrap();
        assert_eq!(positions(&best), vec![2, 4]);
    }

    #[test]
    fn window_over_free_list_not_door_numbers() {
        let rooms = floor_rooms(3, &[1, 3, 8]);
        let (best, cost) = best_on_floor(&rooms, 2).unwrap();
        assert_eq!(positions(&best), vec![1, 3]);
        assert_eq!(cost, 2);
    }
}

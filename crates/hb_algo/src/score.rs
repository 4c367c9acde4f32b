//! Combination scorer: path cost through a set of rooms.
//!
//! The set is ordered by `(floor, position)` and the travel time of each
//! adjacent pair is summed. This is a path cost, not a full pairwise sum.

use alloc::vec::Vec;

use hb_core::determinism::sort_rooms_spatial;
use hb_core::Room;

use crate::travel::travel_time;

/// Path travel time through `rooms` in `(floor, position)` order.
pub fn score(rooms: &[Room]) -> u32 {
    if rooms.len() <= 1 {
        return 0;
    }
    let mut sorted: Vec<Room> = rooms.to_vec();
    sort_rooms_spatial(&mut sorted);
    path_cost(&sorted)
}

/// Sum of adjacent travel times; caller guarantees spatial order.
#[inline]
pub(crate) fn path_cost(sorted: &[Room]) -> u32 {
    sorted.windows(2).map(|w| travel_time(&w[0], &w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hb_core::{RoomId, RoomNumber};

    fn r(id: u32, floor: u8, number: u16) -> Room {
        Room::new(RoomId::new(id), floor, RoomNumber::new(number))
    }

    #[test]
    fn empty_and_single_cost_nothing() {
        assert_eq!(score(&[]), 0);
        assert_eq!(score(&[r(1, 1, 101)]), 0);
    }

    #[test]
    fn consecutive_rooms_cost_one_each() {
        assert_eq!(score(&[r(1, 1, 101), r(2, 1, 102), r(3, 1, 103)]), 2);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = [r(1, 1, 101), r(2, 3, 305), r(3, 1, 104)];
        let b = [r(2, 3, 305), r(3, 1, 104), r(1, 1, 101)];
        // 101 -> 104 = 3, 104 -> 305 = 2*2 + 1 = 5
        assert_eq!(score(&a), 8);
        assert_eq!(score(&b), 8);
    }

    #[test]
    fn path_not_pairwise() {
        // Pairwise would be 1 + 2 + 1 = 4; path is 101->102->103 = 2.
        let rooms = [r(1, 1, 103), r(2, 1, 101), r(3, 1, 102)];
        assert_eq!(score(&rooms), 2);
    }
}

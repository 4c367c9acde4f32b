// crates/hb_algo/tests/properties.rs
// Property tests for the travel model and the allocation orchestrator.

use std::collections::{BTreeMap, BTreeSet};

use hb_algo::{allocate, best_on_floor, score, travel_time, Strategy as Picked};
use hb_core::entities::max_position;
use hb_core::{Room, RoomId, RoomNumber};
use proptest::prelude::*;

fn room_at(floor: u8, pos: u8) -> Room {
    let number = if floor == 10 {
        RoomNumber::new(1000 + u16::from(pos))
    } else {
        RoomNumber::compose(floor, pos)
    };
    Room::new(RoomId::new(u32::from(floor) * 100 + u32::from(pos)), floor, number)
}

fn any_room() -> impl Strategy<Value = Room> {
    (1u8..=10).prop_flat_map(|floor| {
        let max = max_position(floor).unwrap_or(1);
        (Just(floor), 1u8..=max).prop_map(|(f, p)| room_at(f, p))
    })
}

/// A pool of distinct rooms drawn from the hotel layout.
fn any_pool() -> impl Strategy<Value = Vec<Room>> {
    prop::collection::vec(any_room(), 0..40).prop_map(|rooms| {
        let mut seen = BTreeSet::new();
        rooms.into_iter().filter(|r| seen.insert(r.id)).collect()
    })
}

proptest! {
    #[test]
    fn travel_time_is_symmetric(a in any_room(), b in any_room()) {
        prop_assert_eq!(travel_time(&a, &b), travel_time(&b, &a));
    }

    #[test]
    fn travel_time_to_self_is_zero(a in any_room()) {
        prop_assert_eq!(travel_time(&a, &a), 0);
    }

    #[test]
    fn out_of_range_count_never_allocates(pool in any_pool(), count in prop_oneof![Just(0usize), 6usize..50]) {
        prop_assert!(allocate(&pool, count).is_err());
    }

    #[test]
    fn allocation_is_idempotent(pool in any_pool(), count in 1usize..=5) {
        prop_assert_eq!(allocate(&pool, count), allocate(&pool, count));
    }

    #[test]
    fn result_size_and_cost_are_consistent(pool in any_pool(), count in 1usize..=5) {
        match allocate(&pool, count) {
            Ok(set) => {
                prop_assert_eq!(set.len(), count);
                prop_assert_eq!(score(&set.rooms), set.travel_time);
                let ids: BTreeSet<_> = set.rooms.iter().map(|r| r.id).collect();
                prop_assert_eq!(ids.len(), count);
                for r in &set.rooms {
                    prop_assert!(pool.contains(r));
                }
            }
            Err(e) => {
                prop_assert!(e.is_infeasible());
                prop_assert!(pool.len() < count);
            }
        }
    }

    #[test]
    fn same_floor_result_comes_from_first_qualifying_floor(pool in any_pool(), count in 1usize..=5) {
        let mut by_floor: BTreeMap<u8, Vec<Room>> = BTreeMap::new();
        for r in &pool {
            by_floor.entry(r.floor).or_default().push(*r);
        }
        let first = by_floor.iter().find(|(_, rooms)| rooms.len() >= count);

        let got = allocate(&pool, count);
        match first {
            Some((&floor, rooms)) => {
                let set = got.unwrap();
                prop_assert_eq!(set.strategy, Picked::SameFloor { floor });
                let (_, best) = best_on_floor(rooms, count).unwrap();
                prop_assert_eq!(set.travel_time, best);
            }
            None => {
                if let Ok(set) = got {
                    prop_assert_eq!(set.strategy, Picked::CrossFloor);
                }
            }
        }
    }

    #[test]
    fn shuffled_pool_gives_same_answer(pool in any_pool(), count in 1usize..=5, rot in 0usize..40) {
        let mut rotated = pool.clone();
        if !rotated.is_empty() {
            let k = rot % rotated.len();
            rotated.rotate_left(k);
        }
        prop_assert_eq!(allocate(&pool, count), allocate(&rotated, count));
    }
}

#[test]
fn ten_free_rooms_on_floor_one_book_the_first_three() {
    let pool: Vec<Room> = (1..=10).map(|p| room_at(1, p)).collect();
    let set = allocate(&pool, 3).unwrap();
    let positions: Vec<u8> = set.rooms.iter().map(|r| r.position()).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(set.travel_time, 2);
}

#[test]
fn two_full_floors_pick_the_lower() {
    let mut pool: Vec<Room> = (1..=10).map(|p| room_at(5, p)).collect();
    pool.extend((1..=10).map(|p| room_at(3, p)));
    let set = allocate(&pool, 2).unwrap();
    assert!(set.rooms.iter().all(|r| r.floor == 3));
}

#[test]
fn known_distances() {
    assert_eq!(travel_time(&room_at(4, 3), &room_at(4, 7)), 4);
    assert_eq!(travel_time(&room_at(2, 5), &room_at(5, 5)), 6);
    assert_eq!(travel_time(&room_at(2, 3), &room_at(5, 7)), 10);
}

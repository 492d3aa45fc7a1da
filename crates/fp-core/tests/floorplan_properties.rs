use std::collections::{HashSet, VecDeque};

use fp_core::grid::{self, in_fill_region};
use fp_core::{
    generate_floorplan, generate_seeded, Floorplan, FloorRng, GenerateOptions, RoomType,
    GRID_LEN, START_ROOM_INDEX,
};
use proptest::prelude::*;

/// Rooms reachable from the start room through shared edges
fn reachable_from_start(floor: &Floorplan) -> HashSet<usize> {
    let mut seen = HashSet::from([START_ROOM_INDEX]);
    let mut queue = VecDeque::from([START_ROOM_INDEX]);
    while let Some(i) = queue.pop_front() {
        for n in grid::neighbors(i) {
            if floor.is_occupied(n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

fn check_floor(floor: &Floorplan, options: &GenerateOptions) {
    assert_eq!(floor.cells().len(), GRID_LEN);
    assert_eq!(floor.get(START_ROOM_INDEX), Some(RoomType::Normal));

    for special in RoomType::SPECIALS {
        assert_eq!(floor.count(special), 1, "exactly one {special} room");
    }
    let specials = floor.special_rooms().expect("all special rooms present");
    let cells: HashSet<usize> = [specials.boss, specials.reward, specials.shop, specials.secret]
        .into_iter()
        .collect();
    assert_eq!(cells.len(), 4);
    assert!(!cells.contains(&START_ROOM_INDEX));

    let rooms = floor.room_count();
    assert!(
        (options.min_rooms..=options.max_rooms).contains(&rooms),
        "{rooms} rooms outside {}..={}",
        options.min_rooms,
        options.max_rooms
    );

    // Connectivity
    for (i, room) in floor.iter() {
        if room.is_room() && i != START_ROOM_INDEX {
            assert!(floor.occupied_neighbors(i) >= 1, "room {i} is isolated");
        }
    }
    assert_eq!(reachable_from_start(floor).len(), rooms);

    assert!(!grid::are_adjacent(specials.boss, START_ROOM_INDEX));
    assert!(!grid::are_adjacent(specials.secret, specials.boss));

    // Every room but the secret one came from the flood fill
    let flood: Vec<usize> = floor
        .iter()
        .filter(|(_, room)| room.is_room() && *room != RoomType::Secret)
        .map(|(i, _)| i)
        .collect();
    assert!(flood.iter().all(|&i| in_fill_region(i)));

    // A room is only created next to a single existing room, so the flood
    // rooms form a tree: one shared edge fewer than rooms.
    let flood_set: HashSet<usize> = flood.iter().copied().collect();
    let edges = flood
        .iter()
        .flat_map(|&i| grid::neighbors(i).filter(move |n| *n > i))
        .filter(|n| flood_set.contains(n))
        .count();
    assert_eq!(edges, flood.len() - 1);
}

#[test]
fn test_default_floors_hold_invariants() {
    let options = GenerateOptions::default();
    for seed in 0..500 {
        let floor = generate_seeded(&options, seed).unwrap();
        check_floor(&floor, &options);
    }
}

#[test]
fn test_default_terminates_within_safety_bound() {
    let options = GenerateOptions::default();
    let mut rng = FloorRng::new(2024);
    for _ in 0..200 {
        assert!(generate_floorplan(&options, &mut rng).is_ok());
    }
}

#[test]
fn test_same_sequence_same_floor() {
    let options = GenerateOptions::default();
    let first = generate_seeded(&options, 99).unwrap();
    let second = generate_seeded(&options, 99).unwrap();
    assert_eq!(first.codes(), second.codes());
}

#[test]
fn test_seeds_differ() {
    let options = GenerateOptions::default();
    let floors: HashSet<Vec<u8>> = (0..20)
        .map(|seed| generate_seeded(&options, seed).unwrap().codes())
        .collect();
    assert!(floors.len() > 1);
}

#[test]
fn test_smallest_floor() {
    let options = GenerateOptions {
        max_rooms: 6,
        min_rooms: 6,
        ..Default::default()
    };
    for seed in 0..50 {
        let floor = generate_seeded(&options, seed).unwrap();
        assert_eq!(floor.room_count(), 6);
        check_floor(&floor, &options);
    }
}

#[test]
fn test_json_roundtrip_of_generated_floor() {
    let floor = generate_seeded(&GenerateOptions::default(), 5).unwrap();
    let json = serde_json::to_string(&floor).unwrap();
    let parsed: Floorplan = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, floor);
}

fn options_strategy() -> impl Strategy<Value = GenerateOptions> {
    (6usize..=40)
        .prop_flat_map(|max_rooms| (Just(max_rooms), 1..=(max_rooms / 2).max(1)))
        .prop_map(|(max_rooms, min_rooms)| GenerateOptions {
            max_rooms,
            min_rooms,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_floors_hold_invariants(seed in any::<u64>(), options in options_strategy()) {
        let floor = generate_seeded(&options, seed).unwrap();
        check_floor(&floor, &options);
    }

    #[test]
    fn prop_generation_is_deterministic(seed in any::<u64>()) {
        let options = GenerateOptions::default();
        let a = generate_seeded(&options, seed).unwrap();
        let b = generate_seeded(&options, seed).unwrap();
        prop_assert_eq!(a, b);
    }
}

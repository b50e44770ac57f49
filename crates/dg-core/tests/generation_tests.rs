use dg_core::dungeon::region::{floor_regions, is_connected, keep_largest_region};
use dg_core::dungeon::{
    generate_room, place_room, square_dimensions, stamp_room, RoomKind, RoomPattern,
};
use dg_core::{generate_dungeon, Cell, Coord, GameRng, GeneratorConfig, Grid};
use proptest::prelude::*;

fn small_config() -> GeneratorConfig {
    GeneratorConfig {
        build_room_attempts: 80,
        shortcut_attempts: 40,
        ..GeneratorConfig::with_size(60, 45)
    }
}

#[test]
fn test_room_floors_never_touch() {
    for seed in [1, 2, 3] {
        let mut rng = GameRng::new(seed);
        let dungeon = generate_dungeon(&small_config(), &mut rng).unwrap();
        for (i, a) in dungeon.rooms.iter().enumerate() {
            for b in &dungeon.rooms[i + 1..] {
                for pos in a.floor_cells() {
                    for other in b.floor_cells() {
                        let dx = (pos.x - other.x).abs();
                        let dy = (pos.y - other.y).abs();
                        assert!(
                            dx > 1 || dy > 1,
                            "seed {seed}: rooms touch at {pos} and {other}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_caves_meet_minimum_size() {
    let mut rng = GameRng::new(5);
    let dungeon = generate_dungeon(&small_config(), &mut rng).unwrap();
    for room in &dungeon.rooms {
        if matches!(room.kind(), RoomKind::Cave | RoomKind::Cavern) {
            assert!(room.pattern.floor_count() >= small_config().room_min_size);
        }
    }
}

#[test]
fn test_zero_build_attempts_leaves_only_first_room() {
    let config = GeneratorConfig {
        build_room_attempts: 0,
        include_shortcuts: false,
        ..small_config()
    };
    let mut rng = GameRng::new(99);
    let dungeon = generate_dungeon(&config, &mut rng).unwrap();
    assert_eq!(dungeon.rooms.len(), 1);

    let mut expected = Grid::new(60, 45);
    stamp_room(&mut expected, dungeon.rooms[0].origin, &dungeon.rooms[0].pattern);
    assert_eq!(dungeon.grid, expected);
}

#[test]
fn test_single_square_room_is_centered() {
    let config = GeneratorConfig {
        max_num_rooms: 1,
        square_room_min_size: 8,
        square_room_max_size: 8,
        cavern_chance: 0.0,
        ..GeneratorConfig::with_size(50, 50)
    };
    let mut rng = GameRng::new(3);
    let dungeon = generate_dungeon(&config, &mut rng).unwrap();

    assert_eq!(dungeon.rooms.len(), 1);
    let room = &dungeon.rooms[0];
    assert_eq!(room.kind(), RoomKind::Square);
    assert_eq!((room.pattern.width(), room.pattern.height()), (6, 6));
    assert_eq!(room.origin, Coord::new(22, 22));

    for pos in dungeon.grid.coords() {
        let inside = (22..28).contains(&pos.x) && (22..28).contains(&pos.y);
        assert_eq!(dungeon.grid.get(pos), Some(if inside { Cell::Floor } else { Cell::Wall }));
    }
}

#[test]
fn test_closed_doorways_leave_rooms_walled_off() {
    let config = GeneratorConfig {
        open_doorways: false,
        include_shortcuts: false,
        ..small_config()
    };
    let mut rng = GameRng::new(1);
    let dungeon = generate_dungeon(&config, &mut rng).unwrap();
    assert!(dungeon.rooms.len() > 1);

    let regions = floor_regions(&dungeon.grid);
    assert!(regions.len() > 1, "anchor walls should split the level");
    let region_of = |pos: Coord| regions.iter().position(|region| region.contains(&pos));

    // A room and its own tunnel stay in one piece
    for room in &dungeon.rooms {
        let first = room.floor_cells().next().unwrap();
        let home = region_of(first);
        assert!(home.is_some());
        assert!(room.floor_cells().all(|pos| region_of(pos) == home));
    }

    // No single region reaches every room
    let central = region_of(dungeon.rooms[0].floor_cells().next().unwrap());
    assert!(
        dungeon
            .rooms
            .iter()
            .any(|room| room.floor_cells().all(|pos| region_of(pos) != central))
    );

    for (i, a) in dungeon.rooms.iter().enumerate() {
        for b in &dungeon.rooms[i + 1..] {
            for pos in a.floor_cells() {
                assert!(b.floor_cells().all(|other| {
                    (pos.x - other.x).abs() > 1 || (pos.y - other.y).abs() > 1
                }));
            }
        }
    }
}

#[test]
fn test_same_seed_same_dungeon() {
    let a = generate_dungeon(&small_config(), &mut GameRng::new(1234)).unwrap();
    let b = generate_dungeon(&small_config(), &mut GameRng::new(1234)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_keep_largest_region_is_idempotent() {
    let config = GeneratorConfig::default();
    let mut rng = GameRng::new(17);
    let cave = generate_room(RoomKind::Cave, &config, &mut rng);
    assert_eq!(floor_regions(cave.cells()).len(), 1);

    let mut cells = cave.cells().clone();
    let kept = keep_largest_region(&mut cells, config.room_min_size);
    assert_eq!(kept, cave.floor_count());
    assert_eq!(&cells, cave.cells());
}

#[test]
fn test_rejected_room_leaves_grid_unchanged() {
    let mut grid = Grid::new(20, 20);
    stamp_room(
        &mut grid,
        Coord::new(8, 8),
        &RoomPattern::new(RoomKind::Square, Grid::filled(4, 4, Cell::Floor)),
    );
    let before = grid.clone();

    // Wider than the map itself, so no slide can make it fit
    let huge = RoomPattern::new(RoomKind::Square, Grid::filled(25, 3, Cell::Floor));
    let mut rng = GameRng::new(8);
    assert_eq!(place_room(&grid, &huge, &GeneratorConfig::default(), &mut rng), None);
    assert_eq!(grid, before);
}

#[test]
fn test_serialized_dungeon_round_trips() {
    let dungeon = generate_dungeon(&small_config(), &mut GameRng::new(21)).unwrap();
    let json = serde_json::to_string(&dungeon).unwrap();
    let back: dg_core::Dungeon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dungeon);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn generated_levels_are_connected(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let dungeon = generate_dungeon(&small_config(), &mut rng).unwrap();
        prop_assert!(is_connected(&dungeon.grid), "seed={seed} left unreachable floor");
        prop_assert!(dungeon.rooms.len() <= small_config().max_num_rooms);
    }

    #[test]
    fn square_heights_stay_in_range(seed in any::<u64>(), min in 3_usize..10, extra in 0_usize..8) {
        let config = GeneratorConfig {
            square_room_min_size: min,
            square_room_max_size: min + extra,
            ..GeneratorConfig::default()
        };
        let mut rng = GameRng::new(seed);
        let (width, height) = square_dimensions(&config, &mut rng);
        prop_assert!((min..=min + extra).contains(&width));
        prop_assert!(height >= (width / 2).max(min));
        prop_assert!(height <= (width * 3 / 2).min(min + extra));
    }
}

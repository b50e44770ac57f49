//! Level generation
//!
//! Builds a dungeon by adding rooms one at a time: the first room goes in
//! the middle of the map, every later room is attached to the existing
//! floor through a tunnel, and a final pass digs shortcuts.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::rng::GameRng;

use super::corridor::{carve_tunnel, open_doorway};
use super::placement::place_room;
use super::room::{generate_room, stamp_room, PlacedRoom, RoomKind, RoomPattern};
use super::shortcut::add_shortcuts;
use super::{Coord, Grid};

/// A finished level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dungeon {
    pub grid: Grid,
    /// Rooms in the order they were stamped; the first is the central room
    pub rooms: Vec<PlacedRoom>,
    /// Seed of the RNG the level was generated with
    pub seed: u64,
    /// Number of shortcut corridors dug after the rooms were placed
    pub shortcuts: usize,
}

impl Dungeon {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Index of the room whose floor covers `pos`, if any
    pub fn room_at(&self, pos: Coord) -> Option<usize> {
        self.rooms.iter().position(|room| {
            room.contains(pos) && room.pattern.cells().is_floor(pos - room.origin)
        })
    }
}

impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}

/// Origin that centers a `pattern` on the grid
pub fn centered_origin(grid: &Grid, pattern: &RoomPattern) -> Coord {
    Coord::new(
        (grid.width().saturating_sub(pattern.width()) / 2) as i32,
        (grid.height().saturating_sub(pattern.height()) / 2) as i32,
    )
}

/// Generate a level with the room-addition algorithm
///
/// Only an invalid `config` is an error. Rooms that cannot be placed are
/// skipped, so the level may end up with fewer than `max_num_rooms` rooms.
pub fn generate_dungeon(config: &GeneratorConfig, rng: &mut GameRng) -> Result<Dungeon, GenError> {
    config.validate()?;

    let mut grid = Grid::new(config.map_width, config.map_height);
    let mut rooms = Vec::new();

    // The grid is empty, so the first room needs no overlap test
    let kind = RoomKind::select(config, true, rng);
    let first = generate_room(kind, config, rng);
    let origin = centered_origin(&grid, &first);
    stamp_room(&mut grid, origin, &first);
    log::debug!(
        "first room: {kind} {}x{} at {origin}",
        first.width(),
        first.height()
    );
    rooms.push(PlacedRoom::new(origin, first));

    let mut failed = 0;
    for _ in 0..config.build_room_attempts {
        if rooms.len() >= config.max_num_rooms {
            break;
        }

        let kind = RoomKind::select(config, false, rng);
        let room = generate_room(kind, config, rng);
        let Some(placement) = place_room(&grid, &room, config, rng) else {
            failed += 1;
            continue;
        };

        stamp_room(&mut grid, placement.origin, &room);
        carve_tunnel(
            &mut grid,
            placement.anchor,
            placement.direction,
            placement.tunnel_length,
        );
        if config.open_doorways {
            open_doorway(&mut grid, placement.anchor);
        }
        rooms.push(PlacedRoom::new(placement.origin, room));
    }
    log::debug!("placed {} rooms, {failed} candidates did not fit", rooms.len());

    let shortcuts = if config.include_shortcuts {
        add_shortcuts(&mut grid, config, rng)
    } else {
        0
    };
    log::debug!("dug {shortcuts} shortcuts");

    Ok(Dungeon {
        grid,
        rooms,
        seed: rng.seed(),
        shortcuts,
    })
}

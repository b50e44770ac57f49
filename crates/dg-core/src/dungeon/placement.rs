//! Room placement search
//!
//! A new room is attached to the dungeon by finding a wall tile on the
//! dungeon's edge, lining a random floor cell of the room up with it, and
//! sliding the room outward until it clears everything else by one wall cell.

use crate::config::GeneratorConfig;
use crate::rng::GameRng;

use super::room::RoomPattern;
use super::{Coord, Direction, Grid};

/// Where and how a room attaches to the dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementResult {
    /// Dungeon coordinate of the pattern's top-left cell
    pub origin: Coord,
    /// Existing wall tile the tunnel leads back to
    pub anchor: Coord,
    /// Direction the room was slid in, pointing away from the dungeon
    pub direction: Direction,
    pub tunnel_length: usize,
}

/// A wall tile with wall beyond it in `dir` and floor behind it
pub fn is_anchor_candidate(grid: &Grid, pos: Coord, dir: Direction) -> bool {
    grid.is_wall(pos) && grid.is_wall(pos.step(dir, 1)) && grid.is_floor(pos.step(dir, -1))
}

fn has_anchor_candidate(grid: &Grid, dir: Direction) -> bool {
    grid.coords()
        .any(|pos| grid.in_interior(pos) && is_anchor_candidate(grid, pos, dir))
}

/// Sample interior tiles until one faces outward in `dir`
///
/// The sampling loop has no cap of its own. When the grid holds no candidate
/// at all for `dir` this returns `None` without sampling.
pub fn find_anchor_tile(grid: &Grid, dir: Direction, rng: &mut GameRng) -> Option<Coord> {
    if grid.width() < 3 || grid.height() < 3 || !has_anchor_candidate(grid, dir) {
        return None;
    }
    let max_x = grid.width() as i32 - 2;
    let max_y = grid.height() as i32 - 2;
    loop {
        let pos = Coord::new(rng.range_inclusive(1, max_x), rng.range_inclusive(1, max_y));
        if is_anchor_candidate(grid, pos, dir) {
            return Some(pos);
        }
    }
}

/// Buffer test: can `room` be stamped at `origin`?
///
/// Every floor cell of the room must land inside the grid's 1-cell margin,
/// and that cell plus its 8 neighbours must all be wall.
pub fn fits_with_buffer(grid: &Grid, room: &RoomPattern, origin: Coord) -> bool {
    room.cells().floor_cells().all(|local| {
        let pos = local + origin;
        grid.in_interior(pos) && grid.is_wall(pos) && pos.neighbors8().all(|n| grid.is_wall(n))
    })
}

/// Try to find a legal placement for `room`, without touching the grid
pub fn place_room(
    grid: &Grid,
    room: &RoomPattern,
    config: &GeneratorConfig,
    rng: &mut GameRng,
) -> Option<PlacementResult> {
    if !room.has_floor() {
        return None;
    }

    for attempt in 0..config.place_rooms_attempts {
        let direction = Direction::ALL[rng.rn2(4) as usize];

        let Some(anchor) = find_anchor_tile(grid, direction, rng) else {
            log::trace!("attempt {attempt}: no anchor tile facing {direction}");
            continue;
        };

        // Line a random floor cell of the room up with the anchor
        let floor = room.random_floor_cell(rng)?;
        let start = anchor - floor;

        for tunnel_length in 0..config.max_tunnel_length {
            let origin = start.step(direction, tunnel_length as i32);
            if fits_with_buffer(grid, room, origin) {
                return Some(PlacementResult {
                    origin,
                    anchor,
                    direction,
                    tunnel_length,
                });
            }
        }
        log::trace!("attempt {attempt}: {} at anchor {anchor} does not fit", room.kind());
    }

    None
}

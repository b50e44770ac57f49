//! Room shapes
//!
//! Defines the four room kinds and the generators that synthesize a
//! standalone [`RoomPattern`] for each of them:
//! - Square: solid rectangle of floor
//! - Cross: two centered bands forming a plus
//! - Cave: cellular-automata blob on an `room_max_size` square
//! - Cavern: the same automaton on the larger `cavern_max_size` square

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::config::GeneratorConfig;
use crate::rng::GameRng;

use super::region::keep_largest_region;
use super::{Cell, Coord, Grid};

/// Number of smoothing passes applied to cave patterns
pub const CAVE_SMOOTHING_PASSES: usize = 4;

/// Room shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum RoomKind {
    Square,
    Cross,
    Cave,
    Cavern,
}

impl RoomKind {
    /// Pick the shape of the next room
    ///
    /// The first room is a cavern or a square; later rooms are square, cross
    /// or cave.
    pub fn select(config: &GeneratorConfig, first_room: bool, rng: &mut GameRng) -> RoomKind {
        let roll = rng.unit();
        if first_room {
            if roll < config.cavern_chance {
                RoomKind::Cavern
            } else {
                RoomKind::Square
            }
        } else if roll < config.square_room_chance {
            RoomKind::Square
        } else if roll < config.square_room_chance + config.cross_room_chance {
            RoomKind::Cross
        } else {
            RoomKind::Cave
        }
    }
}

/// A room's local floor/wall layout before it is stamped into the dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPattern {
    kind: RoomKind,
    cells: Grid,
}

impl RoomPattern {
    pub fn new(kind: RoomKind, cells: Grid) -> Self {
        Self { kind, cells }
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// A zero-sized or all-wall pattern has nothing to place
    pub fn has_floor(&self) -> bool {
        self.cells.has_floor()
    }

    pub fn floor_count(&self) -> usize {
        self.cells.floor_count()
    }

    /// Pick a random floor cell by resampling
    ///
    /// Returns `None` when the pattern has no floor at all.
    pub fn random_floor_cell(&self, rng: &mut GameRng) -> Option<Coord> {
        if !self.has_floor() {
            return None;
        }
        loop {
            let pos = Coord::new(
                rng.rn2(self.width() as u32) as i32,
                rng.rn2(self.height() as u32) as i32,
            );
            if self.cells.is_floor(pos) {
                return Some(pos);
            }
        }
    }
}

/// Generate one room of the given kind
pub fn generate_room(kind: RoomKind, config: &GeneratorConfig, rng: &mut GameRng) -> RoomPattern {
    match kind {
        RoomKind::Square => generate_square(config, rng),
        RoomKind::Cross => generate_cross(config, rng),
        RoomKind::Cave => generate_cellular(RoomKind::Cave, config.room_max_size, config, rng),
        RoomKind::Cavern => {
            generate_cellular(RoomKind::Cavern, config.cavern_max_size, config, rng)
        }
    }
}

/// Outer width and height for a square room
///
/// The pattern itself is one cell narrower on each side.
pub fn square_dimensions(config: &GeneratorConfig, rng: &mut GameRng) -> (usize, usize) {
    let min = config.square_room_min_size as i32;
    let max = config.square_room_max_size as i32;
    let width = rng.range_inclusive(min, max);
    let height = rng.range_inclusive((width / 2).max(min), (width * 3 / 2).min(max));
    (width as usize, height as usize)
}

fn generate_square(config: &GeneratorConfig, rng: &mut GameRng) -> RoomPattern {
    let (width, height) = square_dimensions(config, rng);
    let cells = Grid::filled(
        width.saturating_sub(2),
        height.saturating_sub(2),
        Cell::Floor,
    );
    RoomPattern::new(RoomKind::Square, cells)
}

fn round_down_even(n: i32) -> i32 {
    n / 2 * 2
}

fn generate_cross(config: &GeneratorConfig, rng: &mut GameRng) -> RoomPattern {
    let min = config.cross_room_min_size as i32;
    let max = config.cross_room_max_size as i32;

    let hor_width = round_down_even(rng.range_inclusive(min + 2, max));
    let vir_height = round_down_even(rng.range_inclusive(min + 2, max));
    let hor_height = round_down_even(rng.range_inclusive(min, vir_height - 2));
    let vir_width = round_down_even(rng.range_inclusive(min, hor_width - 2));

    let mut cells = Grid::new(hor_width as usize, vir_height as usize);

    // Horizontal band
    let vir_offset = vir_height / 2 - hor_height / 2;
    for y in vir_offset..vir_offset + hor_height {
        for x in 0..hor_width {
            cells.set(Coord::new(x, y), Cell::Floor);
        }
    }

    // Vertical band
    let hor_offset = hor_width / 2 - vir_width / 2;
    for y in 0..vir_height {
        for x in hor_offset..hor_offset + vir_width {
            cells.set(Coord::new(x, y), Cell::Floor);
        }
    }

    RoomPattern::new(RoomKind::Cross, cells)
}

/// Cellular-automata cave of `size × size`, retried until a region survives
fn generate_cellular(
    kind: RoomKind,
    size: usize,
    config: &GeneratorConfig,
    rng: &mut GameRng,
) -> RoomPattern {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let mut cells = random_fill(size, config.wall_probability, rng);
        for _ in 0..CAVE_SMOOTHING_PASSES {
            smooth(&mut cells, config.neighbors);
        }

        let kept = keep_largest_region(&mut cells, config.room_min_size);
        if kept > 0 {
            log::trace!("{kind} of {size}x{size} kept {kept} floor cells after {attempts} tries");
            return RoomPattern::new(kind, cells);
        }
    }
}

fn random_fill(size: usize, wall_probability: f64, rng: &mut GameRng) -> Grid {
    let mut cells = Grid::new(size, size);
    let size = size as i32;
    for y in 2..size - 2 {
        for x in 2..size - 2 {
            if !rng.chance(wall_probability) {
                cells.set(Coord::new(x, y), Cell::Floor);
            }
        }
    }
    cells
}

/// One in-place smoothing pass over the cells inside the 1-cell margin
fn smooth(cells: &mut Grid, threshold: usize) {
    let width = cells.width() as i32;
    let height = cells.height() as i32;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let pos = Coord::new(x, y);
            let walls = cells.adjacent_walls(pos);
            if walls > threshold {
                cells.set(pos, Cell::Wall);
            } else if walls < threshold {
                cells.set(pos, Cell::Floor);
            }
        }
    }
}

/// A room stamped into the dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedRoom {
    /// Dungeon coordinate of the pattern's top-left cell
    pub origin: Coord,
    pub pattern: RoomPattern,
}

impl PlacedRoom {
    pub fn new(origin: Coord, pattern: RoomPattern) -> Self {
        Self { origin, pattern }
    }

    pub fn kind(&self) -> RoomKind {
        self.pattern.kind()
    }

    /// Dungeon coordinates of this room's floor cells
    pub fn floor_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.pattern
            .cells()
            .floor_cells()
            .map(move |pos| pos + self.origin)
    }

    /// Check if `pos` (dungeon coordinates) falls inside the pattern's bounding box
    pub fn contains(&self, pos: Coord) -> bool {
        pos.x >= self.origin.x
            && pos.y >= self.origin.y
            && pos.x < self.origin.x + self.pattern.width() as i32
            && pos.y < self.origin.y + self.pattern.height() as i32
    }
}

/// Copy a pattern's floor cells into `grid` at `origin`
///
/// Wall cells of the pattern leave the grid untouched.
pub fn stamp_room(grid: &mut Grid, origin: Coord, pattern: &RoomPattern) {
    for pos in pattern.cells().floor_cells() {
        grid.set(pos + origin, Cell::Floor);
    }
}

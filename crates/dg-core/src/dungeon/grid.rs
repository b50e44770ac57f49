//! Rectangular cell grids, coordinates and directions
//!
//! The dungeon and every room pattern are a [`Grid`]. Coordinates are signed so
//! translated room positions can be checked before they are known to be in bounds.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::fmt;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Cell;

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `n` cells in `dir`
    pub const fn step(self, dir: Direction, n: i32) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx * n,
            y: self.y + dy * n,
        }
    }

    /// The 8 surrounding coordinates
    pub fn neighbors8(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| Coord::new(self.x + dx, self.y + dy))
    }

    /// The 4 orthogonal neighbours (N, S, E, W)
    pub fn neighbors4(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.iter().map(move |&dir| self.step(dir, 1))
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Axis directions used for placement and tunnels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector `(dx, dy)`; y grows southward
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Fixed-size 2D array of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-wall grid
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Cell::Wall)
    }

    /// Create a grid with every cell set to `cell`
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Build a grid from rows of `#` (wall) and `.` (floor)
    ///
    /// Returns `None` for ragged rows or unknown characters.
    pub fn from_ascii(text: &str) -> Option<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            if row.chars().count() != width {
                return None;
            }
            for c in row.chars() {
                cells.push(Cell::from_symbol(c)?);
            }
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// A grid with no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `pos`, or `None` outside the grid
    ///
    /// Lets callers keep per-cell side tables in a flat `Vec`.
    pub fn index(&self, pos: Coord) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width + pos.x as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Check that `pos` lies inside the 1-cell border of the grid
    pub fn in_interior(&self, pos: Coord) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as usize) + 1 < self.width
            && (pos.y as usize) + 1 < self.height
    }

    pub fn get(&self, pos: Coord) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Floor check; out-of-bounds counts as not floor
    pub fn is_floor(&self, pos: Coord) -> bool {
        self.get(pos) == Some(Cell::Floor)
    }

    /// Wall check; out-of-bounds counts as not wall
    pub fn is_wall(&self, pos: Coord) -> bool {
        self.get(pos) == Some(Cell::Wall)
    }

    /// Set a cell, returning false if `pos` is outside the grid
    pub fn set(&mut self, pos: Coord, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Iterate over every coordinate, row by row
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Coord::new(x, y)))
    }

    /// Iterate over floor coordinates, row by row
    pub fn floor_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&pos| self.is_floor(pos))
    }

    pub fn floor_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_floor()).count()
    }

    pub fn has_floor(&self) -> bool {
        self.cells.iter().any(|c| c.is_floor())
    }

    /// Count wall cells among the 8 neighbours of `pos` (out-of-bounds ignored)
    pub fn adjacent_walls(&self, pos: Coord) -> usize {
        pos.neighbors8().filter(|&n| self.is_wall(n)).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Map cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A single map cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Wall = 0,
    Floor = 1,
}

impl Cell {
    /// Check if this is a wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, Cell::Wall)
    }

    /// Check if this is passable (can walk through)
    pub const fn is_floor(&self) -> bool {
        matches!(self, Cell::Floor)
    }

    /// Get the display character for this cell
    pub const fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
        }
    }

    /// Parse a display character back into a cell
    pub const fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            _ => None,
        }
    }
}

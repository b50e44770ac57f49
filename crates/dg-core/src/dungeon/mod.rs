//! Dungeon system
//!
//! Contains the cell grid, room shapes, placement search, corridor carving,
//! shortcut insertion and the level builder that ties them together.

mod cell;
mod corridor;
mod generation;
mod grid;
mod placement;
pub mod region;
mod room;
mod shortcut;

pub use cell::Cell;
pub use corridor::{carve_shortcut, carve_tunnel, open_doorway};
pub use generation::{centered_origin, generate_dungeon, Dungeon};
pub use grid::{Coord, Direction, Grid};
pub use placement::{
    find_anchor_tile, fits_with_buffer, is_anchor_candidate, place_room, PlacementResult,
};
pub use room::{
    generate_room, square_dimensions, stamp_room, PlacedRoom, RoomKind, RoomPattern,
    CAVE_SMOOTHING_PASSES,
};
pub use shortcut::{add_shortcuts, find_shortcut_origin, is_edge_floor, shortcuts_from, CostMap};

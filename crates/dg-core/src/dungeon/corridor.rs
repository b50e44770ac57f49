//! Corridor carving
//!
//! Two kinds of corridor are dug into the dungeon:
//! 1. Tunnels joining a freshly placed room back to its anchor wall tile
//! 2. Straight shortcuts between two floor tiles (vertical, horizontal or 45°)

use super::{Cell, Coord, Direction, Grid};

/// Carve the tunnel between a placed room and its anchor
///
/// Walks back from `anchor + direction * tunnel_length` toward the anchor,
/// stopping before the anchor itself. The anchor tile is left as wall.
/// Returns the number of cells carved.
pub fn carve_tunnel(
    grid: &mut Grid,
    anchor: Coord,
    direction: Direction,
    tunnel_length: usize,
) -> usize {
    let start = anchor.step(direction, tunnel_length as i32);
    let mut carved = 0;
    for i in 0..=tunnel_length as i32 {
        let pos = start.step(direction, -i);
        if pos == anchor {
            break;
        }
        if grid.set(pos, Cell::Floor) {
            carved += 1;
        }
    }
    carved
}

/// Open the anchor tile so the tunnel meets the existing dungeon
pub fn open_doorway(grid: &mut Grid, anchor: Coord) -> bool {
    grid.set(anchor, Cell::Floor)
}

/// Carve a straight corridor from `a` to `b`, both ends included
///
/// Only vertical, horizontal and exact diagonal (slope ±1) lines are
/// supported. Diagonals are dug as a staircase: one x step, then one y step,
/// each carved, so the result stays 4-connected. Any other slope carves
/// nothing and returns false.
pub fn carve_shortcut(grid: &mut Grid, a: Coord, b: Coord) -> bool {
    let (dx, dy) = (b.x - a.x, b.y - a.y);

    if dx == 0 {
        for y in a.y.min(b.y)..=a.y.max(b.y) {
            grid.set(Coord::new(a.x, y), Cell::Floor);
        }
    } else if dy == 0 {
        for x in a.x.min(b.x)..=a.x.max(b.x) {
            grid.set(Coord::new(x, a.y), Cell::Floor);
        }
    } else if dx == dy {
        // NW to SE
        let mut pos = Coord::new(a.x.min(b.x), a.y.min(b.y));
        grid.set(pos, Cell::Floor);
        while pos.x != a.x.max(b.x) {
            pos.x += 1;
            grid.set(pos, Cell::Floor);
            pos.y += 1;
            grid.set(pos, Cell::Floor);
        }
    } else if dx == -dy {
        // SW to NE
        let mut pos = Coord::new(a.x.min(b.x), a.y.max(b.y));
        grid.set(pos, Cell::Floor);
        while pos.x != a.x.max(b.x) {
            pos.x += 1;
            grid.set(pos, Cell::Floor);
            pos.y -= 1;
            grid.set(pos, Cell::Floor);
        }
    } else {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::region::is_connected;

    #[test]
    fn test_tunnel_leaves_anchor() {
        let mut grid = Grid::new(20, 20);
        let anchor = Coord::new(10, 10);
        let carved = carve_tunnel(&mut grid, anchor, Direction::East, 4);
        assert_eq!(carved, 4);
        assert!(grid.is_wall(anchor));
        for x in 11..=14 {
            assert!(grid.is_floor(Coord::new(x, 10)));
        }
        assert!(grid.is_wall(Coord::new(15, 10)));
        assert_eq!(grid.floor_count(), 4);
    }

    #[test]
    fn test_tunnel_every_direction() {
        for dir in Direction::ALL {
            let mut grid = Grid::new(20, 20);
            let anchor = Coord::new(10, 10);
            carve_tunnel(&mut grid, anchor, dir, 3);
            assert!(grid.is_wall(anchor));
            assert!(grid.is_floor(anchor.step(dir, 1)));
            assert!(grid.is_floor(anchor.step(dir, 3)));
            assert!(grid.is_wall(anchor.step(dir, -1)));
        }
    }

    #[test]
    fn test_zero_length_tunnel_carves_nothing() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(carve_tunnel(&mut grid, Coord::new(5, 5), Direction::North, 0), 0);
        assert!(!grid.has_floor());
    }

    #[test]
    fn test_doorway_opens_anchor() {
        let mut grid = Grid::new(10, 10);
        let anchor = Coord::new(5, 5);
        carve_tunnel(&mut grid, anchor, Direction::South, 2);
        assert!(open_doorway(&mut grid, anchor));
        assert!(grid.is_floor(anchor));
    }

    #[test]
    fn test_straight_shortcuts() {
        let mut grid = Grid::new(12, 12);
        assert!(carve_shortcut(&mut grid, Coord::new(3, 8), Coord::new(3, 3)));
        assert_eq!(grid.floor_count(), 6);
        assert!((3..=8).all(|y| grid.is_floor(Coord::new(3, y))));

        let mut grid = Grid::new(12, 12);
        assert!(carve_shortcut(&mut grid, Coord::new(2, 4), Coord::new(7, 4)));
        assert_eq!(grid.floor_count(), 6);
    }

    #[test]
    fn test_diagonal_shortcuts_are_staircases() {
        let mut grid = Grid::new(12, 12);
        assert!(carve_shortcut(&mut grid, Coord::new(7, 7), Coord::new(2, 2)));
        assert!(grid.is_floor(Coord::new(2, 2)));
        assert!(grid.is_floor(Coord::new(3, 2)));
        assert!(grid.is_floor(Coord::new(3, 3)));
        assert!(grid.is_floor(Coord::new(7, 7)));
        assert_eq!(grid.floor_count(), 11);
        assert!(is_connected(&grid));

        let mut grid = Grid::new(12, 12);
        assert!(carve_shortcut(&mut grid, Coord::new(2, 7), Coord::new(7, 2)));
        assert!(grid.is_floor(Coord::new(3, 7)));
        assert!(grid.is_floor(Coord::new(3, 6)));
        assert!(grid.is_floor(Coord::new(7, 2)));
        assert_eq!(grid.floor_count(), 11);
        assert!(is_connected(&grid));
    }

    #[test]
    fn test_unsupported_slope_carves_nothing() {
        let mut grid = Grid::new(12, 12);
        assert!(!carve_shortcut(&mut grid, Coord::new(1, 1), Coord::new(3, 6)));
        assert!(!grid.has_floor());
    }
}

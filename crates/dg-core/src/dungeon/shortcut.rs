//! Shortcut insertion
//!
//! After all rooms are in, look for floor tiles that are a few cells apart in
//! a straight line but far apart by walking, and dig a direct corridor
//! between them. Path distances come from a [`CostMap`] that must be rebuilt
//! after every carve.

#[cfg(not(feature = "std"))]
use crate::compat::*;

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

use crate::config::GeneratorConfig;
use crate::rng::GameRng;

use super::corridor::carve_shortcut;
use super::{Coord, Grid};

/// Walkability snapshot of a grid for pathfinding
#[derive(Debug, Clone)]
pub struct CostMap {
    walkable: Grid,
}

impl CostMap {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            walkable: grid.clone(),
        }
    }

    /// Resync with `grid` after it changed
    pub fn refresh(&mut self, grid: &Grid) {
        self.walkable.clone_from(grid);
    }

    pub fn is_walkable(&self, pos: Coord) -> bool {
        self.walkable.is_floor(pos)
    }

    /// Number of 4-directional steps on the shortest walkable path
    ///
    /// `None` if either end is blocked or no path exists.
    pub fn path_distance(&self, from: Coord, to: Coord) -> Option<usize> {
        if !self.is_walkable(from) || !self.is_walkable(to) {
            return None;
        }
        let start = self.walkable.index(from)?;
        let goal = self.walkable.index(to)?;

        let mut dist = vec![usize::MAX; self.walkable.width() * self.walkable.height()];
        let mut queue = VecDeque::new();
        dist[start] = 0;
        queue.push_back((from, start));

        while let Some((pos, here)) = queue.pop_front() {
            if here == goal {
                return Some(dist[here]);
            }
            for next in pos.neighbors4() {
                if self.is_walkable(next)
                    && let Some(i) = self.walkable.index(next)
                    && dist[i] == usize::MAX
                {
                    dist[i] = dist[here] + 1;
                    queue.push_back((next, i));
                }
            }
        }

        None
    }
}

/// A floor tile with at least one orthogonal wall neighbour
pub fn is_edge_floor(grid: &Grid, pos: Coord) -> bool {
    grid.is_floor(pos) && pos.neighbors4().any(|n| grid.is_wall(n))
}

/// Sample tiles until one is edge floor at least `reach + 1` cells from every border
///
/// Like the anchor search, the loop has no cap; `None` only when no such tile exists.
pub fn find_shortcut_origin(grid: &Grid, reach: usize, rng: &mut GameRng) -> Option<Coord> {
    let lo = reach as i32 + 1;
    let max_x = grid.width() as i32 - reach as i32 - 1;
    let max_y = grid.height() as i32 - reach as i32 - 1;
    if lo > max_x || lo > max_y {
        return None;
    }

    let exists =
        (lo..=max_y).any(|y| (lo..=max_x).any(|x| is_edge_floor(grid, Coord::new(x, y))));
    if !exists {
        return None;
    }

    loop {
        let pos = Coord::new(rng.range_inclusive(lo, max_x), rng.range_inclusive(lo, max_y));
        if is_edge_floor(grid, pos) {
            return Some(pos);
        }
    }
}

/// Try the 8 tiles `shortcut_length` away from `origin`, carving wherever the
/// walk between them is longer than `min_path_finding_distance`
///
/// `costs` is refreshed after each carve. Returns the number of shortcuts dug.
pub fn shortcuts_from(
    grid: &mut Grid,
    costs: &mut CostMap,
    origin: Coord,
    config: &GeneratorConfig,
) -> usize {
    let reach = config.shortcut_length as i32;
    let mut dug = 0;

    for ox in -1..=1 {
        for oy in -1..=1 {
            if ox == 0 && oy == 0 {
                continue;
            }
            let target = Coord::new(origin.x + ox * reach, origin.y + oy * reach);
            if !grid.is_floor(target) {
                continue;
            }
            let Some(distance) = costs.path_distance(origin, target) else {
                continue;
            };
            if distance > config.min_path_finding_distance && carve_shortcut(grid, origin, target) {
                log::trace!("shortcut {origin} -> {target} replaces a walk of {distance}");
                costs.refresh(grid);
                dug += 1;
            }
        }
    }

    dug
}

/// Run the shortcut pass over a finished dungeon
///
/// Returns the number of shortcuts dug.
pub fn add_shortcuts(grid: &mut Grid, config: &GeneratorConfig, rng: &mut GameRng) -> usize {
    let mut costs = CostMap::from_grid(grid);
    let mut dug = 0;

    for _ in 0..config.shortcut_attempts {
        let Some(origin) = find_shortcut_origin(grid, config.shortcut_length, rng) else {
            continue;
        };
        dug += shortcuts_from(grid, &mut costs, origin, config);
    }

    dug
}

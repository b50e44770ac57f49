//! Connected floor regions
//!
//! Flood fill over 4-adjacency with an explicit worklist, so cavern-sized
//! patterns never recurse.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use super::{Cell, Coord, Grid};

/// Collect every 4-connected floor region of `grid`, in row-major discovery order
pub fn floor_regions(grid: &Grid) -> Vec<Vec<Coord>> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for (i, start) in grid.coords().enumerate() {
        if !grid.is_floor(start) || visited[i] {
            continue;
        }

        let mut region = Vec::new();
        visited[i] = true;
        stack.push(start);

        while let Some(pos) = stack.pop() {
            region.push(pos);
            for next in pos.neighbors4() {
                if !grid.is_floor(next) {
                    continue;
                }
                if let Some(j) = grid.index(next)
                    && !visited[j]
                {
                    visited[j] = true;
                    stack.push(next);
                }
            }
        }

        regions.push(region);
    }

    regions
}

/// Keep only the largest floor region with at least `min_size` cells
///
/// Every other floor cell becomes wall. If no region is large enough the grid
/// ends up with no floor at all. Ties go to the region found first.
/// Returns the number of floor cells kept.
pub fn keep_largest_region(grid: &mut Grid, min_size: usize) -> usize {
    let regions = floor_regions(grid);

    let mut largest: Option<usize> = None;
    for (i, region) in regions.iter().enumerate() {
        if region.len() < min_size {
            continue;
        }
        if largest.is_none_or(|best| region.len() > regions[best].len()) {
            largest = Some(i);
        }
    }

    for (i, region) in regions.iter().enumerate() {
        if Some(i) == largest {
            continue;
        }
        for &pos in region {
            grid.set(pos, Cell::Wall);
        }
    }

    largest.map_or(0, |i| regions[i].len())
}

/// Check that all floor cells form a single region
pub fn is_connected(grid: &Grid) -> bool {
    floor_regions(grid).len() <= 1
}

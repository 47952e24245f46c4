mod breadth_first;
mod depth_first;
mod determinism;

use super::{Algorithm, Traversal};
use crate::grid::{CellKind, Coord, Grid};
use crate::path::is_contiguous;

/// Helper to parse a maze literal.
fn maze(text: &str) -> Grid {
    Grid::parse(text).unwrap_or_else(|e| panic!("bad test maze: {e}"))
}

/// Helper to create a coordinate.
fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

/// Helper to create a wall-free grid with arbitrary start and goal.
fn open_grid(rows: usize, cols: usize, start: Coord, goal: Coord) -> Grid {
    Grid::from_cells(vec![vec![CellKind::Floor; cols]; rows], start, goal)
        .unwrap_or_else(|e| panic!("bad open grid: {e}"))
}

/// Run `algorithm` between the grid's own start and goal.
fn solve(grid: &Grid, algorithm: Algorithm) -> Traversal {
    algorithm.run(grid, grid.start(), grid.goal())
}

/// Assert the path is a walkable, 4-connected start→goal walk.
fn assert_valid_path(grid: &Grid, path: &[Coord]) {
    assert_eq!(path.first(), Some(&grid.start()), "path must begin at start");
    assert_eq!(path.last(), Some(&grid.goal()), "path must end at goal");
    assert!(is_contiguous(path), "path has a jump: {path:?}");
    for &coord in path {
        assert!(grid.is_walkable(coord), "path crosses wall at {coord}");
    }
}

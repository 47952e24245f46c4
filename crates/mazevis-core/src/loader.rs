//! Maze files → solved [`MazeEntry`] values.
//!
//! Every file is read, parsed, and solved once per configured algorithm. Files
//! are independent, so they are processed in parallel; the report keeps the
//! input order. A file that fails is reported and skipped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Error, LoadError, LoadErrorReason};
use crate::grid::{Coord, Grid};
use crate::traversal::Algorithm;

/// Files tried when none are given on the command line.
pub const DEFAULT_MAZE_FILES: [&str; 3] = [
    "laberinto_1.in.txt",
    "laberinto_2.in.txt",
    "laberinto_3.in.txt",
];

/// One algorithm's precomputed result on a maze.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub visited: Vec<Coord>,
    pub path: Vec<Coord>,
    #[serde(skip)]
    visit_rank: HashMap<Coord, usize>,
    #[serde(skip)]
    path_rank: HashMap<Coord, usize>,
}

impl AlgorithmRun {
    pub fn solve(grid: &Grid, algorithm: Algorithm) -> Self {
        let traversal = algorithm.run(grid, grid.start(), grid.goal());
        let path = traversal.path();
        Self::new(algorithm, traversal.visited, path)
    }

    pub fn new(algorithm: Algorithm, visited: Vec<Coord>, path: Vec<Coord>) -> Self {
        let visit_rank = rank(&visited);
        let path_rank = rank(&path);
        Self {
            algorithm,
            visited,
            path,
            visit_rank,
            path_rank,
        }
    }

    /// Position of `coord` in the visited sequence.
    pub fn visit_rank(&self, coord: Coord) -> Option<usize> {
        self.visit_rank.get(&coord).copied()
    }

    /// Position of `coord` in the path.
    pub fn path_rank(&self, coord: Coord) -> Option<usize> {
        self.path_rank.get(&coord).copied()
    }

    pub fn found_goal(&self) -> bool {
        !self.path.is_empty()
    }
}

fn rank(seq: &[Coord]) -> HashMap<Coord, usize> {
    seq.iter().enumerate().map(|(i, &c)| (c, i)).collect()
}

/// A loaded maze and its runs, one per configured algorithm in cycle order.
#[derive(Debug, Clone)]
pub struct MazeEntry {
    pub source: PathBuf,
    pub grid: Grid,
    pub runs: Vec<AlgorithmRun>,
}

impl MazeEntry {
    pub fn new(source: impl Into<PathBuf>, grid: Grid, algorithms: &[Algorithm]) -> Self {
        let runs = algorithms
            .iter()
            .map(|&algorithm| AlgorithmRun::solve(&grid, algorithm))
            .collect();
        Self {
            source: source.into(),
            grid,
            runs,
        }
    }

    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }

    /// File name for titles and headers, falling back to the full path.
    pub fn name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

/// Read, parse, and solve a single maze file.
pub fn load_maze(path: &Path, algorithms: &[Algorithm]) -> Result<MazeEntry, LoadError> {
    let fail = |reason: LoadErrorReason| LoadError {
        path: path.to_path_buf(),
        reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| fail(e.into()))?;
    let grid = Grid::parse(&text).map_err(|e| fail(e.into()))?;
    let entry = MazeEntry::new(path, grid, algorithms);
    for run in &entry.runs {
        tracing::debug!(
            file = %path.display(),
            algorithm = %run.algorithm,
            visited = run.visited.len(),
            path = run.path.len(),
            "solved maze"
        );
    }
    Ok(entry)
}

/// Outcome of loading a batch of maze files.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub mazes: Vec<MazeEntry>,
    pub failures: Vec<LoadError>,
}

impl LoadReport {
    pub fn attempted(&self) -> usize {
        self.mazes.len() + self.failures.len()
    }

    /// The loaded mazes, or [`Error::NoMazesLoaded`] when none loaded.
    pub fn into_mazes(self) -> Result<Vec<MazeEntry>, Error> {
        if self.mazes.is_empty() {
            return Err(Error::NoMazesLoaded {
                attempted: self.attempted(),
            });
        }
        Ok(self.mazes)
    }
}

/// Load every path in parallel, keeping input order and skipping failures.
pub fn load_mazes<P: AsRef<Path> + Sync>(paths: &[P], algorithms: &[Algorithm]) -> LoadReport {
    let results: Vec<Result<MazeEntry, LoadError>> = paths
        .par_iter()
        .map(|p| load_maze(p.as_ref(), algorithms))
        .collect();

    let mut report = LoadReport::default();
    for result in results {
        match result {
            Ok(entry) => report.mazes.push(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping maze");
                report.failures.push(e);
            }
        }
    }
    tracing::debug!(
        loaded = report.mazes.len(),
        failed = report.failures.len(),
        "maze loading finished"
    );
    report
}

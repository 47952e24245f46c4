//! Tick-driven animation of precomputed traversal runs.
//!
//! The controller owns no clock. A driver calls [`AnimationController::tick`]
//! once per frame with the elapsed milliseconds and renders
//! [`AnimationController::snapshot`]. Each run is shown in three phases:
//!
//! ```text
//! Visiting ──(all visited shown)──▶ TracingPath ──(path shown)──▶ Holding
//!     │                                                            │
//!     └──────────────(empty path)──────────────────────────────────┘
//! ```
//!
//! When the hold expires the controller moves to the next algorithm, then the
//! next maze, and finally reports that everything has been shown.


use std::fmt;

use serde::Serialize;

use crate::delay::{StepDelays, TimingConfig};
use crate::error::Error;
use crate::grid::Coord;
use crate::loader::{AlgorithmRun, MazeEntry};
use crate::traversal::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Visiting,
    TracingPath,
    Holding,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Visiting => "visiting",
            Self::TracingPath => "tracing path",
            Self::Holding => "holding",
        })
    }
}

/// What a tick changed that the driver has to react to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Every run of every maze has been shown.
    pub finished: bool,
    /// The current maze changed during this tick.
    pub switched_maze: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub maze_index: usize,
    pub algorithm: Algorithm,
    pub phase: Phase,
    pub revealed_visited: &'a [Coord],
    pub revealed_path: &'a [Coord],
    /// Most recently revealed visited cell.
    pub active_visited: Option<Coord>,
    /// Most recently revealed path cell.
    pub active_path: Option<Coord>,
    pub finished: bool,
}

#[derive(Debug)]
pub struct AnimationController {
    mazes: Vec<MazeEntry>,
    algorithms: Vec<Algorithm>,
    timing: TimingConfig,
    delays: Vec<StepDelays>,
    maze_index: usize,
    algorithm_index: usize,
    phase: Phase,
    elapsed_ms: f64,
    revealed_visited: usize,
    revealed_path: usize,
    finished: bool,
}

impl AnimationController {
    /// Build a controller over `mazes`, cycling through `algorithms` in the
    /// given order on each maze.
    ///
    /// Each maze's runs are rearranged to follow `algorithms`; runs the loader
    /// did not compute are solved here.
    pub fn new(
        mazes: Vec<MazeEntry>,
        algorithms: Vec<Algorithm>,
        timing: TimingConfig,
    ) -> Result<Self, Error> {
        if mazes.is_empty() {
            return Err(Error::NoMazesLoaded { attempted: 0 });
        }
        if algorithms.is_empty() {
            return Err(Error::NoAlgorithms);
        }
        timing.validate()?;

        let mazes: Vec<MazeEntry> = mazes
            .into_iter()
            .map(|maze| align_runs(maze, &algorithms))
            .collect();
        let delays = mazes
            .iter()
            .map(|maze| StepDelays::for_runs(&maze.runs, &timing))
            .collect();

        let controller = Self {
            mazes,
            algorithms,
            timing,
            delays,
            maze_index: 0,
            algorithm_index: 0,
            phase: Phase::Visiting,
            elapsed_ms: 0.0,
            revealed_visited: 0,
            revealed_path: 0,
            finished: false,
        };
        controller.log_start();
        Ok(controller)
    }

    /// Advance the animation by `delta_ms`.
    ///
    /// Several cells may be revealed in one tick; time left over after a
    /// phase completes carries into the next phase of the same run. A hold
    /// expiring ends the tick.
    pub fn tick(&mut self, delta_ms: f64) -> TickOutcome {
        if self.finished {
            return TickOutcome {
                finished: true,
                switched_maze: false,
            };
        }
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }

        loop {
            match self.phase {
                Phase::Visiting => {
                    let total = self.current_run().visited.len();
                    let step = self.delays().visit_ms;
                    let shown = self.revealed_visited;
                    self.revealed_visited = self.reveal(shown, total, step);
                    if self.revealed_visited < total {
                        return TickOutcome::default();
                    }
                    self.phase = if self.current_run().path.is_empty() {
                        Phase::Holding
                    } else {
                        Phase::TracingPath
                    };
                }
                Phase::TracingPath => {
                    let total = self.current_run().path.len();
                    let step = self.delays().path_ms;
                    let shown = self.revealed_path;
                    self.revealed_path = self.reveal(shown, total, step);
                    if self.revealed_path < total {
                        return TickOutcome::default();
                    }
                    self.phase = Phase::Holding;
                }
                Phase::Holding => {
                    if self.elapsed_ms < self.timing.hold_ms {
                        return TickOutcome::default();
                    }
                    return self.finish_hold();
                }
            }
        }
    }

    /// Reveal as many elements as the accumulated time pays for.
    fn reveal(&mut self, mut revealed: usize, total: usize, step_ms: f64) -> usize {
        while revealed < total && self.elapsed_ms >= step_ms {
            revealed += 1;
            self.elapsed_ms -= step_ms;
        }
        revealed
    }

    fn finish_hold(&mut self) -> TickOutcome {
        if self.algorithm_index + 1 < self.algorithms.len() {
            self.algorithm_index += 1;
            self.reset();
            tracing::debug!(algorithm = %self.algorithm(), "next algorithm");
            TickOutcome::default()
        } else if self.maze_index + 1 < self.mazes.len() {
            self.maze_index += 1;
            self.algorithm_index = 0;
            self.reset();
            tracing::debug!(maze = %self.current_maze().name(), "next maze");
            TickOutcome {
                finished: false,
                switched_maze: true,
            }
        } else {
            // Final frame stays fully revealed.
            self.elapsed_ms = 0.0;
            self.finished = true;
            tracing::debug!("all mazes shown");
            TickOutcome {
                finished: true,
                switched_maze: false,
            }
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Visiting;
        self.elapsed_ms = 0.0;
        self.revealed_visited = 0;
        self.revealed_path = 0;
        self.finished = false;
    }

    /// Jump to `algorithm` on the current maze. Returns false when it is not
    /// one of the configured algorithms.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> bool {
        match self.algorithms.iter().position(|&a| a == algorithm) {
            Some(index) => {
                self.algorithm_index = index;
                self.reset();
                true
            }
            None => false,
        }
    }

    pub fn next_algorithm(&mut self) {
        self.algorithm_index = (self.algorithm_index + 1) % self.algorithms.len();
        self.reset();
    }

    pub fn previous_algorithm(&mut self) {
        let n = self.algorithms.len();
        self.algorithm_index = (self.algorithm_index + n - 1) % n;
        self.reset();
    }

    /// Jump to maze `index`, starting with the first configured algorithm.
    /// Out-of-range indices are rejected without changing anything.
    pub fn select_maze(&mut self, index: usize) -> bool {
        if index >= self.mazes.len() {
            return false;
        }
        self.maze_index = index;
        self.algorithm_index = 0;
        self.reset();
        true
    }

    pub fn next_maze(&mut self) -> bool {
        self.select_maze(self.maze_index + 1)
    }

    pub fn previous_maze(&mut self) -> bool {
        match self.maze_index.checked_sub(1) {
            Some(index) => self.select_maze(index),
            None => false,
        }
    }

    /// Replay the current run from the beginning.
    pub fn restart(&mut self) {
        self.reset();
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let run = self.current_run();
        let revealed_visited = &run.visited[..self.revealed_visited];
        let revealed_path = &run.path[..self.revealed_path];
        Snapshot {
            maze_index: self.maze_index,
            algorithm: self.algorithm(),
            phase: self.phase,
            revealed_visited,
            revealed_path,
            active_visited: revealed_visited.last().copied(),
            active_path: revealed_path.last().copied(),
            finished: self.finished,
        }
    }

    pub fn current_maze(&self) -> &MazeEntry {
        &self.mazes[self.maze_index]
    }

    pub fn current_run(&self) -> &AlgorithmRun {
        &self.current_maze().runs[self.algorithm_index]
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithms[self.algorithm_index]
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn maze_index(&self) -> usize {
        self.maze_index
    }

    pub fn maze_count(&self) -> usize {
        self.mazes.len()
    }

    pub fn mazes(&self) -> &[MazeEntry] {
        &self.mazes
    }

    /// Step delays of the current maze.
    pub fn delays(&self) -> StepDelays {
        self.delays[self.maze_index]
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn log_start(&self) {
        for (maze, delays) in self.mazes.iter().zip(&self.delays) {
            tracing::debug!(
                maze = %maze.name(),
                visit_ms = delays.visit_ms,
                path_ms = delays.path_ms,
                "step delays"
            );
        }
    }
}

/// Reorder (and complete) a maze's runs to match `algorithms`.
fn align_runs(mut maze: MazeEntry, algorithms: &[Algorithm]) -> MazeEntry {
    let mut available = std::mem::take(&mut maze.runs);
    maze.runs = algorithms
        .iter()
        .map(|&algorithm| match available.iter().position(|r| r.algorithm == algorithm) {
            Some(i) => available.swap_remove(i),
            None => AlgorithmRun::solve(&maze.grid, algorithm),
        })
        .collect();
    maze
}

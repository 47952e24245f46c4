//! Core of the maze visualizer: an immutable grid model, breadth-first and
//! depth-first traversal, path reconstruction from parent links, and the
//! tick-driven animation controller that sequences their presentation.
//!
//! Data flows one way: [`grid::Grid`] → [`traversal`] (per [`Algorithm`]) →
//! [`path`] → [`loader::MazeEntry`] → [`animation::AnimationController`].

pub mod animation;
pub mod delay;
pub mod error;
pub mod grid;
pub mod loader;
pub mod path;
pub mod traversal;

pub use animation::{AnimationController, Phase, Snapshot, TickOutcome};
pub use delay::{StepDelays, TimingConfig, step_delay};
pub use error::{CorruptPathError, Error, LoadError, LoadErrorReason, ParseError, Result};
pub use grid::{CellKind, Coord, Grid};
pub use loader::{
    AlgorithmRun, DEFAULT_MAZE_FILES, LoadReport, MazeEntry, load_maze, load_mazes,
};
pub use traversal::{Algorithm, NodeId, SearchNode, SearchTree, Traversal};

//! Error types for maze loading and animation setup.
//!
//! Only two conditions ever reach the user: a single maze file that could not
//! be loaded ([`LoadError`], recoverable) and an input set with no loadable
//! maze at all ([`Error::NoMazesLoaded`], fatal). An unreachable goal is not an
//! error anywhere in this crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Coord;
use crate::traversal::NodeId;

/// Result type for mazevis-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A single maze file failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// None of the given maze files could be loaded.
    #[error("no valid maze could be loaded ({attempted} file(s) tried)")]
    NoMazesLoaded { attempted: usize },

    /// The animation was configured without any algorithm to show.
    #[error("at least one traversal algorithm must be configured")]
    NoAlgorithms,

    /// Animation timing values are unusable.
    #[error("invalid animation timing: {0}")]
    InvalidTiming(String),
}

/// A maze file that could not be read or parsed.
#[derive(Debug, Error)]
#[error("{}: {reason}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub reason: LoadErrorReason,
}

/// Why a maze file failed to load.
#[derive(Debug, Error)]
pub enum LoadErrorReason {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Problems found in the maze text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty file")]
    Empty,

    #[error("invalid header '{0}': expected two integers 'rows cols'")]
    InvalidHeader(String),

    #[error("missing rows: expected {expected}, found {found}")]
    MissingRows { expected: usize, found: usize },

    #[error("row {row} has width {found}, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected character '{ch}' at {at}")]
    UnexpectedChar { ch: char, at: Coord },

    #[error("no start cell 'A'")]
    MissingStart,

    #[error("no goal cell 'B'")]
    MissingGoal,

    #[error("more than one start cell: {first} and {second}")]
    DuplicateStart { first: Coord, second: Coord },

    #[error("more than one goal cell: {first} and {second}")]
    DuplicateGoal { first: Coord, second: Coord },

    #[error("unexpected content after row {rows}")]
    ExtraRows { rows: usize },

    #[error("grid rows have different lengths")]
    NotRectangular,

    #[error("{what} coordinate {at} is outside the grid")]
    OutOfBounds { what: &'static str, at: Coord },
}

/// A parent-link tree that does not describe a path back to the start.
///
/// Only produced by a broken traversal; callers treat it as "no path".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptPathError {
    #[error("node {child} links to missing parent {parent}")]
    DanglingParent { child: NodeId, parent: NodeId },

    #[error("parent chain longer than the search tree ({nodes} nodes)")]
    Cycle { nodes: usize },

    #[error("path begins at {found}, expected start {expected}")]
    WrongRoot { expected: Coord, found: Coord },
}

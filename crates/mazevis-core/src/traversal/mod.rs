pub mod search;
pub mod tree;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grid::{Coord, Grid};
use crate::path;

pub use search::{breadth_first, depth_first};
pub use tree::{NodeId, SearchNode, SearchTree};

/// Which traversal to run. Both variants share one signature, see [`Algorithm::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BreadthFirst, Algorithm::DepthFirst];

    /// Search `grid` from `start` until `goal` leaves the frontier.
    pub fn run(self, grid: &Grid, start: Coord, goal: Coord) -> Traversal {
        match self {
            Self::BreadthFirst => breadth_first(grid, start, goal),
            Self::DepthFirst => depth_first(grid, start, goal),
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-first",
            Self::DepthFirst => "Depth-first (preorder)",
        }
    }

    /// Key used in the config file and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            other => Err(format!(
                "Unknown algorithm: {other}. Must be 'bfs' or 'dfs'."
            )),
        }
    }
}

/// Result of one traversal run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// The coordinate the search was started from.
    pub start: Coord,
    /// Coordinates in the order they were removed from the frontier.
    pub visited: Vec<Coord>,
    pub tree: SearchTree,
    /// The goal's node, or `None` when the goal is unreachable.
    pub goal_node: Option<NodeId>,
}

impl Traversal {
    pub fn found_goal(&self) -> bool {
        self.goal_node.is_some()
    }

    /// The start→goal path, empty when the goal was not reached.
    pub fn path(&self) -> Vec<Coord> {
        path::reconstruct_path(&self.tree, self.goal_node, self.start)
    }
}

use std::collections::{HashSet, VecDeque};

use crate::grid::{Coord, Grid};

use super::Traversal;
use super::tree::{NodeId, SearchTree};

/// Frontier discipline shared by both searches.
trait Frontier {
    fn push(&mut self, node: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
}

/// First in, first out.
impl Frontier for VecDeque<NodeId> {
    fn push(&mut self, node: NodeId) {
        self.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.pop_front()
    }
}

/// Last in, first out.
impl Frontier for Vec<NodeId> {
    fn push(&mut self, node: NodeId) {
        Vec::push(self, node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        Vec::pop(self)
    }
}

/// Breadth-first search from `start` until `goal` is dequeued.
///
/// Neighbors are expanded up, right, down, left. A coordinate is marked seen
/// when it is enqueued, so it is never queued twice; it enters the visited
/// sequence only when it is dequeued.
pub fn breadth_first(grid: &Grid, start: Coord, goal: Coord) -> Traversal {
    run(grid, start, goal, VecDeque::new(), false)
}

/// Iterative preorder depth-first search from `start` until `goal` is popped.
///
/// Neighbors are pushed left, down, right, up so that pops follow the same
/// up, right, down, left priority as a recursive preorder walk. Coordinates
/// are marked seen when pushed.
pub fn depth_first(grid: &Grid, start: Coord, goal: Coord) -> Traversal {
    run(grid, start, goal, Vec::new(), true)
}

fn run<F: Frontier>(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    mut frontier: F,
    reverse_neighbors: bool,
) -> Traversal {
    let mut tree = SearchTree::new(start);
    let mut seen: HashSet<Coord> = HashSet::from([start]);
    let mut visited = Vec::new();
    let mut goal_node = None;

    frontier.push(tree.root());

    while let Some(node) = frontier.pop() {
        let coord = tree.coord(node);
        visited.push(coord);
        if coord == goal {
            goal_node = Some(node);
            break;
        }

        let mut neighbors: Vec<Coord> = grid.neighbors(coord).collect();
        if reverse_neighbors {
            neighbors.reverse();
        }
        for next in neighbors {
            if seen.insert(next) {
                let child = tree.add_child(node, next);
                frontier.push(child);
            }
        }
    }

    Traversal {
        start,
        visited,
        tree,
        goal_node,
    }
}

use super::*;
use crate::traversal::NodeId;

#[test]
fn two_by_three_maze() {
    // Start (0,1) enqueues right (0,2), down (1,1), left (0,0); the goal is
    // the second cell dequeued after the start.
    let grid = maze("2 3\n1A1\n1B1\n");
    assert_eq!(grid.start(), c(0, 1));
    assert_eq!(grid.goal(), c(1, 1));

    let t = solve(&grid, Algorithm::BreadthFirst);
    assert_eq!(t.visited, vec![c(0, 1), c(0, 2), c(1, 1)]);
    assert_eq!(t.path(), vec![c(0, 1), c(1, 1)]);
}

#[test]
fn tree_records_children_in_discovery_order() {
    let grid = maze("2 3\n1A1\n1B1\n");
    let t = solve(&grid, Algorithm::BreadthFirst);

    // root, then (0,2), (1,1), (0,0) from the root, then (1,2) from (0,2).
    assert_eq!(t.tree.len(), 5);
    let root = t.tree.get(NodeId::ROOT).unwrap();
    assert_eq!(root.coord, c(0, 1));
    assert_eq!(root.parent, None);
    assert_eq!(root.children, vec![NodeId(1), NodeId(2), NodeId(3)]);

    let right = t.tree.get(NodeId(1)).unwrap();
    assert_eq!(right.coord, c(0, 2));
    assert_eq!(right.children, vec![NodeId(4)]);
    assert_eq!(t.tree.get(NodeId(4)).unwrap().coord, c(1, 2));

    assert_eq!(t.goal_node, Some(NodeId(2)));
}

#[test]
fn goal_left_of_start_is_visited_last() {
    // Up, right and down are all dequeued before the goal on the left.
    let grid = maze("3 3\n010\nBA1\n010\n");
    let t = solve(&grid, Algorithm::BreadthFirst);
    assert_eq!(t.visited, vec![c(1, 1), c(0, 1), c(1, 2), c(2, 1), c(1, 0)]);
    assert_eq!(t.path(), vec![c(1, 1), c(1, 0)]);
}

#[test]
fn unreachable_goal_visits_whole_component() {
    let grid = maze("3 3\nA01\n101\n00B\n");
    let t = solve(&grid, Algorithm::BreadthFirst);
    assert_eq!(t.visited, vec![c(0, 0), c(1, 0)]);
    assert_eq!(t.visited.len(), grid.reachable_count());
    assert!(!t.found_goal());
    assert!(t.path().is_empty());
}

#[test]
fn open_grid_path_is_manhattan_plus_one() {
    let grid = open_grid(4, 5, c(0, 0), c(3, 4));
    let t = solve(&grid, Algorithm::BreadthFirst);
    let path = t.path();
    assert_valid_path(&grid, &path);
    assert_eq!(path.len(), 3 + 4 + 1);
    // The far corner is the only cell at the maximum distance, so every
    // other cell is dequeued before it.
    assert_eq!(t.visited.len(), grid.reachable_count());
    assert_eq!(t.visited.len(), 20);
}

#[test]
fn shortest_path_around_a_wall() {
    let grid = maze("3 4\nA001\n1101\n111B\n");
    let t = solve(&grid, Algorithm::BreadthFirst);
    let path = t.path();
    assert_valid_path(&grid, &path);
    // (1,1) is dequeued before (2,0), so it becomes the parent of (2,1).
    assert_eq!(
        path,
        vec![c(0, 0), c(1, 0), c(1, 1), c(2, 1), c(2, 2), c(2, 3)]
    );
}

#[test]
fn start_equals_goal() {
    let grid = open_grid(3, 3, c(1, 1), c(1, 1));
    let t = solve(&grid, Algorithm::BreadthFirst);
    assert_eq!(t.visited, vec![c(1, 1)]);
    assert_eq!(t.path(), vec![c(1, 1)]);
    assert_eq!(t.tree.len(), 1);
}

#[test]
fn single_row_corridor() {
    let grid = maze("1 5\nA111B\n");
    let t = solve(&grid, Algorithm::BreadthFirst);
    assert_eq!(t.visited, vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(0, 4)]);
    assert_eq!(t.path(), t.visited);
}

#[test]
fn path_must_lead_back_to_requested_start() {
    let grid = maze("2 3\n1A1\n1B1\n");
    let mut t = solve(&grid, Algorithm::BreadthFirst);
    assert_eq!(t.start, c(0, 1));

    // A tree rooted elsewhere is rejected rather than yielding a partial path.
    t.start = c(0, 0);
    assert!(t.path().is_empty());
}

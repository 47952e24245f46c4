use super::*;

#[test]
fn two_by_three_maze() {
    // Pushed left, down, right: (0,2) pops first and discovers (1,2), but the
    // goal (1,1) was already claimed by the start when it was pushed.
    let grid = maze("2 3\n1A1\n1B1\n");
    let t = solve(&grid, Algorithm::DepthFirst);
    assert_eq!(t.visited, vec![c(0, 1), c(0, 2), c(1, 2), c(1, 1)]);
    assert_eq!(t.path(), vec![c(0, 1), c(1, 1)]);
}

#[test]
fn pops_follow_up_right_down_left_priority() {
    let grid = maze("3 3\n111\n1A1\n11B\n");
    let t = solve(&grid, Algorithm::DepthFirst);
    assert_eq!(
        t.visited,
        vec![c(1, 1), c(0, 1), c(0, 2), c(0, 0), c(1, 2), c(2, 2)]
    );
    assert_eq!(t.path(), vec![c(1, 1), c(1, 2), c(2, 2)]);
}

#[test]
fn goal_left_of_start_is_visited_last() {
    let grid = maze("3 3\n010\nBA1\n010\n");
    let t = solve(&grid, Algorithm::DepthFirst);
    assert_eq!(t.visited, vec![c(1, 1), c(0, 1), c(1, 2), c(2, 1), c(1, 0)]);
    assert_eq!(t.path(), vec![c(1, 1), c(1, 0)]);
}

#[test]
fn snake_corridor_path_equals_visited() {
    let grid = maze("3 3\nA11\n001\nB11\n");
    let t = solve(&grid, Algorithm::DepthFirst);
    let expected = vec![c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2), c(2, 1), c(2, 0)];
    assert_eq!(t.visited, expected);
    assert_eq!(t.path(), expected);
    assert_valid_path(&grid, &t.path());
}

#[test]
fn unreachable_goal_visits_whole_component() {
    let grid = maze("3 3\nA01\n101\n00B\n");
    let t = solve(&grid, Algorithm::DepthFirst);
    assert_eq!(t.visited, vec![c(0, 0), c(1, 0)]);
    assert_eq!(t.goal_node, None);
    assert!(t.path().is_empty());
}

#[test]
fn start_equals_goal() {
    let grid = open_grid(2, 2, c(0, 1), c(0, 1));
    let t = solve(&grid, Algorithm::DepthFirst);
    assert_eq!(t.visited, vec![c(0, 1)]);
    assert_eq!(t.path(), vec![c(0, 1)]);
}

#[test]
fn depth_first_path_may_be_longer_than_breadth_first() {
    let grid = open_grid(3, 3, c(1, 0), c(1, 2));
    let bfs = solve(&grid, Algorithm::BreadthFirst).path();
    let dfs = solve(&grid, Algorithm::DepthFirst).path();
    assert_eq!(bfs.len(), 3);
    assert_valid_path(&grid, &dfs);
    assert!(dfs.len() >= bfs.len());
}

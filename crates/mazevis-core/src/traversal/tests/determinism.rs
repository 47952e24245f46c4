use super::*;

/// Run a traversal many times and assert identical output.
fn assert_deterministic(grid: &Grid, algorithm: Algorithm, iterations: usize) {
    let reference = solve(grid, algorithm);
    for i in 1..iterations {
        let t = solve(grid, algorithm);
        assert_eq!(
            reference, t,
            "Non-deterministic {algorithm} result on iteration {i}"
        );
    }
}

#[test]
fn breadth_first_is_deterministic() {
    let grid = maze("5 6\nA10111\n110101\n011101\n010001\n01111B\n");
    assert_deterministic(&grid, Algorithm::BreadthFirst, 30);
}

#[test]
fn depth_first_is_deterministic() {
    let grid = maze("5 6\nA10111\n110101\n011101\n010001\n01111B\n");
    assert_deterministic(&grid, Algorithm::DepthFirst, 30);
}

#[test]
fn run_dispatches_to_matching_search() {
    let grid = maze("3 3\n111\n1A1\n11B\n");
    let start = grid.start();
    let goal = grid.goal();
    assert_eq!(
        Algorithm::BreadthFirst.run(&grid, start, goal),
        crate::traversal::breadth_first(&grid, start, goal)
    );
    assert_eq!(
        Algorithm::DepthFirst.run(&grid, start, goal),
        crate::traversal::depth_first(&grid, start, goal)
    );
}

#[test]
fn algorithm_names_parse_back() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.key().parse::<Algorithm>(), Ok(algorithm));
    }
    assert_eq!(
        "Breadth-First".parse::<Algorithm>(),
        Ok(Algorithm::BreadthFirst)
    );
    assert!("astar".parse::<Algorithm>().is_err());
}

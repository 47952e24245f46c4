use anyhow::Result;
use colored::Colorize;
use mazevis_core::{Algorithm, Coord, MazeEntry, load_mazes};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Traversal results for one maze, in the shape printed by `solve`.
#[derive(Debug, Serialize)]
struct SolveReport<'a> {
    file: String,
    rows: usize,
    cols: usize,
    start: Coord,
    goal: Coord,
    reachable: usize,
    dfs_preorder: &'a [Coord],
    dfs_path: &'a [Coord],
    bfs_order: &'a [Coord],
    bfs_path: &'a [Coord],
}

impl<'a> SolveReport<'a> {
    fn new(maze: &'a MazeEntry) -> Option<Self> {
        let dfs = maze.run(Algorithm::DepthFirst)?;
        let bfs = maze.run(Algorithm::BreadthFirst)?;
        Some(Self {
            file: maze.source.display().to_string(),
            rows: maze.grid.rows(),
            cols: maze.grid.cols(),
            start: maze.grid.start(),
            goal: maze.grid.goal(),
            reachable: maze.grid.reachable_count(),
            dfs_preorder: &dfs.visited,
            dfs_path: &dfs.path,
            bfs_order: &bfs.visited,
            bfs_path: &bfs.path,
        })
    }
}

pub fn run(files: Vec<PathBuf>, format: OutputFormat) -> Result<()> {
    let paths = super::maze_paths(files);
    let report = load_mazes(&paths, &Algorithm::ALL);
    super::print_load_failures(&report.failures);
    let mazes = report.into_mazes()?;

    let reports: Vec<SolveReport<'_>> = mazes.iter().filter_map(SolveReport::new).collect();
    match format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

fn render_text(reports: &[SolveReport<'_>]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("\n{}\n", format!("=== {} ===", report.file).bold()));
        let rows = [
            ("dfs_preorder", report.dfs_preorder),
            ("dfs_path", report.dfs_path),
            ("bfs_order", report.bfs_order),
            ("bfs_path", report.bfs_path),
        ];
        for (label, coords) in rows {
            out.push_str(&format!("{}: {}\n", label.cyan(), format_coords(coords)));
        }
    }
    out
}

/// `[(r,c), (r,c), ...]`
fn format_coords(coords: &[Coord]) -> String {
    let items: Vec<String> = coords.iter().map(Coord::to_string).collect();
    format!("[{}]", items.join(", "))
}

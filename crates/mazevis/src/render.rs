//! Painting of one animation frame: header, maze cells with visited and path
//! overlays, and the legend.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2, pos2, vec2};
use mazevis_core::{
    AlgorithmRun, AnimationController, CellKind, Coord, MazeEntry, Phase, Snapshot,
};

use crate::theme::Theme;

const MARGIN: f32 = 24.0;
const HEADER_HEIGHT: f32 = 96.0;
const INFO_WIDTH: f32 = 220.0;
const LEGEND_GAP: f32 = 28.0;
const LEGEND_SWATCH: f32 = 20.0;
const LEGEND_ROW: f32 = 26.0;
const FONT_SIZE: f32 = 16.0;

/// Pixel geometry of a maze window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub cell: f32,
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    pub fn new(rows: usize, cols: usize, cell: f32) -> Self {
        Self { cell, rows, cols }
    }

    pub fn for_maze(maze: &MazeEntry, cell: f32) -> Self {
        Self::new(maze.grid.rows(), maze.grid.cols(), cell)
    }

    /// Inner window size that fits the header, the maze and the legend.
    pub fn window_size(&self) -> Vec2 {
        vec2(
            self.cols as f32 * self.cell + MARGIN * 2.0 + INFO_WIDTH,
            self.rows as f32 * self.cell + MARGIN + HEADER_HEIGHT,
        )
    }

    pub fn cell_rect(&self, origin: Pos2, coord: Coord) -> Rect {
        Rect::from_min_size(
            pos2(
                origin.x + MARGIN + coord.col as f32 * self.cell,
                origin.y + HEADER_HEIGHT + coord.row as f32 * self.cell,
            ),
            Vec2::splat(self.cell),
        )
    }

    pub fn legend_origin(&self, origin: Pos2) -> Pos2 {
        pos2(
            origin.x + MARGIN + self.cols as f32 * self.cell + LEGEND_GAP,
            origin.y + HEADER_HEIGHT,
        )
    }
}

pub fn window_title(maze: &MazeEntry) -> String {
    format!("Maze Path Animation - {}", maze.name())
}

pub fn draw_frame(
    painter: &egui::Painter,
    rect: Rect,
    theme: &Theme,
    layout: &Layout,
    controller: &AnimationController,
) {
    let snapshot = controller.snapshot();
    painter.rect_filled(rect, 0.0, theme.background);
    draw_header(painter, rect.min, theme, header_lines(controller));
    draw_cells(
        painter,
        rect.min,
        theme,
        layout,
        controller.current_maze(),
        controller.current_run(),
        &snapshot,
    );
    draw_legend(painter, layout.legend_origin(rect.min), theme);
}

fn draw_header(painter: &egui::Painter, origin: Pos2, theme: &Theme, lines: Vec<String>) {
    let font = FontId::monospace(FONT_SIZE);
    let mut y = origin.y + MARGIN / 2.0;
    for line in lines {
        let galley = painter.layout_no_wrap(line, font.clone(), theme.text);
        let height = galley.rect.height();
        painter.galley(pos2(origin.x + MARGIN, y), galley, theme.text);
        y += height + 4.0;
    }
}

/// Text shown above the maze.
pub fn header_lines(controller: &AnimationController) -> Vec<String> {
    let maze = controller.current_maze();
    let run = controller.current_run();
    let snapshot = controller.snapshot();
    let mut lines = vec![format!(
        "{} | {} rows x {} cols | maze {}/{}",
        maze.source.display(),
        maze.grid.rows(),
        maze.grid.cols(),
        snapshot.maze_index + 1,
        controller.maze_count(),
    )];
    let state = if snapshot.finished {
        "done".to_string()
    } else {
        snapshot.phase.to_string()
    };
    lines.push(format!(
        "{}: {state} | visited {}/{}",
        run.algorithm.display_name(),
        snapshot.revealed_visited.len(),
        run.visited.len(),
    ));
    if run.path.is_empty() {
        if snapshot.phase == Phase::Holding {
            lines.push("Path: no solution".to_string());
        } else {
            lines.push("Path: searching".to_string());
        }
    } else {
        lines.push(format!(
            "Path: {} cells | progress {}/{}",
            run.path.len(),
            snapshot.revealed_path.len(),
            run.path.len(),
        ));
    }
    lines
}

fn draw_cells(
    painter: &egui::Painter,
    origin: Pos2,
    theme: &Theme,
    layout: &Layout,
    maze: &MazeEntry,
    run: &AlgorithmRun,
    snapshot: &Snapshot<'_>,
) {
    let visited_shown = snapshot.revealed_visited.len();
    let path_shown = snapshot.revealed_path.len();
    let grid_stroke = Stroke::new(1.0, theme.grid_line);

    for (coord, kind) in maze.grid.iter_cells() {
        let rect = layout.cell_rect(origin, coord);
        painter.rect_filled(rect, 0.0, base_color(theme, kind));

        let plain_floor = kind == CellKind::Floor;
        if plain_floor && run.visit_rank(coord).is_some_and(|r| r < visited_shown) {
            let color = if snapshot.active_visited == Some(coord) {
                theme.visited_active
            } else {
                theme.visited
            };
            let inset = (layout.cell / 6.0).max(1.0);
            painter.rect_filled(rect.shrink(inset), 2.0, Theme::with_opacity(color, 0.55));
        }

        if run.path_rank(coord).is_some_and(|r| r < path_shown) {
            let color = if snapshot.active_path == Some(coord) {
                theme.path_active
            } else {
                theme.path_trail
            };
            let shrink = (layout.cell / 3.0).max(10.0).min(layout.cell - 2.0);
            painter.rect_filled(rect.shrink(shrink / 2.0), 6.0, color);
        }

        painter.rect_stroke(rect, 0.0, grid_stroke, StrokeKind::Inside);
    }
}

fn base_color(theme: &Theme, kind: CellKind) -> egui::Color32 {
    match kind {
        CellKind::Wall => theme.wall,
        CellKind::Floor => theme.floor,
        CellKind::Start => theme.start,
        CellKind::Goal => theme.goal,
    }
}

fn draw_legend(painter: &egui::Painter, origin: Pos2, theme: &Theme) {
    let items = [
        ("Wall", theme.wall),
        ("Floor", theme.floor),
        ("Visited", theme.visited),
        ("Path", theme.path_trail),
        ("Start (A)", theme.start),
        ("Goal (B)", theme.goal),
    ];
    let font = FontId::proportional(FONT_SIZE);
    let mut y = origin.y;
    for (label, color) in items {
        let swatch = Rect::from_min_size(pos2(origin.x, y), Vec2::splat(LEGEND_SWATCH));
        painter.rect_filled(swatch, 0.0, color);
        painter.rect_stroke(
            swatch,
            0.0,
            Stroke::new(1.0, theme.grid_line),
            StrokeKind::Inside,
        );
        painter.text(
            pos2(swatch.right() + 8.0, y - 1.0),
            Align2::LEFT_TOP,
            label,
            font.clone(),
            theme.info,
        );
        y += LEGEND_ROW;
    }

    y += LEGEND_ROW / 2.0;
    let keys = [
        "B / D   algorithm",
        "Tab     next algorithm",
        "N / ->  next maze",
        "P / <-  previous maze",
        "R       restart",
        "Q / Esc quit",
    ];
    let key_font = FontId::monospace(FONT_SIZE * 0.8);
    for line in keys {
        painter.text(
            pos2(origin.x, y),
            Align2::LEFT_TOP,
            line,
            key_font.clone(),
            theme.info,
        );
        y += LEGEND_ROW * 0.8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazevis_core::{Algorithm, Grid, TimingConfig};

    fn controller(text: &str) -> AnimationController {
        let grid = Grid::parse(text).unwrap();
        let maze = MazeEntry::new("dir/cross.in.txt", grid, &Algorithm::ALL);
        AnimationController::new(vec![maze], Algorithm::ALL.to_vec(), TimingConfig::default())
            .unwrap()
    }

    #[test]
    fn window_fits_maze_and_legend() {
        let layout = Layout::new(3, 5, 48.0);
        assert_eq!(
            layout.window_size(),
            vec2(5.0 * 48.0 + 48.0 + 220.0, 3.0 * 48.0 + 24.0 + 96.0)
        );
    }

    #[test]
    fn cells_are_placed_below_header() {
        let layout = Layout::new(3, 3, 10.0);
        let rect = layout.cell_rect(Pos2::ZERO, Coord::new(2, 1));
        assert_eq!(rect.min, pos2(MARGIN + 10.0, HEADER_HEIGHT + 20.0));
        assert_eq!(rect.size(), vec2(10.0, 10.0));
        assert!(layout.legend_origin(Pos2::ZERO).x > rect.max.x);
    }

    #[test]
    fn title_uses_file_name() {
        let c = controller("1 2\nAB\n");
        assert_eq!(window_title(c.current_maze()), "Maze Path Animation - cross.in.txt");
    }

    #[test]
    fn header_reports_progress() {
        let mut c = controller("3 3\n010\nBA1\n010\n");
        c.tick(c.delays().visit_ms * 2.0);
        let lines = header_lines(&c);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("3 rows x 3 cols"));
        assert!(lines[0].contains("maze 1/1"));
        assert!(lines[1].starts_with("Breadth-first: visiting"));
        assert!(lines[1].contains("visited 2/5"));
        assert!(lines[2].contains("progress 0/2"));
    }

    #[test]
    fn header_reports_missing_path() {
        let mut c = controller("1 3\nA0B\n");
        c.tick(c.delays().visit_ms);
        let lines = header_lines(&c);
        assert_eq!(lines[2], "Path: no solution");
    }
}

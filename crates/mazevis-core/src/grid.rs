use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A cell position as (row, column), both zero-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in `dir`. Returns `None` when the step would leave the
    /// non-negative quadrant; the upper bounds are the grid's business.
    pub fn step(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Self { row, ..self }),
            Direction::Right => Some(Self {
                col: self.col + 1,
                ..self
            }),
            Direction::Down => Some(Self {
                row: self.row + 1,
                ..self
            }),
            Direction::Left => self.col.checked_sub(1).map(|col| Self { col, ..self }),
        }
    }

    pub fn manhattan_to(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one unit move away.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan_to(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The four unit moves, in neighbor expansion priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in expansion priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellKind {
    Wall,
    Floor,
    Start,
    Goal,
}

impl CellKind {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Wall),
            '1' => Some(Self::Floor),
            'A' => Some(Self::Start),
            'B' => Some(Self::Goal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Wall => '0',
            Self::Floor => '1',
            Self::Start => 'A',
            Self::Goal => 'B',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// A rectangular maze with one start and one goal cell.
///
/// Immutable once built; every traversal borrows it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<CellKind>>,
    cols: usize,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Parse the maze text format:
    ///
    /// ```text
    /// 2 3
    /// 1A1
    /// 1B1
    /// ```
    ///
    /// A header line `rows cols`, then exactly `rows` lines of `cols`
    /// characters from `0` (wall), `1` (floor), `A` (start), `B` (goal).
    /// Surrounding whitespace on each line is ignored, as are trailing blank
    /// lines.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text.lines();

        let header = lines.next().map(str::trim).unwrap_or_default();
        if header.is_empty() {
            return Err(ParseError::Empty);
        }
        let (rows, cols) = parse_header(header)?;

        // The header is untrusted; grow as rows actually arrive.
        let mut cells = Vec::new();
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;

        for row in 0..rows {
            let line = lines.next().ok_or(ParseError::MissingRows {
                expected: rows,
                found: row,
            })?;
            let line = line.trim();
            let width = line.chars().count();
            if width != cols {
                return Err(ParseError::RowWidth {
                    row,
                    found: width,
                    expected: cols,
                });
            }

            let mut parsed = Vec::with_capacity(cols);
            for (col, ch) in line.chars().enumerate() {
                let at = Coord::new(row, col);
                let kind = CellKind::from_char(ch).ok_or(ParseError::UnexpectedChar { ch, at })?;
                match kind {
                    CellKind::Start => {
                        if let Some(first) = start {
                            return Err(ParseError::DuplicateStart { first, second: at });
                        }
                        start = Some(at);
                    }
                    CellKind::Goal => {
                        if let Some(first) = goal {
                            return Err(ParseError::DuplicateGoal { first, second: at });
                        }
                        goal = Some(at);
                    }
                    CellKind::Wall | CellKind::Floor => {}
                }
                parsed.push(kind);
            }
            cells.push(parsed);
        }

        if lines.any(|l| !l.trim().is_empty()) {
            return Err(ParseError::ExtraRows { rows });
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        let goal = goal.ok_or(ParseError::MissingGoal)?;

        Ok(Self {
            cells,
            cols,
            start,
            goal,
        })
    }

    /// Build a grid from already-classified cells.
    ///
    /// `start` and `goal` only need to be in bounds: they may coincide and
    /// need not match the `Start`/`Goal` cell kinds, which is what tests use
    /// to search between arbitrary cells.
    pub fn from_cells(cells: Vec<Vec<CellKind>>, start: Coord, goal: Coord) -> Result<Self, ParseError> {
        let cols = cells.first().map_or(0, Vec::len);
        if cells.iter().any(|r| r.len() != cols) {
            return Err(ParseError::NotRectangular);
        }
        let grid = Self {
            cells,
            cols,
            start,
            goal,
        };
        if !grid.contains(start) {
            return Err(ParseError::OutOfBounds {
                what: "start",
                at: start,
            });
        }
        if !grid.contains(goal) {
            return Err(ParseError::OutOfBounds {
                what: "goal",
                at: goal,
            });
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows() && coord.col < self.cols
    }

    pub fn cell(&self, coord: Coord) -> Option<CellKind> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    pub fn is_walkable(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(CellKind::is_walkable)
    }

    /// Walkable neighbors of `coord` in the fixed order up, right, down, left.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| coord.step(dir))
            .filter(|&n| self.is_walkable(n))
    }

    /// Every cell with its coordinate, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &kind)| (Coord::new(row, col), kind))
        })
    }

    /// Number of cells reachable from the start, the start included.
    pub fn reachable_count(&self) -> usize {
        let mut seen = HashSet::from([self.start]);
        let mut queue = VecDeque::from([self.start]);
        while let Some(c) = queue.pop_front() {
            for n in self.neighbors(c) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen.len()
    }
}

impl fmt::Display for Grid {
    /// Writes the grid back in the text format it was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows(), self.cols)?;
        for row in &self.cells {
            let line: String = row.iter().map(|k| k.as_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), ParseError> {
    let invalid = || ParseError::InvalidHeader(header.to_string());
    let mut parts = header.split_whitespace();
    let rows = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let cols = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_small_maze() {
        let grid = Grid::parse("2 3\n1A1\n1B1\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.start(), Coord::new(0, 1));
        assert_eq!(grid.goal(), Coord::new(1, 1));
        assert_eq!(grid.cell(Coord::new(0, 0)), Some(CellKind::Floor));
        assert_eq!(grid.cell(Coord::new(2, 0)), None);
    }

    #[test]
    fn tolerates_crlf_and_trailing_blank_lines() {
        let grid = Grid::parse("1 3\r\nA0B\r\n\r\n\n").unwrap();
        assert_eq!(grid.cell(Coord::new(0, 1)), Some(CellKind::Wall));
    }

    #[test]
    fn display_round_trips_text_format() {
        let text = "3 4\n0A10\n0110\n01B0\n";
        let grid = Grid::parse(text).unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn empty_input() {
        assert_eq!(Grid::parse(""), Err(ParseError::Empty));
        assert_eq!(Grid::parse("   \nA1B"), Err(ParseError::Empty));
    }

    #[test]
    fn bad_header() {
        assert!(matches!(
            Grid::parse("two 3\n"),
            Err(ParseError::InvalidHeader(_))
        ));
        assert!(matches!(
            Grid::parse("2\n"),
            Err(ParseError::InvalidHeader(_))
        ));
        assert!(matches!(
            Grid::parse("2 3 4\n"),
            Err(ParseError::InvalidHeader(_))
        ));
    }

    #[test]
    fn missing_rows() {
        assert_eq!(
            Grid::parse("3 2\nA1\n1B\n"),
            Err(ParseError::MissingRows {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn huge_row_count_is_missing_rows() {
        assert_eq!(
            Grid::parse("99999999999999999 1\nA\n"),
            Err(ParseError::MissingRows {
                expected: 99_999_999_999_999_999,
                found: 1
            })
        );
    }

    #[test]
    fn wrong_row_width() {
        assert_eq!(
            Grid::parse("2 3\nA11\n1B\n"),
            Err(ParseError::RowWidth {
                row: 1,
                found: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            Grid::parse("1 3\nAxB\n"),
            Err(ParseError::UnexpectedChar {
                ch: 'x',
                at: Coord::new(0, 1)
            })
        );
    }

    #[test]
    fn missing_start_or_goal() {
        assert_eq!(Grid::parse("1 2\n1B\n"), Err(ParseError::MissingStart));
        assert_eq!(Grid::parse("1 2\nA1\n"), Err(ParseError::MissingGoal));
    }

    #[test]
    fn duplicate_markers() {
        assert_eq!(
            Grid::parse("1 3\nAAB\n"),
            Err(ParseError::DuplicateStart {
                first: Coord::new(0, 0),
                second: Coord::new(0, 1)
            })
        );
        assert!(matches!(
            Grid::parse("1 3\nABB\n"),
            Err(ParseError::DuplicateGoal { .. })
        ));
    }

    #[test]
    fn extra_rows_rejected() {
        assert_eq!(
            Grid::parse("1 2\nAB\n11\n"),
            Err(ParseError::ExtraRows { rows: 1 })
        );
    }

    #[test]
    fn neighbors_in_priority_order_skip_walls_and_edges() {
        let grid = Grid::parse("3 3\n111\n0A1\n1B1\n").unwrap();
        let n: Vec<Coord> = grid.neighbors(Coord::new(1, 1)).collect();
        assert_eq!(
            n,
            vec![Coord::new(0, 1), Coord::new(1, 2), Coord::new(2, 1)]
        );
        let corner: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(0, 1)]);
    }

    #[test]
    fn from_cells_validates_shape_and_bounds() {
        use CellKind::*;
        let ragged = vec![vec![Floor, Floor], vec![Floor]];
        assert_eq!(
            Grid::from_cells(ragged, Coord::new(0, 0), Coord::new(0, 1)),
            Err(ParseError::NotRectangular)
        );
        let square = vec![vec![Floor; 2]; 2];
        assert!(matches!(
            Grid::from_cells(square.clone(), Coord::new(0, 0), Coord::new(2, 0)),
            Err(ParseError::OutOfBounds { what: "goal", .. })
        ));
        let same = Grid::from_cells(square, Coord::new(1, 1), Coord::new(1, 1)).unwrap();
        assert_eq!(same.start(), same.goal());
    }

    #[test]
    fn reachable_count_stops_at_walls() {
        let grid = Grid::parse("3 3\nA01\n101\n00B\n").unwrap();
        assert_eq!(grid.reachable_count(), 2);
    }
}

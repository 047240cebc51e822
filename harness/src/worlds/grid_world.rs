//! `GridWorld`: 4-neighbour movement over an ASCII terrain map.
//!
//! # Map format
//!
//! ```text
//! S..#
//! .9.#
//! ...G
//! ```
//!
//! - `#` wall (not enterable)
//! - `S` start (exactly one), `G` goal (at least one)
//! - `.` open ground, entry cost 1
//! - `1`–`9` weighted ground, entry cost equals the digit
//!
//! Moving into a cell costs that cell's entry cost. `S` and `G` cost 1.

use wayfinder_search::{Cost, Edge, SearchProblem};

use crate::contract::SearchWorld;

/// Error when parsing a grid map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("map is empty")]
    Empty,
    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },
    #[error("map has no start cell")]
    MissingStart,
    #[error("map has more than one start cell")]
    DuplicateStart,
    #[error("map has no goal cell")]
    MissingGoal,
}

/// A grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

/// A single-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    North,
    East,
    South,
    West,
}

impl Move {
    /// Enumeration order of successors.
    pub const ALL: [Move; 4] = [Move::North, Move::East, Move::South, Move::West];

    fn label(self) -> &'static str {
        match self {
            Move::North => "N",
            Move::East => "E",
            Move::South => "S",
            Move::West => "W",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terrain {
    Wall,
    Open(Cost),
    Goal,
}

/// Parsed terrain map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    width: usize,
    height: usize,
    cells: Vec<Terrain>,
    start: Pos,
}

impl GridWorld {
    /// Parse a map. Leading/trailing blank lines are ignored; rows are
    /// trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError`] for empty, ragged, or malformed maps.
    pub fn parse(map: &str) -> Result<Self, GridParseError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(GridParseError::Empty);
        };
        let width = first.chars().count();

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut has_goal = false;
        for (row, line) in rows.iter().enumerate() {
            let row_width = line.chars().count();
            if row_width != width {
                return Err(GridParseError::RaggedRow {
                    row,
                    width: row_width,
                    expected: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let terrain = match ch {
                    '#' => Terrain::Wall,
                    '.' => Terrain::Open(1),
                    'S' => {
                        if start.replace(Pos { row, col }).is_some() {
                            return Err(GridParseError::DuplicateStart);
                        }
                        Terrain::Open(1)
                    }
                    'G' => {
                        has_goal = true;
                        Terrain::Goal
                    }
                    '1'..='9' => Terrain::Open(Cost::from(ch.to_digit(10).unwrap_or(1))),
                    other => {
                        return Err(GridParseError::UnknownCell { ch: other, row, col });
                    }
                };
                cells.push(terrain);
            }
        }

        let start = start.ok_or(GridParseError::MissingStart)?;
        if !has_goal {
            return Err(GridParseError::MissingGoal);
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
            start,
        })
    }

    /// Open ground of the given size with start top-left and goal
    /// bottom-right. Used for scaling benchmarks.
    ///
    /// # Panics
    ///
    /// Panics if `side < 2`.
    #[must_use]
    pub fn open_square(side: usize) -> Self {
        assert!(side >= 2, "open_square needs side >= 2");
        let mut cells = vec![Terrain::Open(1); side * side];
        cells[side * side - 1] = Terrain::Goal;
        Self {
            width: side,
            height: side,
            cells,
            start: Pos { row: 0, col: 0 },
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Positions outside the map read as walls.
    fn terrain(&self, pos: Pos) -> Terrain {
        if pos.row >= self.height || pos.col >= self.width {
            return Terrain::Wall;
        }
        self.cells
            .get(pos.row * self.width + pos.col)
            .copied()
            .unwrap_or(Terrain::Wall)
    }

    fn step(&self, pos: Pos, mv: Move) -> Option<Pos> {
        let (row, col) = match mv {
            Move::North => (pos.row.checked_sub(1)?, pos.col),
            Move::East => (pos.row, pos.col + 1),
            Move::South => (pos.row + 1, pos.col),
            Move::West => (pos.row, pos.col.checked_sub(1)?),
        };
        (row < self.height && col < self.width).then_some(Pos { row, col })
    }
}

impl SearchProblem for GridWorld {
    type State = Pos;
    type Action = Move;

    fn start_state(&self) -> Pos {
        self.start
    }

    fn is_end(&self, state: &Pos) -> bool {
        self.terrain(*state) == Terrain::Goal
    }

    fn succ_and_cost(&self, state: &Pos) -> Vec<Edge<Pos, Move>> {
        Move::ALL
            .iter()
            .filter_map(|&mv| {
                let next = self.step(*state, mv)?;
                match self.terrain(next) {
                    Terrain::Wall => None,
                    Terrain::Open(cost) => Some(Edge::new(mv, next, cost)),
                    Terrain::Goal => Some(Edge::new(mv, next, 1)),
                }
            })
            .collect()
    }
}

impl SearchWorld for GridWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grid_world"
    }

    fn action_label(&self, action: &Move) -> String {
        action.label().to_string()
    }
}

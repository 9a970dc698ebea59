use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A 1-based (row, column) coordinate on the maze grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub fn new(row: i64, col: i64) -> Self {
        Cell { row, col }
    }

    /// Manhattan distance, saturating so that garbage coordinates cannot overflow
    pub fn manhattan(&self, other: &Cell) -> u64 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// The four orthogonal neighbours in search order: up, down, left, right.
    ///
    /// This order is the solver's tie-break between equally short paths, so
    /// changing it changes which path gets written to solution files.
    /// Steps that would overflow `i64` are skipped.
    pub fn neighbors(&self) -> impl Iterator<Item = Cell> {
        let (row, col) = (self.row, self.col);
        [
            row.checked_sub(1).map(|r| Cell::new(r, col)),
            row.checked_add(1).map(|r| Cell::new(r, col)),
            col.checked_sub(1).map(|c| Cell::new(row, c)),
            col.checked_add(1).map(|c| Cell::new(row, c)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::encode_cell(*self))
    }
}

#[derive(Debug, Error)]
pub enum MalformedGridError {
    #[error("invalid maze json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must be positive, got {value}")]
    Dimension { field: &'static str, value: i64 },
    #[error("`{field}` must be a [row, col] pair, got {len} values")]
    Coordinate { field: &'static str, len: usize },
}

/// Maze file record, exactly as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRecord {
    pub width: i64,
    pub height: i64,
    pub start: Vec<i64>,
    pub end: Vec<i64>,
    pub walls: Vec<Vec<i64>>,
}

/// Immutable maze description: dimensions, wall set, start and end cells.
///
/// `start` and `end` may coincide and may even be walls; the solver and the
/// validator treat that as an unsolvable maze rather than a load failure.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i64,
    height: i64,
    start: Cell,
    end: Cell,
    walls: HashSet<Cell>,
}

impl Grid {
    /// Create a grid. Panics on non-positive dimensions; untrusted input goes
    /// through [`Grid::try_from`] instead.
    pub fn new(width: i64, height: i64, start: Cell, end: Cell, walls: &[Cell]) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Grid {
            width,
            height,
            start,
            end,
            walls: walls.iter().copied().collect(),
        }
    }

    /// Parse a maze from its JSON text
    pub fn from_json_str(json: &str) -> Result<Self, MalformedGridError> {
        let record: GridRecord = serde_json::from_str(json)?;
        Grid::try_from(record)
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn walls(&self) -> &HashSet<Cell> {
        &self.walls
    }

    /// Check if a cell lies inside `[1, height] x [1, width]`
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (1..=self.height).contains(&cell.row) && (1..=self.width).contains(&cell.col)
    }

    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// In bounds and not a wall
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }

    /// Text view of the grid, one line per row, with an optional path overlay
    pub fn render(&self, path: &[Cell]) -> String {
        let on_path: HashSet<Cell> = path.iter().copied().collect();
        let mut result = String::new();
        for row in 1..=self.height {
            for col in 1..=self.width {
                let cell = Cell::new(row, col);
                let symbol = if self.is_wall(cell) {
                    '#'
                } else if cell == self.start {
                    'S'
                } else if cell == self.end {
                    'E'
                } else if on_path.contains(&cell) {
                    '*'
                } else {
                    '.'
                };
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

impl TryFrom<GridRecord> for Grid {
    type Error = MalformedGridError;

    fn try_from(record: GridRecord) -> Result<Self, Self::Error> {
        if record.width <= 0 {
            return Err(MalformedGridError::Dimension {
                field: "width",
                value: record.width,
            });
        }
        if record.height <= 0 {
            return Err(MalformedGridError::Dimension {
                field: "height",
                value: record.height,
            });
        }

        let start = pair_to_cell("start", &record.start)?;
        let end = pair_to_cell("end", &record.end)?;
        let walls = record
            .walls
            .iter()
            .map(|wall| pair_to_cell("walls", wall))
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Grid {
            width: record.width,
            height: record.height,
            start,
            end,
            walls,
        })
    }
}

fn pair_to_cell(field: &'static str, pair: &[i64]) -> Result<Cell, MalformedGridError> {
    match pair {
        [row, col] => Ok(Cell::new(*row, *col)),
        _ => Err(MalformedGridError::Coordinate {
            field,
            len: pair.len(),
        }),
    }
}

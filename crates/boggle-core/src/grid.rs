//! The board's grid state

use crate::cell::{Cell, Position, BOARD_WIDTH, CELL_COUNT};
use crate::normalize::normalize;
use crate::protocol::SolveRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside the {width}x{width} board", width = BOARD_WIDTH)]
    OutOfBounds { row: usize, col: usize },
    #[error("board string must have {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// A square board of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a board with every cell empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a row-major board string such as `"ABCDEFGHIJKLMNOP"`.
    ///
    /// Every character goes through [`normalize`], so lowercase letters are
    /// accepted and anything else becomes an empty cell.
    pub fn from_string(s: &str) -> GridResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(GridError::WrongLength {
                expected: CELL_COUNT,
                actual: chars.len(),
            });
        }
        let mut grid = Self::new();
        for (cell, c) in grid.cells.iter_mut().zip(chars) {
            *cell = normalize(&c.to_string());
        }
        Ok(grid)
    }

    fn check(row: usize, col: usize) -> GridResult<Position> {
        let pos = Position::new(row, col);
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(GridError::OutOfBounds { row, col })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> GridResult<Cell> {
        let pos = Self::check(row, col)?;
        Ok(self.cells[pos.index()])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> GridResult<()> {
        let pos = Self::check(row, col)?;
        self.cells[pos.index()] = value;
        Ok(())
    }

    /// Cell at `pos`, or `None` if it is off the board
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        pos.is_valid().then(|| self.cells[pos.index()])
    }

    /// Point-in-time copy of every cell, row-major, for a solve request
    pub fn snapshot(&self) -> SolveRequest {
        SolveRequest::new(self.cells.to_vec())
    }

    /// Overwrite every cell with values from `provider`, called once per
    /// cell in row-major order
    pub fn fill_all<F>(&mut self, mut provider: F)
    where
        F: FnMut() -> Cell,
    {
        for cell in self.cells.iter_mut() {
            *cell = provider();
        }
    }

    /// Iterate over `(position, cell)` pairs in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().zip(self.cells.iter().copied())
    }

    /// True when no cell holds the empty sentinel
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Row-major board string, the inverse of [`Grid::from_string`]
    pub fn to_string_compact(&self) -> String {
        self.cells.iter().map(Cell::as_char).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_WIDTH) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

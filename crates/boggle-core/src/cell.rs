use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the (square) board
pub const BOARD_WIDTH: usize = 4;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Character used for a cell with no letter entered
pub const EMPTY_CHAR: char = '-';

/// A position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position for a row-major index, if it lies on the board
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::new(index / BOARD_WIDTH, index % BOARD_WIDTH))
    }

    /// Row-major index of this position
    pub fn index(&self) -> usize {
        self.row * BOARD_WIDTH + self.col
    }

    pub fn is_valid(&self) -> bool {
        self.row < BOARD_WIDTH && self.col < BOARD_WIDTH
    }

    /// All board positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position::new(i / BOARD_WIDTH, i % BOARD_WIDTH))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// Contents of a single board cell: an uppercase ASCII letter or empty.
///
/// The only constructors are [`Cell::EMPTY`] and [`Cell::letter`], so a
/// `Cell` can never hold anything else. Serialized as a one-character string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Cell(Option<u8>);

impl Cell {
    pub const EMPTY: Cell = Cell(None);

    /// Cell holding `letter`, which must already be uppercase A-Z
    pub fn letter(letter: char) -> Option<Self> {
        letter
            .is_ascii_uppercase()
            .then(|| Cell(Some(letter as u8)))
    }

    /// Cell for the `index`th letter of the alphabet (0 = 'A')
    pub(crate) fn from_alphabet_index(index: u8) -> Option<Self> {
        (index < 26).then(|| Cell(Some(b'A' + index)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_char(&self) -> char {
        self.0.map(char::from).unwrap_or(EMPTY_CHAR)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.as_char().to_string()
    }
}

impl TryFrom<String> for Cell {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(EMPTY_CHAR), None) => Ok(Cell::EMPTY),
            (Some(c), None) => Cell::letter(c).ok_or_else(|| format!("invalid cell value {:?}", value)),
            _ => Err(format!("invalid cell value {:?}", value)),
        }
    }
}

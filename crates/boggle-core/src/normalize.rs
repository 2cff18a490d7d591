//! Canonicalization of user-entered cell values

use crate::cell::Cell;

/// Normalize raw user input into a cell value.
///
/// The input is uppercased first; anything that is not then exactly one
/// character in `'A'..='Z'` becomes [`Cell::EMPTY`]. Never fails.
pub fn normalize(raw: &str) -> Cell {
    let upper = raw.to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Cell::letter(c).unwrap_or(Cell::EMPTY),
        _ => Cell::EMPTY,
    }
}

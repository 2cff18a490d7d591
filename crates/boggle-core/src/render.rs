//! Projection of board state onto a display

use crate::grid::Grid;
use crate::protocol::RESULTS_HEADER;
use serde::{Deserialize, Serialize};

/// Something that can show the board, the word list and failures.
///
/// Implementations hold no board state of their own; each call redraws its
/// part of the display in full.
pub trait Renderer {
    /// Write every cell's value at its position
    fn render_grid(&mut self, grid: &Grid);

    /// Replace the results panel with `words`, in the order given
    fn render_words(&mut self, words: &[String]);

    /// Show a failure message the user has to acknowledge
    fn render_error(&mut self, message: &str);
}

/// Contents of the results panel: a header then one entry per word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsPanel {
    pub header: String,
    pub entries: Vec<String>,
}

impl ResultsPanel {
    pub fn new(words: &[String]) -> Self {
        Self {
            header: RESULTS_HEADER.to_string(),
            entries: words.to_vec(),
        }
    }

    /// Header followed by each entry, one per line
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(self.entries.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_keeps_order_and_duplicates() {
        let words = vec!["CATS".to_string(), "CAT".to_string(), "CAT".to_string()];
        let panel = ResultsPanel::new(&words);
        assert_eq!(panel.header, "Matching Words");
        assert_eq!(panel.entries, words);
        let lines: Vec<_> = panel.lines().collect();
        assert_eq!(lines, vec!["Matching Words", "CATS", "CAT", "CAT"]);
    }

    #[test]
    fn test_empty_panel_is_header_only() {
        let panel = ResultsPanel::new(&[]);
        assert_eq!(panel.lines().count(), 1);
    }
}

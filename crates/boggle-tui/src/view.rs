use boggle_core::{Grid, Renderer, ResultsPanel, BOARD_WIDTH, EMPTY_CHAR};
use std::collections::VecDeque;

/// What the terminal currently shows, redrawn from here every frame
#[derive(Debug, Clone)]
pub struct TerminalView {
    /// Cell text, indexed `[row][col]`
    pub cells: [[char; BOARD_WIDTH]; BOARD_WIDTH],
    /// Last word list received
    pub results: Option<ResultsPanel>,
    /// Failure messages awaiting acknowledgement, oldest first
    notifications: VecDeque<String>,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            cells: [[EMPTY_CHAR; BOARD_WIDTH]; BOARD_WIDTH],
            results: None,
            notifications: VecDeque::new(),
        }
    }
}

impl TerminalView {
    /// The notification currently on screen
    pub fn notification(&self) -> Option<&str> {
        self.notifications.front().map(String::as_str)
    }

    /// Notifications queued behind the one on screen
    pub fn queued_notifications(&self) -> usize {
        self.notifications.len().saturating_sub(1)
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_front();
    }

    pub fn is_blocked(&self) -> bool {
        !self.notifications.is_empty()
    }
}

impl Renderer for TerminalView {
    fn render_grid(&mut self, grid: &Grid) {
        for (pos, cell) in grid.cells() {
            self.cells[pos.row][pos.col] = cell.as_char();
        }
    }

    fn render_words(&mut self, words: &[String]) {
        self.results = Some(ResultsPanel::new(words));
    }

    fn render_error(&mut self, message: &str) {
        self.notifications.push_back(message.to_string());
    }
}

use crate::theme::Theme;
use crate::view::TerminalView;
use boggle_core::{Board, Grid, Position, Randomizer, SolveBackend, SolveOutcome, SolveState, BOARD_WIDTH};
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// A finished solve request reported back from its worker thread
type Completion = (u64, SolveOutcome);

/// The main application state
pub struct App {
    /// The session's board, rendering into the terminal view
    pub board: Board<TerminalView>,
    /// Currently selected cell
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Solve service URL
    solve_url: String,
    backend: Arc<dyn SolveBackend>,
    completions_tx: Sender<Completion>,
    completions_rx: Receiver<Completion>,
}

impl App {
    pub fn new(grid: Grid, randomizer: Randomizer, backend: Arc<dyn SolveBackend>, solve_url: String) -> Self {
        let (completions_tx, completions_rx) = unbounded();
        Self {
            board: Board::with_grid(grid, randomizer, TerminalView::default()),
            cursor: Position::new(0, 0),
            theme: Theme::default(),
            solve_url,
            backend,
            completions_tx,
            completions_rx,
        }
    }

    pub fn view(&self) -> &TerminalView {
        self.board.renderer()
    }

    pub fn get_tick_rate(&self) -> Duration {
        if self.board.state() == SolveState::Requesting {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(200)
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // A pending notification swallows everything until acknowledged
        if self.view().is_blocked() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.board.renderer_mut().dismiss_notification();
            }
            return AppAction::Continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') if ctrl => self.board.randomize(),
            KeyCode::Enter => self.solve(),
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Backspace | KeyCode::Delete => self.edit("-"),
            KeyCode::Char(c) if !ctrl => {
                self.edit(&c.to_string());
                self.advance_cursor();
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn edit(&mut self, raw: &str) {
        // The cursor never leaves the board, so this cannot fail
        let _ = self.board.edit_cell(self.cursor.row, self.cursor.col, raw);
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let max = BOARD_WIDTH as i32 - 1;
        let row = (self.cursor.row as i32 + row_delta).clamp(0, max) as usize;
        let col = (self.cursor.col as i32 + col_delta).clamp(0, max) as usize;
        self.cursor = Position::new(row, col);
    }

    /// Step to the next cell in row-major order, stopping at the last one
    fn advance_cursor(&mut self) {
        if let Some(next) = Position::from_index(self.cursor.index() + 1) {
            self.cursor = next;
        }
    }

    /// Snapshot the board and send it off on a worker thread
    pub fn solve(&mut self) {
        let pending = self.board.begin_solve(&self.solve_url);
        let backend = Arc::clone(&self.backend);
        let tx = self.completions_tx.clone();

        thread::spawn(move || {
            let outcome = pending.run(backend.as_ref());
            // The receiver lives as long as the app; a send error means we are shutting down
            let _ = tx.send((pending.id, outcome));
        });
    }

    /// Apply any solve results that have arrived, in arrival order
    pub fn tick(&mut self) {
        while let Ok((id, outcome)) = self.completions_rx.try_recv() {
            let state = self.board.complete_solve(id, outcome);
            debug!(id, ?state, "applied solve completion");
        }
    }

    /// Block until every outstanding request has been applied
    pub fn wait_for_solves(&mut self) {
        while self.board.in_flight() > 0 {
            match self.completions_rx.recv() {
                Ok((id, outcome)) => {
                    self.board.complete_solve(id, outcome);
                }
                Err(_) => break,
            }
        }
    }

    pub fn status_line(&self) -> String {
        match self.board.state() {
            SolveState::Requesting => format!("Solving... ({} in flight)", self.board.in_flight()),
            _ => "Ready".to_string(),
        }
    }
}

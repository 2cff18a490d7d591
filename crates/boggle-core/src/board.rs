//! Board controller tying grid state, input and solving to a renderer

use crate::backend::SolveBackend;
use crate::cell::{Cell, Position};
use crate::grid::{Grid, GridResult};
use crate::normalize::normalize;
use crate::protocol::{SolveOutcome, SolveRequest};
use crate::random::Randomizer;
use crate::render::Renderer;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Where the solve client is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// No request outstanding
    Idle,
    /// At least one request is waiting on the service
    Requesting,
    /// A request finished and its words were rendered
    Succeeded,
    /// A request failed and the user was notified
    Failed,
}

/// A solve request that has been captured but not yet answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSolve {
    pub id: u64,
    pub endpoint: String,
    pub request: SolveRequest,
}

impl PendingSolve {
    /// Send the request through `backend`, blocking until it resolves
    pub fn run(&self, backend: &dyn SolveBackend) -> SolveOutcome {
        debug!(id = self.id, backend = backend.backend_name(), "sending solve request");
        backend.solve(&self.endpoint, &self.request).into()
    }
}

/// The single board of a session.
///
/// Every mutation goes through here and is followed by a full redraw of the
/// affected part of the display.
pub struct Board<R: Renderer> {
    grid: Grid,
    randomizer: Randomizer,
    renderer: R,
    in_flight: BTreeSet<u64>,
    next_call: u64,
}

impl<R: Renderer> Board<R> {
    /// Create an empty board and draw it
    pub fn new(renderer: R) -> Self {
        Self::with_grid(Grid::new(), Randomizer::new(), renderer)
    }

    /// Create a board from an existing grid and draw it
    pub fn with_grid(grid: Grid, randomizer: Randomizer, mut renderer: R) -> Self {
        renderer.render_grid(&grid);
        Self {
            grid,
            randomizer,
            renderer,
            in_flight: BTreeSet::new(),
            next_call: 1,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Store the normalized form of `raw` at `(row, col)`
    pub fn edit_cell(&mut self, row: usize, col: usize, raw: &str) -> GridResult<Cell> {
        let cell = normalize(raw);
        self.grid.set(row, col, cell)?;
        debug!(pos = %Position::new(row, col), raw, value = %cell, "cell edited");
        self.renderer.render_grid(&self.grid);
        Ok(cell)
    }

    /// Fill the whole board with random letters
    pub fn randomize(&mut self) {
        self.randomizer.randomize_board(&mut self.grid);
        self.renderer.render_grid(&self.grid);
    }

    /// Snapshot the board and register a new outstanding request.
    ///
    /// Later edits do not affect the returned request.
    pub fn begin_solve(&mut self, endpoint: &str) -> PendingSolve {
        let id = self.next_call;
        self.next_call += 1;
        self.in_flight.insert(id);

        let request = self.grid.snapshot();
        info!(
            id,
            endpoint,
            board = %self.grid.to_string_compact(),
            in_flight = self.in_flight.len(),
            "solve requested"
        );
        PendingSolve {
            id,
            endpoint: endpoint.to_string(),
            request,
        }
    }

    /// Render the outcome of request `id` and return the state it ended in.
    ///
    /// Completions are rendered in arrival order, so the last request to
    /// finish owns the display. A failure leaves the results panel as it was.
    pub fn complete_solve(&mut self, id: u64, outcome: SolveOutcome) -> SolveState {
        if !self.in_flight.remove(&id) {
            warn!(id, "ignoring completion for unknown solve request");
            return self.state();
        }

        match outcome {
            SolveOutcome::Success(words) => {
                info!(id, count = words.len(), "solve succeeded");
                debug!(id, words = ?words, "words");
                self.renderer.render_words(&words);
                SolveState::Succeeded
            }
            SolveOutcome::Failure(message) => {
                warn!(id, %message, "solve failed");
                self.renderer.render_error(&message);
                SolveState::Failed
            }
        }
    }

    /// Run a whole solve cycle on the calling thread
    pub fn solve_with(&mut self, backend: &dyn SolveBackend, endpoint: &str) -> SolveState {
        let pending = self.begin_solve(endpoint);
        let outcome = pending.run(backend);
        self.complete_solve(pending.id, outcome)
    }

    /// Current state of the solve client
    pub fn state(&self) -> SolveState {
        if self.in_flight.is_empty() {
            SolveState::Idle
        } else {
            SolveState::Requesting
        }
    }

    /// Number of requests still waiting on the service
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockSolver;
    use crate::protocol::SolveError;
    use crate::render::ResultsPanel;

    #[derive(Default)]
    struct Recorder {
        board: String,
        grid_renders: usize,
        results: Option<ResultsPanel>,
        errors: Vec<String>,
    }

    impl Renderer for Recorder {
        fn render_grid(&mut self, grid: &Grid) {
            self.board = grid.to_string_compact();
            self.grid_renders += 1;
        }

        fn render_words(&mut self, words: &[String]) {
            self.results = Some(ResultsPanel::new(words));
        }

        fn render_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    fn board() -> Board<Recorder> {
        Board::with_grid(Grid::new(), Randomizer::with_seed(1), Recorder::default())
    }

    #[test]
    fn test_new_board_is_drawn() {
        let board = board();
        assert_eq!(board.renderer().grid_renders, 1);
        assert_eq!(board.renderer().board, "----------------");
        assert_eq!(board.state(), SolveState::Idle);
    }

    #[test]
    fn test_edit_cell_normalizes_and_redraws() {
        let mut board = board();
        assert_eq!(board.edit_cell(0, 1, "q").unwrap().as_char(), 'Q');
        assert_eq!(board.renderer().board, "-Q--------------");

        assert!(board.edit_cell(0, 1, "qu").unwrap().is_empty());
        assert_eq!(board.renderer().board, "----------------");
        assert_eq!(board.renderer().grid_renders, 3);
    }

    #[test]
    fn test_edit_out_of_bounds_leaves_board_alone() {
        let mut board = board();
        assert!(board.edit_cell(4, 0, "A").is_err());
        assert_eq!(board.renderer().grid_renders, 1);
    }

    #[test]
    fn test_randomize_redraws_full_board() {
        let mut board = board();
        board.randomize();
        assert!(board.grid().is_full());
        assert_eq!(board.renderer().board, board.grid().to_string_compact());
    }

    #[test]
    fn test_state_machine() {
        let mut board = board();
        let pending = board.begin_solve("/solve");
        assert_eq!(board.state(), SolveState::Requesting);

        let state = board.complete_solve(pending.id, SolveOutcome::Success(vec![]));
        assert_eq!(state, SolveState::Succeeded);
        assert_eq!(board.state(), SolveState::Idle);

        let pending = board.begin_solve("/solve");
        let state = board.complete_solve(pending.id, SolveOutcome::Failure("Error: x".into()));
        assert_eq!(state, SolveState::Failed);
        assert_eq!(board.state(), SolveState::Idle);
    }

    #[test]
    fn test_snapshot_taken_before_later_edits() {
        let mut board = board();
        board.edit_cell(0, 0, "c").unwrap();
        let pending = board.begin_solve("/solve");
        board.edit_cell(0, 0, "d").unwrap();
        assert_eq!(pending.request.cells()[0].as_char(), 'C');
    }

    #[test]
    fn test_concurrent_solves_last_to_complete_wins() {
        let mut board = board();
        let first = board.begin_solve("/solve");
        let second = board.begin_solve("/solve");
        assert_ne!(first.id, second.id);
        assert_eq!(board.in_flight(), 2);

        board.complete_solve(second.id, SolveOutcome::Success(vec!["SECOND".into()]));
        assert_eq!(board.state(), SolveState::Requesting);
        board.complete_solve(first.id, SolveOutcome::Success(vec!["FIRST".into()]));
        assert_eq!(board.state(), SolveState::Idle);

        assert_eq!(board.renderer().results.as_ref().unwrap().entries, vec!["FIRST"]);
    }

    #[test]
    fn test_unknown_completion_is_ignored() {
        let mut board = board();
        assert_eq!(board.complete_solve(42, SolveOutcome::Success(vec!["X".into()])), SolveState::Idle);
        assert!(board.renderer().results.is_none());
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut board = board();
        let mock = MockSolver::with_words(&["CAT", "CATS"]);
        assert_eq!(board.solve_with(&mock, "/solve"), SolveState::Succeeded);

        mock.set_response(Err(SolveError::Status {
            status: 500,
            body: "server error".into(),
        }));
        assert_eq!(board.solve_with(&mock, "/solve"), SolveState::Failed);

        let recorder = board.renderer();
        assert_eq!(recorder.errors.len(), 1);
        assert!(recorder.errors[0].contains("server error"));
        assert_eq!(recorder.results.as_ref().unwrap().entries, vec!["CAT", "CATS"]);
    }

    #[test]
    fn test_missing_endpoint_is_a_failed_solve() {
        let mut board = board();
        let mock = MockSolver::with_words(&["CAT"]);
        assert_eq!(board.solve_with(&mock, ""), SolveState::Failed);
        assert_eq!(board.renderer().errors, vec!["Error: no solve URL configured"]);
        assert_eq!(board.state(), SolveState::Idle);
    }
}

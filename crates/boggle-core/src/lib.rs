//! Client-side controller for a Boggle board.
//!
//! Holds the 4x4 grid of letters, cleans up what the user types into a cell,
//! fills the board with random letters, and speaks the JSON protocol of the
//! remote solve service. Front ends plug in through [`Renderer`] and, for
//! blocking transports, [`SolveBackend`].

pub mod backend;
pub mod board;
pub mod cell;
pub mod grid;
pub mod normalize;
pub mod protocol;
pub mod random;
pub mod render;

pub use backend::{MockSolver, SolveBackend};
pub use board::{Board, PendingSolve, SolveState};
pub use cell::{Cell, Position, BOARD_WIDTH, CELL_COUNT, EMPTY_CHAR};
pub use grid::{Grid, GridError, GridResult};
pub use normalize::normalize;
pub use protocol::{
    check_endpoint, parse_solve_response, SolveError, SolveOutcome, SolveRequest, SolveResult,
    RESULTS_HEADER,
};
pub use random::Randomizer;
pub use render::{Renderer, ResultsPanel};

//! Wire format shared with the remote solve service.
//!
//! A request is the board as a JSON array of one-character strings in
//! row-major order. A successful (2xx) response is a JSON array of words;
//! any other status carries raw diagnostic text in its body.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header shown above the word list in the results panel
pub const RESULTS_HEADER: &str = "Matching Words";

/// Board snapshot submitted to the solve service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolveRequest {
    cells: Vec<Cell>,
}

impl SolveRequest {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// JSON request body
    pub fn to_json(&self) -> SolveResult<String> {
        serde_json::to_string(self).map_err(|e| SolveError::Transport(e.to_string()))
    }
}

pub type SolveResult<T> = Result<T, SolveError>;

/// Ways a solve round trip can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No solve endpoint was configured
    #[error("no solve URL configured")]
    MissingEndpoint,
    /// The request never produced a response
    #[error("{0}")]
    Transport(String),
    /// The service answered with a non-success status
    #[error("{body}")]
    Status { status: u16, body: String },
    /// A success response whose body is not a list of words
    #[error("malformed response: {0}")]
    MalformedBody(String),
}

impl SolveError {
    /// Text for the user-facing failure notification
    pub fn user_message(&self) -> String {
        format!("Error: {}", self)
    }
}

/// Result of one solve call, as handed back to the board controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Success(Vec<String>),
    Failure(String),
}

impl From<SolveResult<Vec<String>>> for SolveOutcome {
    fn from(result: SolveResult<Vec<String>>) -> Self {
        match result {
            Ok(words) => SolveOutcome::Success(words),
            Err(e) => SolveOutcome::Failure(e.user_message()),
        }
    }
}

/// Turn an HTTP status and body into the list of words found
pub fn parse_solve_response(status: u16, body: &str) -> SolveResult<Vec<String>> {
    if !(200..300).contains(&status) {
        return Err(SolveError::Status {
            status,
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| SolveError::MalformedBody(e.to_string()))
}

/// Check the configured endpoint before a request goes out
pub fn check_endpoint(endpoint: &str) -> SolveResult<&str> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        Err(SolveError::MissingEndpoint)
    } else {
        Ok(endpoint)
    }
}

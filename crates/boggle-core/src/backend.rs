//! Blocking solve transports

use crate::protocol::{check_endpoint, SolveError, SolveRequest, SolveResult};
use std::sync::Mutex;

/// A way of sending a board to the solve service and getting words back.
///
/// Calls block until the service answers; front ends run them off the UI
/// thread.
pub trait SolveBackend: Send + Sync {
    fn solve(&self, endpoint: &str, request: &SolveRequest) -> SolveResult<Vec<String>>;

    /// Human-readable name for this backend
    fn backend_name(&self) -> &'static str;
}

/// In-memory solve service for tests
pub struct MockSolver {
    response: Mutex<SolveResult<Vec<String>>>,
    requests: Mutex<Vec<SolveRequest>>,
}

impl MockSolver {
    /// A mock that answers every request with `words`
    pub fn with_words(words: &[&str]) -> Self {
        Self::new(Ok(words.iter().map(|w| w.to_string()).collect()))
    }

    /// A mock that fails every request with `error`
    pub fn failing(error: SolveError) -> Self {
        Self::new(Err(error))
    }

    fn new(response: SolveResult<Vec<String>>) -> Self {
        Self {
            response: Mutex::new(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Change the canned response for later requests
    pub fn set_response(&self, response: SolveResult<Vec<String>>) {
        *self.response.lock().unwrap() = response;
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<SolveRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SolveBackend for MockSolver {
    fn solve(&self, endpoint: &str, request: &SolveRequest) -> SolveResult<Vec<String>> {
        check_endpoint(endpoint)?;
        self.requests.lock().unwrap().push(request.clone());
        self.response.lock().unwrap().clone()
    }

    fn backend_name(&self) -> &'static str {
        "Mock"
    }
}

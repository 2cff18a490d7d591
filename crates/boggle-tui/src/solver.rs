use boggle_core::{check_endpoint, parse_solve_response, SolveBackend, SolveError, SolveRequest, SolveResult};
use reqwest::blocking::Client;

/// Solve service reached over HTTP
pub struct HttpSolver {
    client: Client,
}

impl HttpSolver {
    /// Build a client with no request timeout; a slow service just leaves the
    /// request outstanding
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().timeout(None).build()?;
        Ok(Self { client })
    }
}

impl SolveBackend for HttpSolver {
    fn solve(&self, endpoint: &str, request: &SolveRequest) -> SolveResult<Vec<String>> {
        let url = check_endpoint(endpoint)?;

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .map_err(|e| SolveError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| SolveError::Transport(e.to_string()))?;

        parse_solve_response(status, &body)
    }

    fn backend_name(&self) -> &'static str {
        "HTTP"
    }
}

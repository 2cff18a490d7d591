mod app;
mod config;
mod logging;
mod render;
mod solver;
mod theme;
mod view;

use anyhow::{Context, Result};
use app::App;
use boggle_core::{Grid, Randomizer, SolveBackend, SolveState};
use clap::Parser;
use config::Args;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use solver::HttpSolver;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    if args.once {
        logging::init_stderr();
    } else {
        let path = logging::init_file()?;
        info!(log = %path.display(), "logging to file");
    }

    let grid = match args.board.as_deref() {
        Some(board) => Grid::from_string(board).context("invalid --board")?,
        None => Grid::new(),
    };
    let randomizer = match args.seed {
        Some(seed) => Randomizer::with_seed(seed),
        None => Randomizer::new(),
    };
    let backend: Arc<dyn SolveBackend> =
        Arc::new(HttpSolver::new().context("building HTTP client")?);

    info!(solve_url = %args.solve_url, backend = backend.backend_name(), "starting");
    let mut app = App::new(grid, randomizer, backend, args.solve_url.clone());

    if args.once {
        return run_once(&mut app, &args);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result?;
    Ok(ExitCode::SUCCESS)
}

/// Solve a single board without the terminal UI
fn run_once(app: &mut App, args: &Args) -> Result<ExitCode> {
    if args.board.is_none() {
        app.board.randomize();
    }

    app.solve();
    app.wait_for_solves();

    print!("{}", once_report(app, args.json)?);
    if let Some(message) = app.view().notification() {
        eprintln!("{}", message);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Stdout for a one-shot run. With `json` it holds only the results panel,
/// so the output stays parseable.
fn once_report(app: &App, json: bool) -> Result<String> {
    let results = app.view().results.as_ref();
    if json {
        return Ok(match results {
            Some(panel) => format!("{}\n", serde_json::to_string_pretty(panel)?),
            None => String::new(),
        });
    }

    let mut out = app.board.grid().to_string();
    if let Some(panel) = results {
        out.push('\n');
        for line in panel.lines() {
            out.push_str(line);
            out.push('\n');
        }
    }
    Ok(out)
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        // Render
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout so solve results get picked up
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    if app.board.state() == SolveState::Requesting {
        info!(in_flight = app.board.in_flight(), "quitting with solve requests outstanding");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boggle_core::{MockSolver, SolveError};

    fn solved_app(mock: MockSolver) -> App {
        let grid = Grid::from_string("CATSxxxx--------").unwrap();
        let mut app = App::new(grid, Randomizer::with_seed(1), Arc::new(mock), "/boggle/solve".to_string());
        app.solve();
        app.wait_for_solves();
        app
    }

    #[test]
    fn test_json_report_is_only_the_panel() {
        let app = solved_app(MockSolver::with_words(&["CAT", "CATS"]));
        let report = once_report(&app, true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["header"], "Matching Words");
        assert_eq!(value["entries"], serde_json::json!(["CAT", "CATS"]));
    }

    #[test]
    fn test_text_report_shows_board_then_words() {
        let app = solved_app(MockSolver::with_words(&["CAT"]));
        let report = once_report(&app, false).unwrap();

        assert!(report.starts_with("C A T S\nX X X X\n"));
        assert!(report.ends_with("\nMatching Words\nCAT\n"));
    }

    #[test]
    fn test_failed_json_report_is_empty() {
        let app = solved_app(MockSolver::failing(SolveError::Status {
            status: 500,
            body: "server error".into(),
        }));
        assert_eq!(once_report(&app, true).unwrap(), "");
        assert_eq!(app.view().notification(), Some("Error: server error"));
    }
}

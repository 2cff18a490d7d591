//! WebAssembly controller for the Boggle board page
//!
//! Drives a page containing a board table (`#board_table` by default, with
//! a `data-solve_url` attribute), one element per cell with id
//! `cell_<row>_<col>`, a `#results` container, and `#randomize` / `#solve`
//! buttons.

use boggle_core::{Board, Position, Randomizer, SolveOutcome, SolveState};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::Document;

mod dom;
mod fetch;
mod logging;

// WASM tests require wasm-pack test to run
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use dom::{cell_id, DomRenderer, PageIds};

type SharedBoard = Rc<RefCell<Board<DomRenderer>>>;

// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// Snapshot the board, fetch its words and render the outcome.
///
/// The board is only borrowed before and after the request, so the page
/// stays usable (and can start more solves) while it is outstanding.
async fn run_solve(board: SharedBoard, endpoint: String) -> SolveState {
    let pending = board.borrow_mut().begin_solve(&endpoint);
    let outcome: SolveOutcome = fetch::fetch_words(&pending).await.into();
    board.borrow_mut().complete_solve(pending.id, outcome)
}

/// Prompt for a new value for one cell; cancelling leaves it untouched
fn prompt_cell(board: &SharedBoard, pos: Position) -> Result<(), JsValue> {
    if let Some(raw) = dom::prompt_letter()? {
        board
            .borrow_mut()
            .edit_cell(pos.row, pos.col, &raw)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
    }
    Ok(())
}

/// The board controller exported to the page
#[wasm_bindgen]
pub struct BoggleBoard {
    board: SharedBoard,
    document: Document,
    ids: PageIds,
}

#[wasm_bindgen]
impl BoggleBoard {
    /// Create a controller for the board whose table has id `table_id`.
    ///
    /// Cells start with whatever letters the page already shows.
    #[wasm_bindgen(constructor)]
    pub fn new(table_id: &str) -> Result<BoggleBoard, JsValue> {
        let document = dom::document()?;
        document
            .get_element_by_id(table_id)
            .ok_or("Board table not found")?;

        let ids = PageIds::new(table_id);
        let grid = dom::read_grid(&document);
        let renderer = DomRenderer::new(document.clone(), &ids);
        let board = Board::with_grid(grid, Randomizer::new(), renderer);

        Ok(BoggleBoard {
            board: Rc::new(RefCell::new(board)),
            document,
            ids,
        })
    }

    /// Bind click handlers to every cell and to the randomize/solve buttons
    #[wasm_bindgen]
    pub fn attach(&self) -> Result<(), JsValue> {
        for pos in Position::all() {
            let Some(el) = self.document.get_element_by_id(&cell_id(pos)) else {
                warn!(id = %cell_id(pos), "board cell missing from page");
                continue;
            };
            let board = Rc::clone(&self.board);
            let handler = Closure::wrap(Box::new(move || {
                if let Err(e) = prompt_cell(&board, pos) {
                    warn!(error = ?e, %pos, "cell edit failed");
                }
            }) as Box<dyn FnMut()>);
            el.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            handler.forget();
        }

        if let Some(button) = self.document.get_element_by_id(&self.ids.randomize) {
            let board = Rc::clone(&self.board);
            let handler = Closure::wrap(Box::new(move || {
                board.borrow_mut().randomize();
            }) as Box<dyn FnMut()>);
            button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            handler.forget();
        }

        if let Some(button) = self.document.get_element_by_id(&self.ids.solve) {
            let board = Rc::clone(&self.board);
            let document = self.document.clone();
            let table_id = self.ids.table.clone();
            let handler = Closure::wrap(Box::new(move || {
                let endpoint = dom::solve_url(&document, &table_id);
                let board = Rc::clone(&board);
                spawn_local(async move {
                    run_solve(board, endpoint).await;
                });
            }) as Box<dyn FnMut()>);
            button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            handler.forget();
        }

        Ok(())
    }

    /// Prompt the user for the value of one cell
    #[wasm_bindgen]
    pub fn update_cell(&self, row: usize, col: usize) -> Result<(), JsValue> {
        prompt_cell(&self.board, Position::new(row, col))
    }

    /// Set a cell from raw text, returning the value actually stored
    #[wasm_bindgen]
    pub fn set_cell(&self, row: usize, col: usize, raw: &str) -> Result<String, JsValue> {
        self.board
            .borrow_mut()
            .edit_cell(row, col, raw)
            .map(|cell| cell.to_string())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Fill every cell with a random letter
    #[wasm_bindgen]
    pub fn randomize(&self) {
        self.board.borrow_mut().randomize();
    }

    /// Submit the board; the promise resolves to the final solve state
    /// ("succeeded" or "failed")
    #[wasm_bindgen]
    pub fn solve(&self) -> js_sys::Promise {
        let endpoint = dom::solve_url(&self.document, &self.ids.table);
        let board = Rc::clone(&self.board);
        future_to_promise(async move {
            let state = run_solve(board, endpoint).await;
            Ok(JsValue::from_str(state_name(state)))
        })
    }

    /// Cell values in row-major order, as an array of strings
    #[wasm_bindgen]
    pub fn letters(&self) -> Result<JsValue, JsValue> {
        let request = self.board.borrow().grid().snapshot();
        serde_wasm_bindgen::to_value(&request).map_err(JsValue::from)
    }

    /// Board as a 16-character row-major string
    #[wasm_bindgen]
    pub fn board_string(&self) -> String {
        self.board.borrow().grid().to_string_compact()
    }

    /// Board as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(self.board.borrow().grid()).unwrap_or_default()
    }

    /// Whether any solve request is still outstanding
    #[wasm_bindgen]
    pub fn is_solving(&self) -> bool {
        self.board.borrow().state() == SolveState::Requesting
    }

    /// Number of outstanding solve requests
    #[wasm_bindgen]
    pub fn in_flight(&self) -> usize {
        self.board.borrow().in_flight()
    }
}

fn state_name(state: SolveState) -> &'static str {
    match state {
        SolveState::Idle => "idle",
        SolveState::Requesting => "requesting",
        SolveState::Succeeded => "succeeded",
        SolveState::Failed => "failed",
    }
}

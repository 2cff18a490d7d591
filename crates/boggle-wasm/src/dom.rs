//! DOM projection of the board

use boggle_core::{normalize, Cell, Grid, Position, Renderer, ResultsPanel};
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

/// Text of the prompt shown when a cell is clicked
pub const EDIT_PROMPT: &str = "Enter a single letter.";

/// Element ids the controller looks up on the page
#[derive(Debug, Clone)]
pub struct PageIds {
    /// Board table, carrying the `data-solve_url` attribute
    pub table: String,
    /// Container the word list is written into
    pub results: String,
    /// Randomize button
    pub randomize: String,
    /// Solve button
    pub solve: String,
}

impl PageIds {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            results: "results".to_string(),
            randomize: "randomize".to_string(),
            solve: "solve".to_string(),
        }
    }
}

/// Element id of the cell at `pos`
pub fn cell_id(pos: Position) -> String {
    format!("cell_{}_{}", pos.row, pos.col)
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Build a grid from whatever the page markup already shows in each cell
pub fn read_grid(document: &Document) -> Grid {
    let mut grid = Grid::new();
    grid.fill_all({
        let mut positions = Position::all();
        move || {
            positions
                .next()
                .and_then(|pos| document.get_element_by_id(&cell_id(pos)))
                .and_then(|el| el.text_content())
                .map(|text| normalize(text.trim()))
                .unwrap_or(Cell::EMPTY)
        }
    });
    grid
}

/// Solve URL configured on the board table, read fresh on every call
pub fn solve_url(document: &Document, table_id: &str) -> String {
    document
        .get_element_by_id(table_id)
        .and_then(|table| table.get_attribute("data-solve_url"))
        .unwrap_or_default()
}

/// Ask the user for a cell value; `None` if they cancelled
pub fn prompt_letter() -> Result<Option<String>, JsValue> {
    window()?.prompt_with_message_and_default(EDIT_PROMPT, "-")
}

/// Renders into the board page's elements
pub struct DomRenderer {
    document: Document,
    results_id: String,
}

impl DomRenderer {
    pub fn new(document: Document, ids: &PageIds) -> Self {
        Self {
            document,
            results_id: ids.results.clone(),
        }
    }

    fn paragraph(&self, text: &str, bold: bool) -> Result<Element, JsValue> {
        let p = self.document.create_element("p")?;
        if bold {
            let b = self.document.create_element("b")?;
            b.set_text_content(Some(text));
            p.append_child(&b)?;
        } else {
            p.set_text_content(Some(text));
        }
        Ok(p)
    }

    fn write_results(&self, panel: &ResultsPanel) -> Result<(), JsValue> {
        let results = self
            .document
            .get_element_by_id(&self.results_id)
            .ok_or("Results element not found")?;

        // Replace, never append: each response redraws the whole panel
        results.set_text_content(None);
        let header = self.paragraph(&panel.header, true)?;
        results.append_child(&header)?;
        for word in &panel.entries {
            let entry = self.paragraph(word, false)?;
            results.append_child(&entry)?;
        }
        Ok(())
    }
}

impl Renderer for DomRenderer {
    fn render_grid(&mut self, grid: &Grid) {
        for (pos, cell) in grid.cells() {
            match self.document.get_element_by_id(&cell_id(pos)) {
                Some(el) => el.set_text_content(Some(&cell.to_string())),
                None => warn!(id = %cell_id(pos), "board cell missing from page"),
            }
        }
    }

    fn render_words(&mut self, words: &[String]) {
        web_sys::console::log_1(&format!("Words: {}", words.join(",")).into());
        if let Err(e) = self.write_results(&ResultsPanel::new(words)) {
            warn!(error = ?e, "could not render results");
        }
    }

    fn render_error(&mut self, message: &str) {
        match window() {
            Ok(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    warn!(error = ?e, "could not show alert");
                }
            }
            Err(e) => warn!(error = ?e, message, "no window for alert"),
        }
    }
}

//! Browser tests for the board controller

use crate::dom::{self, cell_id, DomRenderer, PageIds};
use crate::BoggleBoard;
use boggle_core::{Grid, Position, Renderer};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

/// Build a fresh board page under `<body>`, replacing any previous one
fn setup_page(table_id: &str, solve_url: &str) -> Document {
    let document = dom::document().unwrap();
    let body = document.body().unwrap();
    body.set_text_content(None);

    let table = document.create_element("div").unwrap();
    table.set_id(table_id);
    table.set_attribute("data-solve_url", solve_url).unwrap();
    for pos in Position::all() {
        let cell = document.create_element("span").unwrap();
        cell.set_id(&cell_id(pos));
        cell.set_text_content(Some("-"));
        table.append_child(&cell).unwrap();
    }
    body.append_child(&table).unwrap();

    let results = document.create_element("div").unwrap();
    results.set_id("results");
    body.append_child(&results).unwrap();

    document
}

/// Replace `window.alert` with a recorder so failures don't block the test
fn capture_alerts() {
    let window = dom::window().unwrap();
    let record = js_sys::Function::new_with_args(
        "message",
        "(window.__boggle_alerts = window.__boggle_alerts || []).push(message);",
    );
    js_sys::Reflect::set(&window, &JsValue::from_str("__boggle_alerts"), &js_sys::Array::new()).unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("alert"), &record).unwrap();
}

fn captured_alerts() -> Vec<String> {
    let window = dom::window().unwrap();
    let alerts = js_sys::Reflect::get(&window, &JsValue::from_str("__boggle_alerts")).unwrap();
    js_sys::Array::from(&alerts)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

fn text_of(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_missing_table_is_an_error() {
    setup_page("board_table", "/boggle/solve");
    assert!(BoggleBoard::new("no_such_table").is_err());
}

#[wasm_bindgen_test]
fn test_set_cell_normalizes_and_renders() {
    let document = setup_page("board_table", "/boggle/solve");
    let board = BoggleBoard::new("board_table").unwrap();

    assert_eq!(board.set_cell(1, 2, "k").unwrap(), "K");
    assert_eq!(text_of(&document, &cell_id(Position::new(1, 2))), "K");

    assert_eq!(board.set_cell(1, 2, "42").unwrap(), "-");
    assert_eq!(text_of(&document, &cell_id(Position::new(1, 2))), "-");

    assert!(board.set_cell(4, 0, "A").is_err());
}

#[wasm_bindgen_test]
fn test_randomize_writes_every_cell() {
    let document = setup_page("board_table", "/boggle/solve");
    let board = BoggleBoard::new("board_table").unwrap();
    board.randomize();

    let shown: String = Position::all()
        .map(|pos| text_of(&document, &cell_id(pos)))
        .collect();
    assert_eq!(shown, board.board_string());
    assert!(shown.chars().all(|c| c.is_ascii_uppercase()));
}

#[wasm_bindgen_test]
fn test_board_seeded_from_page() {
    let document = setup_page("board_table", "/boggle/solve");
    document
        .get_element_by_id(&cell_id(Position::new(0, 0)))
        .unwrap()
        .set_text_content(Some(" q "));

    let board = BoggleBoard::new("board_table").unwrap();
    assert_eq!(board.board_string(), "Q---------------");
}

#[wasm_bindgen_test]
fn test_results_panel_replaced_in_order() {
    let document = setup_page("board_table", "/boggle/solve");
    let mut renderer = DomRenderer::new(document.clone(), &PageIds::new("board_table"));

    renderer.render_words(&["OLD".to_string()]);
    renderer.render_words(&["CAT".to_string(), "CATS".to_string(), "CAT".to_string()]);

    let results = document.get_element_by_id("results").unwrap();
    assert_eq!(results.child_element_count(), 4);
    assert_eq!(results.text_content().unwrap(), "Matching WordsCATCATSCAT");
}

#[wasm_bindgen_test]
fn test_empty_results_show_header_only() {
    let document = setup_page("board_table", "/boggle/solve");
    let mut renderer = DomRenderer::new(document.clone(), &PageIds::new("board_table"));
    renderer.render_words(&[]);

    let results = document.get_element_by_id("results").unwrap();
    assert_eq!(results.child_element_count(), 1);
    assert_eq!(results.text_content().unwrap(), "Matching Words");
}

#[wasm_bindgen_test]
fn test_solve_url_read_from_table() {
    let document = setup_page("board_table", "/boggle/solve");
    assert_eq!(dom::solve_url(&document, "board_table"), "/boggle/solve");

    document
        .get_element_by_id("board_table")
        .unwrap()
        .remove_attribute("data-solve_url")
        .unwrap();
    assert_eq!(dom::solve_url(&document, "board_table"), "");
}

#[wasm_bindgen_test]
fn test_render_grid_uses_row_major_ids() {
    let document = setup_page("board_table", "/boggle/solve");
    let mut renderer = DomRenderer::new(document.clone(), &PageIds::new("board_table"));
    renderer.render_grid(&Grid::from_string("ABCDEFGHIJKLMNOP").unwrap());

    assert_eq!(text_of(&document, "cell_0_0"), "A");
    assert_eq!(text_of(&document, "cell_2_1"), "J");
    assert_eq!(text_of(&document, "cell_3_3"), "P");
}

#[wasm_bindgen_test]
async fn test_solve_without_url_fails_and_keeps_results() {
    let document = setup_page("board_table", "");
    capture_alerts();
    let board = BoggleBoard::new("board_table").unwrap();
    document
        .get_element_by_id("results")
        .unwrap()
        .set_text_content(Some("Matching WordsCAT"));

    let state = JsFuture::from(board.solve()).await.unwrap();

    assert_eq!(state.as_string().as_deref(), Some("failed"));
    assert_eq!(text_of(&document, "results"), "Matching WordsCAT");
    assert_eq!(captured_alerts(), vec!["Error: no solve URL configured"]);
    assert_eq!(board.in_flight(), 0);
    assert!(!board.is_solving());
}

#[wasm_bindgen_test]
fn test_console_logging_can_init_twice() {
    crate::logging::init();
    crate::logging::init();
    tracing::warn!("console logging exercised from tests");
}

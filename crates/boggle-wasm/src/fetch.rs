//! Solve requests over the browser's `fetch`

use crate::dom;
use boggle_core::{check_endpoint, parse_solve_response, PendingSolve, SolveError, SolveResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

fn js_err(value: JsValue) -> SolveError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    SolveError::Transport(message)
}

/// POST the pending board and wait for the word list
pub async fn fetch_words(pending: &PendingSolve) -> SolveResult<Vec<String>> {
    let url = check_endpoint(&pending.endpoint)?;
    let body = pending.request.to_json()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let window = dom::window().map_err(js_err)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;

    parse_solve_response(response.status(), &text.as_string().unwrap_or_default())
}

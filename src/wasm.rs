//! WebAssembly bindings for the search session.
//!
//! The page keeps one `RefineSession` alive for its lifetime. It calls
//! `submit()` when the query or vertical changes, performs the fetch itself
//! (the returned object carries the token and the lowercased query), and
//! hands the parsed JSON body back to `applyResponse()` with the same token.
//! Late answers to superseded queries are ignored on the Rust side.

use crate::error::RetrievalError;
use crate::session::{ApplyOutcome, RequestToken, SearchSession, SessionState};
use crate::types::{SearchResponse, Vertical};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::collections::BTreeSet;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_array(values: &BTreeSet<String>) -> js_sys::Array {
    values.iter().map(|v| JsValue::from_str(v)).collect()
}

/// WASM-accessible results page session.
#[wasm_bindgen]
pub struct RefineSession {
    inner: SearchSession,
}

impl Default for RefineSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl RefineSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RefineSession {
        RefineSession {
            inner: SearchSession::new(),
        }
    }

    /// Activate a query. Returns `{token, query, vertical}` to fetch, or
    /// `null` when the query is empty.
    ///
    /// Unknown verticals fall back to `cord19`.
    #[wasm_bindgen]
    pub fn submit(&mut self, query: &str, vertical: &str) -> Result<JsValue, JsValue> {
        match self.inner.submit(query, Vertical::from_param(vertical)) {
            Some(request) => to_js(&request),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = setVertical)]
    pub fn set_vertical(&mut self, vertical: &str) -> Result<JsValue, JsValue> {
        match self.inner.set_vertical(Vertical::from_param(vertical)) {
            Some(request) => to_js(&request),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Apply a parsed response body. Returns `false` if the token was stale.
    ///
    /// A body that doesn't look like a search response counts as a failed
    /// retrieval, same as a network error.
    #[wasm_bindgen(js_name = applyResponse)]
    pub fn apply_response(&mut self, token: f64, body: JsValue) -> bool {
        let outcome = from_value::<SearchResponse>(body)
            .map_err(|e| RetrievalError::Decode(e.to_string()));
        self.apply(token, outcome)
    }

    /// Report that the fetch for `token` failed.
    #[wasm_bindgen(js_name = failResponse)]
    pub fn fail_response(&mut self, token: f64, message: String) -> bool {
        self.apply(token, Err(RetrievalError::Network(message)))
    }

    fn apply(&mut self, token: f64, outcome: Result<SearchResponse, RetrievalError>) -> bool {
        let token = RequestToken::from_raw(token as u64);
        matches!(
            self.inner.apply_response(token, outcome),
            ApplyOutcome::Applied(_)
        )
    }

    /// One of `"idle"`, `"loading"`, `"ready"`, `"empty"`.
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        match self.inner.state() {
            SessionState::Idle => "idle",
            SessionState::Loading => "loading",
            SessionState::Ready => "ready",
            SessionState::Empty => "empty",
        }
        .to_string()
    }

    #[wasm_bindgen(js_name = setYearRange)]
    pub fn set_year_range(&mut self, lo: i32, hi: i32) {
        self.inner.set_year_range(lo, hi);
    }

    #[wasm_bindgen(js_name = toggleAuthor)]
    pub fn toggle_author(&mut self, author: &str) -> bool {
        self.inner.toggle_author(author)
    }

    #[wasm_bindgen(js_name = toggleJournal)]
    pub fn toggle_journal(&mut self, journal: &str) -> bool {
        self.inner.toggle_journal(journal)
    }

    #[wasm_bindgen(js_name = toggleSource)]
    pub fn toggle_source(&mut self, source: &str) -> bool {
        self.inner.toggle_source(source)
    }

    #[wasm_bindgen(js_name = resetSelection)]
    pub fn reset_selection(&mut self) {
        self.inner.reset_selection();
    }

    /// Author options for the picker, sorted.
    #[wasm_bindgen]
    pub fn authors(&self) -> js_sys::Array {
        to_array(&self.inner.domain().authors)
    }

    #[wasm_bindgen]
    pub fn journals(&self) -> js_sys::Array {
        to_array(&self.inner.domain().journals)
    }

    #[wasm_bindgen]
    pub fn sources(&self) -> js_sys::Array {
        to_array(&self.inner.domain().sources)
    }

    #[wasm_bindgen]
    pub fn domain(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.domain())
    }

    #[wasm_bindgen]
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.selection())
    }

    /// Visible results in original order.
    #[wasm_bindgen]
    pub fn visible(&self) -> Result<JsValue, JsValue> {
        let visible: Vec<_> = self.inner.visible().collect();
        to_js(&visible)
    }

    /// Tagged object describing what to render (`home`, `loading`,
    /// `noResults`, `results`).
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.view())
    }
}

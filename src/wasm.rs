//! WebAssembly bindings for the puzzle solvers.
//!
//! Each entry point takes the raw input text and returns a JSON envelope
//! `{ "success": bool, "error": string | null, "result": ... }`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::allocation::solve_planets;
use crate::data::{parse_machines, parse_planets};
use crate::gain::GainModel;
use crate::graph::build_graph;
use crate::models::{MachineSelection, PlanetAllocation, TieBreak};
use crate::paths::enumerate_paths;
use crate::search::find_cheapest_combination;

/// JavaScript-friendly result envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsResult<T> {
    pub success: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T: Serialize> JsResult<T> {
    fn ok(result: T) -> String {
        serde_json::to_string(&JsResult {
            success: true,
            error: None,
            result: Some(result),
        })
        .unwrap_or_default()
    }

    fn err(message: String) -> String {
        serde_json::to_string(&JsResult::<T> {
            success: false,
            error: Some(message),
            result: None,
        })
        .unwrap_or_default()
    }
}

fn parse_tie_break(tie_break: &str) -> TieBreak {
    match tie_break {
        "keep-last" => TieBreak::KeepLast,
        _ => TieBreak::KeepFirst,
    }
}

/// Solves a facebull machine list.
///
/// `tie_break` is `"keep-first"` (default for any other value) or `"keep-last"`.
#[wasm_bindgen]
pub fn solve_facebull(input: &str, tie_break: &str) -> String {
    match parse_machines(input) {
        Ok(edges) => {
            let graph = build_graph(&edges);
            let table = enumerate_paths(&graph);
            JsResult::ok(find_cheapest_combination(&graph, &table, parse_tie_break(tie_break)))
        }
        Err(e) => JsResult::<MachineSelection>::err(e.to_string()),
    }
}

/// Solves a zergrush planet list.
#[wasm_bindgen]
pub fn solve_zergrush(input: &str, tie_break: &str) -> String {
    match parse_planets(input) {
        Ok(planets) => JsResult::ok(solve_planets(
            &GainModel::default(),
            &planets,
            parse_tie_break(tie_break),
        )),
        Err(e) => JsResult::<Vec<PlanetAllocation>>::err(e.to_string()),
    }
}

/// Get the crate version.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Tests for the WebAssembly entry points (callable natively).

use puzzlers::wasm::{get_version, solve_facebull, solve_zergrush};
use serde_json::Value;

#[test]
fn test_solve_facebull_envelope() {
    let out = solve_facebull("M1 C1 C2 10\nM2 C2 C1 5\n", "keep-first");
    let value: Value = serde_json::from_str(&out).expect("valid json");

    assert_eq!(value["success"], true);
    assert!(value["error"].is_null());
    assert_eq!(value["result"]["total_price"], 15);
}

#[test]
fn test_solve_facebull_reports_parse_error() {
    let out = solve_facebull("M1 C1 10\n", "keep-first");
    let value: Value = serde_json::from_str(&out).expect("valid json");

    assert_eq!(value["success"], false);
    assert!(value["error"].as_str().unwrap_or_default().contains("line 1"));
    assert!(value["result"].is_null());
}

#[test]
fn test_solve_zergrush_envelope() {
    let out = solve_zergrush("1\n1 5\n0 100\n", "keep-last");
    let value: Value = serde_json::from_str(&out).expect("valid json");

    assert_eq!(value["success"], true);
    assert_eq!(value["result"][0]["total_gain"], 100);
    assert_eq!(value["result"][0]["bases"][0]["index"], 0);
}

#[test]
fn test_get_version() {
    assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
}

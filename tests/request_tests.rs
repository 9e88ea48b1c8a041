use splooshkaboom::initialize;
use splooshkaboom::request::{handle, handle_json, Request, Response};

#[test]
fn json_request_round_trip() {
    let catalog = initialize();
    let out = handle_json(catalog, r#"{"hits": [[2, 5]], "misses": [[3, 5]], "squids_gotten": -1}"#)
        .unwrap();
    let response: Response = serde_json::from_str(&out).unwrap();
    assert!(response.is_possible);
    let grid = response.probabilities.unwrap();
    assert_eq!(grid[5][2], 1.0);
    assert_eq!(grid[5][3], 0.0);
    assert!(response.observation_prob.unwrap() > 0.0);
}

#[test]
fn squids_gotten_defaults_to_unknown() {
    let request: Request = serde_json::from_str(r#"{"hits": [[0, 0]]}"#).unwrap();
    assert_eq!(request.squids_gotten, -1);
    assert!(request.misses.is_empty());
    assert!(handle(initialize(), &request).unwrap().is_possible);
}

#[test]
fn impossible_evidence_is_not_an_error() {
    let catalog = initialize();
    let out = handle_json(catalog, r#"{"hits": [[1, 1]], "misses": [[1, 1]], "squids_gotten": 0}"#)
        .unwrap();
    assert_eq!(out, r#"{"is_possible":false}"#);
}

#[test]
fn malformed_requests_are_errors() {
    let catalog = initialize();
    assert!(handle_json(catalog, r#"{"hits": [[8, 0]], "misses": []}"#).is_err());
    assert!(handle_json(catalog, r#"{"hits": [], "misses": [], "squids_gotten": -3}"#).is_err());
    assert!(handle_json(catalog, "not json").is_err());
}

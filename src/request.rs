#![cfg(feature = "std")]

//! JSON request and response bodies for probability queries.
//!
//! Squares are `[x, y]` pairs; probabilities come back as rows, so
//! `probabilities[y][x]` is cell (x, y).

use serde::{Deserialize, Serialize};

use crate::bitboard::Mask;
use crate::catalog::Catalog;
use crate::common::QueryError;
use crate::config::{BOARD_SIZE, UNKNOWN_SQUIDS_GOTTEN};
use crate::filter::{Evidence, SquidsGotten};

fn unknown_squids_gotten() -> i64 {
    UNKNOWN_SQUIDS_GOTTEN
}

/// Observed shots as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub hits: Vec<(usize, usize)>,
    #[serde(default)]
    pub misses: Vec<(usize, usize)>,
    #[serde(default = "unknown_squids_gotten")]
    pub squids_gotten: i64,
}

impl Request {
    /// Convert the squares into an [`Evidence`], rejecting off-grid squares.
    pub fn evidence(&self) -> Result<Evidence, QueryError> {
        let mut evidence = Evidence {
            hits: Mask::new(),
            misses: Mask::new(),
            squids_gotten: SquidsGotten::from_raw(self.squids_gotten)?,
        };
        for &(x, y) in &self.hits {
            evidence.record_hit(x, y)?;
        }
        for &(x, y) in &self.misses {
            evidence.record_miss(x, y)?;
        }
        Ok(evidence)
    }
}

/// Query outcome; the optional fields are absent when no board fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub is_possible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<[[f64; BOARD_SIZE]; BOARD_SIZE]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_prob: Option<f64>,
}

impl Response {
    pub fn impossible() -> Self {
        Response {
            is_possible: false,
            probabilities: None,
            observation_prob: None,
        }
    }
}

/// Answer a request. Evidence that rules out every board is a normal
/// `is_possible: false` response; malformed input is an error.
pub fn handle(catalog: &Catalog, request: &Request) -> Result<Response, QueryError> {
    let evidence = request.evidence()?;
    match catalog.query(&evidence) {
        Ok(dist) => Ok(Response {
            is_possible: true,
            probabilities: Some(dist.rows()),
            observation_prob: Some(dist.observation_probability()),
        }),
        Err(QueryError::NoSolution) => Ok(Response::impossible()),
        Err(e) => Err(e),
    }
}

/// Parse a JSON request, answer it, and serialize the response.
pub fn handle_json(catalog: &Catalog, payload: &str) -> anyhow::Result<String> {
    let request: Request = serde_json::from_str(payload)?;
    log::debug!("Working on: {:?}", request);
    let response = handle(catalog, &request)?;
    Ok(serde_json::to_string(&response)?)
}

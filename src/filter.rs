//! Bayesian filtering of the catalog against observed hits and misses.

use crate::bitboard::Mask;
use crate::catalog::{Catalog, PossibleBoard};
use crate::common::QueryError;
use crate::config::{BOARD_SIZE, CELL_COUNT, TOTAL_SQUID_CELLS, UNKNOWN_SQUIDS_GOTTEN};

/// How many squids the player is known to have sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SquidsGotten {
    /// Sunk count not reported; no constraint is applied.
    #[default]
    Unknown,
    Exactly(u8),
}

impl SquidsGotten {
    /// Decode the wire integer, where `-1` means unknown.
    pub fn from_raw(raw: i64) -> Result<Self, QueryError> {
        match raw {
            UNKNOWN_SQUIDS_GOTTEN => Ok(SquidsGotten::Unknown),
            0..=255 => Ok(SquidsGotten::Exactly(raw as u8)),
            _ => Err(QueryError::InvalidSquidCount(raw)),
        }
    }

    pub fn to_raw(self) -> i64 {
        match self {
            SquidsGotten::Unknown => UNKNOWN_SQUIDS_GOTTEN,
            SquidsGotten::Exactly(n) => n as i64,
        }
    }
}

impl From<Option<u8>> for SquidsGotten {
    fn from(value: Option<u8>) -> Self {
        value.map_or(SquidsGotten::Unknown, SquidsGotten::Exactly)
    }
}

/// Observed shots on the hidden board.
///
/// Hits and misses are expected to be disjoint; contradictory evidence is not
/// rejected here, it simply matches no board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evidence {
    pub hits: Mask,
    pub misses: Mask,
    pub squids_gotten: SquidsGotten,
}

impl Evidence {
    /// Evidence with no shots and an unknown sunk count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build evidence from flat cell indices.
    pub fn from_indices<H, M>(
        hits: H,
        misses: M,
        squids_gotten: SquidsGotten,
    ) -> Result<Self, QueryError>
    where
        H: IntoIterator<Item = usize>,
        M: IntoIterator<Item = usize>,
    {
        Ok(Evidence {
            hits: Mask::from_indices(hits)?,
            misses: Mask::from_indices(misses)?,
            squids_gotten,
        })
    }

    /// Mark (x, y) as containing a squid segment.
    pub fn record_hit(&mut self, x: usize, y: usize) -> Result<&mut Self, QueryError> {
        self.hits.set(x, y)?;
        Ok(self)
    }

    /// Mark (x, y) as empty water.
    pub fn record_miss(&mut self, x: usize, y: usize) -> Result<&mut Self, QueryError> {
        self.misses.set(x, y)?;
        Ok(self)
    }

    /// Set the number of squids known to be fully sunk.
    pub fn record_sunk(&mut self, count: u8) -> &mut Self {
        self.squids_gotten = SquidsGotten::Exactly(count);
        self
    }

    /// Number of squids whose every cell is among the hits of `board`.
    fn sunk_on(&self, board: &PossibleBoard) -> usize {
        board
            .squid_masks()
            .iter()
            .filter(|m| m.is_subset_of(&self.hits))
            .count()
    }
}

impl PossibleBoard {
    /// Whether this board could have produced `evidence`.
    pub fn is_compatible(&self, evidence: &Evidence) -> bool {
        if !evidence.hits.is_subset_of(&self.squids()) {
            return false;
        }
        if evidence.misses.intersects(&self.squids()) {
            return false;
        }
        match evidence.squids_gotten {
            SquidsGotten::Unknown => true,
            SquidsGotten::Exactly(n) => evidence.sunk_on(self) == n as usize,
        }
    }
}

/// Posterior per-cell occupancy probability. Entry `i` is the chance that
/// cell `i` holds a squid segment given the evidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    probabilities: [f64; CELL_COUNT],
    observation_probability: f64,
}

impl Distribution {
    /// Probabilities indexed by flat cell index `x + 8 * y`.
    pub fn probabilities(&self) -> &[f64; CELL_COUNT] {
        &self.probabilities
    }

    /// Prior mass of every board consistent with the evidence.
    pub fn observation_probability(&self) -> f64 {
        self.observation_probability
    }

    /// Probability at (x, y); `None` off the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        Mask::index_of(x, y).ok().map(|i| self.probabilities[i])
    }

    /// The grid as rows, so `rows()[y][x]` is cell (x, y).
    pub fn rows(&self) -> [[f64; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|y| core::array::from_fn(|x| self.probabilities[x + BOARD_SIZE * y]))
    }

    /// Sum of the occupancy probabilities; equals the number of squid cells.
    pub fn sum(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Where a single squid segment, picked uniformly from the board, lies.
    /// Sums to one.
    pub fn segment_distribution(&self) -> [f64; CELL_COUNT] {
        self.probabilities.map(|p| p / TOTAL_SQUID_CELLS as f64)
    }
}

impl Catalog {
    /// Filter the catalog by `evidence` and renormalize the surviving mass
    /// into a per-cell distribution. Every call scans the full catalog.
    pub fn query(&self, evidence: &Evidence) -> Result<Distribution, QueryError> {
        let mut probabilities = [0.0f64; CELL_COUNT];
        let mut total = 0.0;
        let mut matched = 0usize;
        for board in self {
            if !board.is_compatible(evidence) {
                continue;
            }
            for idx in board.squids().iter_indices() {
                probabilities[idx] += board.probability();
            }
            total += board.probability();
            matched += 1;
        }
        log::debug!("query matched {} of {} boards", matched, self.len());
        if total == 0.0 {
            return Err(QueryError::NoSolution);
        }
        for p in probabilities.iter_mut() {
            *p /= total;
        }
        Ok(Distribution {
            probabilities,
            observation_probability: total,
        })
    }
}

/// Flat-index entry point: hits and misses as cell indices in [0, 64).
pub fn do_computation(
    catalog: &Catalog,
    hits: &[usize],
    misses: &[usize],
    squids_gotten: SquidsGotten,
) -> Result<Distribution, QueryError> {
    let evidence = Evidence::from_indices(hits.iter().copied(), misses.iter().copied(), squids_gotten)?;
    catalog.query(&evidence)
}


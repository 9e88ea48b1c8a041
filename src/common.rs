//! Error types shared by the evidence filter and its callers.

use crate::bitboard::BitBoardError;

/// Errors returned by catalog queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// No cataloged board agrees with the evidence.
    NoSolution,
    /// A hit or miss named a cell outside the grid.
    CellOutOfRange(usize),
    /// Sunk count was negative but not the "unknown" sentinel.
    InvalidSquidCount(i64),
    /// Underlying bitboard error (e.g., coordinate off the grid).
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for QueryError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::CellOutOfBounds { index } => QueryError::CellOutOfRange(index),
            other => QueryError::BitBoard(other),
        }
    }
}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueryError::NoSolution => write!(f, "No board is consistent with the evidence"),
            QueryError::CellOutOfRange(idx) => write!(f, "Cell index {} is off the grid", idx),
            QueryError::InvalidSquidCount(n) => write!(f, "Invalid squids_gotten value {}", n),
            QueryError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {}

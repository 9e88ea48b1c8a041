/// Width and height of the square grid.
pub const BOARD_SIZE: usize = 8;
/// Number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const NUM_SQUIDS: usize = 3;
/// Squid lengths in placement order.
pub const SQUID_LENGTHS: [usize; NUM_SQUIDS] = [2, 3, 4];

/// Total number of squid segments on every board.
pub const TOTAL_SQUID_CELLS: usize = 2 + 3 + 4;

/// Wire value meaning "number of sunk squids is not known".
pub const UNKNOWN_SQUIDS_GOTTEN: i64 = -1;

/// Tolerance used when checking that probability mass sums to one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "SPLOOSH_LOG";

/// Position of a squid length within [`SQUID_LENGTHS`].
pub fn squid_slot(length: usize) -> Option<usize> {
    SQUID_LENGTHS.iter().position(|&l| l == length)
}

//! Squid placement descriptors and the validity rule used by the enumerator.

use alloc::vec::Vec;

use crate::bitboard::{BitBoardError, Mask};
use crate::config::BOARD_SIZE;

/// Orientation of a squid on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];
}

/// Starting cell and orientation of a squid. The length is supplied
/// separately so the same descriptor list serves every squid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    x: usize,
    y: usize,
    orientation: Orientation,
}

impl Placement {
    /// Create a descriptor. The start must lie on the grid, since every later
    /// validity check assumes the static coordinate is in bounds.
    pub fn new(x: usize, y: usize, orientation: Orientation) -> Result<Self, BitBoardError> {
        Mask::index_of(x, y)?;
        Ok(Self { x, y, orientation })
    }

    /// Every start cell crossed with both orientations, row by row.
    pub fn all() -> Vec<Placement> {
        let mut out = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE * 2);
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                for orientation in Orientation::BOTH {
                    out.push(Placement { x, y, orientation });
                }
            }
        }
        out
    }

    /// Origin of the squid (x, y).
    pub fn origin(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinates covered by a squid of `length`, including any that run off
    /// the grid.
    pub fn cells(&self, length: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..length).map(move |offset| match self.orientation {
            Orientation::Horizontal => (self.x + offset, self.y),
            Orientation::Vertical => (self.x, self.y + offset),
        })
    }

    /// Lay a squid of `length` onto `taken`. Returns the extended mask, or
    /// `None` if it runs off the grid or collides with a taken cell.
    ///
    /// Only the advancing coordinate is compared with the edge; the static one
    /// was fixed in bounds when the descriptor was made.
    pub fn extend(&self, taken: Mask, length: usize) -> Option<Mask> {
        let mut taken = taken;
        for (x, y) in self.cells(length) {
            let advancing = match self.orientation {
                Orientation::Horizontal => x,
                Orientation::Vertical => y,
            };
            if advancing >= BOARD_SIZE {
                return None;
            }
            let idx = x + BOARD_SIZE * y;
            if taken.contains(idx) {
                return None;
            }
            taken = taken.with(idx).ok()?;
        }
        Some(taken)
    }
}

/// Number of descriptors that fit a squid of `length` around `taken`.
pub fn count_valid(placements: &[Placement], taken: Mask, length: usize) -> u64 {
    placements
        .iter()
        .filter(|p| p.extend(taken, length).is_some())
        .count() as u64
}

//! Exhaustive enumeration of every legal squid board.
//!
//! Squids are laid down shortest first. At each level every descriptor that
//! still fits is a branch, and each branch is taken with equal probability, so
//! a finished board's prior weight is the reciprocal of the product of the
//! branch counts seen on the way down. Branch counts depend only on the mask
//! at that level and are computed once per parent mask.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::Mask;
use crate::config::{squid_slot, NUM_SQUIDS, SQUID_LENGTHS, TOTAL_SQUID_CELLS};
use crate::squid::{count_valid, Placement};

/// One complete, non-overlapping placement of all squids and its prior weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PossibleBoard {
    squids: Mask,
    squid_masks: [Mask; NUM_SQUIDS],
    probability: f64,
}

impl PossibleBoard {
    /// Union of every squid cell.
    #[inline]
    pub fn squids(&self) -> Mask {
        self.squids
    }

    /// Per-squid masks in [`SQUID_LENGTHS`] order.
    #[inline]
    pub fn squid_masks(&self) -> &[Mask; NUM_SQUIDS] {
        &self.squid_masks
    }

    /// Mask of the squid with the given length.
    pub fn squid(&self, length: usize) -> Option<Mask> {
        squid_slot(length).map(|i| self.squid_masks[i])
    }

    /// Prior probability of this board under uniform sequential placement.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Every legal board, built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    boards: Vec<PossibleBoard>,
}

impl Catalog {
    /// Enumerate all boards and check their invariants. Panics if the
    /// enumeration produced a malformed board.
    pub fn build() -> Self {
        log::info!("Initializing squid board catalog");
        let placements = Placement::all();
        let mut boards = Vec::new();
        let mut layers = [Mask::new(); NUM_SQUIDS];
        descend(&placements, 0, Mask::new(), 1, &mut layers, &mut boards);

        let catalog = Catalog { boards };
        log::info!("Possible boards found: {}", catalog.len());
        let total = catalog.check_invariants();
        log::info!("Total probability: {}", total);
        catalog
    }

    /// Assert the per-board shape invariants and return the summed weight.
    pub fn check_invariants(&self) -> f64 {
        let mut total = 0.0;
        for board in &self.boards {
            assert_eq!(board.squids.count_ones(), TOTAL_SQUID_CELLS);
            let mut union = Mask::new();
            for (mask, &len) in board.squid_masks.iter().zip(SQUID_LENGTHS.iter()) {
                assert_eq!(mask.count_ones(), len);
                assert!(!mask.intersects(&union), "squids overlap");
                union |= *mask;
            }
            assert_eq!(union, board.squids);
            total += board.probability;
        }
        total
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn boards(&self) -> &[PossibleBoard] {
        &self.boards
    }

    pub fn iter(&self) -> core::slice::Iter<'_, PossibleBoard> {
        self.boards.iter()
    }

    /// Sum of prior weights over the whole catalog.
    pub fn total_probability(&self) -> f64 {
        self.boards.iter().map(|b| b.probability).sum()
    }

    /// Draw one board with probability equal to its prior weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PossibleBoard> {
        let total = self.total_probability();
        if self.boards.is_empty() || total <= 0.0 {
            return None;
        }
        let threshold: f64 = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for board in &self.boards {
            cumulative += board.probability;
            if threshold < cumulative {
                return Some(board);
            }
        }
        self.boards.last()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PossibleBoard;
    type IntoIter = core::slice::Iter<'a, PossibleBoard>;

    fn into_iter(self) -> Self::IntoIter {
        self.boards.iter()
    }
}

/// Place squid number `level` on top of `taken`. `denominator` is the product
/// of branch counts of all levels above this one.
fn descend(
    placements: &[Placement],
    level: usize,
    taken: Mask,
    denominator: u64,
    layers: &mut [Mask; NUM_SQUIDS],
    out: &mut Vec<PossibleBoard>,
) {
    if level == NUM_SQUIDS {
        out.push(PossibleBoard {
            squids: taken,
            squid_masks: *layers,
            probability: 1.0 / denominator as f64,
        });
        return;
    }
    let length = SQUID_LENGTHS[level];
    let children = count_valid(placements, taken, length);
    for placement in placements {
        let Some(next) = placement.extend(taken, length) else {
            continue;
        };
        layers[level] = next & !taken;
        descend(placements, level + 1, next, denominator * children, layers, out);
    }
}

#[cfg(feature = "std")]
static SHARED: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();

/// Build the process-wide catalog on first call and return it. Later calls,
/// from any thread, reuse the same instance.
#[cfg(feature = "std")]
pub fn initialize() -> &'static Catalog {
    SHARED.get_or_init(Catalog::build)
}

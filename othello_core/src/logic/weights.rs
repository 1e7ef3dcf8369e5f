use crate::logic::board::{BitIter, BoardState, Cell, Mask, Side};
use crate::logic::bitboard::Bitboard;
use std::sync::OnceLock;

// Corners are worth the most; the cells touching a corner the least.
#[rustfmt::skip]
pub const WEIGHTS_6X6: [i32; 36] = [
    100, -36,  53,  53, -36, 100,
    -36, -69, -10, -10, -69, -36,
     53, -10,  -2,  -2, -10,  53,
     53, -10,  -2,  -2, -10,  53,
    -36, -69, -10, -10, -69, -36,
    100, -36,  53,  53, -36, 100,
];

#[rustfmt::skip]
pub const WEIGHTS_8X8: [i32; 64] = [
     800, -286,  426,  -24,  -24,  426, -286,  800,
    -286, -552, -177,  -82,  -82, -177, -552, -286,
     426, -177,   62,    8,    8,   62, -177,  426,
     -24,  -82,    8,  -18,  -18,    8,  -82,  -24,
     -24,  -82,    8,  -18,  -18,    8,  -82,  -24,
     426, -177,   62,    8,    8,   62, -177,  426,
    -286, -552, -177,  -82,  -82, -177, -552, -286,
     800, -286,  426,  -24,  -24,  426, -286,  800,
];

/// Cells sharing one weight, scored with a single popcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightGroup {
    pub mask: Mask,
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightTable {
    cells: Vec<i32>,
    groups: Vec<WeightGroup>,
    total: i32,
}

impl WeightTable {
    pub fn new(size: usize, cells: &[i32]) -> Self {
        let mut groups: Vec<WeightGroup> = Vec::new();
        for (loc, &weight) in cells.iter().enumerate().take(size * size) {
            if weight == 0 {
                continue;
            }
            match groups.iter_mut().find(|g| g.weight == weight) {
                Some(group) => group.mask |= 1 << loc,
                None => groups.push(WeightGroup {
                    mask: 1 << loc,
                    weight,
                }),
            }
        }
        let total = cells.iter().map(|w| w.abs()).sum();
        Self {
            cells: cells.to_vec(),
            groups,
            total,
        }
    }

    /// Shared table for a supported board size; `None` otherwise.
    pub fn for_size(size: usize) -> Option<&'static Self> {
        static TABLE_6: OnceLock<WeightTable> = OnceLock::new();
        static TABLE_8: OnceLock<WeightTable> = OnceLock::new();
        match size {
            6 => Some(TABLE_6.get_or_init(|| Self::new(6, &WEIGHTS_6X6))),
            8 => Some(TABLE_8.get_or_init(|| Self::new(8, &WEIGHTS_8X8))),
            _ => None,
        }
    }

    pub fn groups(&self) -> &[WeightGroup] {
        &self.groups
    }

    /// Sum of the absolute weights, used to normalise reported scores.
    pub const fn total(&self) -> i32 {
        self.total
    }

    pub fn at(&self, loc: usize) -> i32 {
        self.cells.get(loc).copied().unwrap_or(0)
    }

    /// Signed weight of the discs in `mine` minus those in `theirs`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn score_masks(&self, mine: Mask, theirs: Mask) -> i32 {
        self.groups
            .iter()
            .map(|g| {
                let diff = (mine & g.mask).count_ones() as i32 - (theirs & g.mask).count_ones() as i32;
                diff * g.weight
            })
            .sum()
    }

    pub fn eval<const N: usize>(&self, board: &Bitboard<N>, side: Side) -> i32 {
        self.score_masks(board.mask(side), board.mask(side.opposite()))
    }

    /// Per-cell scan of any board representation.
    pub fn eval_naive<B: BoardState>(&self, board: &B, side: Side) -> i32 {
        let mine = side.cell();
        let theirs = side.opposite().cell();
        (0..B::SIZE * B::SIZE)
            .map(|loc| match board.occupant(loc) {
                c if c == mine => self.at(loc),
                c if c == theirs => -self.at(loc),
                Cell::Dark | Cell::Light | Cell::Empty => 0,
            })
            .sum()
    }

    /// Evaluation after `side` plays `loc`, derived from `current` without
    /// rescanning the board. Each flipped disc swings by twice its weight.
    pub fn eval_after_put<const N: usize>(
        &self,
        board: &Bitboard<N>,
        side: Side,
        loc: usize,
        current: i32,
    ) -> i32 {
        let flipped: i32 = BitIter::new(board.flips(side, loc))
            .map(|sq| 2 * self.at(sq))
            .sum();
        current + self.at(loc) + flipped
    }
}

use crate::error::EngineResult;
use crate::logic::board::{BoardState, Cell, Mask, Side};
use crate::logic::lookup::{full_mask, Rays};
use crate::logic::notation::decode_cells;
use std::fmt;
use std::str::FromStr;

/// Two disjoint masks, one per side, for an `N`×`N` board (`N` is 6 or 8).
///
/// Cell `(row, col)` is bit `row * N + col`. The type is `Copy`, so search
/// branches each own an independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard<const N: usize> {
    dark: Mask,
    light: Mask,
}

impl<const N: usize> Bitboard<N> {
    const SUPPORTED: () = assert!(N == 6 || N == 8, "only 6x6 and 8x8 boards are supported");
    pub const CELLS: usize = N * N;
    pub const FULL: Mask = full_mask(N);
    const RAYS: Rays = Rays::new(N);
    // Longest run of opponent discs a single move can bracket.
    const FLOOD_STEPS: usize = N - 2;

    #[must_use]
    pub const fn from_masks(dark: Mask, light: Mask) -> Self {
        let () = Self::SUPPORTED;
        debug_assert!(dark & light == 0);
        Self {
            dark: dark & Self::FULL,
            light: light & Self::FULL & !dark,
        }
    }

    /// Standard start position.
    #[must_use]
    pub const fn new() -> Self {
        let mid = N / 2;
        let light = (1 << ((mid - 1) * N + mid - 1)) | (1 << (mid * N + mid));
        let dark = (1 << ((mid - 1) * N + mid)) | (1 << (mid * N + mid - 1));
        Self::from_masks(dark, light)
    }

    pub const fn dark(&self) -> Mask {
        self.dark
    }

    pub const fn light(&self) -> Mask {
        self.light
    }

    pub const fn mask(&self, side: Side) -> Mask {
        match side {
            Side::Dark => self.dark,
            Side::Light => self.light,
        }
    }

    pub const fn empty(&self) -> Mask {
        !(self.dark | self.light) & Self::FULL
    }

    /// Bit for `loc`, or no bit when `loc` is off the board.
    #[inline]
    const fn bit(loc: usize) -> Mask {
        if loc < Self::CELLS {
            1 << loc
        } else {
            0
        }
    }

    /// Floods `seed` through `opp` along direction `dir`.
    #[inline]
    fn flood(seed: Mask, opp: Mask, dir: usize) -> Mask {
        let mut run = Self::RAYS.shift(seed, dir) & opp;
        for _ in 1..Self::FLOOD_STEPS {
            run |= Self::RAYS.shift(run, dir) & opp;
        }
        run
    }

    /// Every empty cell where `side` brackets at least one opponent disc.
    pub fn all_valid(&self, side: Side) -> Mask {
        let mine = self.mask(side);
        let opp = self.mask(side.opposite());
        let empty = self.empty();

        let mut legal = 0;
        for dir in 0..8 {
            let run = Self::flood(mine, opp, dir);
            legal |= Self::RAYS.shift(run, dir) & empty;
        }
        legal
    }

    /// Opponent discs flipped if `side` plays `loc`. Does not check legality.
    pub fn flips(&self, side: Side, loc: usize) -> Mask {
        let disc = Self::bit(loc);
        let mine = self.mask(side);
        let opp = self.mask(side.opposite());

        let mut captured = 0;
        for dir in 0..8 {
            let run = Self::flood(disc, opp, dir);
            if Self::RAYS.shift(run, dir) & mine != 0 {
                captured |= run;
            }
        }
        captured
    }

    /// Flips every bracketed line around `loc` to `side`. Expects the disc
    /// at `loc` to be placed separately.
    pub fn apply_captures(&mut self, side: Side, loc: usize) {
        let captured = self.flips(side, loc);
        self.dark ^= captured;
        self.light ^= captured;
    }

    /// Places and captures without a legality check.
    pub fn put(&mut self, side: Side, loc: usize) {
        self.place(side, loc);
        self.apply_captures(side, loc);
    }

    pub fn mobility(&self, side: Side) -> u32 {
        self.all_valid(side).count_ones()
    }
}

impl<const N: usize> BoardState for Bitboard<N> {
    const SIZE: usize = N;

    fn from_text(text: &str) -> EngineResult<Self> {
        let mut board = Self::from_masks(0, 0);
        for (loc, cell) in decode_cells(text, N)?.into_iter().enumerate() {
            if let Some(side) = cell.side() {
                board.place(side, loc);
            }
        }
        Ok(board)
    }

    fn occupant(&self, loc: usize) -> Cell {
        let bit = Self::bit(loc);
        if self.dark & bit != 0 {
            Cell::Dark
        } else if self.light & bit != 0 {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    fn place(&mut self, side: Side, loc: usize) {
        let bit = Self::bit(loc);
        match side {
            Side::Dark => {
                self.dark |= bit;
                self.light &= !bit;
            }
            Side::Light => {
                self.light |= bit;
                self.dark &= !bit;
            }
        }
    }

    fn legal_moves(&self, side: Side) -> Mask {
        self.all_valid(side)
    }

    fn put_and_check(&mut self, side: Side, loc: usize) -> bool {
        if self.all_valid(side) & Self::bit(loc) == 0 {
            return false;
        }
        self.put(side, loc);
        true
    }

    fn count(&self, side: Side) -> u32 {
        self.mask(side).count_ones()
    }

    fn empty_count(&self) -> u32 {
        self.empty().count_ones()
    }
}

impl<const N: usize> FromStr for Bitboard<N> {
    type Err = crate::error::EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl<const N: usize> fmt::Display for Bitboard<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

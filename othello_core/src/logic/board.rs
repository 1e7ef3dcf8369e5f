use crate::error::EngineResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type Mask = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }

    pub const fn cell(self) -> Cell {
        match self {
            Self::Dark => Cell::Dark,
            Self::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" | "dark" | "black" => Ok(Self::Dark),
            "o" | "light" | "white" => Ok(Self::Light),
            other => Err(format!("unknown side: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Dark,
    Light,
    #[default]
    Empty,
}

impl Cell {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Self::Dark),
            'O' => Some(Self::Light),
            '+' => Some(Self::Empty),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Self::Dark => 'X',
            Self::Light => 'O',
            Self::Empty => '+',
        }
    }

    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Dark => Some(Side::Dark),
            Self::Light => Some(Side::Light),
            Self::Empty => None,
        }
    }
}

/// The board operations shared by every representation.
///
/// Locations are bit indices `row * N + col`. Legal destinations are
/// reported as a mask so both representations can be compared bit for bit.
pub trait BoardState: Sized + Clone {
    /// Side length of the board.
    const SIZE: usize;

    fn from_text(text: &str) -> EngineResult<Self>;

    fn occupant(&self, loc: usize) -> Cell;

    /// Sets `loc` to `side` without any legality check or captures.
    fn place(&mut self, side: Side, loc: usize);

    fn legal_moves(&self, side: Side) -> Mask;

    /// Places a disc for `side` at `loc` and flips every bracketed line.
    /// Leaves the board untouched and returns `false` if the move is illegal.
    fn put_and_check(&mut self, side: Side, loc: usize) -> bool;

    fn count(&self, side: Side) -> u32;

    fn empty_count(&self) -> u32;

    fn is_valid(&self, side: Side, loc: usize) -> bool {
        loc < Self::SIZE * Self::SIZE && self.legal_moves(side) & (1 << loc) != 0
    }

    fn has_move(&self, side: Side) -> bool {
        self.legal_moves(side) != 0
    }

    fn is_over(&self) -> bool {
        !(self.has_move(Side::Dark) || self.has_move(Side::Light))
    }

    /// Disc majority of a finished game, `None` on a draw.
    fn winner(&self) -> Option<Side> {
        let dark = self.count(Side::Dark);
        let light = self.count(Side::Light);
        match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Some(Side::Dark),
            std::cmp::Ordering::Less => Some(Side::Light),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn to_text(&self) -> String {
        (0..Self::SIZE * Self::SIZE)
            .map(|loc| self.occupant(loc).to_char())
            .collect()
    }

    /// Multi-line rendering with row letters down the side and column
    /// letters across the top.
    fn visualize(&self) -> String {
        let mut out = String::from(" ");
        for col in (b'a'..).take(Self::SIZE) {
            out.push(' ');
            out.push(char::from(col));
        }
        for (row, letter) in (b'A'..).take(Self::SIZE).enumerate() {
            out.push('\n');
            out.push(char::from(letter));
            for col in 0..Self::SIZE {
                out.push(' ');
                out.push(self.occupant(row * Self::SIZE + col).to_char());
            }
        }
        out.push('\n');
        out
    }
}

/// Iterates the indices of the set bits of a mask, lowest first.
pub struct BitIter {
    bits: Mask,
}

impl BitIter {
    pub const fn new(bits: Mask) -> Self {
        Self { bits }
    }
}

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let lsb = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1;
            Some(lsb)
        }
    }
}

use crate::error::{EngineError, EngineResult};
use crate::logic::board::Cell;
use std::fmt;

pub const SUPPORTED_SIZES: [usize; 2] = [6, 8];

/// Side length of the board encoded by `text`.
pub fn board_size(text: &str) -> EngineResult<usize> {
    let len = text.chars().count();
    SUPPORTED_SIZES
        .iter()
        .copied()
        .find(|n| n * n == len)
        .ok_or(EngineError::InvalidLength { len })
}

/// Decodes a board of side `n` into its cells, row-major.
pub fn decode_cells(text: &str, n: usize) -> EngineResult<Vec<Cell>> {
    let len = text.chars().count();
    if len != n * n {
        return Err(EngineError::InvalidLength { len });
    }
    text.chars()
        .enumerate()
        .map(|(index, found)| {
            Cell::from_char(found).ok_or(EngineError::InvalidCell { index, found })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: u8,
    pub col: u8,
}

impl Location {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(loc: usize, n: usize) -> Self {
        Self {
            row: (loc / n) as u8,
            col: (loc % n) as u8,
        }
    }

    pub const fn index(self, n: usize) -> usize {
        self.row as usize * n + self.col as usize
    }

    /// Parses `"Bd"`-style notation, checking it fits an `n`×`n` board.
    pub fn parse(text: &str, n: usize) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMove {
            text: text.to_string(),
        };
        let mut chars = text.chars();
        let (Some(r), Some(c), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !r.is_ascii_uppercase() || !c.is_ascii_lowercase() {
            return Err(invalid());
        }
        let row = u8::try_from(r).map_err(|_| invalid())? - b'A';
        let col = u8::try_from(c).map_err(|_| invalid())? - b'a';
        if usize::from(row) >= n || usize::from(col) >= n {
            return Err(invalid());
        }
        Ok(Self { row, col })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'A' + self.row),
            char::from(b'a' + self.col)
        )
    }
}

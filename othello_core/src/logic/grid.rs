use crate::error::EngineResult;
use crate::logic::board::{BoardState, Cell, Mask, Side};
use crate::logic::lookup::DIRECTIONS;
use crate::logic::notation::decode_cells;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBoard<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Default for GridBoard<N> {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }
}

impl<const N: usize> GridBoard<N> {
    /// Standard start: light on the main diagonal of the centre square.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::default();
        let mid = N / 2;
        board.set(mid - 1, mid - 1, Cell::Light);
        board.set(mid - 1, mid, Cell::Dark);
        board.set(mid, mid - 1, Cell::Dark);
        board.set(mid, mid, Cell::Light);
        board
    }

    pub fn at(&self, row: i32, col: i32) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    /// Number of discs `side` would flip along one direction from `(row, col)`.
    pub fn flip_count(&self, side: Side, row: i32, col: i32, (d_row, d_col): (i32, i32)) -> usize {
        let mine = side.cell();
        let theirs = side.opposite().cell();
        let mut count = 0;
        let (mut r, mut c) = (row + d_row, col + d_col);
        loop {
            match self.at(r, c) {
                Some(cell) if cell == theirs => count += 1,
                Some(cell) if cell == mine => return count,
                _ => return 0,
            }
            r += d_row;
            c += d_col;
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn coords(loc: usize) -> (i32, i32) {
        ((loc / N) as i32, (loc % N) as i32)
    }

    fn is_valid_cell(&self, side: Side, loc: usize) -> bool {
        let (row, col) = Self::coords(loc);
        self.at(row, col) == Some(Cell::Empty)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.flip_count(side, row, col, dir) > 0)
    }
}

impl<const N: usize> BoardState for GridBoard<N> {
    const SIZE: usize = N;

    fn from_text(text: &str) -> EngineResult<Self> {
        let mut board = Self::default();
        for (loc, cell) in decode_cells(text, N)?.into_iter().enumerate() {
            board.set(loc / N, loc % N, cell);
        }
        Ok(board)
    }

    fn occupant(&self, loc: usize) -> Cell {
        let (row, col) = Self::coords(loc);
        self.at(row, col).unwrap_or(Cell::Empty)
    }

    fn place(&mut self, side: Side, loc: usize) {
        self.set(loc / N, loc % N, side.cell());
    }

    fn legal_moves(&self, side: Side) -> Mask {
        (0..N * N)
            .filter(|&loc| self.is_valid_cell(side, loc))
            .fold(0, |acc, loc| acc | 1 << loc)
    }

    fn put_and_check(&mut self, side: Side, loc: usize) -> bool {
        if loc >= N * N || !self.is_valid_cell(side, loc) {
            return false;
        }
        let (row, col) = Self::coords(loc);
        for dir in DIRECTIONS {
            let flips = self.flip_count(side, row, col, dir);
            let (d_row, d_col) = dir;
            let (mut r, mut c) = (row, col);
            for _ in 0..flips {
                r += d_row;
                c += d_col;
                if let (Ok(ur), Ok(uc)) = (usize::try_from(r), usize::try_from(c)) {
                    self.set(ur, uc, side.cell());
                }
            }
        }
        self.place(side, loc);
        true
    }

    fn count(&self, side: Side) -> u32 {
        let target = side.cell();
        let total = self.cells.iter().flatten().filter(|&&c| c == target).count();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    fn empty_count(&self) -> u32 {
        let total = self
            .cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Empty)
            .count();
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}

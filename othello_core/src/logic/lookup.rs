use crate::logic::board::Mask;

/// The eight compass directions as `(d_row, d_col)`.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Per-direction shift amounts and wrap masks for an `n`×`n` board.
///
/// Shifting a mask one step in a direction moves every bit by
/// `d_row * n + d_col`; the mask then clears the file a bit would wrap into
/// and anything past the last cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rays {
    pub amount: [u32; 8],
    pub left: [bool; 8],
    pub mask: [Mask; 8],
}

impl Rays {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub const fn new(n: usize) -> Self {
        let full = full_mask(n);
        let first_file = file_mask(n, 0);
        let last_file = file_mask(n, n - 1);

        let mut amount = [0; 8];
        let mut left = [false; 8];
        let mut mask = [0; 8];
        let mut dir = 0;
        while dir < 8 {
            let (d_row, d_col) = DIRECTIONS[dir];
            let delta = d_row * n as i32 + d_col;
            left[dir] = delta > 0;
            amount[dir] = delta.unsigned_abs();
            mask[dir] = match d_col {
                1 => full & !first_file,
                -1 => full & !last_file,
                _ => full,
            };
            dir += 1;
        }
        Self { amount, left, mask }
    }

    #[inline]
    pub const fn shift(&self, bits: Mask, dir: usize) -> Mask {
        if self.left[dir] {
            (bits << self.amount[dir]) & self.mask[dir]
        } else {
            (bits >> self.amount[dir]) & self.mask[dir]
        }
    }
}

/// Every cell of an `n`×`n` board.
pub const fn full_mask(n: usize) -> Mask {
    if n * n >= 64 {
        Mask::MAX
    } else {
        (1 << (n * n)) - 1
    }
}

/// Every cell in column `col`.
pub const fn file_mask(n: usize, col: usize) -> Mask {
    let mut mask = 0;
    let mut row = 0;
    while row < n {
        mask |= 1 << (row * n + col);
        row += 1;
    }
    mask
}

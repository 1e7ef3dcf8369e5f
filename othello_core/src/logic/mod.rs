pub mod bitboard;
pub mod board;
pub mod grid;
pub mod lookup;
pub mod notation;
pub mod weights;

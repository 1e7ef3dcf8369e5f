use crate::engine::Evaluator;
use crate::logic::bitboard::Bitboard;
use crate::logic::board::{BoardState, Side};
use crate::logic::weights::WeightTable;

/// Weighted disc positions, one popcount per weight group.
pub struct PositionalEvaluator {
    weights: &'static WeightTable,
}

impl PositionalEvaluator {
    pub const fn new(weights: &'static WeightTable) -> Self {
        Self { weights }
    }
}

impl<const N: usize> Evaluator<N> for PositionalEvaluator {
    fn evaluate(&self, board: &Bitboard<N>, side: Side) -> i32 {
        self.weights.eval(board, side)
    }
}

/// Disc difference; exact once the game is over.
pub struct DiscCountEvaluator;

impl<const N: usize> Evaluator<N> for DiscCountEvaluator {
    #[allow(clippy::cast_possible_wrap)]
    fn evaluate(&self, board: &Bitboard<N>, side: Side) -> i32 {
        board.count(side) as i32 - board.count(side.opposite()) as i32
    }
}

use crate::engine::move_list::MoveList;
use crate::engine::{Candidate, Phase};
use crate::logic::bitboard::Bitboard;
use crate::logic::board::{BitIter, Side};
use crate::logic::weights::WeightTable;
use rand::Rng;

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn ordered_candidates<const N: usize, R: Rng + ?Sized>(
    board: &Bitboard<N>,
    side: Side,
    phase: Phase,
    weights: &WeightTable,
    rng: Option<&mut R>,
) -> MoveList {
    let mut moves = MoveList::new();
    for loc in BitIter::new(board.all_valid(side)) {
        let value = match phase {
            Phase::Opening => weights.at(loc),
            Phase::Endgame => {
                let mut next = *board;
                next.put(side, loc);
                next.mobility(side.opposite()) as i32
            }
        };
        moves.push(Candidate {
            loc: loc as u8,
            value,
        });
    }

    if let Some(rng) = rng {
        moves.shuffle(rng);
    }
    match phase {
        Phase::Opening => moves.sort_descending(),
        Phase::Endgame => moves.sort_ascending(),
    }
    moves
}

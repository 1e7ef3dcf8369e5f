use crate::logic::bitboard::Bitboard;
use crate::logic::board::Side;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod level;
pub mod move_list;
pub mod ordering;
pub mod search;

#[cfg(test)]
mod search_test;

/// A legal destination and its heuristic value at one search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub loc: u8,
    pub value: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Positional evaluation with a finite depth budget.
    #[default]
    Opening,
    /// Disc-count evaluation searched to the end of the game.
    Endgame,
}

/// Diagnostics for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub phase: Phase,
    /// Configured depth budget; `None` when searching to the end.
    pub depth_limit: Option<u32>,
    /// Deepest ply actually reached.
    pub depth: u32,
    pub nodes: u64,
    pub time_ms: u64,
    /// Set when the node budget cut the search short.
    pub truncated: bool,
}

/// Result of a `best_move` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveReply {
    /// `<row-letter><col-letter>`, e.g. `"Bd"`.
    pub notation: String,
    pub value: i32,
    /// `value` scaled for display: discs-equivalent in the opening,
    /// raw disc difference in the endgame.
    pub score: f64,
    pub stats: SearchStats,
}

pub trait Evaluator<const N: usize> {
    fn evaluate(&self, board: &Bitboard<N>, side: Side) -> i32;
}

use crate::logic::board::Side;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board text is not 36 (6×6) or 64 (8×8) cells long.
    #[error("invalid board length: {len} (expected 36 or 64)")]
    InvalidLength { len: usize },

    /// Board text contains a character outside `X`, `O`, `+`.
    #[error("invalid cell {found:?} at index {index}")]
    InvalidCell { index: usize, found: char },

    /// Move text is not `<row-letter><col-letter>` within the board.
    #[error("invalid move notation: {text:?}")]
    InvalidMove { text: String },

    /// The searched move was rejected by the legality re-check.
    #[error("engine selected illegal move {location} for {side} on board {board}")]
    IllegalMove {
        location: String,
        side: Side,
        board: String,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

pub mod engine;
pub mod error;
pub mod logic;

pub use engine::config::EngineConfig;
pub use engine::level::Level;
pub use engine::search::{AlphaBetaEngine, SearchOutcome};
pub use engine::{MoveReply, SearchStats};
pub use error::{EngineError, EngineResult};
pub use logic::bitboard::Bitboard;
pub use logic::board::{BoardState, Cell, Side};
pub use logic::grid::GridBoard;
pub use logic::notation::Location;

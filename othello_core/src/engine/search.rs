use crate::engine::config::EngineConfig;
use crate::engine::eval::{DiscCountEvaluator, PositionalEvaluator};
use crate::engine::level::{depth_budget, phase2_threshold, select_phase, Level};
use crate::engine::ordering::ordered_candidates;
use crate::engine::{Evaluator, MoveReply, Phase, SearchStats};
use crate::error::{EngineError, EngineResult};
use crate::logic::bitboard::Bitboard;
use crate::logic::board::{BoardState, Side};
use crate::logic::notation::{board_size, Location};
use crate::logic::weights::WeightTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Instant;

/// Best root move found by one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub loc: usize,
    pub value: i32,
    pub stats: SearchStats,
}

/// Alpha-beta move search.
///
/// The engine owns only its configuration and its tie-break random source;
/// everything a search mutates lives in a per-call context, so one engine
/// can serve any number of sequential calls without leaking state.
pub struct AlphaBetaEngine<R: Rng = StdRng> {
    config: Arc<EngineConfig>,
    rng: R,
}

impl AlphaBetaEngine<StdRng> {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> AlphaBetaEngine<R> {
    pub const fn with_rng(config: Arc<EngineConfig>, rng: R) -> Self {
        Self { config, rng }
    }

    /// Text in, text out: decodes `text`, searches for `side` and re-checks
    /// the chosen move on the decoded board.
    ///
    /// Returns `Ok(None)` when `side` has no legal move and must pass.
    pub fn best_move(
        &mut self,
        text: &str,
        side: Side,
        level: Level,
    ) -> EngineResult<Option<MoveReply>> {
        match board_size(text)? {
            6 => self.best_move_on::<6>(text, side, level),
            _ => self.best_move_on::<8>(text, side, level),
        }
    }

    fn best_move_on<const N: usize>(
        &mut self,
        text: &str,
        side: Side,
        level: Level,
    ) -> EngineResult<Option<MoveReply>> {
        let board = Bitboard::<N>::from_text(text)?;
        let Some(outcome) = self.search(&board, side, level) else {
            log::info!("{side} has no legal move and passes");
            return Ok(None);
        };

        let location = Location::from_index(outcome.loc, N);
        let mut applied = board;
        if !applied.put_and_check(side, outcome.loc) {
            log::error!(
                "search chose illegal move {location} for {side}\n{}",
                board.visualize()
            );
            return Err(EngineError::IllegalMove {
                location: location.to_string(),
                side,
                board: text.to_string(),
            });
        }

        let stats = outcome.stats;
        log::info!(
            "{side} plays {location}: depth {} nodes {} value {} ({} ms)",
            stats.depth,
            stats.nodes,
            outcome.value,
            stats.time_ms
        );
        if stats.truncated {
            log::warn!("node budget exhausted, result is approximate");
        }

        Ok(Some(MoveReply {
            notation: location.to_string(),
            value: outcome.value,
            score: normalised_score::<N>(outcome.value, stats.phase),
            stats,
        }))
    }

    /// Searches `board` for `side`; `None` when `side` has no legal move.
    pub fn search<const N: usize>(
        &mut self,
        board: &Bitboard<N>,
        side: Side,
        level: Level,
    ) -> Option<SearchOutcome> {
        if !board.has_move(side) {
            return None;
        }
        let weights = WeightTable::for_size(N)?;
        let start = Instant::now();

        let threshold = phase2_threshold(&self.config, level, N);
        let phase = select_phase(board.empty_count(), threshold);
        let depth_limit = match phase {
            Phase::Opening => Some(depth_budget(&self.config, level, N)),
            Phase::Endgame => None,
        };
        log::debug!(
            "level {} ({}): {} empty, threshold {threshold}, phase {phase:?}, depth {depth_limit:?}",
            level,
            level.name(),
            board.empty_count()
        );

        let positional = PositionalEvaluator::new(weights);
        let evaluator: &dyn Evaluator<N> = match phase {
            Phase::Opening => &positional,
            Phase::Endgame => &DiscCountEvaluator,
        };
        let rng: Option<&mut R> = if self.config.shuffle_candidates {
            Some(&mut self.rng)
        } else {
            None
        };

        let mut ctx = SearchContext {
            me: side,
            phase,
            weights,
            evaluator,
            rng,
            node_limit: self.config.node_limit,
            stats: SearchStats {
                phase,
                depth_limit,
                ..SearchStats::default()
            },
        };
        let root_value = evaluator.evaluate(board, side);
        let (value, best) = ctx.alpha_beta(
            board,
            depth_limit.unwrap_or(u32::MAX),
            0,
            root_value,
            i32::MIN,
            i32::MAX,
            true,
        );

        let mut stats = ctx.stats;
        stats.time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        best.map(|loc| SearchOutcome { loc, value, stats })
    }
}

/// Scales a positional value to discs-equivalent; endgame values already
/// are a disc difference.
#[allow(clippy::cast_precision_loss)]
fn normalised_score<const N: usize>(value: i32, phase: Phase) -> f64 {
    match (phase, WeightTable::for_size(N)) {
        (Phase::Opening, Some(weights)) if weights.total() != 0 => {
            f64::from(value) / f64::from(weights.total()) * (N * N) as f64
        }
        _ => f64::from(value),
    }
}

/// State threaded through one search call.
struct SearchContext<'a, const N: usize, R: Rng + ?Sized> {
    me: Side,
    phase: Phase,
    weights: &'static WeightTable,
    evaluator: &'a dyn Evaluator<N>,
    rng: Option<&'a mut R>,
    node_limit: Option<u64>,
    stats: SearchStats,
}

impl<const N: usize, R: Rng + ?Sized> SearchContext<'_, N, R> {
    /// Heuristic value of a node the search does not expand.
    ///
    /// In the opening `current` is the positional value carried down
    /// incrementally; it must agree with a full evaluation.
    fn leaf_value(&self, board: &Bitboard<N>, current: i32) -> i32 {
        match self.phase {
            Phase::Opening => {
                debug_assert_eq!(current, self.evaluator.evaluate(board, self.me));
                current
            }
            Phase::Endgame => self.evaluator.evaluate(board, self.me),
        }
    }

    fn budget_exhausted(&self) -> bool {
        self.node_limit.is_some_and(|limit| self.stats.nodes > limit)
    }

    /// Positional value, from the engine's side, after `mover` plays `loc`.
    fn value_after(&self, board: &Bitboard<N>, mover: Side, loc: usize, current: i32) -> i32 {
        match self.phase {
            Phase::Endgame => current,
            Phase::Opening if mover == self.me => {
                self.weights.eval_after_put(board, mover, loc, current)
            }
            Phase::Opening => -self.weights.eval_after_put(board, mover, loc, -current),
        }
    }

    /// Returns the node value and, when children were explored, the move
    /// that produced it. Ties keep the first candidate in search order.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta(
        &mut self,
        board: &Bitboard<N>,
        depth: u32,
        ply: u32,
        current: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        self.stats.nodes += 1;
        self.stats.depth = self.stats.depth.max(ply);

        if depth == 0 || board.is_over() {
            return (self.leaf_value(board, current), None);
        }
        // The root is always expanded so a move is produced.
        if ply > 0 && self.budget_exhausted() {
            self.stats.truncated = true;
            return (self.leaf_value(board, current), None);
        }

        let mover = if maximizing { self.me } else { self.me.opposite() };
        let moves = ordered_candidates(board, mover, self.phase, self.weights, self.rng.as_deref_mut());
        if moves.is_empty() {
            // Pass: same depth, other side.
            let (value, _) = self.alpha_beta(board, depth, ply, current, alpha, beta, !maximizing);
            return (value, None);
        }

        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_loc = None;
        for candidate in &moves {
            let loc = usize::from(candidate.loc);
            let next_value = self.value_after(board, mover, loc, current);
            let mut child = *board;
            child.put(mover, loc);

            let (value, _) =
                self.alpha_beta(&child, depth - 1, ply + 1, next_value, alpha, beta, !maximizing);

            if maximizing {
                if best_loc.is_none() || value > best_value {
                    best_value = value;
                    best_loc = Some(loc);
                }
                alpha = alpha.max(value);
            } else {
                if best_loc.is_none() || value < best_value {
                    best_value = value;
                    best_loc = Some(loc);
                }
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }
        (best_value, best_loc)
    }
}

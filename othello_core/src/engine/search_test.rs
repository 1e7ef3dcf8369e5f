use crate::engine::config::{EngineConfig, SizeTuning};
use crate::engine::eval::{DiscCountEvaluator, PositionalEvaluator};
use crate::engine::level::Level;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::{Evaluator, Phase};
use crate::error::EngineError;
use crate::logic::bitboard::Bitboard;
use crate::logic::board::{BitIter, BoardState, Side};
use crate::logic::weights::WeightTable;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use std::sync::Arc;

const FORCED_ENDGAME: &str = "XXXXOXOXOOXXXOXXXOXOOXOXXXXXXOXOOX+O+XOOXXXOXXXOOO+O+XXOOXOXOXXX";

fn seeded_engine(config: EngineConfig, seed: u64) -> AlphaBetaEngine<StdRng> {
    AlphaBetaEngine::with_rng(Arc::new(config), StdRng::seed_from_u64(seed))
}

fn unshuffled(config: EngineConfig) -> EngineConfig {
    EngineConfig {
        shuffle_candidates: false,
        ..config
    }
}

/// Plays random legal moves until at most `empty` cells remain.
fn random_position<const N: usize>(rng: &mut StdRng, empty: u32) -> (Bitboard<N>, Side) {
    let mut board = Bitboard::<N>::new();
    let mut side = Side::Dark;
    while board.empty_count() > empty && !board.is_over() {
        if let Some(loc) = BitIter::new(board.all_valid(side)).choose(rng) {
            board.put(side, loc);
        }
        side = side.opposite();
    }
    (board, side)
}

/// Plain minimax with the same pass rule as the engine.
fn minimax<const N: usize>(
    board: &Bitboard<N>,
    me: Side,
    eval: &dyn Evaluator<N>,
    depth: u32,
    maximizing: bool,
) -> i32 {
    if depth == 0 || board.is_over() {
        return eval.evaluate(board, me);
    }
    let mover = if maximizing { me } else { me.opposite() };
    let moves = board.all_valid(mover);
    if moves == 0 {
        return minimax(board, me, eval, depth, !maximizing);
    }
    let values = BitIter::new(moves).map(|loc| {
        let mut child = *board;
        child.put(mover, loc);
        minimax(&child, me, eval, depth - 1, !maximizing)
    });
    if maximizing {
        values.max().unwrap()
    } else {
        values.min().unwrap()
    }
}

#[test]
fn test_opening_move_is_legal_6x6() {
    let mut engine = seeded_engine(EngineConfig::default(), 1);
    let reply = engine
        .best_move("++++++++++++++OX++++XO++++++++++++++", Side::Dark, Level::Beginner)
        .unwrap()
        .unwrap();
    assert!(["Bc", "Cb", "De", "Ed"].contains(&reply.notation.as_str()));
    assert_eq!(reply.stats.phase, Phase::Opening);
    assert_eq!(reply.stats.depth_limit, Some(1));
}

#[test]
fn test_forced_endgame_move() {
    let board: Bitboard<8> = FORCED_ENDGAME.parse().unwrap();
    assert_eq!(board.all_valid(Side::Dark).count_ones(), 1);

    for level in [Level::Beginner, Level::Professional, Level::Master] {
        let mut engine = seeded_engine(EngineConfig::default(), 7);
        let reply = engine.best_move(FORCED_ENDGAME, Side::Dark, level).unwrap().unwrap();
        assert_eq!(reply.notation, "Ee", "level {level}");
        assert_eq!(reply.stats.phase, Phase::Endgame);
        assert_eq!(reply.stats.depth_limit, None);
    }

    // A one-ply opening search must find it too.
    let shallow = EngineConfig {
        board_8x8: SizeTuning {
            base_depth: 1,
            depth_step: 0,
            base_threshold: 0,
            threshold_step: 0,
        },
        ..EngineConfig::default()
    };
    let mut engine = seeded_engine(shallow, 7);
    let reply = engine.best_move(FORCED_ENDGAME, Side::Dark, Level::Master).unwrap().unwrap();
    assert_eq!(reply.notation, "Ee");
    assert_eq!(reply.stats.phase, Phase::Opening);
    assert_eq!(reply.stats.depth_limit, Some(1));
}

#[test]
fn test_search_returns_legal_moves() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut engine = seeded_engine(EngineConfig::default(), 5);
    for empty in [30, 24, 16, 8, 3] {
        let (board, side) = random_position::<6>(&mut rng, empty);
        match engine.search(&board, side, Level::Amateur) {
            Some(outcome) => assert!(board.is_valid(side, outcome.loc), "{board}"),
            None => assert!(!board.has_move(side)),
        }
    }
    for empty in [56, 40, 20, 6] {
        let (board, side) = random_position::<8>(&mut rng, empty);
        match engine.search(&board, side, Level::Beginner) {
            Some(outcome) => assert!(board.is_valid(side, outcome.loc), "{board}"),
            None => assert!(!board.has_move(side)),
        }
    }
}

#[test]
fn test_opening_value_matches_minimax() {
    let config = unshuffled(EngineConfig {
        board_6x6: SizeTuning {
            base_depth: 3,
            depth_step: 0,
            base_threshold: 0,
            threshold_step: 0,
        },
        ..EngineConfig::default()
    });
    let eval = PositionalEvaluator::new(WeightTable::for_size(6).unwrap());
    let mut rng = StdRng::seed_from_u64(99);
    let mut engine = seeded_engine(config, 0);
    for empty in [32, 26, 20, 12] {
        let (board, side) = random_position::<6>(&mut rng, empty);
        if !board.has_move(side) {
            continue;
        }
        let outcome = engine.search(&board, side, Level::Master).unwrap();
        assert_eq!(outcome.stats.phase, Phase::Opening);
        assert_eq!(outcome.value, minimax(&board, side, &eval, 3, true), "{board}");
    }
}

#[test]
fn test_pass_inside_search_costs_no_depth() {
    // After dark plays Fd light has no reply, so dark moves again within
    // the same two plies.
    let board: Bitboard<6> = "+++++++++O++++OO+X++OOXX++O++X+XO+++".parse().unwrap();
    let mut after = board;
    assert!(after.put_and_check(Side::Dark, 33));
    assert!(!after.has_move(Side::Light));
    assert!(after.has_move(Side::Dark));

    let config = unshuffled(EngineConfig {
        board_6x6: SizeTuning {
            base_depth: 2,
            depth_step: 0,
            base_threshold: 0,
            threshold_step: 0,
        },
        ..EngineConfig::default()
    });
    let eval = PositionalEvaluator::new(WeightTable::for_size(6).unwrap());
    let mut engine = seeded_engine(config, 0);
    let outcome = engine.search(&board, Side::Dark, Level::Master).unwrap();
    assert_eq!(outcome.stats.depth_limit, Some(2));
    assert_eq!(outcome.value, minimax(&board, Side::Dark, &eval, 2, true));
    // Charging the pass a ply would score 158.
    assert_eq!(outcome.value, 124);
}

#[test]
fn test_endgame_value_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut engine = seeded_engine(unshuffled(EngineConfig::default()), 0);
    for _ in 0..4 {
        let (board, side) = random_position::<8>(&mut rng, 7);
        if !board.has_move(side) {
            continue;
        }
        let outcome = engine.search(&board, side, Level::Master).unwrap();
        assert_eq!(outcome.stats.phase, Phase::Endgame);
        let exact = minimax(&board, side, &DiscCountEvaluator, u32::MAX, true);
        assert_eq!(outcome.value, exact, "{board}");
    }
}

#[test]
fn test_stats_are_per_call() {
    let board = Bitboard::<8>::new();
    let mut engine = seeded_engine(unshuffled(EngineConfig::default()), 0);
    let first = engine.search(&board, Side::Dark, Level::Amateur).unwrap();
    let second = engine.search(&board, Side::Dark, Level::Amateur).unwrap();
    assert!(first.stats.nodes > 1);
    assert_eq!(first.stats.nodes, second.stats.nodes);
    assert_eq!(first.stats.depth, second.stats.depth);
    assert_eq!(first.loc, second.loc);
}

#[test]
fn test_seeded_engines_agree() {
    let play = |seed| {
        let mut engine = seeded_engine(EngineConfig::default(), seed);
        let mut board = Bitboard::<6>::new();
        let mut side = Side::Dark;
        let mut moves = Vec::new();
        while !board.is_over() {
            if let Some(outcome) = engine.search(&board, side, Level::Beginner) {
                board.put(side, outcome.loc);
                moves.push(outcome.loc);
            }
            side = side.opposite();
        }
        moves
    };
    assert_eq!(play(42), play(42));
}

#[test]
fn test_node_limit_truncates() {
    let config = EngineConfig {
        node_limit: Some(10),
        ..EngineConfig::default()
    };
    let mut engine = seeded_engine(config, 3);
    let board = Bitboard::<8>::new();
    let outcome = engine.search(&board, Side::Dark, Level::Master).unwrap();
    assert!(outcome.stats.truncated);
    assert!(board.is_valid(Side::Dark, outcome.loc));

    let mut unlimited = seeded_engine(EngineConfig::default(), 3);
    let outcome = unlimited.search(&board, Side::Dark, Level::Beginner).unwrap();
    assert!(!outcome.stats.truncated);
}

#[test]
fn test_no_legal_move_is_a_pass() {
    let mut engine = seeded_engine(EngineConfig::default(), 0);
    // Light can still move, dark cannot.
    let text = format!("XO{}", "+".repeat(34));
    let board: Bitboard<6> = text.parse().unwrap();
    assert!(!board.has_move(Side::Light));
    assert!(board.has_move(Side::Dark));
    assert_eq!(engine.best_move(&text, Side::Light, Level::Master), Ok(None));
    assert!(engine.best_move(&text, Side::Dark, Level::Master).unwrap().is_some());
}

#[test]
fn test_bad_board_text() {
    let mut engine = seeded_engine(EngineConfig::default(), 0);
    assert_eq!(
        engine.best_move("XO+", Side::Dark, Level::Beginner),
        Err(EngineError::InvalidLength { len: 3 })
    );
    let text = format!("XO?{}", "+".repeat(33));
    assert_eq!(
        engine.best_move(&text, Side::Dark, Level::Beginner),
        Err(EngineError::InvalidCell { index: 2, found: '?' })
    );
}

#[test]
fn test_opening_score_is_normalised() {
    let mut engine = seeded_engine(EngineConfig::default(), 8);
    let text = Bitboard::<8>::new().to_text();
    let reply = engine.best_move(&text, Side::Dark, Level::Beginner).unwrap().unwrap();
    let expected = f64::from(reply.value) / 13752.0 * 64.0;
    assert!((reply.score - expected).abs() < 1e-9);
}

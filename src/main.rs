//! Command-line host for the move-search engine.
//!
//! Reads a board in its textual form, asks the engine for a move and prints
//! it in `<row><col>` notation, or `pass` when the side cannot move.

use clap::Parser;
use othello_core::logic::notation::board_size;
use othello_core::{AlphaBetaEngine, BoardState, EngineConfig, GridBoard, Level, Location, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Pick a move for one side of an Othello position.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board cells, row-major: `X` dark, `O` light, `+` empty (36 or 64 chars).
    board: String,

    /// Side to move: dark, light, X or O.
    #[arg(short, long, default_value = "dark")]
    side: Side,

    /// Difficulty: 0-4 or beginner, amateur, professional, expert, master.
    #[arg(short, long, default_value = "professional")]
    level: Level,

    /// JSON file overriding the engine tuning.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for tie-breaking; entropy when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board after the move and the search statistics.
    #[arg(long, default_value_t = false)]
    show: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = std::fs::read_to_string(path)?;
    let config = EngineConfig::load_from_json(&json)?;
    tracing::debug!("loaded engine config from {}", path.display());
    Ok(config)
}

fn render<const N: usize>(
    text: &str,
    side: Side,
    notation: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let mut board = GridBoard::<N>::from_text(text)?;
    if let Some(notation) = notation {
        let loc = Location::parse(notation, N)?.index(N);
        board.put_and_check(side, loc);
    }
    Ok(board.visualize())
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = Arc::new(load_config(cli.config.as_ref())?);
    let mut engine = match cli.seed {
        Some(seed) => AlphaBetaEngine::with_rng(config, StdRng::seed_from_u64(seed)),
        None => AlphaBetaEngine::new(config),
    };

    let reply = engine.best_move(&cli.board, cli.side, cli.level)?;
    match &reply {
        Some(reply) => println!("{}", reply.notation),
        None => println!("pass"),
    }

    if cli.show {
        let notation = reply.as_ref().map(|r| r.notation.as_str());
        let board = match board_size(&cli.board)? {
            6 => render::<6>(&cli.board, cli.side, notation)?,
            _ => render::<8>(&cli.board, cli.side, notation)?,
        };
        eprint!("{board}");
        if let Some(reply) = &reply {
            eprintln!("score {:.2}", reply.score);
            eprintln!("{}", serde_json::to_string(&reply.stats)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

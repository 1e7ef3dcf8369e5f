use crate::engine::config::EngineConfig;
use crate::engine::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Amateur,
    Professional,
    Expert,
    Master,
}

impl Level {
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Amateur,
        Self::Professional,
        Self::Expert,
        Self::Master,
    ];

    pub const fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Amateur => "amateur",
            Self::Professional => "professional",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }

    /// Levels below the strongest.
    const fn steps_below_top(self) -> u32 {
        Self::Master.index() - self.index()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if let Some(level) = Self::ALL.iter().find(|l| l.name() == lower) {
            return Ok(*level);
        }
        s.parse::<u32>()
            .ok()
            .and_then(Self::from_index)
            .ok_or_else(|| format!("unknown level: {s} (expected 0-4 or a level name)"))
    }
}

/// Empty-cell count at or below which the endgame search takes over.
pub const fn phase2_threshold(config: &EngineConfig, level: Level, size: usize) -> u32 {
    let tuning = config.tuning(size);
    tuning
        .base_threshold
        .saturating_sub(level.steps_below_top() * tuning.threshold_step)
}

/// Opening-phase depth budget, never below one ply.
pub const fn depth_budget(config: &EngineConfig, level: Level, size: usize) -> u32 {
    let tuning = config.tuning(size);
    let depth = tuning
        .base_depth
        .saturating_sub(level.steps_below_top() * tuning.depth_step);
    if depth == 0 {
        1
    } else {
        depth
    }
}

pub const fn select_phase(empty: u32, threshold: u32) -> Phase {
    if empty > threshold {
        Phase::Opening
    } else {
        Phase::Endgame
    }
}

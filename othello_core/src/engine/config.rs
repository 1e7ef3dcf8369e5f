use serde::{Deserialize, Serialize};

/// Depth and phase tuning for one board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTuning {
    /// Opening depth at the strongest level.
    pub base_depth: u32,
    /// Depth lost per level below the strongest.
    pub depth_step: u32,
    /// Empty-cell count at or below which the strongest level switches to
    /// the endgame search.
    pub base_threshold: u32,
    /// Threshold lost per level below the strongest.
    pub threshold_step: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_6x6: SizeTuning,
    pub board_8x8: SizeTuning,

    /// Upper bound on visited nodes per call; unlimited when `None`.
    pub node_limit: Option<u64>,
    /// Shuffle candidates before the stable sort so equal moves vary.
    pub shuffle_candidates: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_6x6: SizeTuning {
                base_depth: 16,
                depth_step: 4,
                base_threshold: 20,
                threshold_step: 4,
            },
            board_8x8: SizeTuning {
                base_depth: 10,
                depth_step: 2,
                base_threshold: 20,
                threshold_step: 4,
            },
            node_limit: None,
            shuffle_candidates: true,
        }
    }
}

impl EngineConfig {
    /// Reads overrides from JSON; missing keys keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub const fn tuning(&self, size: usize) -> &SizeTuning {
        if size == 6 {
            &self.board_6x6
        } else {
            &self.board_8x8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = EngineConfig::load_from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.board_6x6.base_depth, 16);
        assert!(config.shuffle_candidates);
    }

    #[test]
    fn test_load_config_partial() {
        let json = r#"{
            "node_limit": 50000,
            "board_8x8": { "base_depth": 8, "depth_step": 1, "base_threshold": 14, "threshold_step": 2 }
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.node_limit, Some(50_000));
        assert_eq!(config.board_8x8.base_depth, 8);
        assert_eq!(config.tuning(8).threshold_step, 2);
        // Untouched sections keep defaults
        assert_eq!(config.board_6x6, EngineConfig::default().board_6x6);
    }

    #[test]
    fn test_load_config_invalid_json() {
        assert!(EngineConfig::load_from_json("{ invalid json }").is_err());
        assert!(EngineConfig::load_from_json(r#"{ "node_limit": "many" }"#).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = EngineConfig {
            shuffle_candidates: false,
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::load_from_json(&json).unwrap(), config);
    }
}

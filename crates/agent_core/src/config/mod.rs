//! # Engine Configuration
//!
//! All tuning constants of the simulation live here so balance changes never
//! touch the algorithms themselves.
//!
//! ```rust
//! use agent_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let chaotic = EngineConfig::chaotic();
//! assert!(chaotic.matchday.upset_chance > config.matchday.upset_chance);
//! ```

mod economy_config;
mod generation_config;
mod match_config;
mod season_config;

pub use economy_config::EconomyConfig;
pub use generation_config::GenerationConfig;
pub use match_config::MatchConfig;
pub use season_config::{AwardThresholds, ContractTick, SeasonConfig, TransferWindow};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Full engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// World generation parameters
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Match simulation probabilities and rates
    #[serde(default)]
    pub matchday: MatchConfig,
    /// Calendar, awards and contract clock
    #[serde(default)]
    pub season: SeasonConfig,
    /// Money flows: transfers, commission, training, starting funds
    #[serde(default)]
    pub economy: EconomyConfig,
}

impl EngineConfig {
    /// The standard game balance
    pub fn standard() -> Self {
        Self::default()
    }

    /// More upsets and goals
    pub fn chaotic() -> Self {
        let mut cfg = Self::default();
        cfg.matchday.upset_chance = 0.15;
        cfg.matchday.league_average_goals = 3.4;
        cfg
    }

    /// Small world for fast tests
    pub fn testing() -> Self {
        let mut cfg = Self::default();
        cfg.generation.player_count = 900;
        cfg
    }

    /// Parse a (possibly partial) YAML document; missing sections keep defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_yaml::from_str(yaml)?;
        Ok(cfg)
    }
}

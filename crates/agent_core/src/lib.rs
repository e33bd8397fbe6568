//! # agent_core - Football Agent Career Simulation Engine
//!
//! Headless season engine for a football agent game: a generated world of
//! clubs and players across national leagues, weekly fixtures with a
//! statistical match model, transfers and contracts, season-end awards and
//! promotion/relegation, and the agent's own career (clients, commission,
//! training).
//!
//! ## Features
//! - Seedable, replayable simulation (same seed = same career)
//! - Week passes are atomic: a failed pass leaves the world untouched
//! - JSON-plain world state that round-trips through a text blob
//! - JSON API for UI integration

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Simulation entry points thread world, config and rng together
#![allow(clippy::too_many_arguments)]
// Loop style - can fix incrementally
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod career;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod market;
pub mod match_sim;
pub mod models;
pub mod player;
pub mod random;
pub mod save;
pub mod season;
pub mod state;
pub mod strength;

// Re-export main API functions
pub use api::{
    mark_notification_read_json, new_game_json, recruit_player_json, simulate_week_json,
    train_player_json, transfer_player_json,
};
pub use error::{EngineError, Result};

// Re-export the engine surface
pub use career::{RecruitOutcome, TrainingIntensity, TrainingOutcome};
pub use config::EngineConfig;
pub use engine::Engine;
pub use market::TransferOutcome;
pub use random::GameRng;
pub use season::WeekSummary;
pub use state::WorldState;

// Re-export save system
pub use save::{FileSaveStore, GameSave, MemorySaveStore, SaveError, SaveStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

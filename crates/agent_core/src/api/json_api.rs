use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::career::{RecruitOutcome, TrainingIntensity, TrainingOutcome};
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::{EngineError, Result};
use crate::market::TransferOutcome;
use crate::models::{Attribute, Difficulty, Fixture, PlayerId};
use crate::state::WorldState;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct NewGameRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub agent_name: String,
    /// "easy" | "normal" | "hard"
    pub difficulty: String,
    /// Balance overrides; the standard game when absent
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Deserialize)]
pub struct WeekRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub world: WorldState,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub world: WorldState,
    pub player_id: PlayerId,
    pub target_club: String,
    pub fee: f64,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Deserialize)]
pub struct TrainRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub world: WorldState,
    pub player_id: PlayerId,
    /// Attribute name, e.g. "passing"
    pub attribute: String,
    /// "light" | "normal" | "intense"
    pub intensity: String,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RecruitRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub world: WorldState,
    pub player_id: PlayerId,
}

#[derive(Debug, Deserialize)]
pub struct NotificationReadRequest {
    pub schema_version: u8,
    pub world: WorldState,
    /// Marks every notification when absent
    #[serde(default)]
    pub notification_id: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct WorldResponse {
    pub schema_version: u8,
    pub world: WorldState,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub schema_version: u8,
    pub week: u32,
    pub season: u32,
    pub fixtures: Vec<Fixture>,
    pub transfer_window_open: bool,
    pub world: WorldState,
}

#[derive(Debug, Serialize)]
pub struct OutcomeResponse<T> {
    pub schema_version: u8,
    pub outcome: T,
    pub world: WorldState,
}

#[derive(Debug, Serialize)]
pub struct MarkReadOutcome {
    pub success: bool,
    pub unread: usize,
}

fn check_schema(version: u8) -> Result<()> {
    if version != SCHEMA_VERSION {
        return Err(EngineError::InvalidParameter(format!("Unsupported schema version: {}", version)));
    }
    Ok(())
}

fn engine_for(seed: u64, config: Option<EngineConfig>) -> Engine {
    Engine::with_seed(config.unwrap_or_default(), seed)
}

fn respond<T: Serialize>(outcome: T, world: WorldState) -> Result<String> {
    let response = OutcomeResponse { schema_version: SCHEMA_VERSION, outcome, world };
    Ok(serde_json::to_string(&response)?)
}

/// Generate a new career world
pub fn new_game_json(request_json: &str) -> Result<String> {
    let request: NewGameRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let difficulty: Difficulty = request.difficulty.parse().map_err(EngineError::InvalidParameter)?;
    let mut engine = engine_for(request.seed, request.config);
    let world = engine.initialize_new_game(&request.agent_name, difficulty);

    let response = WorldResponse { schema_version: SCHEMA_VERSION, world };
    Ok(serde_json::to_string(&response)?)
}

/// Advance the world by one week
pub fn simulate_week_json(request_json: &str) -> Result<String> {
    let request: WeekRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut world = request.world;
    let mut engine = engine_for(request.seed, request.config);
    let summary = engine.simulate_week(&mut world)?;
    debug!(week = summary.week, season = summary.season, "simulate_week_json");

    let response = WeekResponse {
        schema_version: SCHEMA_VERSION,
        week: summary.week,
        season: summary.season,
        fixtures: summary.fixtures,
        transfer_window_open: summary.transfer_window_open,
        world,
    };
    Ok(serde_json::to_string(&response)?)
}

pub fn transfer_player_json(request_json: &str) -> Result<String> {
    let request: TransferRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut world = request.world;
    let mut engine = engine_for(request.seed, request.config);
    let outcome: TransferOutcome =
        engine.transfer_player(&mut world, request.player_id, &request.target_club, request.fee);
    respond(outcome, world)
}

/// Unknown attribute or intensity names come back as a failed outcome
pub fn train_player_json(request_json: &str) -> Result<String> {
    let request: TrainRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut world = request.world;
    let parsed = request
        .attribute
        .parse::<Attribute>()
        .and_then(|attr| request.intensity.parse::<TrainingIntensity>().map(|intensity| (attr, intensity)));

    let outcome = match parsed {
        Ok((attribute, intensity)) => {
            let mut engine = engine_for(request.seed, request.config);
            engine.train_player(&mut world, request.player_id, attribute, intensity)
        }
        Err(message) => TrainingOutcome::failed(message),
    };
    respond(outcome, world)
}

pub fn recruit_player_json(request_json: &str) -> Result<String> {
    let request: RecruitRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut world = request.world;
    let mut engine = engine_for(request.seed, None);
    let outcome: RecruitOutcome = engine.recruit_player(&mut world, request.player_id);
    respond(outcome, world)
}

pub fn mark_notification_read_json(request_json: &str) -> Result<String> {
    let request: NotificationReadRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let mut world = request.world;
    let success = match request.notification_id {
        Some(id) => world.notifications.mark_read(id),
        None => {
            world.notifications.mark_all_read();
            true
        }
    };
    let outcome = MarkReadOutcome { success, unread: world.notifications.unread_count() };
    respond(outcome, world)
}

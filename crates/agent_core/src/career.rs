//! Agent Career Model: recruiting and training clients

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EconomyConfig;
use crate::models::{Attribute, PlayerId};
use crate::random::GameRng;
use crate::state::WorldState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingIntensity {
    Light,
    #[default]
    Normal,
    Intense,
}

impl TrainingIntensity {
    pub const ALL: [TrainingIntensity; 3] =
        [TrainingIntensity::Light, TrainingIntensity::Normal, TrainingIntensity::Intense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingIntensity::Light => "light",
            TrainingIntensity::Normal => "normal",
            TrainingIntensity::Intense => "intense",
        }
    }

    /// Attribute points gained per session
    pub fn effect(&self) -> i32 {
        match self {
            TrainingIntensity::Light => 1,
            TrainingIntensity::Normal => 2,
            TrainingIntensity::Intense => 3,
        }
    }

    pub fn cost(&self, economy: &EconomyConfig) -> f64 {
        economy.training_costs[*self as usize]
    }
}

impl fmt::Display for TrainingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(TrainingIntensity::Light),
            "normal" => Ok(TrainingIntensity::Normal),
            "intense" => Ok(TrainingIntensity::Intense),
            other => Err(format!("Unknown training intensity: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl TrainingOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), new_rating: None, cost: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruitOutcome {
    pub success: bool,
    pub message: String,
}

impl RecruitOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// Acceptance chance for a cold approach: `0.1 + (reputation - overall/1.5) / 100`
pub fn recruit_chance(reputation: f64, overall: u8) -> f64 {
    0.1 + (reputation - overall as f64 / 1.5) / 100.0
}

/// Try to sign a player as a client.
///
/// A player who approached the agent (pending offer) always accepts; anyone
/// else is rolled against [`recruit_chance`]. Signing an existing client is
/// a no-op success.
pub fn recruit_player(world: &mut WorldState, player_id: PlayerId, rng: &mut GameRng) -> RecruitOutcome {
    let agent_name = world.agent.name.clone();
    let reputation = world.agent.reputation;
    let has_offer = world.agent.has_offer(player_id);
    let Some(player) = world.player_mut(player_id) else {
        return RecruitOutcome::failed("Player not found");
    };

    if let Some(current) = player.agent.as_deref() {
        if current != agent_name {
            return RecruitOutcome::failed(format!("{} already has an agent: {}", player.name, current));
        }
    }

    if !has_offer && player.agent.is_none() && rng.unit() > recruit_chance(reputation, player.overall) {
        return RecruitOutcome::failed(format!("{} is not interested in your services at this time.", player.name));
    }

    player.agent = Some(agent_name);
    let message = format!("{} is now your client!", player.name);
    world.agent.sign_client(player_id);
    debug!(player = player_id, "Client signed");
    RecruitOutcome { success: true, message }
}

/// Pay for a training session on one attribute of a client.
///
/// The development plan is set even when the agent cannot pay for the session.
pub fn train_player(
    world: &mut WorldState,
    player_id: PlayerId,
    attribute: Attribute,
    intensity: TrainingIntensity,
    economy: &EconomyConfig,
) -> TrainingOutcome {
    let agent_name = world.agent.name.clone();
    let balance = world.agent.balance;
    let Some(player) = world.player_mut(player_id) else {
        return TrainingOutcome::failed("Player not found");
    };
    if !player.is_represented_by(&agent_name) {
        return TrainingOutcome::failed("You can only arrange training for your own clients");
    }

    player.development_plan = Some(attribute);

    let cost = intensity.cost(economy);
    if balance < cost {
        return TrainingOutcome::failed(format!("Not enough funds. Training costs €{:.0}", cost));
    }

    player.attributes.adjust(attribute, intensity.effect());
    player.recalculate_overall();
    player.potential = player.potential.max(player.overall);
    player.refresh_market_value();
    let new_rating = player.attributes.get(attribute);
    let message = format!(
        "{} has started training to improve {}. Their {} rating increased to {}.",
        player.name, attribute, attribute, new_rating
    );
    world.agent.balance -= cost;
    debug!(player = player_id, %attribute, %intensity, new_rating, "Training session");

    TrainingOutcome { success: true, message, new_rating: Some(new_rating), cost: Some(cost) }
}

//! Unsolicited approaches from players looking for representation

use crate::config::SeasonConfig;
use crate::models::{NotificationKind, PlayerId};
use crate::random::GameRng;
use crate::state::WorldState;

/// Share of otherwise eligible players who are looking this week
const LOOKING_SHARE: f64 = 0.3;

/// Weekly chance of any offer: `base + reputation / 200`
pub fn offer_chance(reputation: f64, config: &SeasonConfig) -> f64 {
    config.offer_base_chance + reputation / 200.0
}

/// Overall band `(floor, ceiling)`, exclusive on both ends, of players who
/// would approach an agent with this reputation
pub fn quality_band(reputation: f64) -> (f64, f64) {
    ((reputation * 0.7).max(50.0), reputation * 1.5)
}

/// Roll for at most one new offer; returns the approaching player
pub fn generate_offer(world: &mut WorldState, config: &SeasonConfig, rng: &mut GameRng) -> Option<PlayerId> {
    let reputation = world.agent.reputation;
    if !rng.chance(offer_chance(reputation, config)) {
        return None;
    }

    let (floor, ceiling) = quality_band(reputation);
    let mut candidates: Vec<PlayerId> = Vec::new();
    for player in &world.players {
        let overall = player.overall as f64;
        if player.agent.is_none() && overall < ceiling && overall > floor && rng.chance(LOOKING_SHARE) {
            candidates.push(player.id);
        }
    }

    let id = *rng.pick(&candidates)?;
    let player = world.player(id)?;
    let message = format!(
        "{} ({}, {} OVR) is looking for an agent and is interested in your services.",
        player.name, player.position, player.overall
    );
    world.agent.add_offer(id);
    world.notify_about(NotificationKind::PlayerOffer, message, id);
    Some(id)
}

//! Contract countdown, renewals and expiries

use tracing::debug;

use crate::config::SeasonConfig;
use crate::models::{NotificationKind, PlayerId, FREE_AGENT};
use crate::player::valuation::SALARY_SHARE;
use crate::random::GameRng;
use crate::state::WorldState;

/// What happened to one expiring contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractEvent {
    Renewed { years: u8 },
    /// Now a free agent; `from` is the club that let them go
    Released { from: String },
}

/// Chance that the club re-signs an expiring player
pub fn renewal_chance(morale: u8, age: u8) -> f64 {
    let age_penalty = if age > 30 { (age - 30) as f64 * 0.05 } else { 0.0 };
    0.7 + morale as f64 / 200.0 - age_penalty
}

/// Consume one contract year from every player still under contract and
/// resolve the contracts that just ran out.
///
/// Only the step to zero is acted on; a free agent already at zero is left
/// alone.
pub fn process_contracts(world: &mut WorldState, config: &SeasonConfig, rng: &mut GameRng) -> Vec<(PlayerId, ContractEvent)> {
    let mut outcomes = Vec::new();
    let agent_name = world.agent.name.clone();

    for idx in 0..world.players.len() {
        let player = &mut world.players[idx];
        if player.contract.years_remaining == 0 {
            continue;
        }
        player.contract.years_remaining -= 1;
        if player.contract.years_remaining > 0 {
            continue;
        }

        let id = player.id;
        let has_club = world.club(&world.players[idx].club).is_some();
        let player = &mut world.players[idx];
        let is_client = player.is_represented_by(&agent_name);

        let renewed = has_club
            && player.overall > config.renewal_min_overall
            && rng.chance(renewal_chance(player.morale, player.age));

        if renewed {
            let years = rng.int_inclusive(1, 3) as u8;
            player.contract.years_remaining = years;
            player.salary = player.value * SALARY_SHARE * (1.0 + rng.unit() * 0.2);
            let message = format!(
                "{} has renewed their contract with {} for {} more years at €{:.1}K per week.",
                player.name,
                player.club,
                years,
                player.weekly_salary() / 1000.0
            );
            debug!(player = id, years, "Contract renewed");
            if is_client {
                world.notify_about(NotificationKind::ContractRenewal, message, id);
            }
            outcomes.push((id, ContractEvent::Renewed { years }));
        } else {
            let old_club = std::mem::replace(&mut player.club, FREE_AGENT.to_string());
            let message = format!(
                "{}'s contract with {} has expired. They are now a free agent.",
                player.name, old_club
            );
            debug!(player = id, club = %old_club, "Contract expired");
            if is_client {
                world.notify_about(NotificationKind::ContractExpiry, message, id);
            }
            outcomes.push((id, ContractEvent::Released { from: old_club }));
        }
    }
    outcomes
}

//! Transfer execution
//!
//! Every validation failure returns before the first mutation, so a failed
//! transfer leaves the world exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::models::{NotificationKind, PlayerId, TransferRecord};
use crate::player::valuation::{format_currency, SALARY_SHARE};
use crate::random::GameRng;
use crate::state::WorldState;
use crate::strength;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub success: bool,
    pub message: String,
    /// Agent commission on success (zero for players the agent does not represent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,
}

impl TransferOutcome {
    fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), commission: None }
    }
}

/// Reputation gained from a client's transfer: `clamp(log10(fee) - 3, 1, 5)`
pub fn reputation_gain(fee: f64) -> f64 {
    (fee.log10() - 3.0).clamp(1.0, 5.0)
}

pub fn transfer_player(
    world: &mut WorldState,
    player_id: PlayerId,
    target_club: &str,
    fee: f64,
    config: &EngineConfig,
    rng: &mut GameRng,
) -> TransferOutcome {
    let Some(player_idx) = world.player_index(player_id) else {
        return TransferOutcome::failed("Could not complete transfer: Invalid player or club");
    };
    let source_club = world.players[player_idx].club.clone();
    let (Some(source_idx), Some(dest_idx)) = (world.club_index(&source_club), world.club_index(target_club))
    else {
        return TransferOutcome::failed("Could not complete transfer: Invalid player or club");
    };
    if !world.transfer_window {
        return TransferOutcome::failed("Could not complete transfer: Transfer window is closed");
    }
    if source_idx == dest_idx {
        return TransferOutcome::failed(format!(
            "Could not complete transfer: {} already plays for {}",
            world.players[player_idx].name, target_club
        ));
    }
    if !fee.is_finite() || fee < 0.0 {
        return TransferOutcome::failed("Could not complete transfer: Invalid transfer fee");
    }
    if world.clubs[dest_idx].budget < fee {
        warn!(club = target_club, fee, budget = world.clubs[dest_idx].budget, "Transfer rejected: budget");
        return TransferOutcome::failed(format!("{} cannot afford the transfer fee of {}", target_club, format_currency(fee)));
    }

    world.clubs[source_idx].budget += fee * config.economy.seller_share;
    world.clubs[dest_idx].budget -= fee;

    let season = world.season;
    let week = world.week;
    let is_client = world.is_client(&world.players[player_idx]);
    let player = &mut world.players[player_idx];
    player.club = target_club.to_string();
    player.contract.years_remaining = rng.int_inclusive(2, 4) as u8;
    player.salary = player.value * SALARY_SHARE * (1.0 + rng.unit() * 0.3);
    let player_name = player.name.clone();

    world.statistics.transfers.push(TransferRecord {
        season,
        week,
        player_id,
        player_name: player_name.clone(),
        from_club: source_club.clone(),
        to_club: target_club.to_string(),
        fee,
    });

    let commission = if is_client {
        let commission = fee * config.economy.commission_rate;
        world.agent.balance += commission;
        world.agent.gain_reputation(reputation_gain(fee));
        world.notify_about(
            NotificationKind::TransferComplete,
            format!(
                "Transfer complete! {} has moved to {} for {}. Your commission: {}",
                player_name,
                target_club,
                format_currency(fee),
                format_currency(commission)
            ),
            player_id,
        );
        commission
    } else {
        world.notify(
            NotificationKind::TransferNews,
            format!(
                "Transfer news: {} has moved from {} to {} for {}.",
                player_name,
                source_club,
                target_club,
                format_currency(fee)
            ),
        );
        0.0
    };

    strength::update_club_strength(world, &source_club, &config.generation);
    strength::update_club_strength(world, target_club, &config.generation);

    info!(player = player_id, from = %source_club, to = target_club, fee, commission, "Transfer completed");
    TransferOutcome {
        success: true,
        message: format!("Transfer complete! {} has moved to {} for {}.", player_name, target_club, format_currency(fee)),
        commission: Some(commission),
    }
}

//! Season-end aging, development and counter reset

use crate::player::DevelopmentCalculator;
use crate::random::GameRng;
use crate::state::WorldState;

/// Age and develop every player from the season that just ended
pub fn progress_players(world: &mut WorldState, rng: &mut GameRng) {
    for player in &mut world.players {
        DevelopmentCalculator::progress_season(player, rng);
    }
}

/// Back to season-start baselines.
///
/// Budgets return to their base value and per-season player counters are
/// cleared; morale, form, injuries and suspensions carry over. Tables are
/// rebuilt empty, which also clears every club's season totals.
pub fn reset_season(world: &mut WorldState) {
    for club in &mut world.clubs {
        club.budget = club.base_budget;
    }
    for player in &mut world.players {
        player.season.reset();
    }
    world.regenerate_tables();
}

//! League/Season Scheduler and End-of-Season Processor
//!
//! One week pass, in order:
//! 1. advance the clock (a wrap runs the end-of-season pass first)
//! 2. sync the transfer window
//! 3. generate, play and table every fixture
//! 4. count injuries/suspensions down, drift form and morale
//! 5. maybe one unsolicited client offer
//! 6. contract countdown
//!
//! These functions mutate the world they are given; the engine runs them on a
//! working copy so a failed pass never leaves a half-updated world behind.

pub mod awards;
pub mod calendar;
pub mod fixtures;
pub mod offers;
pub mod progression;
pub mod promotion;
pub mod table;
pub mod weekly;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ContractTick, EngineConfig};
use crate::error::{EngineError, Result};
use crate::market::{self, ContractEvent};
use crate::match_sim;
use crate::models::{Fixture, NotificationKind};
use crate::random::GameRng;
use crate::state::WorldState;
use crate::strength;

/// Result of one simulated week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub week: u32,
    pub season: u32,
    pub fixtures: Vec<Fixture>,
    pub transfer_window_open: bool,
}

impl WeekSummary {
    pub fn total_goals(&self) -> u32 {
        self.fixtures.iter().map(|f| f.total_goals()).sum()
    }
}

/// Run one full week pass on `world`
pub fn run_week(world: &mut WorldState, config: &EngineConfig, rng: &mut GameRng) -> Result<WeekSummary> {
    if world.advance_clock(config.season.weeks_per_season) {
        end_of_season(world, config, rng);
    }

    calendar::update_transfer_window(world, &config.season);

    let mut fixtures = fixtures::generate_fixtures(world, rng);
    for fixture in &mut fixtures {
        play_fixture(world, fixture, config, rng)?;
    }

    weekly::tick_status(&mut world.players);
    let week = world.week;
    weekly::update_all_form_and_morale(&mut world.players, week, rng);

    offers::generate_offer(world, &config.season, rng);

    if config.season.contract_tick == ContractTick::Weekly {
        resolve_contracts(world, config, rng);
    }

    let summary = WeekSummary {
        week: world.week,
        season: world.season,
        fixtures,
        transfer_window_open: world.transfer_window,
    };
    info!(
        season = summary.season,
        week = summary.week,
        fixtures = summary.fixtures.len(),
        goals = summary.total_goals(),
        "Week simulated"
    );
    Ok(summary)
}

fn play_fixture(world: &mut WorldState, fixture: &mut Fixture, config: &EngineConfig, rng: &mut GameRng) -> Result<()> {
    let home = world
        .club_index(&fixture.home)
        .ok_or_else(|| EngineError::NotFound(format!("club {}", fixture.home)))?;
    let away = world
        .club_index(&fixture.away)
        .ok_or_else(|| EngineError::NotFound(format!("club {}", fixture.away)))?;

    let result = match_sim::simulate_match(
        &world.clubs[home],
        &world.clubs[away],
        &mut world.players,
        &config.matchday,
        rng,
    );
    fixture.result = Some(result);
    table::record_result(world, fixture)
}

/// Contract countdown; clubs that lost a player get their strength refreshed
fn resolve_contracts(world: &mut WorldState, config: &EngineConfig, rng: &mut GameRng) {
    let events = market::process_contracts(world, &config.season, rng);
    let weakened: BTreeSet<String> = events
        .into_iter()
        .filter_map(|(_, event)| match event {
            ContractEvent::Released { from } => Some(from),
            ContractEvent::Renewed { .. } => None,
        })
        .collect();
    for club in weakened {
        strength::update_club_strength(world, &club, &config.generation);
    }
}

/// Close the season that just ended (`world.season - 1`) and set up the next.
///
/// Awards read the finished season's counters, so they run before anything
/// is reset.
pub fn end_of_season(world: &mut WorldState, config: &EngineConfig, rng: &mut GameRng) {
    let finished = world.season.saturating_sub(1);

    let season_awards = awards::compute_awards(&world.players, finished, &config.season.awards);
    world.statistics.top_scorers = awards::top_scorers(&world.players, config.season.awards.top_scorer_entries);
    if let Some(winner) = &season_awards.golden_ball {
        info!(season = finished, player = %winner.player_name, "Golden Ball");
    }
    if let Some(winner) = &season_awards.golden_boot {
        info!(season = finished, player = %winner.player_name, goals = winner.stat, "Golden Boot");
    }
    world.award_history.push(season_awards.clone());
    world.awards = Some(season_awards);

    let moves = promotion::apply_promotion_relegation(world, config.season.promotion_slots);
    debug!(moves = moves.len(), "Promotion and relegation applied");

    if config.season.contract_tick == ContractTick::Seasonal {
        resolve_contracts(world, config, rng);
    }

    progression::progress_players(world, rng);
    progression::reset_season(world);
    strength::update_all_strengths(world, &config.generation);

    world.notify(
        NotificationKind::EndOfSeason,
        format!(
            "Season {} has ended! New season starting with updated teams and player progressions.",
            finished
        ),
    );
    info!(season = finished, next = world.season, "Season closed");
}

//! Folding match results into league tables

use crate::error::{EngineError, Result};
use crate::models::{Fixture, LeagueTableEntry};
use crate::state::WorldState;

fn row_mut<'a>(world: &'a mut WorldState, league: &str, club: &str) -> Result<&'a mut LeagueTableEntry> {
    world
        .leagues
        .get_mut(league)
        .and_then(|rows| rows.iter_mut().find(|row| row.club == club))
        .ok_or_else(|| EngineError::InvariantViolation(format!("{} has no row in {}", club, league)))
}

/// Record a played fixture in both clubs' rows (3 for a win, 1 each for a draw)
pub fn record_result(world: &mut WorldState, fixture: &Fixture) -> Result<()> {
    let Some(result) = &fixture.result else {
        return Ok(());
    };
    row_mut(world, &fixture.league, &fixture.home)?.record(result.home_goals, result.away_goals);
    row_mut(world, &fixture.league, &fixture.away)?.record(result.away_goals, result.home_goals);
    Ok(())
}

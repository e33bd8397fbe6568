//! Club Strength Model
//!
//! `0.7 × bestXI + 0.2 × squad average + balance + 2 × depth`, clamped into the
//! division band. Best XI is the top keeper, four defenders, four midfielders
//! and two forwards by overall; balance is +2 when the squad meets the
//! position minimums; depth is `min(1, roster / 25)`.

use crate::config::GenerationConfig;
use crate::models::{Division, Player, Position};
use crate::state::WorldState;

/// Best XI slots per position (GK, DF, MF, FW)
pub const BEST_XI_SHAPE: [usize; 4] = [1, 4, 4, 2];

const BALANCE_BONUS: f64 = 2.0;
const FULL_SQUAD: f64 = 25.0;

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Overall ratings of the best XI, highest first within each position
pub fn best_xi(roster: &[&Player]) -> Vec<u8> {
    let mut picked = Vec::with_capacity(11);
    for position in Position::ALL {
        let mut ratings: Vec<u8> =
            roster.iter().filter(|p| p.position == position).map(|p| p.overall).collect();
        ratings.sort_unstable_by(|a, b| b.cmp(a));
        picked.extend(ratings.into_iter().take(BEST_XI_SHAPE[position.index()]));
    }
    picked
}

pub fn is_balanced(roster: &[&Player], minimums: &[usize; 4]) -> bool {
    Position::ALL.iter().all(|position| {
        roster.iter().filter(|p| p.position == *position).count() >= minimums[position.index()]
    })
}

/// Strength of a roster for a club in `division`
pub fn club_strength(division: Division, roster: &[&Player], minimums: &[usize; 4]) -> f64 {
    if roster.is_empty() {
        return division.fallback_strength();
    }
    let overalls: Vec<u8> = roster.iter().map(|p| p.overall).collect();
    let average = mean(&overalls);
    let best = mean(&best_xi(roster));
    let balance = if is_balanced(roster, minimums) { BALANCE_BONUS } else { 0.0 };
    let depth = (roster.len() as f64 / FULL_SQUAD).min(1.0);

    let raw = best * 0.7 + average * 0.2 + balance + depth * 2.0;
    let (lo, hi) = division.strength_band();
    raw.clamp(lo, hi)
}

/// Recompute one club's strength; unknown clubs are ignored
pub fn update_club_strength(world: &mut WorldState, club: &str, config: &GenerationConfig) {
    let Some(idx) = world.club_index(club) else {
        return;
    };
    let division = world.clubs[idx].division;
    let roster: Vec<&Player> = world.players_of(club).collect();
    let strength = club_strength(division, &roster, &config.position_minimums);
    world.clubs[idx].strength = strength;
}

pub fn update_all_strengths(world: &mut WorldState, config: &GenerationConfig) {
    let names: Vec<String> = world.clubs.iter().map(|c| c.name.clone()).collect();
    for name in names {
        update_club_strength(world, &name, config);
    }
}

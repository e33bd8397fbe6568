//! Distributing the player pool across clubs
//!
//! Three passes:
//! 1. best players first, each to a random under-cap club whose fame is within
//!    ±2 of `overall / 10` (any under-cap club if none matches)
//! 2. per club, backfill position minimums from still-unassigned players
//! 3. anyone left over goes to a uniformly random club
//!
//! A club can stay short at a position when the pool runs dry; that is accepted.

use crate::config::GenerationConfig;
use crate::models::{Club, Player, Position};
use crate::random::GameRng;

/// Returns the club index assigned to each player (parallel to `players`)
pub fn distribute_players(
    players: &[Player],
    clubs: &[Club],
    config: &GenerationConfig,
    rng: &mut GameRng,
) -> Vec<Option<usize>> {
    let mut assignment: Vec<Option<usize>> = vec![None; players.len()];
    if clubs.is_empty() {
        return assignment;
    }
    let mut roster_sizes = vec![0usize; clubs.len()];
    let caps: Vec<usize> = clubs.iter().map(|c| config.squad_cap(c.division)).collect();

    // Pass 1: quality matching
    let mut by_quality: Vec<usize> = (0..players.len()).collect();
    by_quality.sort_by(|&a, &b| players[b].overall.cmp(&players[a].overall));

    for idx in by_quality {
        let band = (players[idx].overall / 10) as i32;
        let suitable: Vec<usize> = (0..clubs.len())
            .filter(|&c| roster_sizes[c] < caps[c] && (clubs[c].fame as i32 - band).abs() <= 2)
            .collect();
        let chosen = if suitable.is_empty() {
            let open: Vec<usize> = (0..clubs.len()).filter(|&c| roster_sizes[c] < caps[c]).collect();
            rng.pick(&open).copied()
        } else {
            rng.pick(&suitable).copied()
        };
        if let Some(club) = chosen {
            assignment[idx] = Some(club);
            roster_sizes[club] += 1;
        }
    }

    // Pass 2: position minimums
    for club in 0..clubs.len() {
        for position in Position::ALL {
            let have = (0..players.len())
                .filter(|&p| assignment[p] == Some(club) && players[p].position == position)
                .count();
            let needed = config.position_minimum(position).saturating_sub(have);
            if needed == 0 {
                continue;
            }
            let recruits: Vec<usize> = (0..players.len())
                .filter(|&p| assignment[p].is_none() && players[p].position == position)
                .take(needed)
                .collect();
            for p in recruits {
                assignment[p] = Some(club);
                roster_sizes[club] += 1;
            }
        }
    }

    // Pass 3: leftovers
    for slot in assignment.iter_mut().filter(|slot| slot.is_none()) {
        *slot = Some(rng.int_inclusive(0, clubs.len() as i64 - 1) as usize);
    }

    assignment
}

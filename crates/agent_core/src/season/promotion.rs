//! Promotion and relegation between adjacent divisions
//!
//! For each country and each division pair, the bottom `slots` of the upper
//! table (fewest points) go down and the top `slots` of the lower table go
//! up. Every pass ranks against the tables as they stood before any club
//! moved; a club picked by two passes ends where the later pass puts it.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::{league_name, Division, LeagueTableEntry, LeagueTables, Nationality};
use crate::state::WorldState;

/// Club names of a table ordered by points ascending (stable on table order)
fn by_points_ascending(table: &[LeagueTableEntry]) -> Vec<String> {
    let mut rows: Vec<&LeagueTableEntry> = table.iter().collect();
    rows.sort_by_key(|row| row.points);
    rows.into_iter().map(|row| row.club.clone()).collect()
}

fn by_points_descending(table: &[LeagueTableEntry]) -> Vec<String> {
    let mut rows: Vec<&LeagueTableEntry> = table.iter().collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows.into_iter().map(|row| row.club.clone()).collect()
}

/// A single club move decided by one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionMove {
    pub club: String,
    pub from: Division,
    pub to: Division,
}

/// Decide every move from a snapshot of the tables
pub fn plan_moves(countries: &BTreeSet<Nationality>, tables: &LeagueTables, slots: usize) -> Vec<DivisionMove> {
    let mut moves = Vec::new();
    for &country in countries {
        for upper in [Division::First, Division::Second] {
            let Some(lower) = upper.lower() else {
                continue;
            };
            if let Some(table) = tables.get(&league_name(country, upper)) {
                for club in by_points_ascending(table).into_iter().take(slots) {
                    moves.push(DivisionMove { club, from: upper, to: lower });
                }
            }
            if let Some(table) = tables.get(&league_name(country, lower)) {
                for club in by_points_descending(table).into_iter().take(slots) {
                    moves.push(DivisionMove { club, from: lower, to: upper });
                }
            }
        }
    }
    moves
}

/// Apply promotion/relegation and rebuild the (empty) tables
pub fn apply_promotion_relegation(world: &mut WorldState, slots: usize) -> Vec<DivisionMove> {
    let snapshot = world.leagues.clone();
    let countries: BTreeSet<Nationality> = world.clubs.iter().map(|c| c.country).collect();
    let moves = plan_moves(&countries, &snapshot, slots);

    for m in &moves {
        if let Some(club) = world.club_mut(&m.club) {
            club.division = m.to;
            debug!(club = %m.club, from = %m.from, to = %m.to, "Division change");
        }
    }
    world.regenerate_tables();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::generation::generate_world;
    use crate::models::Difficulty;
    use crate::random::GameRng;

    fn give_points(world: &mut WorldState) {
        // table order decides points: first club of each table has the most
        for rows in world.leagues.values_mut() {
            let n = rows.len() as u32;
            for (i, row) in rows.iter_mut().enumerate() {
                let wins = n - i as u32;
                row.wins = wins;
                row.played = wins;
                row.points = wins * 3;
            }
        }
    }

    #[test]
    fn test_three_up_three_down() {
        let config = EngineConfig::testing();
        let mut world = generate_world("Test", Difficulty::Normal, &config, &mut GameRng::seeded(121));
        give_points(&mut world);

        let spain_d1 = world.standings("Spain Division 1");
        let spain_d2 = world.standings("Spain Division 2");
        let relegated: Vec<String> = spain_d1.iter().rev().take(3).map(|r| r.club.clone()).collect();
        let promoted: Vec<String> = spain_d2.iter().take(3).map(|r| r.club.clone()).collect();

        apply_promotion_relegation(&mut world, 3);

        for club in &relegated {
            assert_eq!(world.club(club).unwrap().division, Division::Second);
        }
        for club in &promoted {
            assert_eq!(world.club(club).unwrap().division, Division::First);
        }
        for country in Nationality::ALL.iter().take(3) {
            for division in Division::ALL {
                let league = league_name(*country, division);
                let expected = if division == Division::Third { 6 } else { 10 };
                assert_eq!(world.leagues[&league].len(), expected, "{}", league);
            }
        }
        assert!(world.leagues.values().flatten().all(|r| r.points == 0));
    }

    #[test]
    fn test_moves_use_snapshot() {
        let mut tables = LeagueTables::new();
        let mk = |club: &str, points: u32| LeagueTableEntry { points, ..LeagueTableEntry::new(club) };
        tables.insert(
            "Spain Division 1".to_string(),
            vec![mk("A", 30), mk("B", 20), mk("C", 10)],
        );
        tables.insert(
            "Spain Division 2".to_string(),
            vec![mk("D", 5), mk("E", 50), mk("F", 40)],
        );
        let countries: BTreeSet<Nationality> = [Nationality::Spain].into_iter().collect();
        let moves = plan_moves(&countries, &tables, 1);

        assert!(moves.contains(&DivisionMove { club: "C".into(), from: Division::First, to: Division::Second }));
        assert!(moves.contains(&DivisionMove { club: "E".into(), from: Division::Second, to: Division::First }));
        assert!(moves.contains(&DivisionMove { club: "D".into(), from: Division::Second, to: Division::Third }));
        assert_eq!(moves.len(), 3);
    }
}

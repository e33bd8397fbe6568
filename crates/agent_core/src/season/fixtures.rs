//! Weekly fixture generation
//!
//! Per league: shuffle the clubs, then pair neighbours (0 v 1, 2 v 3, ...).
//! With an odd club count the last club sits the week out.

use std::collections::BTreeMap;

use crate::models::Fixture;
use crate::random::GameRng;
use crate::state::WorldState;

pub fn generate_fixtures(world: &WorldState, rng: &mut GameRng) -> Vec<Fixture> {
    let mut by_league: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for club in &world.clubs {
        by_league.entry(club.league()).or_default().push(club.name.clone());
    }

    let mut fixtures = Vec::new();
    for (league, mut clubs) in by_league {
        rng.shuffle(&mut clubs);
        for pair in clubs.chunks_exact(2) {
            fixtures.push(Fixture::new(league.clone(), pair[0].clone(), pair[1].clone(), world.week));
        }
    }
    fixtures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::generation::generate_world;
    use crate::models::Difficulty;
    use std::collections::HashSet;

    #[test]
    fn test_every_club_plays_at_most_once() {
        let config = EngineConfig::testing();
        let mut rng = GameRng::seeded(91);
        let world = generate_world("Test", Difficulty::Normal, &config, &mut rng);
        let fixtures = generate_fixtures(&world, &mut rng);

        let mut seen = HashSet::new();
        for fixture in &fixtures {
            assert!(seen.insert(fixture.home.clone()));
            assert!(seen.insert(fixture.away.clone()));
            assert_eq!(world.club(&fixture.home).unwrap().league(), fixture.league);
            assert_eq!(world.club(&fixture.away).unwrap().league(), fixture.league);
            assert_eq!(fixture.week, world.week);
            assert!(fixture.result.is_none());
        }
        // 10 + 10 + 6 clubs per country, all even
        assert_eq!(fixtures.len(), world.clubs.len() / 2);
    }

    #[test]
    fn test_odd_league_leaves_a_bye() {
        let config = EngineConfig::testing();
        let mut rng = GameRng::seeded(92);
        let mut world = generate_world("Test", Difficulty::Normal, &config, &mut rng);
        let removed = world.clubs.iter().position(|c| c.division == crate::models::Division::Third).unwrap();
        world.clubs.remove(removed);

        let fixtures = generate_fixtures(&world, &mut rng);
        assert_eq!(fixtures.len(), (world.clubs.len() - 1) / 2);
    }
}

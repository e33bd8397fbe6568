//! World Generator
//!
//! Builds a fully populated world from an agent name and difficulty:
//! clubs per country and division, a procedurally rated player pool
//! distributed by quality, initial club strengths, empty league tables,
//! the two starting clients and the welcome notification.

pub mod clubs;
pub mod data;
pub mod distribution;
pub mod players;

use tracing::info;

use crate::config::EngineConfig;
use crate::models::{Agent, Difficulty, GameSettings, NotificationKind};
use crate::random::GameRng;
use crate::state::WorldState;
use crate::strength;

pub use clubs::generate_clubs;
pub use distribution::distribute_players;
pub use players::{generate_player, generate_players};

pub fn generate_world(
    agent_name: &str,
    difficulty: Difficulty,
    config: &EngineConfig,
    rng: &mut GameRng,
) -> WorldState {
    let agent = Agent::new(
        agent_name,
        config.economy.starting_balance(difficulty),
        config.economy.starting_reputation,
    );
    let settings = GameSettings { difficulty, ..GameSettings::default() };
    let mut world = WorldState::new(agent, settings);

    world.notify(
        NotificationKind::Welcome,
        format!(
            "Welcome to your new career as a football agent, {}! Start by recruiting your first clients.",
            agent_name
        ),
    );

    world.clubs = generate_clubs(rng);
    let club_names: Vec<String> = world.clubs.iter().map(|c| c.name.clone()).collect();
    world.players = generate_players(config.generation.player_count, rng, &club_names);

    let assignment = distribute_players(&world.players, &world.clubs, &config.generation, rng);
    for (player, club) in world.players.iter_mut().zip(assignment) {
        if let Some(club) = club {
            player.club = club_names[club].clone();
        }
    }

    strength::update_all_strengths(&mut world, &config.generation);
    world.regenerate_tables();
    world.transfer_window = config.season.is_window_open(world.week);

    assign_starting_clients(&mut world, config.generation.starting_clients);

    info!(
        clubs = world.clubs.len(),
        players = world.players.len(),
        leagues = world.leagues.len(),
        "World generated"
    );
    world
}

/// Hand the weakest unrepresented players to the agent
pub fn assign_starting_clients(world: &mut WorldState, count: usize) {
    let mut candidates: Vec<usize> =
        (0..world.players.len()).filter(|&i| world.players[i].agent.is_none()).collect();
    candidates.sort_by_key(|&i| world.players[i].overall);

    for idx in candidates.into_iter().take(count) {
        let agent_name = world.agent.name.clone();
        let player = &mut world.players[idx];
        player.agent = Some(agent_name);
        let id = player.id;
        let message = format!(
            "{} ({}, {} OVR) has become your first client! Help develop and transfer this player to boost your agency.",
            player.name, player.position, player.overall
        );
        world.agent.sign_client(id);
        world.notify_about(NotificationKind::NewClient, message, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Division;

    fn small_world(seed: u64) -> WorldState {
        let config = EngineConfig::testing();
        generate_world("Test", Difficulty::Normal, &config, &mut GameRng::seeded(seed))
    }

    #[test]
    fn test_world_shape() {
        let world = small_world(51);
        assert_eq!(world.clubs.len(), 78);
        assert_eq!(world.players.len(), 900);
        assert_eq!(world.leagues.len(), 9);
        assert_eq!(world.week, 1);
        assert_eq!(world.season, 1);
        assert!(world.transfer_window);
        assert!(world.players.iter().all(|p| world.club(&p.club).is_some()));
    }

    #[test]
    fn test_strength_in_band() {
        let world = small_world(52);
        for club in &world.clubs {
            let (lo, hi) = club.division.strength_band();
            assert!(club.strength >= lo && club.strength <= hi, "{} {}", club.name, club.strength);
        }
        assert!(world.clubs.iter().any(|c| c.division == Division::Third));
    }

    #[test]
    fn test_starting_clients_are_weakest() {
        let world = small_world(53);
        assert_eq!(world.agent.clients.len(), 2);
        let min_overall = world.players.iter().map(|p| p.overall).min().unwrap();
        let first = world.player(world.agent.clients[0]).unwrap();
        assert_eq!(first.overall, min_overall);
        for &id in &world.agent.clients {
            assert_eq!(world.player(id).unwrap().agent.as_deref(), Some("Test"));
        }
    }

    #[test]
    fn test_welcome_notification_first() {
        let world = small_world(54);
        let first = &world.notifications.entries()[0];
        assert_eq!(first.kind, NotificationKind::Welcome);
        assert!(first.message.contains("Test"));
        assert_eq!(world.notifications.of_kind(NotificationKind::NewClient).count(), 2);
    }

    #[test]
    fn test_tables_start_empty() {
        let world = small_world(55);
        let rows: usize = world.leagues.values().map(|t| t.len()).sum();
        assert_eq!(rows, world.clubs.len());
        assert!(world.leagues.values().flatten().all(|r| r.played == 0 && r.points == 0));
    }
}
